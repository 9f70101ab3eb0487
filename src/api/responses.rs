//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{dial::DialView, state::TimerState};

/// Body of the configure and start endpoints
///
/// `minutes` is accepted as a JSON number or string and validated by the
/// timer, so malformed input surfaces as a validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DurationRequest {
    #[serde(default)]
    pub minutes: Option<Value>,
}

impl DurationRequest {
    /// Raw text of the submitted duration
    pub fn minutes_input(&self) -> Option<String> {
        self.minutes.as_ref().map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }
}

/// API response structure for timer operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerState,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: TimerState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// Create a response whose status is the timer phase
    pub fn phase(message: String, timer: TimerState) -> Self {
        Self::new(timer.phase.as_str().to_string(), message, timer)
    }

    /// Create an error response
    pub fn error(message: String, timer: TimerState) -> Self {
        Self::new("error".to_string(), message, timer)
    }
}

/// Status response with everything needed to draw the timer
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub timer: TimerState,
    pub remaining: String,
    pub completion_message: Option<String>,
    pub dial: DialView,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minutes_input_accepts_numbers_and_strings() {
        let number: DurationRequest = serde_json::from_value(json!({ "minutes": 15 })).unwrap();
        let text: DurationRequest = serde_json::from_value(json!({ "minutes": "abc" })).unwrap();
        let float: DurationRequest = serde_json::from_value(json!({ "minutes": 2.5 })).unwrap();
        let missing: DurationRequest = serde_json::from_value(json!({})).unwrap();

        assert_eq!(number.minutes_input().as_deref(), Some("15"));
        assert_eq!(text.minutes_input().as_deref(), Some("abc"));
        assert_eq!(float.minutes_input().as_deref(), Some("2.5"));
        assert_eq!(missing.minutes_input(), None);
    }
}
