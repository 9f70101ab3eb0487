//! Request body extraction for the duration endpoints

use std::sync::Arc;
use axum::{
    async_trait,
    body::{to_bytes, Body},
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use tracing::warn;

use crate::state::AppState;
use super::{handlers::ApiError, responses::{ApiResponse, DurationRequest}};

/// Largest duration body accepted
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Optional JSON duration body
///
/// An empty body means no duration was submitted. Any other body has to be
/// valid JSON sent as `application/json`; everything else is rejected with
/// the unchanged timer state instead of being ignored.
#[derive(Debug, Clone, Default)]
pub struct DurationBody(pub Option<DurationRequest>);

impl DurationBody {
    /// Raw text of the submitted duration, if any
    pub fn minutes_input(&self) -> Option<String> {
        self.0.as_ref().and_then(DurationRequest::minutes_input)
    }
}

#[async_trait]
impl FromRequest<Arc<AppState>> for DurationBody {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| malformed(state, &e.to_string()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(None));
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        let Json(request) = Json::<DurationRequest>::from_request(req, state)
            .await
            .map_err(|rejection| malformed(state, &rejection.body_text()))?;
        Ok(Self(Some(request)))
    }
}

fn malformed(state: &AppState, reason: &str) -> ApiError {
    let message = format!("malformed duration request: {}", reason);
    warn!("{}", message);
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::error(message, state.get_timer_state())),
    )
}
