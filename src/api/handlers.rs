//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use tracing::{error, info, warn};

use crate::{
    dial::{render_dial, DialView},
    error::TimerError,
    state::AppState,
    tasks::TimerCommand,
};
use super::{
    extract::DurationBody,
    responses::{ApiResponse, HealthResponse, StatusResponse},
};

/// Error reply carrying the unchanged timer state
pub type ApiError = (StatusCode, Json<ApiResponse>);

type ApiResult = Result<Json<ApiResponse>, ApiError>;

/// Map a timer error to an HTTP status and body
fn reject(state: &AppState, e: TimerError) -> ApiError {
    let status = match &e {
        TimerError::Validation { .. } | TimerError::NotConfigured => {
            warn!("Rejected duration: {}", e);
            StatusCode::UNPROCESSABLE_ENTITY
        }
        TimerError::InvalidTransition { .. } => {
            warn!("Rejected transition: {}", e);
            StatusCode::CONFLICT
        }
        TimerError::TaskStopped => {
            error!("Timer unavailable: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ApiResponse::error(e.to_string(), state.get_timer_state())))
}

async fn run(state: &AppState, action: &str, command: TimerCommand, message: &str) -> ApiResult {
    match state.dispatch(action, command).await {
        Ok(timer) => {
            info!("{} endpoint called - timer is {}", action, timer.phase);
            Ok(Json(ApiResponse::phase(message.to_string(), timer)))
        }
        Err(e) => Err(reject(state, e)),
    }
}

/// Handle POST /timer/configure - Set the duration for the next run
pub async fn configure_handler(
    State(state): State<Arc<AppState>>,
    body: DurationBody,
) -> ApiResult {
    let input = body.minutes_input().unwrap_or_default();
    run(&state, "configure", TimerCommand::Configure(input), "Timer configured").await
}

/// Handle POST /timer/start - Start a run, optionally configuring it first
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    body: DurationBody,
) -> ApiResult {
    let input = body.minutes_input();
    run(&state, "start", TimerCommand::Start(input), "Timer started").await
}

/// Handle POST /timer/pause - Pause the countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    run(&state, "pause", TimerCommand::Pause, "Timer paused").await
}

/// Handle POST /timer/resume - Resume a paused countdown
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    run(&state, "resume", TimerCommand::Resume, "Timer resumed").await
}

/// Handle POST /timer/reset - Return to the full configured duration
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    run(&state, "reset", TimerCommand::Reset, "Timer reset").await
}

/// Handle POST /timer/complete - Finish the run early
pub async fn complete_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    run(&state, "complete", TimerCommand::Complete, "Timer completed").await
}

/// Handle GET /status - Return the timer snapshot and dial geometry
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let timer = state.get_timer_state();
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        remaining: timer.remaining_display(),
        completion_message: timer.completion_message().map(str::to_string),
        dial: DialView::from_state(&timer),
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /dial.svg - Render the dial
pub async fn dial_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let svg = render_dial(&state.get_timer_state());
    ([(header::CONTENT_TYPE, "image/svg+xml")], svg)
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
