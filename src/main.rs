//! Analog Timer - A countdown timer rendered as an analog clock dial
//! 
//! This is the main entry point for the analog-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use analog_timer::{
    api::create_router,
    config::Config,
    engine::{RandomPicker, TICK_PERIOD},
    state::AppState,
    tasks::spawn_timer_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("analog_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting analog-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, minutes={:?}",
          config.host, config.port, config.minutes);

    // Reject a bad startup duration before binding anything
    let initial = config.initial_duration()?;

    // Start the timer controller task
    let (timer, _timer_task) = spawn_timer_task(RandomPicker, TICK_PERIOD);
    if let Some(duration) = initial {
        timer.configure(duration.minutes().to_string()).await?;
    }

    // Create application state and HTTP router with all endpoints
    let state = Arc::new(AppState::new(config.port, config.host.clone(), timer));
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;
    
    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /timer/configure - Set the duration in minutes");
    info!("  POST /timer/start     - Start a run");
    info!("  POST /timer/pause     - Pause the countdown");
    info!("  POST /timer/resume    - Resume the countdown");
    info!("  POST /timer/reset     - Reset to the full duration");
    info!("  POST /timer/complete  - Finish the run early");
    info!("  GET  /status          - Timer snapshot and dial geometry");
    info!("  GET  /dial.svg        - Rendered dial");
    info!("  GET  /health          - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);
    
    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
