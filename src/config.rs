//! Configuration and CLI argument handling

use clap::Parser;

use crate::{error::TimerError, state::TimerConfig};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "analog-timer")]
#[command(about = "A countdown timer service rendered as an analog clock dial")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Duration in minutes (1-60) to configure at startup
    #[arg(short, long)]
    pub minutes: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Validate the startup duration, if one was given
    pub fn initial_duration(&self) -> Result<Option<TimerConfig>, TimerError> {
        self.minutes.as_deref().map(str::parse).transpose()
    }
}
