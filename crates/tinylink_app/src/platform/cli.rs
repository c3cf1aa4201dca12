use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use tinylink_engine::ShortenSettings;

use super::logging::LogDestination;

/// Terminal client for a TinyLink URL shortening service.
#[derive(Debug, Parser)]
#[command(name = "tinylink", version, about)]
pub struct Cli {
    /// Base URL of the shortening service. Falls back to $TINYLINK_API_URL,
    /// then http://localhost:5000.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Client-side deadline for one shorten request.
    #[arg(long, value_name = "MS", default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log debug-level messages.
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    pub fn shorten_settings(&self) -> ShortenSettings {
        let settings = match &self.api_url {
            Some(url) => ShortenSettings::with_base_url(Some(url.clone())),
            None => ShortenSettings::from_env(),
        };
        ShortenSettings {
            request_timeout: Duration::from_millis(self.timeout_ms),
            ..settings
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
