//! Structured logging setup
//!
//! Diagnostics use the `tracing` ecosystem and are written to stderr, so the
//! per-file report on stdout stays clean. `RUST_LOG` takes precedence over the
//! configured level when it is set.
//!
//! # Example
//!
//! ```no_run
//! use game_video_retrofit::util::{init_logging, LoggingConfig};
//! use tracing::Level;
//!
//! init_logging(LoggingConfig::with_level(Level::DEBUG));
//! tracing::debug!(file = "rima_magica_game.dart", "processing");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Include the module target (e.g., game_video_retrofit::driver) in logs
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            include_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Picks the level from CLI flags: an explicit level wins, then
    /// `verbose` (debug), then `quiet` (error), else info.
    pub fn from_flags(log_level: Option<&str>, verbose: bool, quiet: bool) -> Self {
        let level = match log_level {
            Some(level_str) => parse_level(level_str),
            None if verbose => Level::DEBUG,
            None if quiet => Level::ERROR,
            None => Level::INFO,
        };

        Self {
            level,
            include_target: verbose,
        }
    }

    fn directive(&self) -> Option<Directive> {
        format!("{}={}", env!("CARGO_CRATE_NAME"), self.level)
            .parse()
            .ok()
    }
}

/// Parses a log level from a string, falling back to INFO
///
/// ```
/// use game_video_retrofit::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("bogus"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Installs the stderr subscriber. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            if let Some(directive) = config.directive() {
                filter = filter.add_directive(directive);
            }
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(config.include_target)
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}
