//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence when set. Otherwise the filter is built from
//! [`TracingConfig`]: a global level plus, when `log_rejections` is on, a
//! `debug` directive for the `chat_core` target where record validators
//! report rejected input.

use tracing::Level;
use tracing_subscriber::{
    filter::ParseError,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Target under which rejected records are logged
pub const REJECTION_TARGET: &str = "chat_core";

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Global level filter
    pub level: Level,
    /// Log rejected records at `debug` regardless of `level`
    pub log_rejections: bool,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    /// Log span open/close (one span per service call)
    pub span_events: bool,
    pub file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            log_rejections: false,
            json: false,
            span_events: false,
            file_line: true,
        }
    }
}

impl TracingConfig {
    /// Debug everything, including each service span
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            log_rejections: true,
            json: false,
            span_events: true,
            file_line: true,
        }
    }

    /// Info-level JSON lines
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            log_rejections: false,
            json: true,
            span_events: false,
            file_line: false,
        }
    }

    /// Filter directives used when `RUST_LOG` is unset
    #[must_use]
    pub fn filter_directives(&self) -> String {
        let level = self.level.as_str().to_lowercase();
        if self.log_rejections && self.level < Level::DEBUG {
            format!("{level},{REJECTION_TARGET}=debug")
        } else {
            level
        }
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn env_filter(&self) -> Result<EnvFilter, TracingError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => Ok(EnvFilter::try_new(self.filter_directives())?),
        }
    }
}

/// Install the global subscriber with the default configuration
///
/// # Errors
/// Returns an error if a subscriber is already installed
pub fn try_init_tracing() -> Result<(), TracingError> {
    try_init_tracing_with_config(TracingConfig::default())
}

/// Install the global subscriber
///
/// Safe to call more than once; only the first call takes effect.
///
/// # Errors
/// Returns an error if a subscriber is already installed or the filter
/// directives do not parse
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    let filter = config.env_filter()?;

    // Exactly one of the two layers is present
    let json_layer = config.json.then(|| {
        fmt::layer()
            .json()
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .with_span_events(config.span_events())
    });
    let text_layer = (!config.json).then(|| {
        fmt::layer()
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .with_span_events(config.span_events())
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|_| TracingError::AlreadyInitialized)
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,

    #[error("Invalid log filter: {0}")]
    Filter(#[from] ParseError),
}
