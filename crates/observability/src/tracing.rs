//! Tracing/logging initialization.
//!
//! Configured from the environment:
//! - `RUST_LOG` selects the filter (default `info`);
//! - `GILDEDROSE_LOG_FORMAT` selects `json` (default), `pretty` or `compact`.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "GILDEDROSE_LOG_FORMAT";

/// Output format of the fmt subscriber.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log format `{0}` (expected json, pretty or compact)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

impl LogFormat {
    /// Format from `GILDEDROSE_LOG_FORMAT`. Unset means JSON; an unrecognised
    /// value is an error the caller decides how to report.
    pub fn from_env() -> Result<Self, UnknownLogFormat> {
        Self::from_setting(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    fn from_setting(raw: Option<&str>) -> Result<Self, UnknownLogFormat> {
        raw.map_or(Ok(Self::default()), str::parse)
    }
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
/// An unrecognised `GILDEDROSE_LOG_FORMAT` falls back to JSON and is reported
/// as a warning once the subscriber is installed.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let format = LogFormat::from_env();
    let installed = init_with(format.clone().unwrap_or_default(), filter);

    if let (true, Err(err)) = (installed, format) {
        ::tracing::warn!(error = %err, env = LOG_FORMAT_ENV, "falling back to json logs");
    }
}

/// Initialize tracing with an explicit format and filter.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_with(format: LogFormat, filter: EnvFilter) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Pretty => builder.pretty().try_init().is_ok(),
        LogFormat::Compact => builder.compact().try_init().is_ok(),
    }
}
