use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Targets that a bare level such as `info` applies to. Everything else
/// stays at `warn`.
const PROJECT_TARGETS: [&str; 2] = ["map_colorizer", "map_colorizer_cli"];

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': {source}")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("could not install the log subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Expands a bare level into per-crate directives. Anything that already
/// looks like a directive list is used as written.
fn directives(log_level: &str) -> String {
    let level = log_level.trim();
    if level.contains(['=', ',', '[']) {
        return level.to_string();
    }
    let mut directives = String::from("warn");
    for target in PROJECT_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

/// The filter for this process: `RUST_LOG` when set, else the configured level.
pub fn filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(directives(&config.log_level)).map_err(|source| TelemetryError::Filter {
        value: config.log_level.clone(),
        source,
    })
}

/// Installs the global subscriber. Logs go to stderr; stdout carries the
/// colorize report and the suggestion rows.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(config)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
