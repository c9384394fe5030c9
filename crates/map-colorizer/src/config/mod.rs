use std::env;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_LABELS_PATH: &str = "paste.txt";
pub const DEFAULT_MAPPING_PATH: &str = "territory_colors.json";
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;
pub const DEFAULT_SUGGESTION_CUTOFF: f64 = 0.6;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Top-level configuration shared by both command-line tools.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub suggest: SuggestConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            suggest: SuggestConfig::load()?,
            telemetry: TelemetryConfig::load(),
        })
    }
}

/// Inputs and ranking knobs for the name-suggestion tool.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    pub labels_path: PathBuf,
    pub mapping_path: PathBuf,
    pub limit: usize,
    pub cutoff: f64,
}

impl SuggestConfig {
    /// Reads the suggestion settings. Only the suggestion tool validates
    /// these, so a bad value never blocks a colorize run.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let labels_path = env::var("MAP_COLORIZER_LABELS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LABELS_PATH));
        let mapping_path = env::var("MAP_COLORIZER_MAPPING")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MAPPING_PATH));

        let limit = match env::var("MAP_COLORIZER_SUGGEST_LIMIT") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(ConfigError::InvalidLimit { value: raw })?,
            Err(_) => DEFAULT_SUGGESTION_LIMIT,
        };

        let cutoff = match env::var("MAP_COLORIZER_SUGGEST_CUTOFF") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|cutoff| (0.0..=1.0).contains(cutoff))
                .ok_or(ConfigError::InvalidCutoff { value: raw })?,
            Err(_) => DEFAULT_SUGGESTION_CUTOFF,
        };

        Ok(Self {
            labels_path,
            mapping_path,
            limit,
            cutoff,
        })
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            labels_path: PathBuf::from(DEFAULT_LABELS_PATH),
            mapping_path: PathBuf::from(DEFAULT_MAPPING_PATH),
            limit: DEFAULT_SUGGESTION_LIMIT,
            cutoff: DEFAULT_SUGGESTION_CUTOFF,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl TelemetryConfig {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        let log_level = env::var("MAP_COLORIZER_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        Self { log_level }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLimit { value: String },
    InvalidCutoff { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLimit { value } => write!(
                f,
                "MAP_COLORIZER_SUGGEST_LIMIT must be a positive integer, got '{}'",
                value
            ),
            ConfigError::InvalidCutoff { value } => write!(
                f,
                "MAP_COLORIZER_SUGGEST_CUTOFF must be a number in [0, 1], got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
