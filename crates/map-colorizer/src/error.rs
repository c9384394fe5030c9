use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::colorize::ColorizeError;
use crate::workflows::suggest::SuggestError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Colorize(ColorizeError),
    Suggest(SuggestError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Colorize(err) => write!(f, "{}", err),
            AppError::Suggest(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Colorize(err) => Some(err),
            AppError::Suggest(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ColorizeError> for AppError {
    fn from(value: ColorizeError) -> Self {
        Self::Colorize(value)
    }
}

impl From<SuggestError> for AppError {
    fn from(value: SuggestError) -> Self {
        Self::Suggest(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn workflow_errors_display_without_prefix() {
        let err = AppError::from(ColorizeError::SvgNotFound {
            path: PathBuf::from("maps/eu4.svg"),
        });
        assert_eq!(err.to_string(), "SVG not found: maps/eu4.svg");
    }

    #[test]
    fn config_errors_keep_their_context() {
        let err = AppError::from(ConfigError::InvalidLimit {
            value: "many".to_string(),
        });
        assert!(err.to_string().starts_with("configuration error: "));
    }
}
