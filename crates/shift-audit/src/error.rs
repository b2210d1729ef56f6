use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::timecard::TimecardError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("analysis error: {0}")]
    Analysis(#[from] TimecardError),
    #[error("report rendering error: {0}")]
    Render(#[from] serde_json::Error),
}
