use crate::workflows::timecard::ShiftThresholds;
use std::env;
use thiserror::Error;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub thresholds: ShiftThresholds,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = ShiftThresholds::default();
        let thresholds = ShiftThresholds {
            consecutive_days: threshold_var("SHIFT_CONSECUTIVE_DAYS", defaults.consecutive_days)?,
            min_gap_hours: threshold_var("SHIFT_MIN_GAP_HOURS", defaults.min_gap_hours)?,
            max_gap_hours: threshold_var("SHIFT_MAX_GAP_HOURS", defaults.max_gap_hours)?,
            max_shift_hours: threshold_var("SHIFT_MAX_DURATION_HOURS", defaults.max_shift_hours)?,
        };
        validate_thresholds(&thresholds)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            thresholds,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a non-negative number (got '{value}')")]
    InvalidThreshold { name: &'static str, value: String },
    #[error("minimum gap ({min_gap_hours}h) must be below maximum gap ({max_gap_hours}h)")]
    InvertedGapWindow {
        min_gap_hours: f64,
        max_gap_hours: f64,
    },
}

/// Rejects threshold sets the analyzer cannot evaluate meaningfully.
///
/// Also used after CLI overrides are applied on top of the loaded config.
pub fn validate_thresholds(thresholds: &ShiftThresholds) -> Result<(), ConfigError> {
    let named = [
        ("SHIFT_CONSECUTIVE_DAYS", thresholds.consecutive_days),
        ("SHIFT_MIN_GAP_HOURS", thresholds.min_gap_hours),
        ("SHIFT_MAX_GAP_HOURS", thresholds.max_gap_hours),
        ("SHIFT_MAX_DURATION_HOURS", thresholds.max_shift_hours),
    ];
    for (name, value) in named {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidThreshold {
                name,
                value: value.to_string(),
            });
        }
    }

    if thresholds.min_gap_hours >= thresholds.max_gap_hours {
        return Err(ConfigError::InvertedGapWindow {
            min_gap_hours: thresholds.min_gap_hours,
            max_gap_hours: thresholds.max_gap_hours,
        });
    }

    Ok(())
}

fn threshold_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse::<f64>() {
            Ok(value) => Ok(value),
            Err(_) => Err(ConfigError::InvalidThreshold { name, value: raw }),
        },
        Err(_) => Ok(default),
    }
}
