//! Predictor Configuration - operator-tunable narration, training and
//! scoring thresholds as TOML values.
//!
//! Every struct implements `Default` with values matching the built-in
//! constants in [`super::defaults`], so running without a config file
//! reproduces the stock behaviour. The decision rules and confidence table
//! are deliberately not configurable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration.
///
/// Load with `HealthConfig::load()` which searches:
/// 1. `$PROJECT_HEALTH_CONFIG` env var
/// 2. `./project_health.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Names used in the training narrative and assessments
    #[serde(default)]
    pub model: ModelConfig,

    /// Default training-report parameters
    #[serde(default)]
    pub training: TrainingConfig,

    /// Risk score thresholds
    #[serde(default)]
    pub risk: RiskConfig,

    /// Portfolio recommendation thresholds
    #[serde(default)]
    pub portfolio: PortfolioConfig,

    /// Output formatting
    #[serde(default)]
    pub display: DisplayConfig,
}

impl HealthConfig {
    /// Load configuration using the standard search order:
    /// 1. `$PROJECT_HEALTH_CONFIG` environment variable
    /// 2. `./project_health.toml` in the current working directory
    /// 3. Built-in defaults
    ///
    /// A broken file never aborts startup here; it is logged and skipped.
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(defaults::CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded config from {}", defaults::CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", defaults::CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", defaults::CONFIG_ENV_VAR);
            }
        }

        // 2. Check ./project_health.toml
        let local = PathBuf::from(defaults::LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded config from ./{}", defaults::LOCAL_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", defaults::LOCAL_CONFIG_FILE);
                }
            }
        }

        // 3. Defaults
        info!("No config file found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    ///
    /// # Errors
    ///
    /// I/O, parse, or validation failures.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, err) => ConfigError::Parse(path.to_path_buf(), err),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Two-pass: unknown keys are reported as warnings first, then the
    /// document is deserialized and validated.
    ///
    /// # Errors
    ///
    /// Parse or validation failures.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize current config to TOML string.
    ///
    /// # Errors
    ///
    /// Serialization failure.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate all values for internal consistency.
    ///
    /// Rules:
    /// - Learning rate must be finite and > 0
    /// - Epoch count must not exceed `MAX_EPOCHS`
    /// - Utilization thresholds must lie in [0, 1] with low <= medium
    /// - Critical days must be >= delayed days
    /// - Portfolio shares must lie in [0, 100]
    ///
    /// # Errors
    ///
    /// [`ConfigError::Validation`] listing every violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        let lr = self.training.learning_rate;
        if !lr.is_finite() || lr <= 0.0 {
            errors.push(format!("training.learning_rate must be finite and > 0 (got {lr})"));
        }
        if self.training.num_epochs > defaults::MAX_EPOCHS {
            errors.push(format!(
                "training.num_epochs must be <= {} (got {})",
                defaults::MAX_EPOCHS,
                self.training.num_epochs
            ));
        }

        let r = &self.risk;
        for (name, value) in [
            ("risk.low_utilization", r.low_utilization),
            ("risk.medium_utilization", r.medium_utilization),
            ("risk.min_allocation_rate", r.min_allocation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                errors.push(format!("{name} must be within [0, 1] (got {value})"));
            }
        }
        Self::check_escalation(
            r.low_utilization,
            r.medium_utilization,
            "risk.low_utilization",
            "risk.medium_utilization",
            &mut errors,
        );
        if r.critical_days < r.delayed_days {
            errors.push(format!(
                "risk.critical_days ({}) must be >= risk.delayed_days ({})",
                r.critical_days, r.delayed_days
            ));
        }

        let p = &self.portfolio;
        for (name, value) in [
            ("portfolio.delayed_share_pct", p.delayed_share_pct),
            ("portfolio.at_risk_share_pct", p.at_risk_share_pct),
            ("portfolio.on_track_share_pct", p.on_track_share_pct),
        ] {
            if !(0.0..=100.0).contains(&value) {
                errors.push(format!("{name} must be within [0, 100] (got {value})"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn check_escalation(
        lower: f64,
        upper: f64,
        lower_name: &str,
        upper_name: &str,
        errors: &mut Vec<String>,
    ) {
        // NaN comparisons silently pass
        if !lower.is_finite() || !upper.is_finite() {
            errors.push(format!(
                "{lower_name}/{upper_name}: values must be finite (got {lower}, {upper})"
            ));
            return;
        }
        if upper < lower {
            errors.push(format!(
                "{upper_name} ({upper:.3}) must be >= {lower_name} ({lower:.3})"
            ));
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub base_model: String,
    pub training_type: String,
    /// Label attached to every assessment
    pub label: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_model: defaults::BASE_MODEL.to_string(),
            training_type: defaults::TRAINING_TYPE.to_string(),
            label: defaults::MODEL_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub num_epochs: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: defaults::LEARNING_RATE,
            num_epochs: defaults::NUM_EPOCHS,
        }
    }
}

/// Thresholds for the additive risk score. Utilization values are ratios
/// (0.30 = 30%), not percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub low_utilization: f64,
    pub medium_utilization: f64,
    pub delayed_days: u32,
    pub critical_days: u32,
    pub min_allocation_rate: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            low_utilization: defaults::LOW_UTILIZATION,
            medium_utilization: defaults::MEDIUM_UTILIZATION,
            delayed_days: defaults::DELAYED_DAYS,
            critical_days: defaults::CRITICAL_DAYS,
            min_allocation_rate: defaults::MIN_ALLOCATION_RATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub delayed_share_pct: f64,
    pub at_risk_share_pct: f64,
    pub on_track_share_pct: f64,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            delayed_share_pct: defaults::DELAYED_SHARE_PCT,
            at_risk_share_pct: defaults::AT_RISK_SHARE_PCT,
            on_track_share_pct: defaults::ON_TRACK_SHARE_PCT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: defaults::CURRENCY_SYMBOL.to_string(),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(HealthConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = HealthConfig::from_toml_str("").unwrap();
        assert_eq!(config, HealthConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = HealthConfig::from_toml_str(
            r#"
[training]
num_epochs = 5
"#,
        )
        .unwrap();
        assert_eq!(config.training.num_epochs, 5);
        assert!((config.training.learning_rate - 1e-4).abs() < 1e-12);
        assert_eq!(config.display.currency_symbol, "₹");
    }

    #[test]
    fn test_negative_learning_rate_rejected() {
        let mut config = HealthConfig::default();
        config.training.learning_rate = -0.01;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("learning_rate"));
    }

    #[test]
    fn test_inverted_utilization_thresholds_rejected() {
        let mut config = HealthConfig::default();
        config.risk.low_utilization = 0.7;
        config.risk.medium_utilization = 0.4;
        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("risk.medium_utilization")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_excessive_epochs_rejected() {
        let mut config = HealthConfig::default();
        config.training.num_epochs = defaults::MAX_EPOCHS;
        assert!(config.validate().is_ok());

        config.training.num_epochs = u32::MAX;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("training.num_epochs"));
    }

    #[test]
    fn test_inverted_days_rejected() {
        let mut config = HealthConfig::default();
        config.risk.critical_days = 30;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip_preserves_values() {
        let mut config = HealthConfig::default();
        config.display.currency_symbol = "$".to_string();
        let text = config.to_toml().unwrap();
        let back = HealthConfig::from_toml_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = HealthConfig::from_toml_str("[training\nnum_epochs = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(..)));
    }
}
