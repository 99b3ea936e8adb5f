//! Predictor Configuration Module
//!
//! Narration strings, training-report defaults, risk and portfolio
//! thresholds and display settings, loaded from TOML.
//!
//! ## Loading Order
//!
//! 1. `PROJECT_HEALTH_CONFIG` environment variable (path to TOML file)
//! 2. `project_health.toml` in the current working directory
//! 3. Built-in defaults (see [`defaults`])
//!
//! ## Usage
//!
//! ```ignore
//! let predictor = Predictor::new(HealthConfig::load());
//! ```

mod health_config;
pub mod defaults;
pub mod validation;

pub use health_config::*;
