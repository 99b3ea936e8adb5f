//! Project Health: rule-based project status prediction
//!
//! Labels a funded project "On Track", "At Risk" or "Delayed" from its budget
//! utilization and the days since approval, attaches a heuristic confidence,
//! and renders a recommendation.
//!
//! ## Architecture
//!
//! - **Predictor**: decision rules, confidence table, recommendations, risk
//!   and portfolio scoring, and the training report
//! - **Config**: TOML-tunable narration, thresholds and display settings
//! - **Report**: console rendering of training narratives and assessments

pub mod config;
pub mod error;
pub mod predictor;
pub mod report;
pub mod types;

pub use config::HealthConfig;
pub use error::PredictorError;
pub use predictor::Predictor;

pub use types::{
    FeatureSet, HealthAssessment, HealthStatus, LabeledExample, PortfolioAnalysis, ProjectInput,
    ProjectRecord, StatusCounts, TrainingReport,
};
