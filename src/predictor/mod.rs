//! Project Health Predictor
//!
//! Deterministic, rule-based status prediction for funded projects. Two
//! signals drive every decision: budget utilization (`utilized / allocated`)
//! and days since approval.
//!
//! ## Pipeline
//!
//! ```text
//! ProjectRecord ─► extract_features ─► predict ─► get_model_confidence
//!                                          │
//!                                          └────► generate_recommendation
//! ```
//!
//! - `rules`: feature extraction and the status decision ladder
//! - `confidence`: heuristic confidence table
//! - `recommendation`: recommendation text and suggested actions
//! - `risk`: additive 0-1 risk score
//! - `portfolio`: group-level status counts and health score
//! - `training`: "GRPO" report over the built-in examples
//! - `dataset`: the built-in labeled examples and demo projects
//!
//! Every operation is a pure function of its arguments; `Predictor` only
//! bundles them with a configuration and the example set.

pub mod confidence;
pub mod dataset;
pub mod portfolio;
pub mod recommendation;
pub mod risk;
pub mod rules;
pub mod training;

pub use confidence::{get_model_confidence, CONFIDENCE_LEVELS};
pub use dataset::{demo_projects, TRAINING_EXAMPLES};
pub use portfolio::analyze_portfolio;
pub use recommendation::{generate_recommendation, suggested_actions};
pub use risk::risk_score;
pub use rules::{extract_features, predict};
pub use training::{epoch_loss, train_grpo};

use crate::config::HealthConfig;
use crate::error::Result;
use crate::types::{
    FeatureSet, HealthAssessment, HealthStatus, LabeledExample, PortfolioAnalysis, ProjectRecord,
    TrainingReport,
};

/// Rule-based project health predictor.
#[derive(Debug, Clone)]
pub struct Predictor {
    config: HealthConfig,
    examples: &'static [LabeledExample],
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new(HealthConfig::default())
    }
}

impl Predictor {
    pub fn new(config: HealthConfig) -> Self {
        Self {
            config,
            examples: &TRAINING_EXAMPLES,
        }
    }

    pub const fn config(&self) -> &HealthConfig {
        &self.config
    }

    pub const fn training_examples(&self) -> &'static [LabeledExample] {
        self.examples
    }

    /// # Errors
    ///
    /// Zero allocated budget.
    pub fn extract_features(&self, project: &ProjectRecord) -> Result<FeatureSet> {
        extract_features(project)
    }

    pub fn predict(&self, features: &FeatureSet) -> HealthStatus {
        predict(features)
    }

    pub fn get_model_confidence(&self, features: &FeatureSet, prediction: HealthStatus) -> f64 {
        get_model_confidence(features, prediction)
    }

    /// # Errors
    ///
    /// Zero allocated budget.
    pub fn generate_recommendation(
        &self,
        project: &ProjectRecord,
        prediction: HealthStatus,
    ) -> Result<String> {
        generate_recommendation(project, prediction)
    }

    /// Report over the built-in examples with explicit parameters.
    pub fn train_grpo(&self, learning_rate: f64, num_epochs: u32) -> TrainingReport {
        train_grpo(self.examples, &self.config.model, learning_rate, num_epochs)
    }

    /// Report using the configured learning rate and epoch count.
    pub fn train_with_defaults(&self) -> TrainingReport {
        let t = &self.config.training;
        self.train_grpo(t.learning_rate, t.num_epochs)
    }

    /// # Errors
    ///
    /// Zero allocated budget.
    pub fn risk_score(&self, project: &ProjectRecord) -> Result<f64> {
        risk_score(project, &self.config.risk)
    }

    pub const fn suggested_actions(&self, prediction: HealthStatus) -> &'static [&'static str] {
        suggested_actions(prediction)
    }

    /// Run the full chain for one project.
    ///
    /// # Errors
    ///
    /// Zero allocated budget.
    pub fn assess(&self, project: &ProjectRecord) -> Result<HealthAssessment> {
        let features = self.extract_features(project)?;
        let prediction = self.predict(&features);
        let confidence = self.get_model_confidence(&features, prediction);
        let recommendation = self.generate_recommendation(project, prediction)?;
        let risk_score = self.risk_score(project)?;

        Ok(HealthAssessment {
            project_name: project.name.clone(),
            prediction,
            confidence,
            utilization_percentage: features.utilization_percentage,
            days_approved: project.days_approved,
            recommendation,
            risk_score,
            suggested_actions: suggested_actions(prediction)
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            model: self.config.model.label.clone(),
        })
    }

    /// # Errors
    ///
    /// Any project with a zero allocated budget.
    pub fn analyze_portfolio(&self, projects: &[ProjectRecord]) -> Result<PortfolioAnalysis> {
        analyze_portfolio(projects, &self.config.portfolio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PredictorError;

    #[test]
    fn test_assess_road_construction() {
        let predictor = Predictor::default();
        let project = ProjectRecord::new("Road Construction", 500_000.0, 450_000.0, 45);
        let a = predictor.assess(&project).unwrap();
        assert_eq!(a.prediction, HealthStatus::OnTrack);
        assert!((a.confidence - 0.92).abs() < 1e-12);
        assert!((a.utilization_percentage - 90.0).abs() < 1e-9);
        assert_eq!(
            a.recommendation,
            "OK: Road Construction is on track with 90.0% utilization."
        );
        assert_eq!(a.suggested_actions, vec!["Continue current pace", "Maintain regular monitoring"]);
        assert_eq!(a.model, "Oumi GRPO Fine-tuned Model");
    }

    #[test]
    fn test_assess_zero_allocation() {
        let predictor = Predictor::default();
        let project = ProjectRecord::new("Ghost", 0.0, 1.0, 1);
        assert!(matches!(
            predictor.assess(&project),
            Err(PredictorError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_train_with_defaults_uses_config() {
        let mut config = HealthConfig::default();
        config.training.num_epochs = 7;
        config.model.base_model = "local/test-model".to_string();
        let report = Predictor::new(config).train_with_defaults();
        assert_eq!(report.epochs, 7);
        assert_eq!(report.base_model, "local/test-model");
    }

    #[test]
    fn test_predictor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Predictor>();
    }
}
