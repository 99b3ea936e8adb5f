//! Shared data model: project records, derived features, labels and reports.

use serde::{Deserialize, Serialize};

use crate::error::{PredictorError, Result};

// ============================================================================
// Health Status
// ============================================================================

/// Predicted health of a project. The label set is closed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HealthStatus {
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "Delayed")]
    Delayed,
}

impl HealthStatus {
    /// Every label, in reporting order.
    pub const ALL: [Self; 3] = [Self::OnTrack, Self::AtRisk, Self::Delayed];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::AtRisk => "At Risk",
            Self::Delayed => "Delayed",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Project Records
// ============================================================================

/// A project as supplied by a caller.
///
/// JSON uses the camelCase keys `name`, `allocatedBudget`, `utilizedBudget`,
/// `daysApproved` and the optional `totalBudget`. Negative budgets and
/// over-utilization are accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub name: String,
    pub allocated_budget: f64,
    pub utilized_budget: f64,
    /// Days elapsed since the project's funding was approved
    pub days_approved: u32,
    /// Overall sanctioned budget, when known. Only risk scoring reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_budget: Option<f64>,
}

impl ProjectRecord {
    pub fn new(
        name: impl Into<String>,
        allocated_budget: f64,
        utilized_budget: f64,
        days_approved: u32,
    ) -> Self {
        Self {
            name: name.into(),
            allocated_budget,
            utilized_budget,
            days_approved,
            total_budget: None,
        }
    }

    #[must_use]
    pub fn with_total_budget(mut self, total_budget: f64) -> Self {
        self.total_budget = Some(total_budget);
        self
    }

    /// `utilized / allocated * 100`.
    ///
    /// # Errors
    ///
    /// [`PredictorError::DivisionByZero`] when the allocated budget is zero.
    pub fn utilization_percentage(&self) -> Result<f64> {
        if self.allocated_budget == 0.0 {
            return Err(PredictorError::DivisionByZero {
                project: self.name.clone(),
            });
        }
        Ok(self.utilized_budget / self.allocated_budget * 100.0)
    }
}

/// Loosely-typed project as it arrives from an external source, where any
/// field may be missing. Convert with `ProjectRecord::try_from`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub name: Option<String>,
    pub allocated_budget: Option<f64>,
    pub utilized_budget: Option<f64>,
    pub days_approved: Option<u32>,
    pub total_budget: Option<f64>,
}

impl TryFrom<ProjectInput> for ProjectRecord {
    type Error = PredictorError;

    fn try_from(input: ProjectInput) -> Result<Self> {
        let name = input.name.ok_or(PredictorError::MissingField("name"))?;
        let allocated_budget = input
            .allocated_budget
            .ok_or(PredictorError::MissingField("allocatedBudget"))?;
        let utilized_budget = input
            .utilized_budget
            .ok_or(PredictorError::MissingField("utilizedBudget"))?;
        let days_approved = input
            .days_approved
            .ok_or(PredictorError::MissingField("daysApproved"))?;

        Ok(Self {
            name,
            allocated_budget,
            utilized_budget,
            days_approved,
            total_budget: input.total_budget,
        })
    }
}

// ============================================================================
// Features
// ============================================================================

/// Numeric features the decision rules operate on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub allocated_budget: f64,
    pub utilized_budget: f64,
    pub days_approved: u32,
    /// Percentage of the allocation spent so far (0-100, may exceed 100)
    pub utilization_percentage: f64,
}

/// A built-in example with its ground-truth label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabeledExample {
    pub features: FeatureSet,
    pub label: HealthStatus,
}

// ============================================================================
// Training Report
// ============================================================================

/// Number of examples carrying a given label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: HealthStatus,
    pub count: usize,
}

/// Reported loss for one epoch (epochs count from 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochLoss {
    pub epoch: u32,
    pub loss: f64,
}

/// Summary of a "training" run over the built-in examples.
///
/// No parameters are fitted: `accuracy` is the share of examples whose
/// stored label the fixed rules reproduce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Percentage in [0, 100]
    pub accuracy: f64,
    pub epochs: u32,
    pub learning_rate: f64,
    pub training_samples: usize,
    pub correct_predictions: usize,
    /// Labels present in the example set, in `HealthStatus::ALL` order
    pub label_distribution: Vec<LabelCount>,
    pub epoch_losses: Vec<EpochLoss>,
    pub base_model: String,
    pub training_type: String,
}

// ============================================================================
// Assessments
// ============================================================================

/// Everything the predictor says about a single project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAssessment {
    pub project_name: String,
    pub prediction: HealthStatus,
    /// Heuristic weight in [0.70, 0.95]
    pub confidence: f64,
    pub utilization_percentage: f64,
    pub days_approved: u32,
    pub recommendation: String,
    /// Additive risk in [0, 1], 1 being highest
    pub risk_score: f64,
    pub suggested_actions: Vec<String>,
    pub model: String,
}

/// Per-status project counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub on_track: usize,
    pub at_risk: usize,
    pub delayed: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: HealthStatus) {
        match status {
            HealthStatus::OnTrack => self.on_track += 1,
            HealthStatus::AtRisk => self.at_risk += 1,
            HealthStatus::Delayed => self.delayed += 1,
        }
    }

    pub const fn count(&self, status: HealthStatus) -> usize {
        match status {
            HealthStatus::OnTrack => self.on_track,
            HealthStatus::AtRisk => self.at_risk,
            HealthStatus::Delayed => self.delayed,
        }
    }

    pub const fn total(&self) -> usize {
        self.on_track + self.at_risk + self.delayed
    }
}

/// Aggregate health of a group of projects (e.g. one district).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalysis {
    pub total_projects: usize,
    /// Sum of `total_budget` over projects that carry one
    pub total_budget: f64,
    pub total_allocated: f64,
    pub total_utilized: f64,
    /// allocated / total budget, as a percentage, over projects carrying a total budget
    pub allocation_rate: f64,
    /// utilized / allocated, as a percentage
    pub utilization_rate: f64,
    pub status_counts: StatusCounts,
    /// 0-100
    pub health_score: f64,
    pub recommendations: Vec<String>,
}
