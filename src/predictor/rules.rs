//! Feature extraction and the status decision ladder.

use crate::error::Result;
use crate::types::{FeatureSet, HealthStatus, ProjectRecord};

/// Derive the rule inputs from a project record.
///
/// # Errors
///
/// [`crate::PredictorError::DivisionByZero`] when the allocated budget is zero.
pub fn extract_features(project: &ProjectRecord) -> Result<FeatureSet> {
    Ok(FeatureSet {
        allocated_budget: project.allocated_budget,
        utilized_budget: project.utilized_budget,
        days_approved: project.days_approved,
        utilization_percentage: project.utilization_percentage()?,
    })
}

/// Classify a project. First matching rule wins:
///
/// 1. utilization < 10% and approved > 60 days → At Risk
/// 2. approved > 100 days and utilization < 50% → Delayed
/// 3. utilization > 85% → On Track
/// 4. otherwise → On Track
///
/// Rules 3 and 4 share an outcome; rule 3 is kept so the ladder reads the
/// same as the published decision table.
#[allow(clippy::if_same_then_else)]
pub fn predict(features: &FeatureSet) -> HealthStatus {
    let utilization = features.utilization_percentage;
    let days = features.days_approved;

    let status = if utilization < 10.0 && days > 60 {
        HealthStatus::AtRisk
    } else if days > 100 && utilization < 50.0 {
        HealthStatus::Delayed
    } else if utilization > 85.0 {
        HealthStatus::OnTrack
    } else {
        HealthStatus::OnTrack
    };

    tracing::debug!(utilization, days, %status, "Classified project");
    status
}
