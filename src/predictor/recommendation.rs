//! Human-readable recommendation text and follow-up actions per status.

use crate::error::Result;
use crate::types::{HealthStatus, ProjectRecord};

/// Render the recommendation for `project` under `prediction`.
///
/// Utilization is recomputed from the raw record, not taken from a
/// `FeatureSet`, and shown to one decimal place.
///
/// # Errors
///
/// [`crate::PredictorError::DivisionByZero`] when the allocated budget is zero.
pub fn generate_recommendation(
    project: &ProjectRecord,
    prediction: HealthStatus,
) -> Result<String> {
    let utilization = project.utilization_percentage()?;
    let name = &project.name;

    Ok(match prediction {
        HealthStatus::Delayed => format!(
            "URGENT: {name} is delayed with only {utilization:.1}% utilization after {} days. Immediate intervention required.",
            project.days_approved
        ),
        HealthStatus::AtRisk => format!(
            "WARNING: {name} is at risk. Utilization is {utilization:.1}%. Accelerate fund deployment to prevent delays."
        ),
        HealthStatus::OnTrack => format!("OK: {name} is on track with {utilization:.1}% utilization."),
    })
}

/// Concrete follow-up steps for a status.
pub const fn suggested_actions(prediction: HealthStatus) -> &'static [&'static str] {
    match prediction {
        HealthStatus::Delayed => &[
            "Schedule review meeting",
            "Identify bottlenecks",
            "Create action plan for acceleration",
            "Monitor weekly progress",
        ],
        HealthStatus::AtRisk => &[
            "Increase monitoring frequency",
            "Review resource allocation",
            "Plan corrective measures",
        ],
        HealthStatus::OnTrack => &["Continue current pace", "Maintain regular monitoring"],
    }
}
