//! Additive risk score (0-1, 1 = highest risk).
//!
//! Three independent factors, summed and capped at 1.0:
//! - Utilization: ratio < low → 0.4, < medium → 0.2
//! - Age: days > critical → 0.4, > delayed → 0.2
//! - Allocation: allocated / total budget < minimum rate → 0.2
//!   (only when a positive total budget is known)

use crate::config::RiskConfig;
use crate::error::Result;
use crate::types::ProjectRecord;

const PRIMARY_FACTOR: f64 = 0.4;
const SECONDARY_FACTOR: f64 = 0.2;

/// Compute the risk score for `project`.
///
/// # Errors
///
/// [`crate::PredictorError::DivisionByZero`] when the allocated budget is zero.
pub fn risk_score(project: &ProjectRecord, thresholds: &RiskConfig) -> Result<f64> {
    let utilization = project.utilization_percentage()? / 100.0;

    let utilization_risk = if utilization < thresholds.low_utilization {
        PRIMARY_FACTOR
    } else if utilization < thresholds.medium_utilization {
        SECONDARY_FACTOR
    } else {
        0.0
    };

    let age_risk = if project.days_approved > thresholds.critical_days {
        PRIMARY_FACTOR
    } else if project.days_approved > thresholds.delayed_days {
        SECONDARY_FACTOR
    } else {
        0.0
    };

    let allocation_risk = match project.total_budget {
        Some(total)
            if total > 0.0 && project.allocated_budget / total < thresholds.min_allocation_rate =>
        {
            SECONDARY_FACTOR
        }
        _ => 0.0,
    };

    let score = (utilization_risk + age_risk + allocation_risk).min(1.0);
    tracing::debug!(
        project = %project.name,
        utilization_risk,
        age_risk,
        allocation_risk,
        score,
        "Risk score"
    );
    Ok(score)
}
