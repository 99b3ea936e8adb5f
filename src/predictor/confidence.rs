//! Heuristic confidence attached to a prediction.
//!
//! The prediction is trusted as given. Passing a status that the features
//! would not produce still yields a score from that status's branch.

use crate::types::{FeatureSet, HealthStatus};

/// Every value [`get_model_confidence`] can return.
pub const CONFIDENCE_LEVELS: [f64; 7] = [0.70, 0.75, 0.80, 0.85, 0.90, 0.92, 0.95];

/// Confidence in `prediction` for `features`, one of [`CONFIDENCE_LEVELS`].
///
/// - At Risk: < 10% used after > 90 days → 0.95; < 20% after > 60 days → 0.85; else 0.70
/// - Delayed: > 120 days with < 30% used → 0.90; else 0.75
/// - On Track: > 80% used → 0.92; > 50% → 0.80; else 0.70
pub fn get_model_confidence(features: &FeatureSet, prediction: HealthStatus) -> f64 {
    let utilization = features.utilization_percentage;
    let days = features.days_approved;

    match prediction {
        HealthStatus::AtRisk => {
            if utilization < 10.0 && days > 90 {
                0.95
            } else if utilization < 20.0 && days > 60 {
                0.85
            } else {
                0.70
            }
        }
        HealthStatus::Delayed => {
            if days > 120 && utilization < 30.0 {
                0.90
            } else {
                0.75
            }
        }
        HealthStatus::OnTrack => {
            if utilization > 80.0 {
                0.92
            } else if utilization > 50.0 {
                0.80
            } else {
                0.70
            }
        }
    }
}
