//! Built-in labeled examples used by the training report, and the
//! demonstration projects shown by the CLI.
//!
//! Utilization percentages are stored pre-rounded to one decimal and are
//! used as-is; they are not recomputed from the budgets.

use crate::types::{FeatureSet, HealthStatus, LabeledExample, ProjectRecord};

const fn example(
    allocated_budget: f64,
    utilized_budget: f64,
    days_approved: u32,
    utilization_percentage: f64,
    label: HealthStatus,
) -> LabeledExample {
    LabeledExample {
        features: FeatureSet {
            allocated_budget,
            utilized_budget,
            days_approved,
            utilization_percentage,
        },
        label,
    }
}

pub static TRAINING_EXAMPLES: [LabeledExample; 6] = [
    example(500_000.0, 450_000.0, 45, 90.0, HealthStatus::OnTrack),
    example(1_000_000.0, 650_000.0, 60, 65.0, HealthStatus::OnTrack),
    example(750_000.0, 200_000.0, 90, 26.7, HealthStatus::AtRisk),
    example(600_000.0, 580_000.0, 30, 96.7, HealthStatus::OnTrack),
    example(400_000.0, 50_000.0, 120, 12.5, HealthStatus::Delayed),
    example(900_000.0, 850_000.0, 50, 94.4, HealthStatus::OnTrack),
];

/// Sample projects for the demo run.
pub fn demo_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new("Road Construction", 500_000.0, 450_000.0, 45),
        ProjectRecord::new("Water Supply System", 750_000.0, 200_000.0, 90),
        ProjectRecord::new("Community Center", 400_000.0, 50_000.0, 120),
    ]
}
