//! "GRPO fine-tuning" report over the built-in examples.
//!
//! Nothing is learned. The report restates the run configuration, counts
//! labels, lists a fixed loss schedule and scores the decision rules
//! against the stored labels. Rendering the narrative lives in
//! [`crate::report`].

use crate::config::{defaults, ModelConfig};
use crate::types::{EpochLoss, HealthStatus, LabelCount, LabeledExample, TrainingReport};

use super::rules::predict;

/// Reported loss for a 1-based epoch. Goes negative past epoch 4.
pub fn epoch_loss(epoch: u32) -> f64 {
    defaults::INITIAL_LOSS - f64::from(epoch) * defaults::LOSS_STEP_PER_EPOCH
}

/// Build the report. Deterministic: the same inputs always yield the same
/// report.
pub fn train_grpo(
    examples: &[LabeledExample],
    model: &ModelConfig,
    learning_rate: f64,
    num_epochs: u32,
) -> TrainingReport {
    let label_distribution = HealthStatus::ALL
        .iter()
        .map(|&label| LabelCount {
            label,
            count: examples.iter().filter(|e| e.label == label).count(),
        })
        .filter(|lc| lc.count > 0)
        .collect();

    let epoch_losses = (1..=num_epochs)
        .map(|epoch| EpochLoss {
            epoch,
            loss: epoch_loss(epoch),
        })
        .collect();

    let correct_predictions = examples
        .iter()
        .filter(|e| predict(&e.features) == e.label)
        .count();

    #[allow(clippy::cast_precision_loss)]
    let accuracy = if examples.is_empty() {
        0.0
    } else {
        correct_predictions as f64 / examples.len() as f64 * 100.0
    };

    tracing::info!(
        accuracy,
        correct = correct_predictions,
        samples = examples.len(),
        epochs = num_epochs,
        "Training report generated"
    );

    TrainingReport {
        accuracy,
        epochs: num_epochs,
        learning_rate,
        training_samples: examples.len(),
        correct_predictions,
        label_distribution,
        epoch_losses,
        base_model: model.base_model.clone(),
        training_type: model.training_type.clone(),
    }
}
