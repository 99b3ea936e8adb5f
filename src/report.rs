//! Console rendering for training reports, assessments and portfolios.
//!
//! Everything here only formats; all numbers come from the predictor.
//! Writers take any `io::Write` so output can be captured in tests.

use std::io::{self, Write};

use crate::config::defaults::BANNER_WIDTH;
use crate::types::{HealthAssessment, PortfolioAnalysis, ProjectRecord, TrainingReport};

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

fn write_framed_title<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", banner())?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", banner())
}

/// Group an integer's digits in threes: `1234567` → `1,234,567`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `₹500,000`; paise are shown only when non-zero (`₹1,234.50`).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_currency(symbol: &str, amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    match cents % 100 {
        0 => format!("{sign}{symbol}{whole}"),
        frac => format!("{sign}{symbol}{whole}.{frac:02}"),
    }
}

/// Narrative of a training run: configuration, label distribution, loss
/// per epoch and the self-evaluation result.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_training_log<W: Write>(out: &mut W, report: &TrainingReport) -> io::Result<()> {
    write_framed_title(out, "OUMI GRPO FINE-TUNING: Project Health Prediction Model")?;

    writeln!(out, "\nTraining Configuration:")?;
    writeln!(out, "  - Model: {}", report.base_model)?;
    writeln!(out, "  - Training Type: {}", report.training_type)?;
    writeln!(out, "  - Learning Rate: {}", report.learning_rate)?;
    writeln!(out, "  - Epochs: {}", report.epochs)?;
    writeln!(out, "  - Training Samples: {}", report.training_samples)?;

    writeln!(out, "\nTraining Data Distribution:")?;
    for lc in &report.label_distribution {
        writeln!(out, "  - {}: {} samples", lc.label, lc.count)?;
    }

    writeln!(out, "\nTraining Progress:")?;
    for el in &report.epoch_losses {
        writeln!(out, "  Epoch {}/{}: Loss = {:.3}", el.epoch, report.epochs, el.loss)?;
    }

    writeln!(out, "\nModel Evaluation:")?;
    writeln!(out, "  - Training Accuracy: {:.1}%", report.accuracy)?;
    writeln!(
        out,
        "  - Correct Predictions: {}/{}",
        report.correct_predictions, report.training_samples
    )?;

    writeln!(out, "\nModel Training Complete!")?;
    writeln!(out, "{}", banner())
}

/// Header printed before a batch of per-project assessments.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_predictions_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    write_framed_title(out, "MODEL PREDICTIONS ON TEST DATA")
}

/// One project's budget figures and assessment.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_assessment<W: Write>(
    out: &mut W,
    project: &ProjectRecord,
    assessment: &HealthAssessment,
    currency_symbol: &str,
) -> io::Result<()> {
    writeln!(out, "\nProject: {}", project.name)?;
    writeln!(out, "  Allocated: {}", format_currency(currency_symbol, project.allocated_budget))?;
    writeln!(out, "  Utilized: {}", format_currency(currency_symbol, project.utilized_budget))?;
    writeln!(out, "  Days Approved: {}", project.days_approved)?;
    writeln!(out, "  Utilization: {:.1}%", assessment.utilization_percentage)?;
    writeln!(out, "  Prediction: {}", assessment.prediction)?;
    writeln!(out, "  Confidence: {:.0}%", assessment.confidence * 100.0)?;
    writeln!(out, "  Recommendation: {}", assessment.recommendation)
}

/// Risk score and follow-up actions, printed after an assessment when
/// more detail was requested.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_assessment_details<W: Write>(
    out: &mut W,
    assessment: &HealthAssessment,
) -> io::Result<()> {
    writeln!(out, "  Risk Score: {:.2}", assessment.risk_score)?;
    writeln!(out, "  Suggested Actions:")?;
    for action in &assessment.suggested_actions {
        writeln!(out, "    - {action}")?;
    }
    Ok(())
}

/// Portfolio totals, status counts, health score and recommendations.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_portfolio<W: Write>(
    out: &mut W,
    analysis: &PortfolioAnalysis,
    currency_symbol: &str,
) -> io::Result<()> {
    write_framed_title(out, "PORTFOLIO HEALTH ANALYSIS")?;
    writeln!(out, "\nProjects: {}", analysis.total_projects)?;
    writeln!(out, "  Total Budget: {}", format_currency(currency_symbol, analysis.total_budget))?;
    writeln!(out, "  Allocated: {}", format_currency(currency_symbol, analysis.total_allocated))?;
    writeln!(out, "  Utilized: {}", format_currency(currency_symbol, analysis.total_utilized))?;
    writeln!(out, "  Allocation Rate: {:.2}%", analysis.allocation_rate)?;
    writeln!(out, "  Utilization Rate: {:.2}%", analysis.utilization_rate)?;

    writeln!(out, "\nStatus:")?;
    let c = &analysis.status_counts;
    writeln!(out, "  - On Track: {}", c.on_track)?;
    writeln!(out, "  - At Risk: {}", c.at_risk)?;
    writeln!(out, "  - Delayed: {}", c.delayed)?;

    writeln!(out, "\nHealth Score: {:.1}/100", analysis.health_score)?;
    if !analysis.recommendations.is_empty() {
        writeln!(out, "\nRecommendations:")?;
        for rec in &analysis.recommendations {
            writeln!(out, "  - {rec}")?;
        }
    }
    writeln!(out, "{}", banner())
}
