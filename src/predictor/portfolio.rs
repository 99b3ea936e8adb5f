//! Portfolio-level health: aggregate budgets, status counts, a 0-100 score
//! and summary recommendations for a group of projects.

use crate::config::{defaults, PortfolioConfig};
use crate::error::Result;
use crate::types::{HealthStatus, PortfolioAnalysis, ProjectRecord, StatusCounts};

use super::rules::{extract_features, predict};

/// Classify every project and summarize the group.
///
/// # Errors
///
/// Fails on the first project with a zero allocated budget.
pub fn analyze_portfolio(
    projects: &[ProjectRecord],
    thresholds: &PortfolioConfig,
) -> Result<PortfolioAnalysis> {
    let mut status_counts = StatusCounts::default();
    for project in projects {
        status_counts.record(predict(&extract_features(project)?));
    }

    let total_budget: f64 = projects.iter().filter_map(|p| p.total_budget).sum();
    let total_allocated: f64 = projects.iter().map(|p| p.allocated_budget).sum();
    let total_utilized: f64 = projects.iter().map(|p| p.utilized_budget).sum();

    // Only projects with a known total budget take part in the allocation rate
    let allocated_with_total: f64 = projects
        .iter()
        .filter(|p| p.total_budget.is_some())
        .map(|p| p.allocated_budget)
        .sum();
    let allocation_rate = percentage(allocated_with_total, total_budget);
    let utilization_rate = percentage(total_utilized, total_allocated);

    let health_score = health_score(&status_counts);
    let recommendations = recommendations(&status_counts, thresholds);

    tracing::info!(
        projects = projects.len(),
        on_track = status_counts.on_track,
        at_risk = status_counts.at_risk,
        delayed = status_counts.delayed,
        health_score,
        "Portfolio analyzed"
    );

    Ok(PortfolioAnalysis {
        total_projects: projects.len(),
        total_budget,
        total_allocated,
        total_utilized,
        allocation_rate,
        utilization_rate,
        status_counts,
        health_score,
        recommendations,
    })
}

fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

#[allow(clippy::cast_precision_loss)]
fn share(counts: &StatusCounts, status: HealthStatus) -> f64 {
    counts.count(status) as f64 / counts.total() as f64
}

const fn status_weight(status: HealthStatus) -> f64 {
    match status {
        HealthStatus::OnTrack => defaults::ON_TRACK_WEIGHT,
        HealthStatus::AtRisk => defaults::AT_RISK_WEIGHT,
        HealthStatus::Delayed => defaults::DELAYED_WEIGHT,
    }
}

/// 50 plus the share-weighted status contributions, clamped to 0-100.
/// An empty portfolio scores 0.
fn health_score(counts: &StatusCounts) -> f64 {
    if counts.total() == 0 {
        return 0.0;
    }

    let weighted: f64 = HealthStatus::ALL
        .iter()
        .map(|&status| share(counts, status) * status_weight(status))
        .sum();

    (defaults::PORTFOLIO_BASE_SCORE + weighted).clamp(0.0, 100.0)
}

fn recommendations(counts: &StatusCounts, thresholds: &PortfolioConfig) -> Vec<String> {
    let mut out = Vec::new();
    if counts.total() == 0 {
        return out;
    }

    let delayed_pct = share(counts, HealthStatus::Delayed) * 100.0;
    let at_risk_pct = share(counts, HealthStatus::AtRisk) * 100.0;
    let on_track_pct = share(counts, HealthStatus::OnTrack) * 100.0;

    if delayed_pct > thresholds.delayed_share_pct {
        out.push(format!(
            "URGENT: Over {}% of projects are delayed. Review implementation strategy.",
            thresholds.delayed_share_pct
        ));
    }
    if at_risk_pct > thresholds.at_risk_share_pct {
        out.push(format!(
            "CAUTION: Over {}% of projects at risk. Increase monitoring and support.",
            thresholds.at_risk_share_pct
        ));
    }
    if on_track_pct > thresholds.on_track_share_pct {
        out.push(format!(
            "POSITIVE: Over {}% of projects on track. Maintain current pace.",
            thresholds.on_track_share_pct
        ));
    }

    out
}
