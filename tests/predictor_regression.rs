//! Predictor Regression Tests
//!
//! Exercises the public prediction chain end to end on the demonstration
//! projects and the built-in examples: features, status, confidence,
//! recommendation text, training report, risk and portfolio scoring.

use project_health::predictor::{
    demo_projects, extract_features, get_model_confidence, predict, CONFIDENCE_LEVELS,
};
use project_health::types::FeatureSet;
use project_health::{HealthStatus, Predictor, PredictorError, ProjectInput, ProjectRecord};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn features(utilization: f64, days: u32) -> FeatureSet {
    FeatureSet {
        allocated_budget: 1_000.0,
        utilized_budget: utilization * 10.0,
        days_approved: days,
        utilization_percentage: utilization,
    }
}

// ============================================================================
// Demo Projects
// ============================================================================

#[test]
fn road_construction_is_on_track_with_high_confidence() {
    let project = ProjectRecord::new("Road Construction", 500_000.0, 450_000.0, 45);
    let f = extract_features(&project).unwrap();
    assert_close(f.utilization_percentage, 90.0);

    let status = predict(&f);
    assert_eq!(status, HealthStatus::OnTrack);
    assert_close(get_model_confidence(&f, status), 0.92);
}

#[test]
fn water_supply_system_follows_rule_table() {
    // 26.67% after 90 days triggers neither the at-risk (<10%) nor the
    // delayed (>100 days) rule, so it falls through to On Track.
    let project = ProjectRecord::new("Water Supply System", 750_000.0, 200_000.0, 90);
    let f = extract_features(&project).unwrap();
    assert!((f.utilization_percentage - 26.67).abs() < 0.01);

    let status = predict(&f);
    assert_eq!(status, HealthStatus::OnTrack);
    assert_close(get_model_confidence(&f, status), 0.70);
    assert_close(get_model_confidence(&f, HealthStatus::AtRisk), 0.70);
}

#[test]
fn community_center_is_delayed() {
    let project = ProjectRecord::new("Community Center", 400_000.0, 50_000.0, 120);
    let f = extract_features(&project).unwrap();
    assert_close(f.utilization_percentage, 12.5);

    let status = predict(&f);
    assert_eq!(status, HealthStatus::Delayed);
    assert_close(get_model_confidence(&f, status), 0.75);
}

#[test]
fn recommendations_name_project_and_round_utilization() {
    let predictor = Predictor::default();
    for project in demo_projects() {
        let a = predictor.assess(&project).unwrap();
        assert!(a.recommendation.contains(&project.name));
        let pct = format!("{:.1}%", project.utilized_budget / project.allocated_budget * 100.0);
        assert!(a.recommendation.contains(&pct), "{} lacks {pct}", a.recommendation);
    }
}

// ============================================================================
// Decision Properties
// ============================================================================

#[test]
fn at_risk_region_always_at_risk() {
    for utilization in [0.0, 2.5, 9.99] {
        for days in [61, 90, 101, 500] {
            assert_eq!(predict(&features(utilization, days)), HealthStatus::AtRisk);
        }
    }
}

#[test]
fn delayed_region_outside_at_risk_always_delayed() {
    for utilization in [10.0, 25.0, 49.99] {
        for days in [101, 121, 365] {
            assert_eq!(predict(&features(utilization, days)), HealthStatus::Delayed);
        }
    }
    // Below 10% the at-risk rule wins whenever days > 60
    assert_eq!(predict(&features(5.0, 200)), HealthStatus::AtRisk);
}

#[test]
fn everything_else_on_track() {
    for (utilization, days) in [(50.0, 200), (10.0, 60), (95.0, 400), (5.0, 30), (60.0, 0)] {
        assert_eq!(predict(&features(utilization, days)), HealthStatus::OnTrack);
    }
}

#[test]
fn confidence_stays_in_literal_set() {
    for utilization in (0..=120).step_by(5).map(f64::from) {
        for days in (0..=200).step_by(10) {
            let f = features(utilization, days);
            let score = get_model_confidence(&f, predict(&f));
            assert!((0.70..=0.95).contains(&score));
            assert!(CONFIDENCE_LEVELS.iter().any(|c| (c - score).abs() < 1e-12));
        }
    }
}

// ============================================================================
// Training Report
// ============================================================================

#[test]
fn training_report_self_evaluation() {
    let report = Predictor::default().train_grpo(1e-4, 3);
    assert_eq!(report.training_samples, 6);
    assert_eq!(report.epochs, 3);
    assert_close(report.learning_rate, 1e-4);
    assert_eq!(report.correct_predictions, 5);
    assert!((report.accuracy - 83.33).abs() < 0.01);
    let losses: Vec<f64> = report.epoch_losses.iter().map(|e| e.loss).collect();
    assert_eq!(losses.len(), 3);
    assert!(losses.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn training_report_is_idempotent() {
    let predictor = Predictor::default();
    assert_eq!(predictor.train_grpo(1e-4, 3), predictor.train_grpo(1e-4, 3));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn zero_allocation_is_division_error_everywhere() {
    let predictor = Predictor::default();
    let project = ProjectRecord::new("Empty Fund", 0.0, 100.0, 30);
    let is_div = |e: PredictorError| matches!(e, PredictorError::DivisionByZero { .. });

    assert!(is_div(extract_features(&project).unwrap_err()));
    assert!(is_div(
        predictor
            .generate_recommendation(&project, HealthStatus::OnTrack)
            .unwrap_err()
    ));
    assert!(is_div(predictor.risk_score(&project).unwrap_err()));
    assert!(is_div(predictor.analyze_portfolio(&[project]).unwrap_err()));
}

#[test]
fn missing_field_from_json_input() {
    let json = r#"{"name": "Library", "utilizedBudget": 10, "daysApproved": 4}"#;
    let input: ProjectInput = serde_json::from_str(json).unwrap();
    assert_eq!(
        ProjectRecord::try_from(input),
        Err(PredictorError::MissingField("allocatedBudget"))
    );
}

// ============================================================================
// Risk & Portfolio
// ============================================================================

#[test]
fn demo_risk_scores() {
    let predictor = Predictor::default();
    let scores: Vec<f64> = demo_projects()
        .iter()
        .map(|p| predictor.risk_score(p).unwrap())
        .collect();
    assert_close(scores[0], 0.0);
    assert_close(scores[1], 0.4);
    assert_close(scores[2], 0.6);
}

#[test]
fn demo_portfolio_summary() {
    let analysis = Predictor::default().analyze_portfolio(&demo_projects()).unwrap();
    assert_eq!(analysis.total_projects, 3);
    assert_eq!(analysis.status_counts.on_track, 2);
    assert_eq!(analysis.status_counts.at_risk, 0);
    assert_eq!(analysis.status_counts.delayed, 1);
    assert_close(analysis.health_score, 50.0 + 25.0 / 3.0);
    assert_eq!(analysis.recommendations.len(), 1);
    assert!(analysis.recommendations[0].starts_with("URGENT"));
    assert_close(analysis.total_allocated, 1_650_000.0);
    assert_close(analysis.total_utilized, 700_000.0);
}

#[test]
fn mixed_portfolio_allocation_rate_stays_bounded() {
    let projects = vec![
        ProjectRecord::new("Known", 100.0, 90.0, 10).with_total_budget(400.0),
        ProjectRecord::new("Unknown", 1_000.0, 900.0, 10),
    ];
    let analysis = Predictor::default().analyze_portfolio(&projects).unwrap();
    assert_close(analysis.total_budget, 400.0);
    assert_close(analysis.total_allocated, 1_100.0);
    assert_close(analysis.allocation_rate, 25.0);
}

#[test]
fn assessment_serializes_with_camel_case_keys() {
    let project = ProjectRecord::new("Community Center", 400_000.0, 50_000.0, 120);
    let a = Predictor::default().assess(&project).unwrap();
    let value = serde_json::to_value(&a).unwrap();
    assert_eq!(value["prediction"], "Delayed");
    assert_eq!(value["projectName"], "Community Center");
    assert!(value["suggestedActions"].as_array().is_some_and(|v| v.len() == 4));
}
