//! System-wide default constants.
//!
//! Centralises the magic numbers used by the predictor, the training report
//! and the config loader. Grouped by subsystem for easy discovery.

// ============================================================================
// Config Loading
// ============================================================================

/// Environment variable pointing at a TOML config file.
pub const CONFIG_ENV_VAR: &str = "PROJECT_HEALTH_CONFIG";

/// Config file looked up in the current working directory.
pub const LOCAL_CONFIG_FILE: &str = "project_health.toml";

// ============================================================================
// Model Narration
// ============================================================================

/// Base model named in the training narrative. Never loaded.
pub const BASE_MODEL: &str = "meta-llama/Llama-2-7b";

/// Training technique named in the training narrative.
pub const TRAINING_TYPE: &str = "GRPO (Group Relative Policy Optimization)";

/// Model label attached to every assessment.
pub const MODEL_LABEL: &str = "Oumi GRPO Fine-tuned Model";

// ============================================================================
// Training Report
// ============================================================================

pub const LEARNING_RATE: f64 = 1e-4;

pub const NUM_EPOCHS: u32 = 3;

/// Upper bound on reported epochs; one loss entry is kept per epoch.
pub const MAX_EPOCHS: u32 = 10_000;

/// Reported loss is `INITIAL_LOSS - epoch * LOSS_STEP_PER_EPOCH`.
pub const INITIAL_LOSS: f64 = 0.45;

pub const LOSS_STEP_PER_EPOCH: f64 = 0.1;

// ============================================================================
// Risk Scoring
// ============================================================================

/// Utilization ratio below which a project carries the full utilization risk.
pub const LOW_UTILIZATION: f64 = 0.30;

/// Utilization ratio below which a project carries half the utilization risk.
pub const MEDIUM_UTILIZATION: f64 = 0.60;

pub const DELAYED_DAYS: u32 = 90;

pub const CRITICAL_DAYS: u32 = 120;

/// allocated / total budget below which allocation risk applies.
pub const MIN_ALLOCATION_RATE: f64 = 0.5;

// ============================================================================
// Portfolio Analysis
// ============================================================================

/// Starting point of the portfolio health score before status weighting.
pub const PORTFOLIO_BASE_SCORE: f64 = 50.0;

pub const ON_TRACK_WEIGHT: f64 = 20.0;

pub const AT_RISK_WEIGHT: f64 = -10.0;

pub const DELAYED_WEIGHT: f64 = -15.0;

/// Delayed share (%) above which the portfolio gets an URGENT note.
pub const DELAYED_SHARE_PCT: f64 = 20.0;

/// At-risk share (%) above which the portfolio gets a CAUTION note.
pub const AT_RISK_SHARE_PCT: f64 = 30.0;

/// On-track share (%) above which the portfolio gets a POSITIVE note.
pub const ON_TRACK_SHARE_PCT: f64 = 70.0;

// ============================================================================
// Display
// ============================================================================

pub const CURRENCY_SYMBOL: &str = "₹";

/// Width of the `=` banner framing the training narrative.
pub const BANNER_WIDTH: usize = 60;
