//! Athena: match emotion analytics for ball-by-ball cricket commentary
//!
//! Pipeline: normalized ball events -> single ordered pass (sentiment,
//! pressure, momentum, smoothed E(t)) -> derived analytics -> report

pub mod core;
pub mod error;
pub mod types;

// =============================================================================
// E(t) FORMULA
// =============================================================================

/// EMA smoothing factor for E(t)
pub const EMA_ALPHA: f64 = 0.3;

/// Smoothed value seeding the first ball of a match
/// Mild non-zero baseline rather than a true cold start at 0
pub const EMA_SEED: f64 = 20.0;

/// Base weight for normalized sentiment
pub const E_WEIGHT_SENTIMENT: f64 = 0.25;

/// Base weight for pressure
pub const E_WEIGHT_PRESSURE: f64 = 0.40;

/// Base weight for normalized momentum
pub const E_WEIGHT_MOMENTUM: f64 = 0.15;

/// Base weight for the sentiment x pressure coupling term
pub const E_WEIGHT_COUPLING: f64 = 0.20;

// =============================================================================
// EVENT MULTIPLIERS
// =============================================================================

pub const MULT_WICKET: f64 = 1.4;
/// Six under pressure > 0.6
pub const MULT_SIX_HIGH_PRESSURE: f64 = 1.5;
pub const MULT_SIX: f64 = 1.2;
/// Four under pressure > 0.7
pub const MULT_FOUR_HIGH_PRESSURE: f64 = 1.3;
pub const MULT_FOUR: f64 = 1.1;
pub const MULT_DROPPED_CATCH: f64 = 1.3;
/// Dramatic-language match in the commentary text
pub const MULT_DRAMA: f64 = 1.15;

// =============================================================================
// PRESSURE INDEX WEIGHTS (sum = 1.0)
// =============================================================================

pub const PRESSURE_WEIGHT_RRR: f64 = 0.35;
pub const PRESSURE_WEIGHT_WICKETS: f64 = 0.25;
pub const PRESSURE_WEIGHT_PHASE: f64 = 0.20;
pub const PRESSURE_WEIGHT_CLOSE: f64 = 0.20;

/// Required run rate at which the RRR term saturates
pub const RRR_SATURATION: f64 = 15.0;

// =============================================================================
// MOMENTUM
// =============================================================================

/// Sliding window length for momentum (balls)
pub const MOMENTUM_WINDOW: usize = 12;

/// Minimum |delta| for a momentum shift to fire
pub const SHIFT_MAGNITUDE: f64 = 0.4;

// =============================================================================
// COLLAPSE RISK
// =============================================================================

/// Baseline risk percentage
pub const COLLAPSE_BASE: f64 = 10.0;

/// Risk percentage ceiling
pub const COLLAPSE_CAP: f64 = 95.0;

/// Trailing window for collapse rules (3 overs)
pub const COLLAPSE_WINDOW: usize = 18;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
