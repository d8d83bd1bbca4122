//! Per-ball timeline output
//!
//! Timeline points are produced in strictly increasing ball order by the
//! orchestrator and never retracted; the two perspective scores are always
//! present and index-aligned across the match.

use serde::{Deserialize, Serialize};

use crate::types::PhaseLabel;

/// One fully-scored delivery on the match timeline, enriched with the
/// originating ball's raw fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// 1-based ball index across the innings
    pub ball_number: usize,
    pub over: u32,
    pub text: String,
    pub runs: u32,
    pub is_wicket: bool,
    pub is_four: bool,
    pub is_six: bool,
    pub batter: String,
    pub bowler: String,
    /// Batting-perspective E(t) in [0, 100]
    pub emotion_score: f64,
    /// Bowling-perspective E(t) in [0, 100]
    pub emotion_score_bowling: f64,
    /// Pressure index in [0, 1]
    pub pressure: f64,
    /// Momentum in [-1, 1]
    pub momentum: f64,
    pub phase: PhaseLabel,
}

/// A detected sign flip in momentum
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumShift {
    pub ball_number: usize,
    pub over: u32,
    /// Momentum before the shift (rounded to 2)
    pub from: f64,
    /// Momentum after the shift (rounded to 2)
    pub to: f64,
    /// Triggering ball's description, truncated to 80 chars
    pub description: String,
}
