//! Momentum tracking: weighted sliding window plus sign-flip detection
//!
//! Positive momentum means the batting side controls the game, negative
//! the bowling side.

use crate::core::{round_to, truncate_chars};
use crate::types::{BallEvent, MomentumShift};
use crate::{MOMENTUM_WINDOW, SHIFT_MAGNITUDE};

/// Weighted-recency momentum in [-1, 1] over the last 12 processed balls
///
/// Per ball: `runs/6 - 1` if a wicket fell, else `runs/6`. Weight is the
/// 1-based recency rank within the window. Empty history scores 0.
pub fn compute_momentum(history: &[BallEvent]) -> f64 {
    let start = history.len().saturating_sub(MOMENTUM_WINDOW);
    let recent = &history[start..];
    if recent.is_empty() {
        return 0.0;
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for (i, ball) in recent.iter().enumerate() {
        let weight = (i + 1) as f64;
        let wicket_penalty = if ball.is_wicket { 1.0 } else { 0.0 };
        let ball_score = ball.runs as f64 / 6.0 - wicket_penalty;
        weighted_sum += ball_score * weight;
        total_weight += weight;
    }

    round_to((weighted_sum / total_weight).clamp(-1.0, 1.0), 4)
}

/// Detects sign flips between consecutive momentum values
///
/// A shift fires when the sign changes AND the absolute delta exceeds 0.4.
/// No shift can fire while the previous momentum is exactly 0, which also
/// covers the first ball of a match.
#[derive(Debug, Default)]
pub struct ShiftDetector {
    prev: f64,
}

impl ShiftDetector {
    pub fn new() -> Self {
        Self { prev: 0.0 }
    }

    /// Feed the next momentum value; returns a shift record when one fires
    pub fn observe(
        &mut self,
        ball_number: usize,
        event: &BallEvent,
        momentum: f64,
    ) -> Option<MomentumShift> {
        let fired = self.prev != 0.0
            && (self.prev > 0.0) != (momentum > 0.0)
            && (momentum - self.prev).abs() > SHIFT_MAGNITUDE;

        let shift = fired.then(|| MomentumShift {
            ball_number,
            over: event.over,
            from: round_to(self.prev, 2),
            to: round_to(momentum, 2),
            description: truncate_chars(&event.text, 80),
        });

        self.prev = momentum;
        shift
    }
}

// =============================================================================
// TESTS
// =============================================================================
