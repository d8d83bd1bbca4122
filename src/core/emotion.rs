//! Composite E(t) scorer with EMA smoothing
//!
//! One parametrized scorer covers both sides: the bowling perspective
//! negates sentiment and momentum and shares the pressure index unchanged.

use crate::core::round_to;
use crate::core::sentiment::has_dramatic_language;
use crate::types::BallEvent;
use crate::{
    EMA_ALPHA, EMA_SEED, E_WEIGHT_COUPLING, E_WEIGHT_MOMENTUM, E_WEIGHT_PRESSURE,
    E_WEIGHT_SENTIMENT, MULT_DRAMA, MULT_DROPPED_CATCH, MULT_FOUR, MULT_FOUR_HIGH_PRESSURE,
    MULT_SIX, MULT_SIX_HIGH_PRESSURE, MULT_WICKET,
};

/// Which side the score is computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    Batting,
    Bowling,
}

impl Perspective {
    /// Sign applied to sentiment and momentum
    pub fn sign(&self) -> f64 {
        match self {
            Perspective::Batting => 1.0,
            Perspective::Bowling => -1.0,
        }
    }
}

/// EMA-smoothed emotion scorer for one perspective
///
/// Strictly sequential: each ball's output depends on the previous
/// smoothed value, seeded at 20.0 for the first ball.
#[derive(Debug)]
pub struct EmotionScorer {
    perspective: Perspective,
    prev: f64,
}

impl EmotionScorer {
    pub fn new(perspective: Perspective) -> Self {
        Self {
            perspective,
            prev: EMA_SEED,
        }
    }

    /// Score one ball and advance the EMA state; output in [0, 100],
    /// rounded to 2 decimals
    pub fn score(&mut self, sentiment: f64, pressure: f64, momentum: f64, ball: &BallEvent) -> f64 {
        let sign = self.perspective.sign();
        let s = (sign * sentiment + 1.0) / 2.0;
        let m = (sign * momentum + 1.0) / 2.0;
        let p = pressure;

        let base = 100.0
            * (E_WEIGHT_SENTIMENT * s
                + E_WEIGHT_PRESSURE * p
                + E_WEIGHT_MOMENTUM * m
                + E_WEIGHT_COUPLING * s * p);

        let raw = (base * event_multiplier(ball, pressure)).min(100.0);

        let smoothed = round_to(EMA_ALPHA * raw + (1.0 - EMA_ALPHA) * self.prev, 2);
        self.prev = smoothed;
        smoothed
    }

    /// Latest smoothed value
    pub fn current(&self) -> f64 {
        self.prev
    }
}

/// Compounding event multipliers; boundaries amplify more under pressure
fn event_multiplier(ball: &BallEvent, pressure: f64) -> f64 {
    let mut multiplier = 1.0;
    if ball.is_wicket {
        multiplier *= MULT_WICKET;
    }
    if ball.is_six {
        multiplier *= if pressure > 0.6 {
            MULT_SIX_HIGH_PRESSURE
        } else {
            MULT_SIX
        };
    }
    if ball.is_four {
        multiplier *= if pressure > 0.7 {
            MULT_FOUR_HIGH_PRESSURE
        } else {
            MULT_FOUR
        };
    }
    if ball.is_drop {
        multiplier *= MULT_DROPPED_CATCH;
    }
    if has_dramatic_language(&ball.text) {
        multiplier *= MULT_DRAMA;
    }
    multiplier
}

// =============================================================================
// TESTS
// =============================================================================
