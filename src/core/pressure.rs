//! Pressure index for the batting side
//!
//! Four weighted terms: required run rate, wickets lost, innings phase,
//! chase closeness. Output in [0, 1], rounded to 4 decimals.

use crate::core::round_to;
use crate::{
    PRESSURE_WEIGHT_CLOSE, PRESSURE_WEIGHT_PHASE, PRESSURE_WEIGHT_RRR, PRESSURE_WEIGHT_WICKETS,
    RRR_SATURATION,
};

/// Required run rate; 0 when no balls remain
pub fn required_run_rate(runs_needed: u32, balls_remaining: usize) -> f64 {
    if balls_remaining == 0 {
        return 0.0;
    }
    runs_needed as f64 / balls_remaining as f64 * 6.0
}

/// Pressure index in [0, 1]
///
/// `ball_number` is 1-based across the innings.
pub fn pressure_index(
    runs_needed: u32,
    balls_remaining: usize,
    wickets_fallen: u32,
    total_balls: usize,
    ball_number: usize,
) -> f64 {
    let rrr_pressure = if balls_remaining > 0 {
        let rrr = runs_needed as f64 / balls_remaining as f64 * 6.0;
        (rrr / RRR_SATURATION).min(1.0)
    } else if runs_needed > 0 {
        1.0
    } else {
        0.0
    };

    // Exponential: losing 8 wickets is far worse than losing 4
    let wicket_pressure = (((wickets_fallen as f64 / 4.0).exp() - 1.0)
        / ((10.0_f64 / 4.0).exp() - 1.0))
        .min(1.0);

    // Convex growth toward the late innings
    let phase_ratio = ball_number as f64 / total_balls.max(1) as f64;
    let phase_pressure = phase_ratio.powf(1.5);

    // Peaks when the chase is about half done, zero without an active chase
    let close_match = if runs_needed > 0 && balls_remaining > 0 {
        let completion =
            1.0 - runs_needed as f64 / (runs_needed as f64 + ball_number as f64).max(1.0);
        1.0 - (completion - 0.5).abs() * 2.0
    } else {
        0.0
    };

    let pressure = PRESSURE_WEIGHT_RRR * rrr_pressure
        + PRESSURE_WEIGHT_WICKETS * wicket_pressure
        + PRESSURE_WEIGHT_PHASE * phase_pressure
        + PRESSURE_WEIGHT_CLOSE * close_match;

    round_to(pressure.clamp(0.0, 1.0), 4)
}

// =============================================================================
// TESTS
// =============================================================================
