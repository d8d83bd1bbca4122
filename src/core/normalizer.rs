//! Event normalization at the ingestion boundary
//!
//! All adapters reduce their output to the same canonical [`BallEvent`]
//! shape before it reaches the engine. Structured records only need their
//! numbering filled in; plain commentary lines get flags and runs derived
//! from the text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::BallEvent;

lazy_static! {
    // Run counts buried in prose, e.g. "takes 2", "3 more", "2 runs"
    static ref RUN_PATTERNS: [Regex; 3] = [
        Regex::new(r"\b([1-3])\s+run").unwrap(),
        Regex::new(r"takes?\s+([1-3])").unwrap(),
        Regex::new(r"([1-3])\s+more").unwrap(),
    ];
}

const WICKET_MARKERS: &[&str] = &[
    "out!", "wicket", "caught", "bowled", "lbw", "stumped", "run out",
];

/// Fill in over/ball numbering for events that arrived without it
///
/// Positions are derived from the event's index assuming six legal balls
/// per over; events that already carry numbering are left untouched.
pub fn normalize_events(mut events: Vec<BallEvent>) -> Vec<BallEvent> {
    for (i, event) in events.iter_mut().enumerate() {
        if event.over == 0 {
            event.over = i as u32 / 6 + 1;
        }
        if event.ball == 0 {
            event.ball = i as u32 % 6 + 1;
        }
    }
    events
}

/// Reduce one line of free commentary to a canonical event
///
/// `ball_num` is the 1-based delivery index across the innings.
pub fn event_from_text(text: &str, ball_num: usize) -> BallEvent {
    let text = text.trim();
    let lower = text.to_lowercase();

    let is_wicket = WICKET_MARKERS.iter().any(|w| lower.contains(w));
    let is_six = lower.contains("six") || lower.contains("sixes") || text.contains("6!");
    let is_four =
        (lower.contains("four") || lower.contains("boundary") || text.contains("4!")) && !is_six;
    let is_wide = lower.contains("wide");
    let is_no_ball = lower.contains("no ball") || lower.contains("no-ball");
    let is_dot = lower.contains("dot")
        || (!is_wicket && !is_six && !is_four && lower.contains("no run"));

    let runs = if is_six {
        6
    } else if is_four {
        4
    } else if is_wide || is_no_ball {
        1
    } else if is_wicket {
        0
    } else {
        RUN_PATTERNS
            .iter()
            .find_map(|re| {
                re.captures(&lower)
                    .and_then(|c| c.get(1))
                    .and_then(|m| m.as_str().parse::<u32>().ok())
            })
            .unwrap_or(0)
    };

    BallEvent {
        over: (ball_num as u32 - 1) / 6 + 1,
        ball: (ball_num as u32 - 1) % 6 + 1,
        text: text.to_string(),
        runs,
        is_wicket,
        is_six,
        is_four,
        is_dot,
        is_drop: lower.contains("dropped") || lower.contains("drop"),
        is_wide,
        is_no_ball,
        batter: String::new(),
        bowler: String::new(),
    }
}

/// Reduce pasted multi-line commentary to an ordered event sequence
pub fn events_from_text(text: &str) -> Vec<BallEvent> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| event_from_text(line, i + 1))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
