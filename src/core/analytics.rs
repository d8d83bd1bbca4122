//! Derived analytics over the finished timeline
//!
//! Four independent pure reducers: batter cards, key moments, phase
//! segmentation, over heatmap. Each reads only the completed ball history
//! and the per-ball emotion sequences.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::core::{round_to, truncate_chars};
use crate::types::{
    BallEvent, BatterCard, ClutchRating, EmotionalPhase, EmotionalProfile, IntensityBand,
    KeyMoment, MomentClass, OverHeatmapEntry,
};

/// The four fixed narrative segment labels, in timeline order
const PHASE_NAMES: [&str; 4] = [
    "Calm Opening",
    "Building Tension",
    "High Intensity",
    "Peak Emotion",
];

#[derive(Debug, Default)]
struct BatterTotals {
    runs: u32,
    balls: u32,
    fours: u32,
    sixes: u32,
    dots: u32,
    emotions: Vec<f64>,
}

/// Emotion cards for the two most-recently-active distinct batters
pub fn build_batter_cards(history: &[BallEvent], emotions: &[f64]) -> Vec<BatterCard> {
    let mut totals: HashMap<&str, BatterTotals> = HashMap::new();

    for (i, ball) in history.iter().enumerate() {
        let entry = totals.entry(ball.batter.as_str()).or_default();
        entry.runs += ball.runs;
        entry.balls += 1;
        entry.fours += u32::from(ball.is_four);
        entry.sixes += u32::from(ball.is_six);
        entry.dots += u32::from(ball.is_dot);
        if let Some(score) = emotions.get(i) {
            entry.emotions.push(*score);
        }
    }

    // Current batters: last 2 distinct non-empty names, scanning backwards
    let mut recent: Vec<&str> = Vec::new();
    for ball in history.iter().rev() {
        let name = ball.batter.as_str();
        if !name.is_empty() && !recent.contains(&name) {
            recent.push(name);
        }
        if recent.len() >= 2 {
            break;
        }
    }

    recent
        .into_iter()
        .filter_map(|name| totals.get(name).map(|t| batter_card(name, t)))
        .collect()
}

fn batter_card(name: &str, totals: &BatterTotals) -> BatterCard {
    let balls = totals.balls.max(1);
    let strike_rate = round_to(totals.runs as f64 / balls as f64 * 100.0, 1);

    let sample_count = totals.emotions.len();
    let avg_emotion = round_to(
        totals.emotions.iter().sum::<f64>() / sample_count.max(1) as f64,
        1,
    );
    let peak_emotion = round_to(
        totals.emotions.iter().copied().fold(0.0_f64, f64::max),
        1,
    );

    // Emotion variance as a proxy for composure; thin samples stay neutral
    let resilience = if sample_count > 2 {
        round_to(
            (100.0 - sample_stddev(&totals.emotions) * 2.0).clamp(0.0, 100.0),
            1,
        )
    } else {
        50.0
    };

    let clutch_rating = if strike_rate > 150.0 && totals.sixes >= 2 {
        ClutchRating::EliteClutch
    } else if strike_rate > 120.0 {
        ClutchRating::Solid
    } else if strike_rate > 90.0 {
        ClutchRating::Fair
    } else {
        ClutchRating::Cold
    };

    let emotional_profile = if avg_emotion > 70.0 {
        EmotionalProfile::OnFire
    } else if avg_emotion > 50.0 {
        EmotionalProfile::Intense
    } else if avg_emotion > 35.0 {
        EmotionalProfile::Steady
    } else {
        EmotionalProfile::IceCold
    };

    BatterCard {
        name: name.to_string(),
        runs: totals.runs,
        balls,
        strike_rate,
        fours: totals.fours,
        sixes: totals.sixes,
        dots: totals.dots,
        avg_emotion,
        peak_emotion,
        resilience,
        clutch_rating,
        emotional_profile,
    }
}

/// Sample standard deviation (n - 1 denominator)
fn sample_stddev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Top 10 moments ranked by emotion score
pub fn identify_key_moments(events: &[BallEvent], emotions: &[f64]) -> Vec<KeyMoment> {
    let mut moments: Vec<KeyMoment> = Vec::new();

    for (i, (ball, score)) in events.iter().zip(emotions.iter()).enumerate() {
        let event_type = classify_moment(ball, *score);
        if event_type != MomentClass::Normal || *score > 65.0 {
            moments.push(KeyMoment {
                ball_number: i + 1,
                over: ball.over,
                ball_in_over: ball.ball,
                description: ball.text.clone(),
                emotion_score: *score,
                event_type,
                batter: ball.batter.clone(),
                bowler: ball.bowler.clone(),
            });
        }
    }

    moments.sort_by(|a, b| {
        b.emotion_score
            .partial_cmp(&a.emotion_score)
            .unwrap_or(Ordering::Equal)
    });
    moments.truncate(10);
    moments
}

fn classify_moment(ball: &BallEvent, score: f64) -> MomentClass {
    if ball.is_wicket {
        MomentClass::Wicket
    } else if ball.is_six {
        MomentClass::Six
    } else if ball.is_four {
        MomentClass::Boundary
    } else if ball.is_drop {
        MomentClass::Drop
    } else if score > 70.0 {
        MomentClass::HighEmotion
    } else {
        MomentClass::Normal
    }
}

/// Split the timeline into 4 contiguous near-equal segments
///
/// Quarter size is `max(n/4, 1)`; the last segment absorbs the remainder
/// and segments that fall past the end are skipped. The produced segments
/// partition the timeline exactly.
pub fn identify_phases(emotions: &[f64], events: &[BallEvent]) -> Vec<EmotionalPhase> {
    let n = emotions.len();
    if n == 0 {
        return Vec::new();
    }

    let quarter = (n / 4).max(1);
    let bounds = [
        (PHASE_NAMES[0], 0, quarter),
        (PHASE_NAMES[1], quarter, quarter * 2),
        (PHASE_NAMES[2], quarter * 2, quarter * 3),
        (PHASE_NAMES[3], quarter * 3, n),
    ];

    let mut phases = Vec::new();
    for (name, start, end) in bounds {
        let start = start.min(n);
        let end = end.clamp(start, n);
        let chunk = &emotions[start..end];
        if chunk.is_empty() {
            continue;
        }

        let avg_et = round_to(chunk.iter().sum::<f64>() / chunk.len() as f64, 1);
        let peak_et = round_to(chunk.iter().copied().fold(0.0_f64, f64::max), 1);

        let ev_end = end.min(events.len());
        let ev_chunk = if start < events.len() {
            &events[start..ev_end]
        } else {
            &[][..]
        };

        let key_event = ev_chunk
            .iter()
            .find(|b| b.is_wicket || b.is_six)
            .map(|b| truncate_chars(&b.text, 80))
            .unwrap_or_default();

        phases.push(EmotionalPhase {
            name: name.to_string(),
            over_start: ev_chunk.first().map(|b| b.over).unwrap_or(0),
            over_end: ev_chunk.last().map(|b| b.over).unwrap_or(0),
            avg_et,
            peak_et,
            key_event: if key_event.is_empty() {
                "Steady play".to_string()
            } else {
                key_event
            },
        });
    }

    phases
}

#[derive(Debug, Default)]
struct OverAccum {
    emotions: Vec<f64>,
    emotions_bowling: Vec<f64>,
    runs: u32,
    wickets: u32,
}

/// Per-over aggregates for both perspectives, in over order
pub fn over_heatmap(
    events: &[BallEvent],
    emotions: &[f64],
    emotions_bowling: &[f64],
) -> Vec<OverHeatmapEntry> {
    let mut overs: BTreeMap<u32, OverAccum> = BTreeMap::new();

    for (i, ball) in events.iter().enumerate() {
        let accum = overs.entry(ball.over).or_default();
        if let Some(score) = emotions.get(i) {
            accum.emotions.push(*score);
        }
        if let Some(score) = emotions_bowling.get(i) {
            accum.emotions_bowling.push(*score);
        }
        accum.runs += ball.runs;
        accum.wickets += u32::from(ball.is_wicket);
    }

    overs
        .into_iter()
        .map(|(over, accum)| {
            let avg = average(&accum.emotions);
            let avg_bowling = average(&accum.emotions_bowling);
            OverHeatmapEntry {
                over,
                avg_emotion: round_to(avg, 1),
                peak_emotion: round_to(accum.emotions.iter().copied().fold(0.0_f64, f64::max), 1),
                avg_emotion_bowling: round_to(avg_bowling, 1),
                peak_emotion_bowling: round_to(
                    accum.emotions_bowling.iter().copied().fold(0.0_f64, f64::max),
                    1,
                ),
                runs: accum.runs,
                wickets: accum.wickets,
                intensity: IntensityBand::from_average(avg),
                intensity_bowling: IntensityBand::from_average(avg_bowling),
            }
        })
        .collect()
}

fn average(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len().max(1) as f64
}

// =============================================================================
// TESTS
// =============================================================================
