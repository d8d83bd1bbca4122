//! Match analysis orchestrator
//!
//! Drives the single ordered pass over the event list, then runs the
//! derived builders on the finished timeline. The per-ball recurrence is
//! strictly sequential; sentiment scoring has no inter-ball dependency and
//! is prefetched for the whole list before the pass.

use std::sync::Arc;

use crate::core::emotion::{EmotionScorer, Perspective};
use crate::core::momentum::{compute_momentum, ShiftDetector};
use crate::core::pressure::{pressure_index, required_run_rate};
use crate::core::sentiment::{LexiconOracle, SentimentOracle};
use crate::core::{analytics, collapse, normalizer, round_to};
use crate::error::AnalysisError;
use crate::types::{
    BallEvent, CurrentState, MatchContext, MatchReport, MatchSummary, MomentumShift, PhaseLabel,
    TimelinePoint,
};

/// Orchestrates one full match analysis per call
///
/// Holds no per-match state; the sentiment oracle is injected once at
/// construction and owned by the composition root.
pub struct MatchAnalyzer {
    oracle: Arc<dyn SentimentOracle>,
}

impl MatchAnalyzer {
    pub fn new(oracle: Arc<dyn SentimentOracle>) -> Self {
        Self { oracle }
    }

    /// Analyzer backed by the built-in lexicon oracle
    pub fn with_default_oracle() -> Self {
        Self::new(Arc::new(LexiconOracle::new()))
    }

    /// Run the full analysis for one ordered event list
    ///
    /// One atomic unit of work: either a complete report or an error, never
    /// partial results.
    pub fn analyze(
        &self,
        events: &[BallEvent],
        context: &MatchContext,
    ) -> Result<MatchReport, AnalysisError> {
        if events.is_empty() {
            return Err(AnalysisError::EmptyMatch);
        }

        let events = normalizer::normalize_events(events.to_vec());
        let total_balls = if context.total_balls > 0 {
            context.total_balls
        } else {
            events.len()
        };
        let target = context.target;

        // Oracle calls have no inter-ball dependency; prefetch before the
        // sequential recurrence
        let sentiments: Vec<f64> = events.iter().map(|e| self.oracle.score(&e.text)).collect();

        let mut batting = EmotionScorer::new(Perspective::Batting);
        let mut bowling = EmotionScorer::new(Perspective::Bowling);
        let mut shift_detector = ShiftDetector::new();

        let mut history: Vec<BallEvent> = Vec::with_capacity(events.len());
        let mut timeline: Vec<TimelinePoint> = Vec::with_capacity(events.len());
        let mut shifts: Vec<MomentumShift> = Vec::new();
        let mut emotions: Vec<f64> = Vec::with_capacity(events.len());
        let mut emotions_bowling: Vec<f64> = Vec::with_capacity(events.len());
        let mut pressures: Vec<f64> = Vec::with_capacity(events.len());

        let mut wickets_fallen: u32 = 0;
        let mut runs_scored: u32 = 0;
        let mut current_momentum = 0.0;

        for (i, ball) in events.iter().enumerate() {
            let ball_number = i + 1;

            if ball.is_wicket {
                wickets_fallen += 1;
            }
            runs_scored += ball.runs;

            let runs_needed = target.saturating_sub(runs_scored);
            let balls_remaining = total_balls.saturating_sub(ball_number);

            let pressure = pressure_index(
                runs_needed,
                balls_remaining,
                wickets_fallen,
                total_balls,
                ball_number,
            );

            history.push(ball.clone());
            let momentum = compute_momentum(&history);
            if let Some(shift) = shift_detector.observe(ball_number, ball, momentum) {
                shifts.push(shift);
            }
            current_momentum = momentum;

            let sentiment = sentiments[i];
            let emotion = batting.score(sentiment, pressure, momentum, ball);
            let emotion_bowling = bowling.score(sentiment, pressure, momentum, ball);

            emotions.push(emotion);
            emotions_bowling.push(emotion_bowling);
            pressures.push(pressure);

            timeline.push(TimelinePoint {
                ball_number,
                over: ball.over,
                text: ball.text.clone(),
                runs: ball.runs,
                is_wicket: ball.is_wicket,
                is_four: ball.is_four,
                is_six: ball.is_six,
                batter: ball.batter.clone(),
                bowler: ball.bowler.clone(),
                emotion_score: emotion,
                emotion_score_bowling: emotion_bowling,
                pressure,
                momentum,
                phase: PhaseLabel::from_score(emotion),
            });
        }

        let ball_count = events.len() as f64;
        let current_emotion = emotions.last().copied().unwrap_or(0.0);
        let current_emotion_bowling = emotions_bowling.last().copied().unwrap_or(0.0);
        let current_pressure = pressures.last().copied().unwrap_or(0.0);

        let summary = MatchSummary {
            avg_emotion: round_to(emotions.iter().sum::<f64>() / ball_count, 1),
            peak_emotion: round_to(emotions.iter().copied().fold(0.0_f64, f64::max), 1),
            avg_emotion_bowling: round_to(emotions_bowling.iter().sum::<f64>() / ball_count, 1),
            peak_emotion_bowling: round_to(
                emotions_bowling.iter().copied().fold(0.0_f64, f64::max),
                1,
            ),
            avg_pressure: round_to(pressures.iter().sum::<f64>() / ball_count, 3),
            momentum_shifts: shifts.len(),
            total_balls: events.len(),
            wickets_fallen,
            runs_scored,
        };

        // Collapse risk from the final state
        let runs_needed_final = target.saturating_sub(runs_scored);
        let balls_remaining_final = total_balls.saturating_sub(events.len());
        let rrr_final = required_run_rate(runs_needed_final, balls_remaining_final);
        let collapse_risk = collapse::assess(&history, current_pressure, rrr_final);

        // Derived builders: mutually independent reducers over the
        // completed timeline
        let batter_cards = analytics::build_batter_cards(&history, &emotions);
        let key_moments = analytics::identify_key_moments(&events, &emotions);
        let emotional_phases = analytics::identify_phases(&emotions, &events);
        let emotional_phases_bowling = analytics::identify_phases(&emotions_bowling, &events);
        let heatmap = analytics::over_heatmap(&events, &emotions, &emotions_bowling);

        let current_state = CurrentState {
            emotion_score: round_to(current_emotion, 1),
            emotion_score_bowling: round_to(current_emotion_bowling, 1),
            pressure: round_to(current_pressure, 3),
            momentum: round_to(current_momentum, 3),
            phase: PhaseLabel::from_score(current_emotion),
            collapse_risk,
            batter_cards,
        };

        tracing::debug!(
            balls = events.len(),
            wickets = wickets_fallen,
            runs = runs_scored,
            shifts = shifts.len(),
            "match analysis complete"
        );

        Ok(MatchReport {
            match_info: context.clone(),
            summary,
            ball_by_ball: timeline,
            current_state,
            key_moments,
            emotional_phases,
            emotional_phases_bowling,
            heatmap,
            momentum_shifts: shifts,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
