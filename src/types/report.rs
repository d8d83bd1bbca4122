//! Report structures assembled after the ordered pass

use serde::{Deserialize, Serialize};

use crate::types::{MatchContext, MomentumShift, PhaseLabel, TimelinePoint};

/// Match-wide aggregates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub avg_emotion: f64,
    pub peak_emotion: f64,
    pub avg_emotion_bowling: f64,
    pub peak_emotion_bowling: f64,
    pub avg_pressure: f64,
    /// Number of momentum shifts detected
    pub momentum_shifts: usize,
    pub total_balls: usize,
    pub wickets_fallen: u32,
    pub runs_scored: u32,
}

/// Collapse severity, ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Severity band for a risk percentage
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 70.0 {
            RiskLevel::Critical
        } else if pct >= 50.0 {
            RiskLevel::High
        } else if pct >= 30.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Rule-based estimate of an imminent batting breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollapseRisk {
    /// Percentage in [10, 95]
    pub percentage: f64,
    pub level: RiskLevel,
    /// Up to 4 reasons, in rule-evaluation order
    pub reasons: Vec<String>,
}

/// Clutch rating category for a batter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClutchRating {
    #[serde(rename = "Elite Clutch")]
    EliteClutch,
    Solid,
    Fair,
    Cold,
}

/// Emotional profile category for a batter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmotionalProfile {
    #[serde(rename = "On Fire")]
    OnFire,
    Intense,
    Steady,
    #[serde(rename = "Ice Cold")]
    IceCold,
}

/// Emotion card for one of the current batters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatterCard {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub strike_rate: f64,
    pub fours: u32,
    pub sixes: u32,
    pub dots: u32,
    pub avg_emotion: f64,
    pub peak_emotion: f64,
    /// 100 minus twice the stddev of this batter's emotion samples
    pub resilience: f64,
    pub clutch_rating: ClutchRating,
    pub emotional_profile: EmotionalProfile,
}

/// Event classification for key moments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentClass {
    Wicket,
    Six,
    Boundary,
    Drop,
    HighEmotion,
    Normal,
}

/// A ranked high-emotion moment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyMoment {
    pub ball_number: usize,
    pub over: u32,
    pub ball_in_over: u32,
    pub description: String,
    pub emotion_score: f64,
    pub event_type: MomentClass,
    pub batter: String,
    pub bowler: String,
}

/// One of the four fixed narrative segments of a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionalPhase {
    pub name: String,
    pub over_start: u32,
    pub over_end: u32,
    pub avg_et: f64,
    pub peak_et: f64,
    /// First wicket-or-six description in the segment, else "Steady play"
    pub key_event: String,
}

/// Heatmap intensity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityBand {
    Low,
    Medium,
    High,
    Extreme,
}

impl IntensityBand {
    /// Band for an average emotion score
    pub fn from_average(avg: f64) -> Self {
        if avg >= 70.0 {
            IntensityBand::Extreme
        } else if avg >= 50.0 {
            IntensityBand::High
        } else if avg >= 30.0 {
            IntensityBand::Medium
        } else {
            IntensityBand::Low
        }
    }
}

/// Per-over aggregates for both perspectives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverHeatmapEntry {
    pub over: u32,
    pub avg_emotion: f64,
    pub peak_emotion: f64,
    pub avg_emotion_bowling: f64,
    pub peak_emotion_bowling: f64,
    pub runs: u32,
    pub wickets: u32,
    pub intensity: IntensityBand,
    pub intensity_bowling: IntensityBand,
}

/// Latest state at the end of the processed events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentState {
    pub emotion_score: f64,
    pub emotion_score_bowling: f64,
    pub pressure: f64,
    pub momentum: f64,
    pub phase: PhaseLabel,
    pub collapse_risk: CollapseRisk,
    pub batter_cards: Vec<BatterCard>,
}

/// Full analysis report, one per call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_info: MatchContext,
    pub summary: MatchSummary,
    pub ball_by_ball: Vec<TimelinePoint>,
    pub current_state: CurrentState,
    /// Top 10 moments, ranked by emotion score
    pub key_moments: Vec<KeyMoment>,
    pub emotional_phases: Vec<EmotionalPhase>,
    pub emotional_phases_bowling: Vec<EmotionalPhase>,
    pub heatmap: Vec<OverHeatmapEntry>,
    pub momentum_shifts: Vec<MomentumShift>,
}

// =============================================================================
// TESTS
// =============================================================================
