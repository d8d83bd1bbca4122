//! Narrative intensity label for a single E(t) score

use serde::{Deserialize, Serialize};

/// The four intensity bands of the match narrative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseLabel {
    #[serde(rename = "CALM")]
    Calm,
    #[serde(rename = "BUILDING")]
    Building,
    #[serde(rename = "HIGH INTENSITY")]
    HighIntensity,
    #[serde(rename = "PEAK EMOTION")]
    PeakEmotion,
}

impl PhaseLabel {
    /// Label an E(t) score in [0, 100]
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            PhaseLabel::PeakEmotion
        } else if score >= 55.0 {
            PhaseLabel::HighIntensity
        } else if score >= 35.0 {
            PhaseLabel::Building
        } else {
            PhaseLabel::Calm
        }
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            PhaseLabel::Calm => "\x1b[90m",          // Gray
            PhaseLabel::Building => "\x1b[33m",      // Yellow
            PhaseLabel::HighIntensity => "\x1b[35m", // Magenta
            PhaseLabel::PeakEmotion => "\x1b[31m",   // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl std::fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PhaseLabel::Calm => "CALM",
            PhaseLabel::Building => "BUILDING",
            PhaseLabel::HighIntensity => "HIGH INTENSITY",
            PhaseLabel::PeakEmotion => "PEAK EMOTION",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// TESTS
// =============================================================================
