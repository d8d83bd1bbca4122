//! Canonical ball event and match context
//!
//! Every field is defaulted so partial records from any ingestion adapter
//! are accepted, never rejected. The defaults are the neutral values: 0
//! runs, all flags false, empty names.

use serde::{Deserialize, Serialize};

/// One delivery of a cricket match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallEvent {
    /// Over number (1-based)
    pub over: u32,
    /// Ball within the over (1-based)
    pub ball: u32,
    /// Free-text commentary for this delivery
    pub text: String,
    /// Runs scored off this delivery
    pub runs: u32,
    pub is_wicket: bool,
    pub is_six: bool,
    pub is_four: bool,
    pub is_dot: bool,
    /// Dropped catch on this delivery
    pub is_drop: bool,
    pub is_wide: bool,
    #[serde(alias = "is_noball")]
    pub is_no_ball: bool,
    pub batter: String,
    pub bowler: String,
}

/// Match-level context for an analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchContext {
    pub match_id: String,
    pub title: String,
    pub team_batting: String,
    pub team_bowling: String,
    pub venue: String,
    pub format: String,
    /// Total deliveries expected in the innings; 0 means "use event count"
    pub total_balls: usize,
    /// Target score for a chase; 0 when not a chase
    pub target: u32,
}

impl Default for MatchContext {
    fn default() -> Self {
        Self {
            match_id: String::new(),
            title: String::new(),
            team_batting: String::new(),
            team_bowling: String::new(),
            venue: String::new(),
            format: "T20".to_string(),
            total_balls: 0,
            target: 0,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_event_gets_neutral_defaults() {
        let event: BallEvent = serde_json::from_str(r#"{"text": "no run"}"#).unwrap();
        assert_eq!(event.runs, 0);
        assert_eq!(event.over, 0);
        assert!(!event.is_wicket);
        assert!(!event.is_six);
        assert_eq!(event.batter, "");
    }

    #[test]
    fn test_noball_alias_accepted() {
        let event: BallEvent = serde_json::from_str(r#"{"is_noball": true}"#).unwrap();
        assert!(event.is_no_ball);
    }

    #[test]
    fn test_context_defaults() {
        let ctx: MatchContext = serde_json::from_str(r#"{"target": 160}"#).unwrap();
        assert_eq!(ctx.target, 160);
        assert_eq!(ctx.total_balls, 0);
        assert_eq!(ctx.format, "T20");
    }
}
