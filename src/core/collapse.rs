//! Rule-based collapse risk over the trailing three overs
//!
//! Additive, non-exclusive rules; each appends a human-readable reason.
//! Pure function of the accumulated history plus current pressure and
//! required rate.

use crate::core::round_to;
use crate::types::{BallEvent, CollapseRisk, RiskLevel};
use crate::{COLLAPSE_BASE, COLLAPSE_CAP, COLLAPSE_WINDOW};

/// Assess collapse risk; percentage bounded to [10, 95]
pub fn assess(history: &[BallEvent], pressure: f64, required_rate: f64) -> CollapseRisk {
    let mut risk = COLLAPSE_BASE;
    let mut reasons: Vec<String> = Vec::new();

    let start = history.len().saturating_sub(COLLAPSE_WINDOW);
    let recent = &history[start..];

    let recent_wickets = recent.iter().filter(|b| b.is_wicket).count();
    if recent_wickets >= 3 {
        risk += 35.0;
        reasons.push(format!("{} wickets in last 3 overs", recent_wickets));
    } else if recent_wickets >= 2 {
        risk += 20.0;
        reasons.push(format!("{} wickets in last 3 overs", recent_wickets));
    }

    let recent_dots = recent.iter().filter(|b| b.is_dot).count();
    let dot_pct = recent_dots as f64 / recent.len().max(1) as f64;
    if dot_pct > 0.5 {
        risk += 15.0;
        reasons.push(format!("{}% dot balls recently", (dot_pct * 100.0) as u32));
    }

    if pressure > 0.7 {
        risk += 15.0;
        reasons.push("Extreme pressure on batting side".to_string());
    } else if pressure > 0.5 {
        risk += 8.0;
        reasons.push("High pressure building".to_string());
    }

    if required_rate > 12.0 {
        risk += 15.0;
        reasons.push(format!(
            "Required run rate {:.1} - near impossible",
            required_rate
        ));
    } else if required_rate > 9.0 {
        risk += 8.0;
        reasons.push(format!(
            "Required run rate {:.1} - very challenging",
            required_rate
        ));
    }

    let risk = risk.min(COLLAPSE_CAP);
    let level = RiskLevel::from_percentage(risk);

    if reasons.is_empty() {
        reasons.push("Match situation relatively stable".to_string());
    }
    reasons.truncate(4);

    CollapseRisk {
        percentage: round_to(risk, 1),
        level,
        reasons,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_ball() -> BallEvent {
        BallEvent {
            runs: 1,
            ..Default::default()
        }
    }

    fn wicket_ball() -> BallEvent {
        BallEvent {
            is_wicket: true,
            ..Default::default()
        }
    }

    fn dot_ball() -> BallEvent {
        BallEvent {
            is_dot: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_stable_match_is_baseline() {
        let history = vec![quiet_ball(); 24];
        let risk = assess(&history, 0.2, 6.0);
        assert_eq!(risk.percentage, 10.0);
        assert_eq!(risk.level, RiskLevel::Low);
        assert_eq!(risk.reasons, vec!["Match situation relatively stable"]);
    }

    #[test]
    fn test_three_wickets_alone_is_medium() {
        let mut history = vec![quiet_ball(); 15];
        history.push(wicket_ball());
        history.push(wicket_ball());
        history.push(wicket_ball());
        let risk = assess(&history, 0.2, 6.0);
        assert_eq!(risk.percentage, 45.0);
        assert_eq!(risk.level, RiskLevel::Medium);
        assert_eq!(risk.reasons, vec!["3 wickets in last 3 overs"]);
    }

    #[test]
    fn test_two_wickets_scores_twenty() {
        let mut history = vec![quiet_ball(); 16];
        history.push(wicket_ball());
        history.push(wicket_ball());
        let risk = assess(&history, 0.2, 6.0);
        assert_eq!(risk.percentage, 30.0);
        assert_eq!(risk.reasons, vec!["2 wickets in last 3 overs"]);
    }

    #[test]
    fn test_wickets_outside_window_ignored() {
        let mut history = vec![wicket_ball(); 5];
        history.extend(vec![quiet_ball(); 18]);
        let risk = assess(&history, 0.2, 6.0);
        assert_eq!(risk.percentage, 10.0);
    }

    #[test]
    fn test_dot_ball_pressure() {
        let mut history = vec![dot_ball(); 10];
        history.extend(vec![quiet_ball(); 8]);
        // 10/18 = 55% dots
        let risk = assess(&history, 0.2, 6.0);
        assert_eq!(risk.percentage, 25.0);
        assert_eq!(risk.reasons, vec!["55% dot balls recently"]);
    }

    #[test]
    fn test_everything_firing_caps_and_keeps_four_reasons() {
        let mut history = vec![dot_ball(); 14];
        history.extend(vec![wicket_ball(); 4]);
        let risk = assess(&history, 0.9, 14.0);
        // 10 + 35 + 15 + 15 + 15 = 90
        assert_eq!(risk.percentage, 90.0);
        assert_eq!(risk.level, RiskLevel::Critical);
        assert_eq!(risk.reasons.len(), 4);
    }

    #[test]
    fn test_moderate_pressure_and_rate() {
        let history = vec![quiet_ball(); 18];
        let risk = assess(&history, 0.6, 10.0);
        // 10 + 8 + 8
        assert_eq!(risk.percentage, 26.0);
        assert_eq!(
            risk.reasons,
            vec![
                "High pressure building".to_string(),
                "Required run rate 10.0 - very challenging".to_string(),
            ]
        );
    }

    #[test]
    fn test_bounded_for_any_input() {
        let risk = assess(&[], 1.0, 30.0);
        assert!((10.0..=95.0).contains(&risk.percentage));
        let risk = assess(&[], 0.0, 0.0);
        assert!((10.0..=95.0).contains(&risk.percentage));
    }
}
