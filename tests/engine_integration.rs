//! Integration tests for the analysis engine
//!
//! Full pipeline over synthetic matches: bounded outputs, cross-report
//! consistency, determinism.

use pretty_assertions::assert_eq;

use athena::core::MatchAnalyzer;
use athena::types::{BallEvent, MatchContext, PhaseLabel};

/// Synthetic T20 innings: steady singles with periodic boundaries, wickets
/// and a dramatic finish
fn stress_match(balls: usize) -> Vec<BallEvent> {
    (0..balls)
        .map(|i| {
            let mut event = BallEvent {
                text: format!("ball {} worked into the gap", i + 1),
                runs: 1,
                batter: if i % 2 == 0 { "Rohit" } else { "Kohli" }.to_string(),
                bowler: "Starc".to_string(),
                ..Default::default()
            };
            match i % 9 {
                0 => {
                    event.runs = 6;
                    event.is_six = true;
                    event.text = format!("SIX! ball {} sails over the ropes", i + 1);
                }
                4 => {
                    event.runs = 4;
                    event.is_four = true;
                    event.text = format!("FOUR! ball {} races away", i + 1);
                }
                7 => {
                    event.runs = 0;
                    event.is_wicket = true;
                    event.text = format!("OUT! ball {}, huge wicket", i + 1);
                }
                8 => {
                    event.runs = 0;
                    event.is_dot = true;
                    event.text = "dot ball, no run".to_string();
                }
                _ => {}
            }
            if i == balls - 1 {
                event.text = "last ball of a nail-biting thriller!".to_string();
            }
            event
        })
        .collect()
}

fn chase_context(total_balls: usize, target: u32) -> MatchContext {
    MatchContext {
        match_id: "test_match".to_string(),
        total_balls,
        target,
        ..Default::default()
    }
}

#[test]
fn test_every_quantity_stays_bounded() {
    let analyzer = MatchAnalyzer::with_default_oracle();
    let events = stress_match(120);
    let report = analyzer
        .analyze(&events, &chase_context(120, 190))
        .unwrap();

    for point in &report.ball_by_ball {
        assert!((0.0..=100.0).contains(&point.emotion_score));
        assert!((0.0..=100.0).contains(&point.emotion_score_bowling));
        assert!((0.0..=1.0).contains(&point.pressure));
        assert!((-1.0..=1.0).contains(&point.momentum));
    }
    let risk = &report.current_state.collapse_risk;
    assert!((10.0..=95.0).contains(&risk.percentage));
    assert!(risk.reasons.len() <= 4 && !risk.reasons.is_empty());
}

#[test]
fn test_timeline_is_ordered_and_index_aligned() {
    let analyzer = MatchAnalyzer::with_default_oracle();
    let events = stress_match(47);
    let report = analyzer.analyze(&events, &chase_context(0, 0)).unwrap();

    assert_eq!(report.ball_by_ball.len(), 47);
    for (i, point) in report.ball_by_ball.iter().enumerate() {
        assert_eq!(point.ball_number, i + 1);
        assert_eq!(point.phase, PhaseLabel::from_score(point.emotion_score));
    }
}

#[test]
fn test_analysis_is_deterministic() {
    let analyzer = MatchAnalyzer::with_default_oracle();
    let events = stress_match(60);
    let ctx = chase_context(60, 110);

    let first = serde_json::to_string(&analyzer.analyze(&events, &ctx).unwrap()).unwrap();
    let second = serde_json::to_string(&analyzer.analyze(&events, &ctx).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_heatmap_reconciles_with_summary() {
    let analyzer = MatchAnalyzer::with_default_oracle();
    let events = stress_match(87);
    let report = analyzer.analyze(&events, &chase_context(120, 160)).unwrap();

    let heatmap_runs: u32 = report.heatmap.iter().map(|o| o.runs).sum();
    let heatmap_wickets: u32 = report.heatmap.iter().map(|o| o.wickets).sum();
    assert_eq!(heatmap_runs, report.summary.runs_scored);
    assert_eq!(heatmap_wickets, report.summary.wickets_fallen);

    // Overs strictly ascending
    assert!(report.heatmap.windows(2).all(|w| w[0].over < w[1].over));
}

#[test]
fn test_phases_cover_the_whole_match_in_fixed_order() {
    let analyzer = MatchAnalyzer::with_default_oracle();
    for balls in [4usize, 5, 23, 48, 120] {
        let events = stress_match(balls);
        let report = analyzer.analyze(&events, &chase_context(0, 0)).unwrap();

        assert_eq!(report.emotional_phases.len(), 4, "balls = {}", balls);
        let names: Vec<&str> = report
            .emotional_phases
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Calm Opening",
                "Building Tension",
                "High Intensity",
                "Peak Emotion"
            ]
        );
        // Both perspectives segment identically
        assert_eq!(
            report.emotional_phases.len(),
            report.emotional_phases_bowling.len()
        );
    }
}

#[test]
fn test_key_moments_ranked_and_capped() {
    let analyzer = MatchAnalyzer::with_default_oracle();
    let events = stress_match(120);
    let report = analyzer.analyze(&events, &chase_context(120, 190)).unwrap();

    assert!(report.key_moments.len() <= 10);
    assert!(!report.key_moments.is_empty());
    assert!(report
        .key_moments
        .windows(2)
        .all(|w| w[0].emotion_score >= w[1].emotion_score));
}

#[test]
fn test_batter_cards_cover_the_two_current_batters() {
    let analyzer = MatchAnalyzer::with_default_oracle();
    let events = stress_match(60);
    let report = analyzer.analyze(&events, &chase_context(0, 0)).unwrap();

    let cards = &report.current_state.batter_cards;
    assert_eq!(cards.len(), 2);
    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    assert!(names.contains(&"Rohit"));
    assert!(names.contains(&"Kohli"));
    for card in cards {
        assert!((0.0..=100.0).contains(&card.resilience));
        assert!(card.balls > 0);
    }
}

#[test]
fn test_loose_records_are_accepted_with_defaults() {
    // Partial JSON records: only text on some balls, only runs on others
    let raw = r#"[
        {"text": "OUT! bowled him", "is_wicket": true},
        {"runs": 4, "is_four": true},
        {},
        {"text": "quiet single", "runs": 1, "batter": "Gill"}
    ]"#;
    let events: Vec<BallEvent> = serde_json::from_str(raw).unwrap();
    let analyzer = MatchAnalyzer::with_default_oracle();
    let report = analyzer.analyze(&events, &MatchContext::default()).unwrap();

    assert_eq!(report.summary.total_balls, 4);
    assert_eq!(report.summary.runs_scored, 5);
    assert_eq!(report.summary.wickets_fallen, 1);
    // Derived numbering puts all four balls in the first over
    assert!(report.heatmap.len() == 1 && report.heatmap[0].over == 1);
}

#[test]
fn test_empty_input_is_a_single_structured_error() {
    let analyzer = MatchAnalyzer::with_default_oracle();
    let err = analyzer
        .analyze(&[], &MatchContext::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "no ball events to analyze");
}
