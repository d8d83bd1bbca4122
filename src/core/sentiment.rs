//! Cricket-aware sentiment scoring
//!
//! The trained classifier lives behind [`SentimentOracle`]; the crate ships
//! two deterministic implementations plus a wrapper that enforces the
//! never-fail contract for model-backed scorers.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::core::round_to;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"[a-z']+").unwrap();

    // =========================================================================
    // Cricket-specific lexicon, weights in [-5, 5]
    // =========================================================================
    static ref POSITIVE_WORDS: HashMap<&'static str, f64> = HashMap::from([
        ("six", 3.5), ("sixes", 3.5), ("four", 2.5), ("fours", 2.5),
        ("boundary", 2.0), ("boundaries", 2.0), ("smashed", 3.0), ("hammered", 3.0),
        ("blasted", 3.0), ("magnificent", 3.5), ("brilliant", 3.5), ("stunning", 3.5),
        ("incredible", 3.5), ("exceptional", 3.0), ("outstanding", 3.0), ("superb", 3.0),
        ("glorious", 3.0), ("spectacular", 3.5), ("masterclass", 3.5), ("century", 4.0),
        ("fifty", 3.0), ("milestone", 2.5), ("record", 2.5), ("champion", 3.0),
        ("legend", 3.5), ("hero", 3.0), ("clutch", 3.0), ("comeback", 3.5),
        ("recovery", 2.5), ("resilience", 3.0), ("unstoppable", 3.5), ("dominant", 2.5),
        ("perfect", 3.0), ("flawless", 3.0), ("explosive", 3.0), ("powerful", 2.5),
        ("clinical", 2.5), ("composed", 2.0), ("controlled", 2.0), ("confident", 2.0),
        ("aggressive", 2.0), ("attacking", 2.0), ("pulled", 1.5), ("driven", 1.5),
        ("swept", 1.5), ("hooked", 1.5), ("lofted", 2.0), ("cleared", 2.0),
        ("dispatched", 2.0), ("tonked", 2.5), ("creamed", 2.5), ("belted", 2.5),
        ("win", 3.0), ("won", 3.0), ("victory", 3.5), ("triumph", 3.5),
    ]);

    static ref NEGATIVE_WORDS: HashMap<&'static str, f64> = HashMap::from([
        ("wicket", -3.0), ("out", -2.5), ("caught", -2.5), ("bowled", -3.0),
        ("lbw", -2.5), ("stumped", -2.5), ("runout", -2.5), ("dismissed", -2.5),
        ("collapse", -4.0), ("collapsed", -4.0), ("heartbreak", -3.5), ("disaster", -3.5),
        ("catastrophe", -4.0), ("nightmare", -3.5), ("terrible", -3.0), ("awful", -3.0),
        ("horrible", -3.0), ("shocking", -2.5), ("disappointing", -2.5), ("struggling", -2.5),
        ("pressure", -1.5), ("crisis", -3.0), ("trouble", -2.0), ("danger", -2.0),
        ("desperate", -2.5), ("panic", -3.0), ("nervous", -2.0), ("anxious", -2.0),
        ("dot", -0.5), ("maiden", -1.0), ("tight", -1.0), ("squeeze", -1.5),
        ("dropped", -2.0), ("missed", -1.5), ("fumbled", -1.5), ("error", -2.0),
        ("mistake", -2.0), ("blunder", -2.5), ("gone", -2.5), ("heartbreaking", -3.5),
        ("lost", -3.0), ("defeat", -3.5), ("loss", -3.0), ("eliminated", -3.5),
    ]);
}

/// Phrases signaling a high-stakes narrative; any match boosts E(t)
pub const DRAMATIC_PHRASES: &[&str] = &[
    "last ball", "final ball", "last over", "super over", "do or die",
    "must win", "nerve", "nail-biting", "thriller", "dramatic",
    "unbelievable", "incredible scenes", "what a match", "legendary",
    "history", "record-breaking", "never seen before", "extraordinary",
    "against all odds", "from the jaws", "stunning comeback",
];

/// Does the commentary text carry dramatic language?
pub fn has_dramatic_language(text: &str) -> bool {
    let lower = text.to_lowercase();
    DRAMATIC_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// Scores commentary text in [-1, 1]; implementations must not fail
pub trait SentimentOracle: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

/// A sentiment source that can fail (remote or model-backed scorers)
pub trait FallibleOracle: Send + Sync {
    fn try_score(&self, text: &str) -> Result<f64, OracleError>;
}

/// Failure modes of an external sentiment source
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("sentiment model unavailable: {0}")]
    Unavailable(String),
    #[error("sentiment inference failed: {0}")]
    Inference(String),
}

/// Deterministic keyword heuristic: boundary words score +0.8, dismissal
/// words score -0.9, anything else is neutral
pub fn keyword_score(text: &str) -> f64 {
    const BOUNDARY_WORDS: &[&str] = &["six", "four", "boundary"];
    const DISMISSAL_WORDS: &[&str] = &["out", "wicket", "bowled"];

    let lower = text.to_lowercase();
    if BOUNDARY_WORDS.iter().any(|w| lower.contains(w)) {
        0.8
    } else if DISMISSAL_WORDS.iter().any(|w| lower.contains(w)) {
        -0.9
    } else {
        0.0
    }
}

/// Oracle backed by the keyword heuristic alone
#[derive(Debug, Default)]
pub struct KeywordOracle;

impl KeywordOracle {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentOracle for KeywordOracle {
    fn score(&self, text: &str) -> f64 {
        keyword_score(text)
    }
}

/// Lexicon-weighted oracle: sums cricket word weights, then min-max
/// normalizes the clipped sum from [-5, 5] to [-1, 1]
#[derive(Debug, Default)]
pub struct LexiconOracle;

impl LexiconOracle {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentOracle for LexiconOracle {
    fn score(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let mut sum = 0.0;
        let mut hits = 0usize;

        for m in WORD_RE.find_iter(&lower) {
            let word = m.as_str();
            if let Some(w) = POSITIVE_WORDS.get(word) {
                sum += w;
                hits += 1;
            } else if let Some(w) = NEGATIVE_WORDS.get(word) {
                sum += w;
                hits += 1;
            }
        }

        if hits == 0 {
            return 0.0;
        }
        normalize_score(sum, -5.0, 5.0)
    }
}

/// Min-max normalization of a clipped weighted sum to [-1, 1]
fn normalize_score(score: f64, min_val: f64, max_val: f64) -> f64 {
    let clipped = score.clamp(min_val, max_val);
    let normalized = 2.0 * ((clipped - min_val) / (max_val - min_val)) - 1.0;
    round_to(normalized, 2)
}

/// Wraps a fallible oracle; on failure falls back to the keyword heuristic
/// so the pipeline never sees an error
pub struct ResilientOracle<O> {
    inner: O,
}

impl<O: FallibleOracle> ResilientOracle<O> {
    pub fn new(inner: O) -> Self {
        Self { inner }
    }
}

impl<O: FallibleOracle> SentimentOracle for ResilientOracle<O> {
    fn score(&self, text: &str) -> f64 {
        match self.inner.try_score(text) {
            Ok(value) => value.clamp(-1.0, 1.0),
            Err(e) => {
                tracing::warn!(error = %e, "sentiment oracle failed, using keyword fallback");
                keyword_score(text)
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
