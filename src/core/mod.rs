//! Core modules for Athena

pub mod analytics;
pub mod api;
pub mod collapse;
pub mod emotion;
pub mod engine;
pub mod momentum;
pub mod normalizer;
pub mod pressure;
pub mod sentiment;
pub mod store;

pub use api::{create_router, run_server};
pub use emotion::{EmotionScorer, Perspective};
pub use engine::MatchAnalyzer;
pub use momentum::ShiftDetector;
pub use sentiment::{
    has_dramatic_language, KeywordOracle, LexiconOracle, ResilientOracle, SentimentOracle,
};
pub use store::AnalysisStore;

/// Round to a fixed number of decimal places
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Truncate a string to at most `max` chars without splitting a char
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
