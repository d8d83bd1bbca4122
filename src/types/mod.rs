//! Core types for Athena

mod event;
mod phase;
mod report;
mod timeline;

pub use event::{BallEvent, MatchContext};
pub use phase::PhaseLabel;
pub use report::{
    BatterCard, ClutchRating, CollapseRisk, CurrentState, EmotionalPhase, EmotionalProfile,
    IntensityBand, KeyMoment, MatchReport, MatchSummary, MomentClass, OverHeatmapEntry, RiskLevel,
};
pub use timeline::{MomentumShift, TimelinePoint};
