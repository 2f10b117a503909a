use crate::types::taxonomy::TemporalAlignment;
use serde::Serialize;

pub type Score = i32;

pub const BASE_SCORE: Score = 5;
pub const MIN_SCORE: Score = 1;
pub const MAX_SCORE: Score = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityScore {
    pub overall_harmony: Score,
    pub technical_score: Score,
    pub aesthetic_score: Score,
    pub creative_tension: Score,
    pub temporal_alignment: TemporalAlignment,
    pub rationale: String,
}

pub fn clamp_score(score: Score) -> Score {
    score.clamp(MIN_SCORE, MAX_SCORE)
}
