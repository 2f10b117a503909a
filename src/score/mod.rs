//! Pairwise compatibility scoring between a classified magazine and a
//! classified photography style.
//!
//! Technical, aesthetic and tension scores start at [`BASE_SCORE`] and fold
//! their rule tables additively. Harmony is the floored mean of technical
//! and aesthetic, minus one when tension exceeds seven. Every number is
//! clamped to `1..=10` at the end; with the current tables technical stays
//! within 5..=7, aesthetic 5..=8, tension 5..=8 and harmony 4..=7.

pub mod aesthetic;
pub mod technical;
pub mod temporal;
pub mod tension;

use crate::classify::{classify_magazine, classify_photography};
use crate::error::Result;
use crate::types::profile::{PhotographyTechnicalProfile, VisualTreatmentProfile};
use crate::types::record::{MagazineRecord, PhotographyRecord};
use crate::types::scoring::{clamp_score, CompatibilityScore, Score, BASE_SCORE};
use crate::types::taxonomy::TemporalAlignment;

pub use temporal::temporal_alignment;

const HIGH_TENSION: Score = 7;

/// Everything a scoring rule may look at. Rules never see raw text.
#[derive(Debug, Clone, Copy)]
pub struct Pairing<'a> {
    pub visual: &'a VisualTreatmentProfile,
    pub technical: &'a PhotographyTechnicalProfile,
    pub temporal: TemporalAlignment,
}

#[derive(Debug, Clone, Copy)]
pub struct ScoreRule {
    pub label: &'static str,
    pub delta: Score,
    pub applies: fn(&Pairing<'_>) -> bool,
}

impl ScoreRule {
    pub const fn new(label: &'static str, delta: Score, applies: fn(&Pairing<'_>) -> bool) -> Self {
        Self {
            label,
            delta,
            applies,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTrace {
    pub score: CompatibilityScore,
    pub fired: Vec<&'static str>,
}

fn accumulate(rules: &[ScoreRule], pairing: &Pairing<'_>, fired: &mut Vec<&'static str>) -> Score {
    rules.iter().fold(BASE_SCORE, |total, rule| {
        if (rule.applies)(pairing) {
            fired.push(rule.label);
            total + rule.delta
        } else {
            total
        }
    })
}

pub fn score(
    visual: &VisualTreatmentProfile,
    technical: &PhotographyTechnicalProfile,
    era_label: &str,
    style_name: &str,
) -> CompatibilityScore {
    let trace = score_with_trace(visual, technical, era_label, style_name);
    tracing::debug!(fired = ?trace.fired, "score rules applied");
    trace.score
}

pub fn score_with_trace(
    visual: &VisualTreatmentProfile,
    technical: &PhotographyTechnicalProfile,
    era_label: &str,
    style_name: &str,
) -> ScoreTrace {
    let pairing = Pairing {
        visual,
        technical,
        temporal: temporal_alignment(era_label, style_name),
    };

    let mut fired = Vec::new();
    let technical_score = accumulate(technical::RULES, &pairing, &mut fired);
    let aesthetic_score = accumulate(aesthetic::RULES, &pairing, &mut fired);
    let creative_tension = accumulate(tension::RULES, &pairing, &mut fired);

    let mut overall_harmony = (technical_score + aesthetic_score).div_euclid(2);
    if creative_tension > HIGH_TENSION {
        overall_harmony -= 1;
    }

    let score = CompatibilityScore {
        overall_harmony: clamp_score(overall_harmony),
        technical_score: clamp_score(technical_score),
        aesthetic_score: clamp_score(aesthetic_score),
        creative_tension: clamp_score(creative_tension),
        temporal_alignment: pairing.temporal,
        rationale: rationale(visual, technical, pairing.temporal),
    };
    ScoreTrace { score, fired }
}

fn rationale(
    visual: &VisualTreatmentProfile,
    technical: &PhotographyTechnicalProfile,
    temporal: TemporalAlignment,
) -> String {
    format!(
        "Magazine: {} colors, {} lighting. Photography: {} composition, {} focal length. Temporal: {}.",
        visual.color_category,
        visual.lighting_approach,
        technical.composition_strategy,
        technical.focal_length_category,
        temporal
    )
}

/// Classifies both records and scores the pair using the magazine's era
/// label and the style's name as temporal context.
pub fn score_pair(
    magazine: &MagazineRecord,
    photography: &PhotographyRecord,
) -> Result<CompatibilityScore> {
    let visual = classify_magazine(magazine)?;
    let technical = classify_photography(photography)?;
    let result = score(&visual, &technical, magazine.era_label(), &photography.name);
    tracing::debug!(
        magazine = %magazine.name,
        style = %photography.name,
        harmony = result.overall_harmony,
        "scored pair"
    );
    Ok(result)
}
