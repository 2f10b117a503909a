use super::{Pairing, ScoreRule};
use crate::types::taxonomy::{CompositionStrategy, ContrastProfile, TemporalAlignment};

pub const RULES: &[ScoreRule] = &[
    ScoreRule::new("tension.anachronism", 2, anachronism),
    ScoreRule::new("tension.extreme_minimalist", 1, extreme_minimalist),
];

fn anachronism(pairing: &Pairing<'_>) -> bool {
    pairing.temporal == TemporalAlignment::CreativeAnachronism
}

fn extreme_minimalist(pairing: &Pairing<'_>) -> bool {
    pairing.visual.contrast_profile == ContrastProfile::Extreme
        && pairing.technical.composition_strategy == CompositionStrategy::Minimalist
}
