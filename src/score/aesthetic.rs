use super::{Pairing, ScoreRule};
use crate::types::taxonomy::{
    ColorPaletteCategory, CompositionStrategy, LightingApproach, TextureEmphasis,
};

pub const RULES: &[ScoreRule] = &[
    ScoreRule::new("aesthetic.muted_soft", 1, muted_soft),
    ScoreRule::new("aesthetic.vibrant_contrast", 1, vibrant_contrast),
    ScoreRule::new("aesthetic.hard_light_contrast", 1, hard_light_contrast),
    ScoreRule::new("aesthetic.sharp_geometric", 1, sharp_geometric),
];

fn muted_soft(pairing: &Pairing<'_>) -> bool {
    pairing.visual.color_category == ColorPaletteCategory::Muted
        && pairing.visual.lighting_approach == LightingApproach::SoftDiffused
}

fn vibrant_contrast(pairing: &Pairing<'_>) -> bool {
    pairing.visual.color_category == ColorPaletteCategory::Vibrant
        && pairing.visual.contrast_profile.is_strong()
}

fn hard_light_contrast(pairing: &Pairing<'_>) -> bool {
    pairing.visual.lighting_approach == LightingApproach::HardDirectional
        && pairing.visual.contrast_profile.is_strong()
}

fn sharp_geometric(pairing: &Pairing<'_>) -> bool {
    pairing.visual.texture_emphasis == TextureEmphasis::Sharp
        && pairing.technical.composition_strategy == CompositionStrategy::Geometric
}
