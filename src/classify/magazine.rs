use super::{first_match, KeywordRule};
use crate::types::profile::VisualTreatmentProfile;
use crate::types::record::VisualTreatment;
use crate::types::taxonomy::{
    ColorPaletteCategory, ContrastProfile, LightingApproach, TextureEmphasis,
};

// "desaturated" contains "saturated": muted must stay ahead of vibrant.
pub const COLOR_RULES: &[KeywordRule<ColorPaletteCategory>] = &[
    KeywordRule::new(&["muted", "desaturated", "pastel"], ColorPaletteCategory::Muted),
    KeywordRule::new(
        &["vibrant", "saturated", "vivid", "high saturation", "neon"],
        ColorPaletteCategory::Vibrant,
    ),
    KeywordRule::new(&["cool", "blue", "cyan"], ColorPaletteCategory::Cool),
    KeywordRule::new(&["warm", "orange", "yellow"], ColorPaletteCategory::Warm),
    KeywordRule::new(
        &["black and white", "b&w", "monochrome"],
        ColorPaletteCategory::Monochromatic,
    ),
];

pub const LIGHTING_RULES: &[KeywordRule<LightingApproach>] = &[
    KeywordRule::new(&["soft", "diffused"], LightingApproach::SoftDiffused),
    KeywordRule::new(&["hard", "dramatic", "sharp"], LightingApproach::HardDirectional),
    KeywordRule::new(
        &["natural", "golden hour", "window"],
        LightingApproach::NaturalAmbient,
    ),
    KeywordRule::new(&["clinical", "neutral", "even"], LightingApproach::Clinical),
];

pub const CONTRAST_RULES: &[KeywordRule<ContrastProfile>] = &[
    KeywordRule::new(&["extreme", "crushed", "blown"], ContrastProfile::Extreme),
    KeywordRule::new(&["high"], ContrastProfile::High),
    KeywordRule::new(&["low", "lifted", "compressed"], ContrastProfile::Low),
];

pub const TEXTURE_RULES: &[KeywordRule<TextureEmphasis>] = &[
    KeywordRule::new(&["sharp", "crisp", "clinical"], TextureEmphasis::Sharp),
    KeywordRule::new(&["soft", "dreamy", "ethereal"], TextureEmphasis::Ethereal),
    KeywordRule::new(&["smooth", "glossy", "polished"], TextureEmphasis::Smooth),
    KeywordRule::new(
        &["synthetic", "materials", "manufactured"],
        TextureEmphasis::Synthetic,
    ),
];

pub fn classify_color(text: &str) -> ColorPaletteCategory {
    first_match(text, COLOR_RULES, ColorPaletteCategory::Mixed)
}

pub fn classify_lighting(text: &str) -> LightingApproach {
    first_match(text, LIGHTING_RULES, LightingApproach::Dramatic)
}

pub fn classify_contrast(text: &str) -> ContrastProfile {
    first_match(text, CONTRAST_RULES, ContrastProfile::Medium)
}

pub fn classify_texture(text: &str) -> TextureEmphasis {
    first_match(text, TEXTURE_RULES, TextureEmphasis::Organic)
}

pub fn visual_treatment_profile(visual: &VisualTreatment) -> VisualTreatmentProfile {
    VisualTreatmentProfile {
        color_palette: visual.color_palette.clone(),
        color_category: classify_color(&visual.color_palette),
        lighting: visual.lighting.clone(),
        lighting_approach: classify_lighting(&visual.lighting),
        contrast: visual.contrast.clone(),
        contrast_profile: classify_contrast(&visual.contrast),
        texture: visual.texture.clone(),
        texture_emphasis: classify_texture(&visual.texture),
    }
}
