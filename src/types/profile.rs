use crate::types::taxonomy::{
    ColorPaletteCategory, CompositionStrategy, ContrastProfile, DepthOfField, FocalLengthCategory,
    LightingApproach, SubjectContext, TextureEmphasis,
};
use serde::Serialize;

pub const DEFAULT_APERTURE_RANGE: &str = "f/2.8-f/5.6";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualTreatmentProfile {
    pub color_palette: String,
    pub color_category: ColorPaletteCategory,
    pub lighting: String,
    pub lighting_approach: LightingApproach,
    pub contrast: String,
    pub contrast_profile: ContrastProfile,
    pub texture: String,
    pub texture_emphasis: TextureEmphasis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotographyTechnicalProfile {
    pub composition_strategy: CompositionStrategy,
    pub focal_length_category: FocalLengthCategory,
    pub subject_context: SubjectContext,
    pub framing_description: String,
    pub depth_of_field: DepthOfField,
    pub typical_aperture_range: String,
}
