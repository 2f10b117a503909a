use super::{first_match, KeywordRule};
use crate::types::profile::{PhotographyTechnicalProfile, DEFAULT_APERTURE_RANGE};
use crate::types::record::{Aesthetic, StyleContext, Technical};
use crate::types::taxonomy::{
    CompositionStrategy, DepthOfField, FocalLengthCategory, SubjectContext,
};

pub const COMPOSITION_RULES: &[KeywordRule<CompositionStrategy>] = &[
    KeywordRule::new(
        &["grid", "geometric", "symmetric"],
        CompositionStrategy::Geometric,
    ),
    KeywordRule::new(&["asymmetric", "balanced"], CompositionStrategy::Asymmetrical),
    KeywordRule::new(&["crop", "tight", "close"], CompositionStrategy::TightCrop),
    KeywordRule::new(&["environment", "context"], CompositionStrategy::Environmental),
    KeywordRule::new(
        &["minimal", "sparse", "negative space"],
        CompositionStrategy::Minimalist,
    ),
];

// Plain digit matching: "35-50mm" hits the wide rule through "35" and
// "50-85mm" hits standard through "50".
pub const FOCAL_LENGTH_RULES: &[KeywordRule<FocalLengthCategory>] = &[
    KeywordRule::new(&["ultra", "14", "16"], FocalLengthCategory::UltraWide),
    KeywordRule::new(&["wide", "24", "35"], FocalLengthCategory::Wide),
    KeywordRule::new(&["50", "35-50", "standard"], FocalLengthCategory::Standard),
    KeywordRule::new(
        &["85", "70", "50-85", "medium telephoto"],
        FocalLengthCategory::MediumTelephoto,
    ),
    KeywordRule::new(&["telephoto", "100", "200"], FocalLengthCategory::Telephoto),
];

pub const SUBJECT_RULES: &[KeywordRule<SubjectContext>] = &[
    KeywordRule::new(&["portrait", "people", "fashion"], SubjectContext::People),
    KeywordRule::new(&["product", "still life"], SubjectContext::Objects),
    KeywordRule::new(
        &["architecture", "landscape", "place"],
        SubjectContext::Places,
    ),
    KeywordRule::new(&["candid", "moment", "event"], SubjectContext::Moments),
];

pub const DEPTH_OF_FIELD_RULES: &[KeywordRule<DepthOfField>] = &[
    KeywordRule::new(&["f/1", "shallow"], DepthOfField::Shallow),
    KeywordRule::new(&["f/5.6", "f/8", "deep"], DepthOfField::Deep),
];

pub fn classify_composition(text: &str) -> CompositionStrategy {
    first_match(text, COMPOSITION_RULES, CompositionStrategy::Asymmetrical)
}

pub fn classify_focal_length(text: &str) -> FocalLengthCategory {
    first_match(text, FOCAL_LENGTH_RULES, FocalLengthCategory::Standard)
}

/// Typical uses are joined with single spaces before matching.
pub fn classify_subject(typical_uses: &[String]) -> SubjectContext {
    first_match(
        &typical_uses.join(" "),
        SUBJECT_RULES,
        SubjectContext::Abstract,
    )
}

pub fn classify_depth_of_field(aperture: &str) -> DepthOfField {
    first_match(aperture, DEPTH_OF_FIELD_RULES, DepthOfField::Moderate)
}

pub fn technical_profile(
    technical: &Technical,
    aesthetic: &Aesthetic,
    context: &StyleContext,
) -> PhotographyTechnicalProfile {
    let aperture = technical.typical_aperture_range.as_deref();
    PhotographyTechnicalProfile {
        composition_strategy: classify_composition(&aesthetic.composition),
        focal_length_category: classify_focal_length(&technical.focal_length),
        subject_context: classify_subject(&context.typical_uses),
        framing_description: aesthetic.composition.clone(),
        depth_of_field: classify_depth_of_field(aperture.unwrap_or("")),
        typical_aperture_range: aperture.unwrap_or(DEFAULT_APERTURE_RANGE).to_string(),
    }
}
