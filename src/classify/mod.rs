//! Keyword classifier: free text to taxonomy categories.
//!
//! Every field is resolved by walking an ordered rule table. The first rule
//! with any keyword contained in the lower-cased text wins, so declaration
//! order is the tie-break when several rules could match. Text that matches
//! nothing falls back to the field's default category.

pub mod magazine;
pub mod photography;

use crate::error::Result;
use crate::types::profile::{PhotographyTechnicalProfile, VisualTreatmentProfile};
use crate::types::record::{MagazineRecord, PhotographyRecord};

pub use magazine::visual_treatment_profile;
pub use photography::technical_profile;

#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<C: 'static> {
    pub keywords: &'static [&'static str],
    pub category: C,
}

impl<C: Copy> KeywordRule<C> {
    pub const fn new(keywords: &'static [&'static str], category: C) -> Self {
        Self { keywords, category }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Returns the category of the first matching rule, or `fallback`.
pub fn first_match<C: Copy>(text: &str, rules: &[KeywordRule<C>], fallback: C) -> C {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(fallback)
}

pub fn classify_magazine(record: &MagazineRecord) -> Result<VisualTreatmentProfile> {
    let visual = record.require_visual_treatment()?;
    let profile = visual_treatment_profile(visual);
    tracing::debug!(
        magazine = %record.name,
        color = %profile.color_category,
        lighting = %profile.lighting_approach,
        contrast = %profile.contrast_profile,
        texture = %profile.texture_emphasis,
        "classified magazine"
    );
    Ok(profile)
}

pub fn classify_photography(record: &PhotographyRecord) -> Result<PhotographyTechnicalProfile> {
    let (technical, aesthetic, context) = record.require_sections()?;
    let profile = technical_profile(technical, aesthetic, context);
    tracing::debug!(
        style = %record.name,
        composition = %profile.composition_strategy,
        focal_length = %profile.focal_length_category,
        subject = %profile.subject_context,
        depth_of_field = %profile.depth_of_field,
        "classified photography style"
    );
    Ok(profile)
}
