use super::{Pairing, ScoreRule};
use crate::types::taxonomy::{CompositionStrategy, FocalLengthCategory};

pub const RULES: &[ScoreRule] = &[
    ScoreRule::new("technical.medium_telephoto", 1, medium_telephoto),
    ScoreRule::new("technical.tight_crop", 1, tight_crop),
    ScoreRule::new("technical.wide_environmental", 1, wide_environmental),
];

// Good reach for portraits.
fn medium_telephoto(pairing: &Pairing<'_>) -> bool {
    pairing.technical.focal_length_category == FocalLengthCategory::MediumTelephoto
}

fn tight_crop(pairing: &Pairing<'_>) -> bool {
    pairing.technical.composition_strategy == CompositionStrategy::TightCrop
}

fn wide_environmental(pairing: &Pairing<'_>) -> bool {
    pairing.technical.focal_length_category == FocalLengthCategory::Wide
        && pairing.technical.composition_strategy == CompositionStrategy::Environmental
}
