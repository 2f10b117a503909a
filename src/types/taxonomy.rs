//! Categorical taxonomy shared by the classifier and the scorer.
//!
//! The snake_case strings produced by `as_str` (and by serde) are the stable
//! output format: precomputed combination files reference them by value.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! impl_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPaletteCategory {
    Vibrant,
    Muted,
    Monochromatic,
    Cool,
    Warm,
    #[default]
    Mixed,
}

impl ColorPaletteCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vibrant => "vibrant",
            Self::Muted => "muted",
            Self::Monochromatic => "monochromatic",
            Self::Cool => "cool",
            Self::Warm => "warm",
            Self::Mixed => "mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingApproach {
    HardDirectional,
    SoftDiffused,
    NaturalAmbient,
    Clinical,
    #[default]
    Dramatic,
}

impl LightingApproach {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HardDirectional => "hard_directional",
            Self::SoftDiffused => "soft_diffused",
            Self::NaturalAmbient => "natural_ambient",
            Self::Clinical => "clinical",
            Self::Dramatic => "dramatic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContrastProfile {
    High,
    #[default]
    Medium,
    Low,
    Extreme,
}

impl ContrastProfile {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Extreme => "extreme",
        }
    }

    pub fn is_strong(self) -> bool {
        matches!(self, Self::High | Self::Extreme)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureEmphasis {
    Sharp,
    Smooth,
    #[default]
    Organic,
    Synthetic,
    Ethereal,
}

impl TextureEmphasis {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sharp => "sharp",
            Self::Smooth => "smooth",
            Self::Organic => "organic",
            Self::Synthetic => "synthetic",
            Self::Ethereal => "ethereal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionStrategy {
    Geometric,
    #[default]
    Asymmetrical,
    TightCrop,
    Environmental,
    Minimalist,
}

impl CompositionStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Geometric => "geometric",
            Self::Asymmetrical => "asymmetrical",
            Self::TightCrop => "tight_crop",
            Self::Environmental => "environmental",
            Self::Minimalist => "minimalist",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocalLengthCategory {
    UltraWide,
    Wide,
    #[default]
    Standard,
    MediumTelephoto,
    Telephoto,
}

impl FocalLengthCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UltraWide => "ultra_wide",
            Self::Wide => "wide",
            Self::Standard => "standard",
            Self::MediumTelephoto => "medium_telephoto",
            Self::Telephoto => "telephoto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectContext {
    People,
    Objects,
    Places,
    Moments,
    #[default]
    Abstract,
}

impl SubjectContext {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Objects => "objects",
            Self::Places => "places",
            Self::Moments => "moments",
            Self::Abstract => "abstract",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthOfField {
    Shallow,
    #[default]
    Moderate,
    Deep,
}

impl DepthOfField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shallow => "shallow",
            Self::Moderate => "moderate",
            Self::Deep => "deep",
        }
    }
}

/// How a magazine's era relates to the era a photography style evokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalAlignment {
    EraMatched,
    #[default]
    CreativeAnachronism,
    TemporalClash,
}

impl TemporalAlignment {
    pub const ALL: [TemporalAlignment; 3] = [
        TemporalAlignment::EraMatched,
        TemporalAlignment::CreativeAnachronism,
        TemporalAlignment::TemporalClash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EraMatched => "era_matched",
            Self::CreativeAnachronism => "creative_anachronism",
            Self::TemporalClash => "temporal_clash",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|alignment| alignment.as_str() == raw.trim())
    }
}

impl_display!(
    ColorPaletteCategory,
    LightingApproach,
    ContrastProfile,
    TextureEmphasis,
    CompositionStrategy,
    FocalLengthCategory,
    SubjectContext,
    DepthOfField,
    TemporalAlignment,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&FocalLengthCategory::MediumTelephoto)
            .expect("enum should serialize");
        assert_eq!(json, "\"medium_telephoto\"");

        let parsed: LightingApproach =
            serde_json::from_str("\"hard_directional\"").expect("enum should deserialize");
        assert_eq!(parsed, LightingApproach::HardDirectional);
    }

    #[test]
    fn display_matches_serde_value() {
        for alignment in TemporalAlignment::ALL {
            let json = serde_json::to_string(&alignment).expect("enum should serialize");
            assert_eq!(json, format!("\"{alignment}\""));
        }
        assert_eq!(CompositionStrategy::TightCrop.to_string(), "tight_crop");
        assert_eq!(ColorPaletteCategory::Monochromatic.to_string(), "monochromatic");
    }

    #[test]
    fn defaults_are_the_fallback_categories() {
        assert_eq!(ColorPaletteCategory::default(), ColorPaletteCategory::Mixed);
        assert_eq!(LightingApproach::default(), LightingApproach::Dramatic);
        assert_eq!(ContrastProfile::default(), ContrastProfile::Medium);
        assert_eq!(TextureEmphasis::default(), TextureEmphasis::Organic);
        assert_eq!(CompositionStrategy::default(), CompositionStrategy::Asymmetrical);
        assert_eq!(FocalLengthCategory::default(), FocalLengthCategory::Standard);
        assert_eq!(SubjectContext::default(), SubjectContext::Abstract);
        assert_eq!(DepthOfField::default(), DepthOfField::Moderate);
    }

    #[test]
    fn temporal_alignment_parse_accepts_wire_values_only() {
        assert_eq!(
            TemporalAlignment::parse("era_matched"),
            Some(TemporalAlignment::EraMatched)
        );
        assert_eq!(
            TemporalAlignment::parse(" temporal_clash "),
            Some(TemporalAlignment::TemporalClash)
        );
        assert_eq!(TemporalAlignment::parse("Era Matched"), None);
    }
}
