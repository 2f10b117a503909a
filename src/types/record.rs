use crate::error::{MagphotoError, Result};
use crate::types::taxonomy::TemporalAlignment;
use serde::{Deserialize, Deserializer, Serialize};

/// Text fields accept `null` and absence alike; both read as "".
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_empty_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagazineRecord {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub era: Option<Era>,
    #[serde(default)]
    pub visual_treatment: Option<VisualTreatment>,
    #[serde(default)]
    pub cultural_context: Option<CulturalContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Era {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualTreatment {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub color_palette: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lighting: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contrast: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub texture: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CulturalContext {
    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub values: Vec<String>,
}

impl MagazineRecord {
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn era_label(&self) -> &str {
        self.era.as_ref().map(|era| era.label.as_str()).unwrap_or("")
    }

    pub fn require_visual_treatment(&self) -> Result<&VisualTreatment> {
        self.visual_treatment.as_ref().ok_or_else(|| {
            MagphotoError::InvalidInput(format!(
                "magazine '{}' has no visual_treatment section",
                self.name
            ))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotographyRecord {
    pub name: String,
    #[serde(default)]
    pub technical: Option<Technical>,
    #[serde(default)]
    pub aesthetic: Option<Aesthetic>,
    #[serde(default)]
    pub context: Option<StyleContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Technical {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub focal_length: String,
    #[serde(default)]
    pub typical_aperture_range: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aesthetic {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub composition: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleContext {
    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub typical_uses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub key_characteristics: Vec<String>,
}

impl PhotographyRecord {
    pub fn require_sections(&self) -> Result<(&Technical, &Aesthetic, &StyleContext)> {
        let missing = |section: &str| {
            MagphotoError::InvalidInput(format!(
                "photography style '{}' has no {section} section",
                self.name
            ))
        };
        let technical = self.technical.as_ref().ok_or_else(|| missing("technical"))?;
        let aesthetic = self.aesthetic.as_ref().ok_or_else(|| missing("aesthetic"))?;
        let context = self.context.as_ref().ok_or_else(|| missing("context"))?;
        Ok((technical, aesthetic, context))
    }
}

/// Precomputed magazine x photography pairing as stored in `combinations.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    pub id: String,
    pub magazine_id: String,
    pub photography_id: String,
    pub description: CombinationDescription,
    pub compatibility: StoredCompatibility,
    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub suggested_subjects: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub prompt_keywords: Vec<String>,
    #[serde(default)]
    pub magazine_color_palette: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationDescription {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tagline: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_description: String,
    #[serde(default)]
    pub visual_expectations: serde_json::Value,
    #[serde(default)]
    pub use_cases: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCompatibility {
    pub overall_harmony: i32,
    pub technical_score: i32,
    pub aesthetic_score: i32,
    pub creative_tension: i32,
    pub temporal_alignment: TemporalAlignment,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rationale: String,
}

impl Combination {
    pub fn harmony(&self) -> i32 {
        self.compatibility.overall_harmony
    }

    pub fn tension(&self) -> i32 {
        self.compatibility.creative_tension
    }
}
