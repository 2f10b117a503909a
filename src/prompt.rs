//! Deterministic image-generation prompts built from a precomputed
//! combination and a handful of framing and intensity knobs.

use crate::error::{MagphotoError, Result};
use crate::types::record::Combination;
use clap::ValueEnum;

const DEFAULT_COLOR_BASE: &str = "balanced color palette";
const PROMPT_KEYWORD_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Distance {
    #[value(alias = "extreme close-up")]
    ExtremeCloseUp,
    CloseUp,
    Medium,
    Full,
    Wide,
}

impl Distance {
    pub fn label(self) -> &'static str {
        match self {
            Self::ExtremeCloseUp => "Extreme Close-up",
            Self::CloseUp => "Close-up",
            Self::Medium => "Medium",
            Self::Full => "Full",
            Self::Wide => "Wide",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Angle {
    Overhead,
    EyeLevel,
    #[value(alias = "low angle")]
    LowAngle,
    #[value(alias = "dutch tilt")]
    DutchTilt,
    Profile,
}

impl Angle {
    pub fn label(self) -> &'static str {
        match self {
            Self::Overhead => "Overhead",
            Self::EyeLevel => "Eye-level",
            Self::LowAngle => "Low Angle",
            Self::DutchTilt => "Dutch Tilt",
            Self::Profile => "Profile",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub distance: Distance,
    pub angle: Angle,
    pub subject: Option<String>,
    pub color_intensity: f64,
    pub detail_sharpness: f64,
    pub mood_intensity: f64,
}

impl PromptRequest {
    pub fn new(distance: Distance, angle: Angle) -> Self {
        Self {
            distance,
            angle,
            subject: None,
            color_intensity: 0.5,
            detail_sharpness: 0.5,
            mood_intensity: 0.5,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let knobs = [
            ("color intensity", self.color_intensity),
            ("detail sharpness", self.detail_sharpness),
            ("mood intensity", self.mood_intensity),
        ];
        for (name, value) in knobs {
            if !(0.0..=1.0).contains(&value) {
                return Err(MagphotoError::InvalidInput(format!(
                    "{name} must be between 0.0 and 1.0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

fn color_phrase(intensity: f64, base: &str) -> String {
    if intensity < 0.3 {
        "desaturated, muted color palette, subtle tones".to_string()
    } else if intensity < 0.4 {
        format!("slightly desaturated {base}")
    } else if intensity > 0.7 {
        format!("highly saturated, vivid {base}, bold color emphasis")
    } else if intensity > 0.6 {
        format!("enhanced saturation, vibrant {base}")
    } else {
        base.to_string()
    }
}

fn detail_phrase(sharpness: f64) -> &'static str {
    if sharpness < 0.3 {
        "soft focus, gentle detail, dreamlike quality"
    } else if sharpness > 0.7 {
        "razor sharp, crisp detail, pronounced texture"
    } else {
        "balanced detail and clarity"
    }
}

fn mood_phrase(intensity: f64) -> Option<&'static str> {
    if intensity < 0.3 {
        Some("understated mood, subtle atmosphere, quiet presence")
    } else if intensity > 0.7 {
        Some("dramatic atmosphere, intense mood, powerful emotional impact")
    } else {
        None
    }
}

pub fn generate_image_prompt(combo: &Combination, request: &PromptRequest) -> Result<String> {
    request.validate()?;

    let mut parts = vec![format!("{} aesthetic", combo.description.name)];
    match request.subject.as_deref().filter(|subject| !subject.is_empty()) {
        Some(subject) => parts.push(format!("of {subject}")),
        None => {
            if let Some(first) = combo.suggested_subjects.first() {
                parts.push(format!("featuring {first}"));
            }
        }
    }
    parts.push(format!("{} framing", request.distance.label().to_lowercase()));
    parts.push(format!("{} perspective", request.angle.label().to_lowercase()));

    let base = combo
        .magazine_color_palette
        .as_deref()
        .unwrap_or(DEFAULT_COLOR_BASE);
    parts.push(color_phrase(request.color_intensity, base));
    parts.push(detail_phrase(request.detail_sharpness).to_string());
    if let Some(mood) = mood_phrase(request.mood_intensity) {
        parts.push(mood.to_string());
    }
    parts.extend(
        combo
            .prompt_keywords
            .iter()
            .take(PROMPT_KEYWORD_LIMIT)
            .cloned(),
    );

    tracing::debug!(combination = %combo.id, parts = parts.len(), "built prompt");
    Ok(parts.join(", "))
}
