//! Read-only catalog of magazines, photography styles and precomputed
//! combinations, loaded once from a cache directory of JSON files.

pub mod discover;
pub mod search;
pub mod stats;

use crate::error::{MagphotoError, Result};
use crate::types::record::{Combination, MagazineRecord, PhotographyRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const MAGAZINES_FILE: &str = "magazines.json";
pub const PHOTOGRAPHY_FILE: &str = "photography.json";
pub const COMBINATIONS_FILE: &str = "combinations.json";
pub const REQUIRED_FILES: [&str; 3] = [MAGAZINES_FILE, PHOTOGRAPHY_FILE, COMBINATIONS_FILE];

const AVAILABLE_PREVIEW: usize = 10;

#[derive(Debug, Clone)]
pub struct Catalog {
    pub cache_dir: PathBuf,
    pub magazines: Vec<MagazineRecord>,
    pub photography: Vec<PhotographyRecord>,
    pub combinations: Vec<Combination>,
    pub digest: String,
    magazine_index: HashMap<String, usize>,
    photography_index: HashMap<String, usize>,
    combination_index: HashMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MagazineSummary {
    pub name: String,
    pub display_name: String,
    pub era: String,
    pub color_palette: String,
    pub lighting: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StyleSummary {
    pub name: String,
    pub typical_uses: Vec<String>,
    pub key_characteristics: Vec<String>,
    pub focal_length: String,
    pub composition: String,
}

pub fn validate_cache(cache_dir: &Path) -> Result<()> {
    if !cache_dir.is_dir() {
        return Err(MagphotoError::CacheNotFound(cache_dir.display().to_string()));
    }
    let missing = REQUIRED_FILES
        .iter()
        .filter(|file| !cache_dir.join(file).is_file())
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(MagphotoError::CacheIncomplete(missing));
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path, hasher: &mut Sha256) -> Result<Vec<T>> {
    let bytes = std::fs::read(path)?;
    hasher.update(&bytes);
    serde_json::from_slice(&bytes)
        .map_err(|e| MagphotoError::InvalidInput(format!("{}: {}", path.display(), e)))
}

fn index_by<T>(items: &[T], key: impl Fn(&T) -> &str) -> HashMap<String, usize> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| (key(item).to_string(), position))
        .collect()
}

/// Lower-case, spaces to underscores, parentheses and asterisks removed.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .replace(' ', "_")
        .replace(['(', ')', '*'], "")
}

pub fn combination_id(magazine_name: &str, style_name: &str) -> String {
    format!("{}__{}", slugify(magazine_name), slugify(style_name))
}

/// `life_1960s` reads as `Life 1960s` in listings.
pub fn format_id(id: &str) -> String {
    id.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Catalog {
    pub fn load(cache_dir: &Path) -> Result<Self> {
        validate_cache(cache_dir)?;
        tracing::info!(cache_dir = %cache_dir.display(), "loading catalog");

        let mut hasher = Sha256::new();
        let magazines: Vec<MagazineRecord> =
            read_json(&cache_dir.join(MAGAZINES_FILE), &mut hasher)?;
        let photography: Vec<PhotographyRecord> =
            read_json(&cache_dir.join(PHOTOGRAPHY_FILE), &mut hasher)?;
        let combinations: Vec<Combination> =
            read_json(&cache_dir.join(COMBINATIONS_FILE), &mut hasher)?;

        let empty = [
            (MAGAZINES_FILE, magazines.is_empty()),
            (PHOTOGRAPHY_FILE, photography.is_empty()),
            (COMBINATIONS_FILE, combinations.is_empty()),
        ]
        .into_iter()
        .filter(|(_, is_empty)| *is_empty)
        .map(|(file, _)| file)
        .collect::<Vec<_>>();
        if !empty.is_empty() {
            return Err(MagphotoError::CatalogEmpty(empty.join(", ")));
        }

        let digest = format!("{:x}", hasher.finalize());
        tracing::info!(
            magazines = magazines.len(),
            styles = photography.len(),
            combinations = combinations.len(),
            "catalog loaded"
        );
        Ok(Self::from_parts(
            cache_dir.to_path_buf(),
            magazines,
            photography,
            combinations,
            digest,
        ))
    }

    pub fn from_parts(
        cache_dir: PathBuf,
        magazines: Vec<MagazineRecord>,
        photography: Vec<PhotographyRecord>,
        combinations: Vec<Combination>,
        digest: String,
    ) -> Self {
        let magazine_index = index_by(&magazines, |magazine| magazine.name.as_str());
        let photography_index = index_by(&photography, |style| style.name.as_str());
        let combination_index = index_by(&combinations, |combo| combo.id.as_str());
        Self {
            cache_dir,
            magazines,
            photography,
            combinations,
            digest,
            magazine_index,
            photography_index,
            combination_index,
        }
    }

    pub fn magazine(&self, name: &str) -> Result<&MagazineRecord> {
        self.magazine_index
            .get(name)
            .map(|&position| &self.magazines[position])
            .ok_or_else(|| MagphotoError::MagazineNotFound {
                name: name.to_string(),
                available: self
                    .magazines
                    .iter()
                    .take(AVAILABLE_PREVIEW)
                    .map(|magazine| magazine.name.clone())
                    .collect(),
            })
    }

    pub fn style(&self, name: &str) -> Result<&PhotographyRecord> {
        self.photography_index
            .get(name)
            .map(|&position| &self.photography[position])
            .ok_or_else(|| MagphotoError::StyleNotFound {
                name: name.to_string(),
                available: self
                    .photography
                    .iter()
                    .take(AVAILABLE_PREVIEW)
                    .map(|style| style.name.clone())
                    .collect(),
            })
    }

    pub fn combination(&self, id: &str) -> Result<&Combination> {
        self.combination_index
            .get(id)
            .map(|&position| &self.combinations[position])
            .ok_or_else(|| MagphotoError::CombinationNotFound(id.to_string()))
    }

    /// Looks up both names first so an unknown name is reported as such
    /// rather than as a missing combination.
    pub fn combination_for(&self, magazine_name: &str, style_name: &str) -> Result<&Combination> {
        self.magazine(magazine_name)?;
        self.style(style_name)?;
        self.combination(&combination_id(magazine_name, style_name))
    }

    pub fn magazine_summaries(&self) -> Vec<MagazineSummary> {
        self.magazines
            .iter()
            .map(|magazine| {
                let visual = magazine.visual_treatment.clone().unwrap_or_default();
                MagazineSummary {
                    name: magazine.name.clone(),
                    display_name: magazine.display_name().to_string(),
                    era: magazine.era_label().to_string(),
                    color_palette: visual.color_palette,
                    lighting: visual.lighting,
                    values: magazine
                        .cultural_context
                        .as_ref()
                        .map(|context| context.values.clone())
                        .unwrap_or_default(),
                }
            })
            .collect()
    }

    pub fn style_summaries(&self) -> Vec<StyleSummary> {
        self.photography
            .iter()
            .map(|style| {
                let context = style.context.clone().unwrap_or_default();
                StyleSummary {
                    name: style.name.clone(),
                    typical_uses: context.typical_uses,
                    key_characteristics: context.key_characteristics,
                    focal_length: style
                        .technical
                        .as_ref()
                        .map(|technical| technical.focal_length.clone())
                        .unwrap_or_default(),
                    composition: style
                        .aesthetic
                        .as_ref()
                        .map(|aesthetic| aesthetic.composition.clone())
                        .unwrap_or_default(),
                }
            })
            .collect()
    }
}
