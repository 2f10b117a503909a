use crate::catalog::{combination_id, Catalog};
use crate::error::{MagphotoError, Result};
use crate::score::score_pair;
use crate::types::scoring::CompatibilityScore;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const EXPORT_DIR: &str = ".magphoto/exports";

#[derive(Debug, Clone, Serialize)]
pub struct ScoreExport {
    pub version: String,
    pub generated_at: String,
    pub catalog_digest: String,
    pub entries: Vec<ScoreEntry>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreEntry {
    pub combination_id: String,
    pub magazine: String,
    pub photography: String,
    pub score: CompatibilityScore,
}

impl ScoreExport {
    /// Rescores every magazine x style pair. Records missing a required
    /// section are listed under `skipped` instead of failing the run.
    pub fn build(catalog: &Catalog) -> Self {
        let mut entries = Vec::with_capacity(catalog.magazines.len() * catalog.photography.len());
        let mut skipped = Vec::new();
        for magazine in &catalog.magazines {
            for style in &catalog.photography {
                match score_pair(magazine, style) {
                    Ok(score) => entries.push(ScoreEntry {
                        combination_id: combination_id(&magazine.name, &style.name),
                        magazine: magazine.name.clone(),
                        photography: style.name.clone(),
                        score,
                    }),
                    Err(MagphotoError::InvalidInput(reason)) => {
                        tracing::warn!(
                            magazine = %magazine.name,
                            style = %style.name,
                            %reason,
                            "skipping pair"
                        );
                        skipped.push(combination_id(&magazine.name, &style.name));
                    }
                    Err(other) => {
                        tracing::warn!(error = %other, "unexpected scoring failure");
                        skipped.push(combination_id(&magazine.name, &style.name));
                    }
                }
            }
        }

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            catalog_digest: catalog.digest.clone(),
            entries,
            skipped,
        }
    }
}

/// Writes the export to `output`, or to a timestamped file under
/// `root/.magphoto/exports` when no path is given.
pub fn write_export(root: &Path, output: Option<&Path>, export: &ScoreExport) -> Result<PathBuf> {
    let out_path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
            root.join(EXPORT_DIR).join(format!("scores-{stamp}.json"))
        }
    };
    if let Some(parent) = out_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(export)?;
    fs::write(&out_path, json)?;
    tracing::info!(
        path = %out_path.display(),
        entries = export.entries.len(),
        skipped = export.skipped.len(),
        "wrote score export"
    );
    Ok(out_path)
}
