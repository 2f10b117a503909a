pub mod json;
pub mod md;

use crate::error::MagphotoError;
use crate::types::scoring::CompatibilityScore;
use serde::Serialize;
use std::path::Path;

pub use md::Markdown;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render<T>(value: &T, format: OutputFormat) -> Result<String, MagphotoError>
where
    T: Serialize + Markdown + ?Sized,
{
    match format {
        OutputFormat::Json => json::to_json(value).map_err(MagphotoError::Json),
        OutputFormat::Md => Ok(value.to_markdown()),
    }
}

/// A classified profile tagged with the record it came from.
#[derive(Debug, Serialize)]
pub struct NamedProfile<'a, P> {
    pub name: &'a str,
    #[serde(flatten)]
    pub profile: &'a P,
}

#[derive(Debug, Serialize)]
pub struct PairScore<'a> {
    pub magazine: &'a str,
    pub photography: &'a str,
    #[serde(flatten)]
    pub score: &'a CompatibilityScore,
}

#[derive(Debug, Serialize)]
pub struct PromptView<'a> {
    pub combination_id: &'a str,
    pub prompt: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ExportSummary<'a> {
    pub path: &'a Path,
    pub entries: usize,
    pub skipped: usize,
}
