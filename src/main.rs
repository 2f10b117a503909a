mod catalog;
mod classify;
mod cli;
mod config;
mod error;
mod export;
mod prompt;
mod report;
mod score;
mod telemetry;
mod types;

use crate::catalog::search::{search, SearchQuery};
use crate::catalog::Catalog;
use crate::error::MagphotoError;
use crate::report::{NamedProfile, OutputFormat, PairScore, PromptView};
use crate::types::config::MagphotoConfig;
use crate::types::record::{MagazineRecord, PhotographyRecord};
use clap::Parser;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NOT_FOUND: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn exit_code_for(err: &MagphotoError) -> i32 {
    match err {
        e if e.is_not_found() => exit_code::NOT_FOUND,
        MagphotoError::InvalidInput(_)
        | MagphotoError::ConfigParse(_)
        | MagphotoError::Toml(_)
        | MagphotoError::Json(_) => exit_code::INVALID_INPUT,
        _ => exit_code::RUNTIME_FAILURE,
    }
}

fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T, MagphotoError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| MagphotoError::InvalidInput(format!("{}: {}", path.display(), e)))
}

fn emit<T>(value: &T, format: OutputFormat) -> Result<(), MagphotoError>
where
    T: serde::Serialize + report::Markdown + ?Sized,
{
    let rendered = report::render(value, format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

fn found_any(count: usize) -> i32 {
    if count == 0 {
        exit_code::NOT_FOUND
    } else {
        exit_code::SUCCESS
    }
}

struct Context {
    root: PathBuf,
    cache_dir: PathBuf,
    config: MagphotoConfig,
    format: OutputFormat,
}

impl Context {
    fn catalog(&self) -> Result<Catalog, MagphotoError> {
        Catalog::load(&self.cache_dir)
    }
}

fn run(cli: cli::Cli) -> Result<i32, MagphotoError> {
    let root = std::env::current_dir()?;
    let loaded = config::load_config(&root)?;
    let cache_dir = config::resolve_cache_dir(
        &root,
        cli.cache_dir.as_deref(),
        std::env::var_os(config::CACHE_DIR_ENV),
        loaded.as_ref(),
    );
    tracing::debug!(
        cache_dir = %cache_dir.display(),
        config = loaded.is_some(),
        "resolved settings"
    );

    let ctx = Context {
        root,
        cache_dir,
        config: loaded.unwrap_or_default(),
        format: match cli.format {
            cli::ReportFormat::Json => OutputFormat::Json,
            cli::ReportFormat::Md => OutputFormat::Md,
        },
    };

    match cli.command {
        cli::Commands::ClassifyMagazine(cmd) => {
            let catalog = ctx.catalog()?;
            let magazine = catalog.magazine(&cmd.name)?;
            let profile = classify::classify_magazine(magazine)?;
            emit(
                &NamedProfile {
                    name: magazine.display_name(),
                    profile: &profile,
                },
                ctx.format,
            )?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::ClassifyPhotography(cmd) => {
            let catalog = ctx.catalog()?;
            let style = catalog.style(&cmd.name)?;
            let profile = classify::classify_photography(style)?;
            emit(
                &NamedProfile {
                    name: &style.name,
                    profile: &profile,
                },
                ctx.format,
            )?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Classify(cmd) => {
            match cmd.kind {
                cli::RecordKind::Magazine => {
                    let record: MagazineRecord = read_record(&cmd.file)?;
                    let profile = classify::classify_magazine(&record)?;
                    emit(
                        &NamedProfile {
                            name: record.display_name(),
                            profile: &profile,
                        },
                        ctx.format,
                    )?;
                }
                cli::RecordKind::Photography => {
                    let record: PhotographyRecord = read_record(&cmd.file)?;
                    let profile = classify::classify_photography(&record)?;
                    emit(
                        &NamedProfile {
                            name: &record.name,
                            profile: &profile,
                        },
                        ctx.format,
                    )?;
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let catalog = ctx.catalog()?;
            let magazine = catalog.magazine(&cmd.magazine)?;
            let style = catalog.style(&cmd.style)?;
            let score = score::score_pair(magazine, style)?;
            emit(
                &PairScore {
                    magazine: &magazine.name,
                    photography: &style.name,
                    score: &score,
                },
                ctx.format,
            )?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::ListMagazines => {
            let catalog = ctx.catalog()?;
            emit(catalog.magazine_summaries().as_slice(), ctx.format)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::ListStyles => {
            let catalog = ctx.catalog()?;
            emit(catalog.style_summaries().as_slice(), ctx.format)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Get(cmd) => {
            let catalog = ctx.catalog()?;
            let combo = catalog.combination_for(&cmd.magazine, &cmd.style)?;
            emit(combo, ctx.format)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Search(cmd) => {
            let catalog = ctx.catalog()?;
            let query = SearchQuery {
                text: cmd.query,
                min_harmony: cmd.min_harmony,
                max_harmony: cmd.max_harmony,
                min_tension: cmd.min_tension,
                magazine: cmd.magazine,
                photography: cmd.photography,
                temporal_alignment: cmd.temporal,
                limit: cmd.limit.unwrap_or_else(|| ctx.config.search_limit()),
            };
            let results = search(&catalog, &query);
            emit(results.as_slice(), ctx.format)?;
            Ok(found_any(results.len()))
        }
        cli::Commands::Prompt(cmd) => {
            let catalog = ctx.catalog()?;
            let combo = catalog.combination(&cmd.combination_id)?;
            let request = prompt::PromptRequest {
                subject: cmd.subject,
                color_intensity: cmd.color_intensity,
                detail_sharpness: cmd.detail_sharpness,
                mood_intensity: cmd.mood_intensity,
                ..prompt::PromptRequest::new(cmd.distance, cmd.angle)
            };
            let text = prompt::generate_image_prompt(combo, &request)?;
            emit(
                &PromptView {
                    combination_id: &combo.id,
                    prompt: &text,
                },
                ctx.format,
            )?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Stats => {
            let catalog = ctx.catalog()?;
            emit(&catalog::stats::library_stats(&catalog), ctx.format)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Random(cmd) => {
            let catalog = ctx.catalog()?;
            let defaults = ctx.config.discovery_defaults();
            let min_harmony = cmd.min_harmony.unwrap_or(defaults.min_harmony);
            if !(0..=10).contains(&min_harmony) {
                return Err(MagphotoError::InvalidInput(format!(
                    "min harmony must be between 0 and 10, got {min_harmony}"
                )));
            }
            let results = catalog::discover::random_combinations(
                &catalog,
                cmd.count.unwrap_or(defaults.count),
                min_harmony,
                cmd.seed,
            );
            emit(results.as_slice(), ctx.format)?;
            Ok(found_any(results.len()))
        }
        cli::Commands::Export(cmd) => {
            let catalog = ctx.catalog()?;
            let export = export::ScoreExport::build(&catalog);
            let path = export::write_export(&ctx.root, cmd.output.as_deref(), &export)?;
            emit(
                &report::ExportSummary {
                    path: &path,
                    entries: export.entries.len(),
                    skipped: export.skipped.len(),
                },
                ctx.format,
            )?;
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != exit_code::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code_for(&e));
        }
    }
}
