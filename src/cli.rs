use crate::prompt::{Angle, Distance};
use crate::types::taxonomy::TemporalAlignment;
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "magphoto",
    version,
    about = "Magazine x photography style classification and compatibility CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding magazines.json, photography.json and combinations.json
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "md", global = true)]
    pub format: ReportFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a catalog magazine's visual treatment
    ClassifyMagazine(NameCommand),
    /// Classify a catalog photography style's technical profile
    ClassifyPhotography(NameCommand),
    /// Classify a record read from a JSON file
    Classify(ClassifyCommand),
    /// Score a magazine against a photography style
    Score(PairCommand),
    ListMagazines,
    ListStyles,
    /// Show the precomputed combination for a magazine and style
    Get(PairCommand),
    Search(SearchCommand),
    /// Build an image-generation prompt from a combination
    Prompt(PromptCommand),
    Stats,
    /// Sample high-harmony combinations
    Random(RandomCommand),
    /// Rescore every magazine x style pair into a JSON file
    Export(ExportCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RecordKind {
    Magazine,
    Photography,
}

#[derive(Args)]
pub struct NameCommand {
    pub name: String,
}

#[derive(Args)]
pub struct ClassifyCommand {
    pub file: PathBuf,
    #[arg(long, value_enum)]
    pub kind: RecordKind,
}

#[derive(Args)]
pub struct PairCommand {
    pub magazine: String,
    pub style: String,
}

fn positive_count() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(1..)
}

fn parse_temporal(value: &str) -> Result<TemporalAlignment, String> {
    TemporalAlignment::parse(value).ok_or_else(|| {
        let expected = TemporalAlignment::ALL
            .iter()
            .map(|alignment| alignment.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("expected one of: {expected}")
    })
}

#[derive(Args)]
pub struct SearchCommand {
    /// Matches names, descriptions, prompt keywords and suggested subjects
    #[arg(long)]
    pub query: Option<String>,
    #[arg(long)]
    pub min_harmony: Option<i32>,
    #[arg(long)]
    pub max_harmony: Option<i32>,
    #[arg(long)]
    pub min_tension: Option<i32>,
    #[arg(long)]
    pub magazine: Option<String>,
    #[arg(long)]
    pub photography: Option<String>,
    #[arg(long, value_parser = parse_temporal)]
    pub temporal: Option<TemporalAlignment>,
    #[arg(long, value_parser = positive_count())]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct PromptCommand {
    pub combination_id: String,
    #[arg(long, value_enum, ignore_case = true)]
    pub distance: Distance,
    #[arg(long, value_enum, ignore_case = true)]
    pub angle: Angle,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long, default_value_t = 0.5)]
    pub color_intensity: f64,
    #[arg(long, default_value_t = 0.5)]
    pub detail_sharpness: f64,
    #[arg(long, default_value_t = 0.5)]
    pub mood_intensity: f64,
}

#[derive(Args)]
pub struct RandomCommand {
    #[arg(long, value_parser = positive_count())]
    pub count: Option<usize>,
    #[arg(long)]
    pub min_harmony: Option<i32>,
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct ExportCommand {
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
