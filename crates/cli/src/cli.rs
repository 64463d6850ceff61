use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Render ELD daily log sheets from a trip-planning service response.
#[derive(Parser)]
#[command(name = "eld-log", version = env!("CARGO_PKG_VERSION"), long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one log sheet per day of a `{route, daily_logs}` response
    Render(RenderArgs),

    /// Validate trip inputs and print the request body for the planning service
    Request(RequestArgs),
}

#[derive(clap::Args)]
pub struct RenderArgs {
    /// Planning-service response (JSON)
    pub input: PathBuf,

    /// Directory for `day-<N>.<ext>` files; text goes to stdout when omitted
    #[arg(long = "out-dir", short = 'o')]
    pub out_dir: Option<PathBuf>,

    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Sheet layout and options (JSON, missing keys keep defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Name printed on the signature line
    #[arg(long)]
    pub driver: Option<String>,

    /// Use the dark palette
    #[arg(long)]
    pub dark: bool,
}

#[derive(clap::Args)]
pub struct RequestArgs {
    #[arg(long)]
    pub current: String,

    #[arg(long)]
    pub pickup: String,

    #[arg(long)]
    pub dropoff: String,

    /// Hours already used in the 70-hour cycle
    #[arg(long = "cycle-used")]
    pub cycle_used: f64,

    #[arg(long)]
    pub driver: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Text,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}
