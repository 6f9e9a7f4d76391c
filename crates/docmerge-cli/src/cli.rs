use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "docmerge",
    about = "Merge TOML, YAML and Markdown documents by priority",
    version,
)]
pub struct Cli {
    /// Files to merge, comma-separated, in merge order
    #[arg(long, required = true, value_delimiter = ',')]
    pub files: Vec<PathBuf>,

    /// Where to write the merged document
    #[arg(short, long, default_value = "merged.md")]
    pub output: PathBuf,

    /// File names to move to the front of the merge order
    #[arg(long, value_delimiter = ',')]
    pub order: Vec<String>,

    /// Validate each input and exit without merging
    #[arg(long)]
    pub validate: bool,

    #[arg(long, default_value = "markdown")]
    pub format: OutputFormat,

    /// TOML file holding merge settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}
