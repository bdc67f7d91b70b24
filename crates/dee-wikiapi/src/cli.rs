use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Output as JSON
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    /// Suppress decorative output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Debug output to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[command(
    name = "dee-wikiapi",
    version,
    about = "Wiki API client CLI",
    long_about = "dee-wikiapi - Fetch page summaries and thumbnails, and search page titles, on any Wiki platform API.",
    after_help = "EXAMPLES:\n  dee-wikiapi get \"Rust (programming language)\"\n  dee-wikiapi get \"Berlin\" --lang de --json\n  dee-wikiapi search \"ferris\" -j\n  dee-wikiapi search \"tokio\" --endpoint https://en.wikipedia.org/w/api.php\n  dee-wikiapi chart ratings.json --title \"Best films\"\n  dee-wikiapi config set wiki.endpoint https://pt.wikipedia.org/w/api.php\n  dee-wikiapi config show --json"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch a page summary and thumbnail by exact title
    Get(GetArgs),
    /// Search candidate page titles
    Search(SearchArgs),
    /// Render a rating collection as a bar chart
    Chart(ChartArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

#[derive(Debug, Clone, Args)]
pub struct EndpointArgs {
    /// Full API endpoint, e.g. https://en.wikipedia.org/w/api.php
    #[arg(long, conflicts_with = "lang")]
    pub endpoint: Option<String>,

    /// Wikipedia language code (shorthand for the Wikipedia endpoint)
    #[arg(long)]
    pub lang: Option<String>,

    /// Give up on requests after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Exact page title
    pub title: String,

    #[command(flatten)]
    pub endpoint: EndpointArgs,
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Search term
    pub term: String,

    #[command(flatten)]
    pub endpoint: EndpointArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ChartArgs {
    /// JSON file holding {"theme": ..., "items": [{"name": ..., "averageRating": ...}]}
    pub file: PathBuf,

    /// Chart title
    #[arg(long, default_value = "Ratings")]
    pub title: String,

    /// Width of the longest bar in characters
    #[arg(long, default_value_t = 40)]
    pub width: usize,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Set a configuration value (e.g. wiki.endpoint <url>)
    Set(ConfigSetArgs),
    /// Show current configuration
    Show,
    /// Print the path to the config file
    Path,
}

#[derive(Debug, Args)]
pub struct ConfigSetArgs {
    pub key: String,
    pub value: String,
}
