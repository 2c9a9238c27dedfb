pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::validator::ValidationMode;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-check")]
#[command(about = "Load portfolio page content and run its self-tests")]
pub struct CliConfig {
    /// TOML content file; the built-in page content is used when omitted
    #[arg(short, long)]
    pub content: Option<String>,

    /// Value substituted for ${BASE_URL} in document paths
    #[arg(long, default_value = "/")]
    pub base_url: String,

    /// Override the validation mode from the content file
    #[arg(long, value_enum)]
    pub mode: Option<ValidationMode>,

    /// Print the report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Print the loaded content as TOML and exit
    #[arg(long)]
    pub dump: bool,

    /// Emit logs as JSON lines instead of the compact format
    #[arg(long)]
    pub log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
