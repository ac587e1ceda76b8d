use clap::Parser;
use license_sniffer::application::dto::OutputFormat;
use std::path::PathBuf;

/// Identify the license of a node module and its installed dependencies
#[derive(Parser, Debug)]
#[command(name = "license-sniffer")]
#[command(version)]
#[command(
    about = "Identify the license of a node module and its installed dependencies",
    long_about = None
)]
pub struct Args {
    /// Path to the module directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Walk the whole node_modules tree instead of a single module
    #[arg(short, long)]
    pub tree: bool,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Do not render a license template when only the license name is known
    #[arg(long)]
    pub no_generate_body: bool,

    /// Exit with status 1 if any module has an unknown license
    #[arg(long)]
    pub fail_on_unknown: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to license-sniffer.config.yml in PATH)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
