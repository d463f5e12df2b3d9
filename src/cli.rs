use clap::Parser;
use std::path::PathBuf;
use swiftpm_source::application::dto::OutputFormat;

/// Locate the Swift packages of an Xcode project for license scanning
#[derive(Parser, Debug)]
#[command(name = "swiftpm-source")]
#[command(version)]
#[command(about = "Locate the Swift packages of an Xcode project for license scanning", long_about = None)]
pub struct Args {
    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to swiftpm-source.config.yml in the project directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Build tool program name or path used instead of xcodebuild
    #[arg(long, value_name = "PROGRAM")]
    pub build_tool: Option<String>,

    /// Extra argument for the build settings query (repeatable):
    /// --build-arg -scheme --build-arg App
    #[arg(long = "build-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub build_args: Vec<String>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
