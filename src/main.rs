mod cli;

use cli::Args;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use swiftpm_source::adapters::outbound::console::StderrProgressReporter;
use swiftpm_source::adapters::outbound::filesystem::FileSystemReader;
use swiftpm_source::adapters::outbound::process::{XcodebuildTool, DEFAULT_BUILD_TOOL};
use swiftpm_source::application::dto::{OutputFormat, SessionConfig};
use swiftpm_source::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use swiftpm_source::application::sources::SwiftPackageSource;
use swiftpm_source::application::use_cases::EnumerateDependenciesUseCase;
use swiftpm_source::config::{discover_config, load_config_from_path, ConfigFile};
use swiftpm_source::shared::error::ExitCode;
use swiftpm_source::shared::security::validate_project_root;
use swiftpm_source::shared::Result;
use tracing_subscriber::EnvFilter;

/// Effective settings after merging CLI arguments over the config file
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    output: Option<PathBuf>,
    build_tool: String,
    build_tool_args: Vec<String>,
}

impl Settings {
    fn resolve(args: &Args, config: ConfigFile) -> Self {
        Self {
            format: args.format.or(config.format).unwrap_or_default(),
            output: args.output.clone().or(config.output),
            build_tool: args
                .build_tool
                .clone()
                .or(config.build_tool)
                .unwrap_or_else(|| DEFAULT_BUILD_TOOL.to_string()),
            build_tool_args: if args.build_args.is_empty() {
                config.build_tool_args.unwrap_or_default()
            } else {
                args.build_args.clone()
            },
        }
    }
}

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<ExitCode> {
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_root(&project_path)?;
    let project_root = project_path
        .canonicalize()
        .unwrap_or_else(|_| project_path.clone());

    let config = load_config(&args, &project_root)?;
    let settings = Settings::resolve(&args, config);
    tracing::debug!(?settings, project_root = %project_root.display(), "resolved settings");

    let session = SessionConfig::new(project_root.clone())
        .with_build_tool_args(settings.build_tool_args.clone());
    let source = SwiftPackageSource::new(
        session,
        FileSystemReader::new(),
        XcodebuildTool::with_program(settings.build_tool.clone()),
    );

    let use_case = EnumerateDependenciesUseCase::new(source, StderrProgressReporter::new());
    let response = use_case.execute(&project_root)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatted = FormatterFactory::create(settings.format).format(&response)?;
    PresenterFactory::create(PresenterType::from(settings.output)).present(&formatted)?;

    Ok(if !response.active {
        ExitCode::SourceInactive
    } else if response.error_count() > 0 {
        ExitCode::DependencyErrors
    } else {
        ExitCode::Success
    })
}

fn load_config(args: &Args, project_root: &Path) -> Result<ConfigFile> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(project_root)?,
    };
    Ok(config.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_settings_defaults() {
        let args = Args::try_parse_from(["swiftpm-source"]).unwrap();
        let settings = Settings::resolve(&args, ConfigFile::default());

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.output, None);
        assert_eq!(settings.build_tool, "xcodebuild");
        assert!(settings.build_tool_args.is_empty());
    }

    #[test]
    fn test_settings_from_config() {
        let args = Args::try_parse_from(["swiftpm-source"]).unwrap();
        let config = ConfigFile {
            format: Some(OutputFormat::Markdown),
            output: Some(PathBuf::from("deps.md")),
            build_tool: Some("/opt/bin/xcodebuild".to_string()),
            build_tool_args: Some(vec!["-scheme".to_string(), "App".to_string()]),
            ..ConfigFile::default()
        };
        let settings = Settings::resolve(&args, config);

        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.output, Some(PathBuf::from("deps.md")));
        assert_eq!(settings.build_tool, "/opt/bin/xcodebuild");
        assert_eq!(settings.build_tool_args, ["-scheme", "App"]);
    }

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::try_parse_from([
            "swiftpm-source",
            "-f",
            "json",
            "--build-tool",
            "fake-xcodebuild",
            "--build-arg",
            "-workspace",
        ])
        .unwrap();
        let config = ConfigFile {
            format: Some(OutputFormat::Markdown),
            build_tool: Some("/opt/bin/xcodebuild".to_string()),
            build_tool_args: Some(vec!["-scheme".to_string()]),
            ..ConfigFile::default()
        };
        let settings = Settings::resolve(&args, config);

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.build_tool, "fake-xcodebuild");
        assert_eq!(settings.build_tool_args, ["-workspace"]);
    }
}
