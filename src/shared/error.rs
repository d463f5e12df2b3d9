use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell an unusable project apart from
/// a project whose dependencies could not all be located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every dependency was located
    Success = 0,
    /// At least one dependency carries a path error
    DependencyErrors = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (lockfile, file I/O, invalid path, etc.)
    ApplicationError = 3,
    /// The Swift package source does not apply to the project
    SourceInactive = 4,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DependencyErrors => write!(f, "Dependency Errors (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::SourceInactive => write!(f, "Source Inactive (4)"),
        }
    }
}

/// Errors raised by the Swift package source and its CLI driver.
///
/// `SourceConfiguration` is the only error that aborts an enumeration.
/// Per-dependency problems are recorded on the dependency instead.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unable to read the Package.resolved file: {path}\nDetails: {details}\n\n💡 Hint: Resolve packages in Xcode (File > Packages > Resolve Package Versions) and try again")]
    SourceConfiguration { path: PathBuf, details: String },

    #[error("The swift source is not active for project: {project_root}\n\n💡 Hint: Dependencies can only be enumerated after xcodebuild reports a build directory and Package.resolved exists")]
    NotActive { project_root: PathBuf },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
