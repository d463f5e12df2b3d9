use crate::ports::outbound::BuildTool;
use crate::shared::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Program name looked up on `PATH` when none is configured
pub const DEFAULT_BUILD_TOOL: &str = "xcodebuild";

/// XcodebuildTool adapter running `xcodebuild -showBuildSettings -json`
///
/// The program may be a bare name resolved on `PATH` or a path to an
/// executable.
#[derive(Debug, Clone)]
pub struct XcodebuildTool {
    program: String,
}

impl XcodebuildTool {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_BUILD_TOOL)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn resolve(&self) -> Result<PathBuf> {
        which::which(&self.program)
            .with_context(|| format!("Build tool '{}' was not found", self.program))
    }
}

impl Default for XcodebuildTool {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildTool for XcodebuildTool {
    fn is_available(&self) -> bool {
        self.resolve().is_ok()
    }

    fn show_build_settings(&self, project_root: &Path, extra_args: &[String]) -> Result<String> {
        let program = self.resolve()?;
        tracing::debug!(
            program = %program.display(),
            args = ?extra_args,
            cwd = %project_root.display(),
            "running build settings query"
        );

        let output = Command::new(&program)
            .arg("-showBuildSettings")
            .arg("-json")
            .args(extra_args)
            .current_dir(project_root)
            .output()
            .with_context(|| format!("Failed to run {}", program.display()))?;

        if !output.status.success() {
            anyhow::bail!(
                "{} exited with {}: {}",
                program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
