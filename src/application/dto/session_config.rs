use std::path::{Path, PathBuf};

/// SessionConfig - Read-only input for one scan session
///
/// Supplied by the orchestrator; one source instance is created per
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Project root directory (the scan's working directory)
    pub project_root: PathBuf,
    /// Extra arguments for the build settings query (e.g. `-scheme App`)
    pub build_tool_args: Vec<String>,
}

impl SessionConfig {
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            build_tool_args: Vec::new(),
        }
    }

    pub fn with_build_tool_args(mut self, build_tool_args: Vec<String>) -> Self {
        self.build_tool_args = build_tool_args;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}
