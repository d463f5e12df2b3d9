use crate::dependency_discovery::domain::Dependency;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// EnumerationResponse - Result of one source session
///
/// An inactive source produces a response with `active == false` and no
/// dependencies.
#[derive(Debug, Clone, Serialize)]
pub struct EnumerationResponse {
    /// Source kind that produced the dependencies
    pub source_type: String,
    /// Project root that was scanned
    pub project_root: PathBuf,
    /// Whether the source applied to the project
    pub active: bool,
    /// Dependencies in lockfile order
    pub dependencies: Vec<Dependency>,
    /// When the enumeration finished
    pub generated_at: DateTime<Utc>,
}

impl EnumerationResponse {
    pub fn new(
        source_type: impl Into<String>,
        project_root: PathBuf,
        active: bool,
        dependencies: Vec<Dependency>,
    ) -> Self {
        Self {
            source_type: source_type.into(),
            project_root,
            active,
            dependencies,
            generated_at: Utc::now(),
        }
    }

    /// Number of dependencies that carry at least one error
    pub fn error_count(&self) -> usize {
        self.dependencies.iter().filter(|d| d.has_errors()).count()
    }
}
