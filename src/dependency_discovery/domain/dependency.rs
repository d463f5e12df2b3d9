use serde::Serialize;
use std::path::{Path, PathBuf};

/// Metadata attached to every dependency for downstream grouping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyMetadata {
    #[serde(rename = "type")]
    source_type: String,
    homepage: Option<String>,
}

impl DependencyMetadata {
    pub fn new(source_type: impl Into<String>, homepage: Option<String>) -> Self {
        Self {
            source_type: source_type.into(),
            homepage,
        }
    }

    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }
}

/// Normalized dependency descriptor handed to license detection
///
/// A dependency without a `path` is still reported; the reason is recorded
/// in `errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    name: String,
    version: Option<String>,
    path: Option<PathBuf>,
    errors: Vec<String>,
    metadata: DependencyMetadata,
}

impl Dependency {
    pub fn new(
        name: String,
        version: Option<String>,
        path: Option<PathBuf>,
        errors: Vec<String>,
        metadata: DependencyMetadata,
    ) -> Self {
        Self {
            name,
            version,
            path,
            errors,
            metadata,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn metadata(&self) -> &DependencyMetadata {
        &self.metadata
    }

    pub fn homepage(&self) -> Option<&str> {
        self.metadata.homepage()
    }
}
