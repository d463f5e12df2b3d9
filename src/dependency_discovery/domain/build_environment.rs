use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Suffix xcodebuild appends to BUILD_DIR; checkouts live under its parent
const PRODUCTS_SUFFIX: &str = "/Build/Products";

const BUILD_DIR_KEY: &str = "BUILD_DIR";

#[derive(Debug, Deserialize)]
struct BuildSettingsEntry {
    #[serde(rename = "buildSettings", default)]
    build_settings: BuildSettings,
}

#[derive(Debug, Default, Deserialize)]
struct BuildSettings {
    #[serde(rename = "BUILD_DIR", default)]
    build_dir: Option<String>,
}

/// Xcode build environment resolved once per session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEnvironment {
    build_dir: PathBuf,
}

impl BuildEnvironment {
    pub fn new(build_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_dir: build_dir.into(),
        }
    }

    /// Builds the environment from a raw BUILD_DIR value
    ///
    /// Trailing whitespace is trimmed and a single trailing `/Build/Products`
    /// is removed. Returns `None` for an empty value.
    pub fn from_build_dir_setting(value: &str) -> Option<Self> {
        let value = value.trim_end();
        let build_dir = value.strip_suffix(PRODUCTS_SUFFIX).unwrap_or(value);
        if build_dir.trim().is_empty() {
            return None;
        }
        Some(Self::new(build_dir))
    }

    /// Extracts the first BUILD_DIR from `xcodebuild -showBuildSettings` output
    ///
    /// JSON output (`-json`) is preferred. Plain `KEY = value` output is
    /// accepted as a fallback.
    pub fn from_build_settings(output: &str) -> Option<Self> {
        let trimmed = output.trim();
        if trimmed.is_empty() {
            return None;
        }

        let value = match serde_json::from_str::<Vec<BuildSettingsEntry>>(trimmed) {
            Ok(entries) => entries
                .into_iter()
                .find_map(|entry| entry.build_settings.build_dir),
            Err(_) => find_text_setting(trimmed, BUILD_DIR_KEY),
        }?;

        Self::from_build_dir_setting(&value)
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Directory where SwiftPM clones package repositories
    pub fn checkouts_dir(&self) -> PathBuf {
        self.build_dir.join("SourcePackages").join("checkouts")
    }
}

fn find_text_setting(output: &str, key: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let (name, value) = line.trim().split_once(" = ")?;
        (name == key).then(|| value.to_string())
    })
}
