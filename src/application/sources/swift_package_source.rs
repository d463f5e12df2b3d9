use crate::application::dto::SessionConfig;
use crate::dependency_discovery::domain::{BuildEnvironment, Dependency, PackageResolved, Pin};
use crate::dependency_discovery::services::CheckoutLocator;
use crate::ports::inbound::DependencySource;
use crate::ports::outbound::{BuildTool, LockfileReader};
use crate::shared::error::SourceError;
use crate::shared::Result;
use std::cell::OnceCell;
use std::path::PathBuf;

/// Value of `metadata.type` for every dependency produced by this source
pub const SWIFT_SOURCE_TYPE: &str = "swift";

/// Location of `Package.resolved` relative to the project root
pub const LOCKFILE_RELATIVE_PATH: &str = "ios.xcworkspace/xcshareddata/swiftpm/Package.resolved";

/// SwiftPackageSource - Swift Package Manager dependencies of an Xcode project
///
/// Activation asks the build tool for the build directory and then looks
/// for `Package.resolved`. Enumeration maps each pin to a dependency whose
/// path points at the package checkout under the build directory.
///
/// The build tool runs at most once and the lockfile is read at most once
/// per instance. Create one instance per project scan.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `BT` - BuildTool implementation
pub struct SwiftPackageSource<LR, BT> {
    config: SessionConfig,
    lockfile_reader: LR,
    build_tool: BT,
    build_environment: OnceCell<Option<BuildEnvironment>>,
    pins: OnceCell<Vec<Pin>>,
}

impl<LR, BT> SwiftPackageSource<LR, BT>
where
    LR: LockfileReader,
    BT: BuildTool,
{
    /// Creates a new SwiftPackageSource with injected dependencies
    pub fn new(config: SessionConfig, lockfile_reader: LR, build_tool: BT) -> Self {
        Self {
            config,
            lockfile_reader,
            build_tool,
            build_environment: OnceCell::new(),
            pins: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Absolute path of the lockfile for this project
    pub fn lockfile_path(&self) -> PathBuf {
        self.config.project_root.join(LOCKFILE_RELATIVE_PATH)
    }

    /// Build environment reported by the build tool, probed on first access
    pub fn build_environment(&self) -> Option<&BuildEnvironment> {
        self.build_environment
            .get_or_init(|| self.probe_build_environment())
            .as_ref()
    }

    fn probe_build_environment(&self) -> Option<BuildEnvironment> {
        if !self.build_tool.is_available() {
            tracing::debug!("build tool not available, swift source disabled");
            return None;
        }

        let output = match self
            .build_tool
            .show_build_settings(&self.config.project_root, &self.config.build_tool_args)
        {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(error = %e, "build settings query failed");
                return None;
            }
        };

        let environment = BuildEnvironment::from_build_settings(&output);
        match &environment {
            Some(env) => {
                tracing::debug!(build_dir = %env.build_dir().display(), "resolved build directory")
            }
            None => tracing::debug!("build settings did not contain BUILD_DIR"),
        }
        environment
    }

    fn pins(&self) -> Result<&[Pin]> {
        if let Some(pins) = self.pins.get() {
            return Ok(pins);
        }

        let pins = self.load_pins()?;
        Ok(self.pins.get_or_init(|| pins))
    }

    fn load_pins(&self) -> Result<Vec<Pin>> {
        let lockfile_path = self.lockfile_path();
        tracing::debug!(path = %lockfile_path.display(), "reading Package.resolved");

        let to_configuration_error = |e: anyhow::Error| SourceError::SourceConfiguration {
            path: lockfile_path.clone(),
            details: e.to_string(),
        };

        let content = self
            .lockfile_reader
            .read_lockfile(&lockfile_path)
            .map_err(to_configuration_error)?;
        let pins = PackageResolved::parse(&content)
            .map_err(to_configuration_error)?
            .into_pins();

        tracing::debug!(count = pins.len(), "parsed pins");
        Ok(pins)
    }
}

impl<LR, BT> DependencySource for SwiftPackageSource<LR, BT>
where
    LR: LockfileReader,
    BT: BuildTool,
{
    fn source_type(&self) -> &'static str {
        SWIFT_SOURCE_TYPE
    }

    fn is_active(&self) -> bool {
        if self.build_environment().is_none() {
            return false;
        }

        let lockfile_path = self.lockfile_path();
        let exists = self.lockfile_reader.lockfile_exists(&lockfile_path);
        if !exists {
            tracing::debug!(path = %lockfile_path.display(), "Package.resolved not found");
        }
        exists
    }

    fn enumerate_dependencies(&self) -> Result<Vec<Dependency>> {
        let environment = self
            .build_environment()
            .ok_or_else(|| SourceError::NotActive {
                project_root: self.config.project_root.clone(),
            })?;

        let locator = CheckoutLocator::new(SWIFT_SOURCE_TYPE, environment);
        let dependencies = self
            .pins()?
            .iter()
            .map(|pin| locator.locate(pin))
            .collect();

        Ok(dependencies)
    }
}
