//! swiftpm-source - Swift Package Manager dependency source for license scanning
//!
//! This library locates the Swift packages an Xcode project depends on. It
//! reads `Package.resolved` and maps every pin to the package checkout
//! inside Xcode's build directory, so that a license scanner can inspect it.
//! The crate is organized following hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_discovery`): Pins, build environment, dependency descriptors
//! - **Application Layer** (`application`): The swift source, use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for the scanner and infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use swiftpm_source::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let config = SessionConfig::new(PathBuf::from("."));
//! let source = SwiftPackageSource::new(config, FileSystemReader::new(), XcodebuildTool::new());
//!
//! if source.is_active() {
//!     for dependency in source.enumerate_dependencies()? {
//!         println!("{} {:?}", dependency.name(), dependency.path());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_discovery;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::process::XcodebuildTool;
    pub use crate::application::dto::{EnumerationResponse, OutputFormat, SessionConfig};
    pub use crate::application::sources::{
        SwiftPackageSource, LOCKFILE_RELATIVE_PATH, SWIFT_SOURCE_TYPE,
    };
    pub use crate::application::use_cases::EnumerateDependenciesUseCase;
    pub use crate::dependency_discovery::domain::{
        BuildEnvironment, Dependency, DependencyMetadata, PackageResolved, Pin, PinState,
    };
    pub use crate::dependency_discovery::services::CheckoutLocator;
    pub use crate::ports::inbound::DependencySource;
    pub use crate::ports::outbound::{
        BuildTool, DependencyFormatter, LockfileReader, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, SourceError};
    pub use crate::shared::Result;
}
