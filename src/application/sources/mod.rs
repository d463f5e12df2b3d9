/// Dependency sources implementing the inbound [`DependencySource`] port
///
/// [`DependencySource`]: crate::ports::inbound::DependencySource
mod swift_package_source;

pub use swift_package_source::{SwiftPackageSource, LOCKFILE_RELATIVE_PATH, SWIFT_SOURCE_TYPE};
