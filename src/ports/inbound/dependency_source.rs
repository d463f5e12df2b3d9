use crate::dependency_discovery::domain::Dependency;
use crate::shared::Result;

/// DependencySource - Inbound port for one kind of dependency source
///
/// A license scanner creates one source per project scan, asks whether it
/// applies, and if so enumerates its dependencies. Implementations memoize
/// their probing and parsing for the lifetime of the instance.
pub trait DependencySource {
    /// Constant identifying this source kind (e.g. `"swift"`)
    ///
    /// Copied into every dependency's `metadata.type`.
    fn source_type(&self) -> &'static str;

    /// Returns whether this source applies to the project
    ///
    /// Probing failures are not errors; they make the source inactive.
    fn is_active(&self) -> bool;

    /// Enumerates the project's dependencies in lockfile order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source is not active
    /// - The lockfile cannot be read or parsed
    fn enumerate_dependencies(&self) -> Result<Vec<Dependency>>;
}
