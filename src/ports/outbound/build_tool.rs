use crate::shared::Result;
use std::path::Path;

/// BuildTool port for querying the Xcode build system
///
/// This port abstracts process execution so activation can be tested
/// without `xcodebuild` installed.
pub trait BuildTool {
    /// Returns whether the tool can be found on this system
    fn is_available(&self) -> bool;

    /// Runs the tool's "show build settings" query
    ///
    /// # Arguments
    /// * `project_root` - Working directory for the invocation
    /// * `extra_args` - Additional arguments appended after the query flags
    ///
    /// # Returns
    /// The tool's standard output
    ///
    /// # Errors
    /// Returns an error if the tool cannot be spawned or exits unsuccessfully
    fn show_build_settings(&self, project_root: &Path, extra_args: &[String]) -> Result<String>;
}
