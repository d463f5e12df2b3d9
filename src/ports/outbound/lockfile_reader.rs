use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for reading lockfile contents
///
/// This port abstracts the file system operations needed to find and
/// read `Package.resolved`. The caller computes the lockfile path.
pub trait LockfileReader {
    /// Returns whether a lockfile exists at `lockfile_path`
    fn lockfile_exists(&self, lockfile_path: &Path) -> bool;

    /// Reads the lockfile at `lockfile_path`
    ///
    /// # Returns
    /// The raw content of the lockfile as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String>;
}
