use crate::ports::outbound::LockfileReader;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading lockfiles from the file system
///
/// Reads are guarded: symbolic links, non-regular files and files larger
/// than [`crate::shared::security::MAX_FILE_SIZE`] are rejected.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn lockfile_exists(&self, lockfile_path: &Path) -> bool {
        lockfile_path.is_file()
    }

    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String> {
        validate_regular_file(lockfile_path, "Package.resolved")?;

        fs::read_to_string(lockfile_path)
            .map_err(|e| anyhow::anyhow!("Failed to read Package.resolved: {}", e))
    }
}
