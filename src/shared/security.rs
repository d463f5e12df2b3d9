use crate::shared::error::SourceError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum lockfile size (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` is a regular file within [`MAX_FILE_SIZE`].
///
/// Symbolic links are rejected without being followed.
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read (missing file, permissions)
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than [`MAX_FILE_SIZE`]
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_FILE_SIZE
        );
    }

    Ok(())
}

/// Checks that `path` is an existing, non-symlinked project directory.
pub fn validate_project_root(path: &Path) -> Result<()> {
    let invalid = |reason: String| SourceError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason,
    };

    if !path.exists() {
        return Err(invalid("Directory does not exist".to_string()).into());
    }

    let metadata = fs::symlink_metadata(path)
        .map_err(|e| invalid(format!("Failed to read path metadata: {}", e)))?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed."
                .to_string(),
        )
        .into());
    }

    if !metadata.is_dir() {
        return Err(invalid("Not a directory".to_string()).into());
    }

    Ok(())
}
