use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of an input file (dependency index, config) in bytes (100 MB)
pub const MAX_INPUT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Returns true when `path` exists and is itself a symbolic link.
///
/// Uses `symlink_metadata()` so the link is inspected rather than its target.
/// A missing path is not a symlink.
pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.is_symlink())
        .unwrap_or(false)
}

/// Reads a regular file into a string after checking that it is not a
/// symlink, not a directory and not larger than `max_size`.
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Human readable name used in error messages
/// * `max_size` - Maximum accepted size in bytes
///
/// # Errors
/// Returns an error if any check fails or the file is not valid UTF-8
pub fn read_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
