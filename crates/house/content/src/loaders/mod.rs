//! Content loaders for reading definitions and configuration from files.

pub mod config;
pub mod directory;
pub mod format;

pub use config::{ConfigLoader, ContentConfig};
pub use directory::{DefinitionLoader, DirectoryLoad, LoadError, LoadSummary};
pub use format::DataFormat;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
