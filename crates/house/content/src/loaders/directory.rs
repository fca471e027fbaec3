//! Directory loader: one definition per file.
//!
//! # Directory Structure
//!
//! ```text
//! spawns/
//! ├── cellar.json     { "Name": "Cellar", "Haunt": { "Minions": true } }
//! ├── front-door.json { "Exit": {} }
//! └── notes.txt       (ignored: extension does not match)
//! ```
//!
//! A file that does not declare a name is registered under its file stem
//! (`front-door` above). Files are read in path order, so when two files
//! declare the same name the later path wins.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::loaders::{DataFormat, LoadResult};
use crate::registry::{Definition, RegistryStore};

/// A single file that could not be turned into a definition.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {format} definition at {}: {message}", .path.display())]
    Decode {
        path: PathBuf,
        format: DataFormat,
        message: String,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Decode { path, .. } => path,
        }
    }
}

/// Everything decoded from one directory scan.
#[derive(Debug)]
pub struct DirectoryLoad<D> {
    /// Decoded definitions with their source paths, in path order.
    pub definitions: Vec<(PathBuf, D)>,
    pub failures: Vec<LoadError>,
}

/// Outcome of loading a directory into a registry.
#[derive(Debug, Default)]
pub struct LoadSummary {
    /// Distinct names inserted, in first-load order.
    pub loaded: Vec<String>,
    /// Names whose insert replaced an entry already in the registry, either
    /// from earlier in this scan or from a previous load into it.
    pub replaced: Vec<String>,
    pub failures: Vec<LoadError>,
}

impl LoadSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.replaced.is_empty()
    }
}

/// Loader for directories of definition files.
pub struct DefinitionLoader;

impl DefinitionLoader {
    /// Decode every file in `dir` whose extension matches `extension`.
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory to scan (not recursive)
    /// * `extension` - File extension to match, with or without the leading dot
    /// * `format` - Decoder for the file contents
    ///
    /// # Returns
    ///
    /// Decoded definitions plus per-file failures. Only an unreadable
    /// directory is an error.
    pub fn load_dir<D>(dir: &Path, extension: &str, format: DataFormat) -> LoadResult<DirectoryLoad<D>>
    where
        D: Definition + DeserializeOwned,
    {
        let wanted = extension.trim_start_matches('.');

        let mut paths = Vec::new();
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory {}", dir.display()))?;
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to list directory {}", dir.display()))?
                .path();
            let matches = path.extension().is_some_and(|ext| ext == wanted);
            if matches && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut load = DirectoryLoad {
            definitions: Vec::with_capacity(paths.len()),
            failures: Vec::new(),
        };

        for path in paths {
            match Self::load_file::<D>(&path, format) {
                Ok(def) => {
                    tracing::debug!("Decoded '{}' from {}", def.name(), path.display());
                    load.definitions.push((path, def));
                }
                Err(err) => {
                    tracing::error!("{}", err);
                    load.failures.push(err);
                }
            }
        }

        Ok(load)
    }

    /// Decode a single definition file.
    ///
    /// The file stem becomes the name if the file does not declare one.
    pub fn load_file<D>(path: &Path, format: DataFormat) -> Result<D, LoadError>
    where
        D: Definition + DeserializeOwned,
    {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut def: D = format.decode(&content).map_err(|message| LoadError::Decode {
            path: path.to_path_buf(),
            format,
            message,
        })?;

        if def.name().is_empty() {
            let stem = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            def.set_name(stem);
        }

        Ok(def)
    }
}

impl RegistryStore {
    /// Loads every matching file in `dir` into the registry called `name`.
    ///
    /// Each definition is normalized as it is inserted, then the new contents
    /// are published as one snapshot. Entries already in the registry are
    /// kept unless a file declares the same name. Files that fail to read or
    /// decode are logged, listed in the summary and skipped. Fails only if the
    /// registry is missing or of another type, or if `dir` cannot be listed.
    pub fn register_all_objects_in_dir<D>(
        &mut self,
        name: &str,
        dir: &Path,
        extension: &str,
        format: DataFormat,
    ) -> LoadResult<LoadSummary>
    where
        D: Definition + DeserializeOwned,
    {
        let mut registry = (*self.registry::<D>(name)?).clone();
        let load = DefinitionLoader::load_dir::<D>(dir, extension, format)?;

        let mut summary = LoadSummary {
            failures: load.failures,
            ..LoadSummary::default()
        };

        for (path, def) in load.definitions {
            let def_name = def.name().to_owned();
            if registry.insert(def).is_some() {
                tracing::warn!(
                    registry = %name,
                    "Definition '{}' from {} replaces an earlier one",
                    def_name,
                    path.display()
                );
                summary.replaced.push(def_name.clone());
            }
            if !summary.loaded.contains(&def_name) {
                summary.loaded.push(def_name);
            }
        }

        tracing::info!(
            registry = %name,
            loaded = summary.loaded.len(),
            failed = summary.failures.len(),
            "Loaded definitions from {}",
            dir.display()
        );

        self.publish(name, registry)?;
        Ok(summary)
    }
}
