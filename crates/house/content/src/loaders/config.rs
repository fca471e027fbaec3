//! Content configuration and its loader.

use std::env;
use std::path::{Path, PathBuf};

use house_core::SpawnRequirements;
use serde::{Deserialize, Serialize};

use crate::loaders::{DataFormat, LoadResult, read_file};

/// Where content lives and how strictly it is checked.
///
/// TOML example:
/// ```toml
/// spawns_dir = "data/spawns"
/// extension = ".json"
/// format = "json"
/// strict = true
///
/// [requirements]
/// relics = 5
/// clues = 10
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub spawns_dir: PathBuf,
    pub extension: String,
    pub format: DataFormat,
    /// Reject houses that miss a spawn requirement instead of warning.
    pub strict: bool,
    pub requirements: SpawnRequirements,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            spawns_dir: PathBuf::from("data/spawns"),
            extension: DataFormat::Json.default_extension().to_owned(),
            format: DataFormat::Json,
            strict: false,
            requirements: SpawnRequirements::default(),
        }
    }
}

impl ContentConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SPAWN_DATA_DIR` - Directory of spawn point definitions (default: data/spawns)
    /// - `SPAWN_FILE_EXTENSION` - Extension of definition files (default: .json)
    /// - `SPAWN_DATA_FORMAT` - `json`, `ron` or `toml` (default: json)
    /// - `SPAWN_STRICT` - Fail on unmet spawn requirements (default: false)
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies the environment variables listed on [`from_env`](Self::from_env).
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(dir) = env::var("SPAWN_DATA_DIR") {
            self.spawns_dir = PathBuf::from(dir);
        }

        if let Some(format) = read_env::<DataFormat>("SPAWN_DATA_FORMAT") {
            self.format = format;
            self.extension = format.default_extension().to_owned();
        }

        // An explicit extension wins over the format's default.
        if let Ok(extension) = env::var("SPAWN_FILE_EXTENSION") {
            self.extension = extension;
        }

        if let Some(strict) = read_env::<bool>("SPAWN_STRICT") {
            self.strict = strict;
        } else if env::var("SPAWN_STRICT").is_ok() {
            // Also accept just setting the variable without value as "true"
            self.strict = true;
        }

        self
    }
}

/// Loader for content configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults. A relative `spawns_dir` is resolved
    /// against the directory containing the file.
    pub fn load(path: &Path) -> LoadResult<ContentConfig> {
        let content = read_file(path)?;
        let mut config: ContentConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.spawns_dir.is_relative() {
            if let Some(base) = path.parent() {
                config.spawns_dir = base.join(&config.spawns_dir);
            }
        }

        Ok(config)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn defaults_read_json_spawns() {
        let config = ContentConfig::default();
        assert_eq!(config.spawns_dir, PathBuf::from("data/spawns"));
        assert_eq!(config.extension, ".json");
        assert_eq!(config.format, DataFormat::Json);
        assert!(!config.strict);
        assert_eq!(config.requirements, SpawnRequirements::default());
    }

    #[test]
    fn loads_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.toml");
        fs::write(
            &path,
            r#"
spawns_dir = "spawns"
format = "ron"
extension = ".ron"
strict = true

[requirements]
clues = 2
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.spawns_dir, dir.path().join("spawns"));
        assert_eq!(config.format, DataFormat::Ron);
        assert_eq!(config.extension, ".ron");
        assert!(config.strict);
        assert_eq!(config.requirements.clues, 2);
        assert_eq!(
            config.requirements.relics,
            SpawnRequirements::DEFAULT_RELICS
        );
    }

    #[test]
    fn absolute_spawns_dir_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let spawns = dir.path().join("elsewhere");
        let path = dir.path().join("content.toml");
        fs::write(&path, format!("spawns_dir = {:?}\n", spawns.display().to_string())).unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.spawns_dir, spawns);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.toml");
        fs::write(&path, "strict = maybe").unwrap();
        assert!(ConfigLoader::load(&path).is_err());
    }
}
