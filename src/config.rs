//! Project configuration loader describing where assets live and how they are declared.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::asset_paths::ContainmentCheck;
use crate::models::AssetPattern;
use crate::project::ProjectLayout;

/// File name searched for by [`ProjectConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "assets.config.json";

/// Project configuration as stored on disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Project directory relative to the workspace root.
    pub root: String,
    /// Source tree relative to the workspace root. Defaults to `<root>/src`.
    pub source_root: Option<String>,
    /// Raw `assets` list.
    pub assets: Vec<AssetPattern>,
    /// Containment check applied to shorthand asset paths.
    pub containment: ContainmentCheck,
}

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        #[source]
        source: io::Error,
    },
    /// Failed to parse the JSON configuration.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl ProjectConfig {
    /// Load configuration from `dir`, falling back to defaults when the file is absent or
    /// cannot be used.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        match Self::load(&candidate) {
            Ok(config) => config,
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %candidate.display(), "no project config found, using defaults");
                Self::default()
            }
            Err(err) => {
                warn!("{err}; using default project config");
                Self::default()
            }
        }
    }

    /// Read configuration from a specific JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Layout of this project inside `workspace_root`.
    pub fn layout(&self, workspace_root: impl Into<String>) -> ProjectLayout {
        ProjectLayout {
            workspace_root: workspace_root.into(),
            project_root: self.root.clone(),
            source_root: self.source_root.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetPatternObject;
    use tempfile::tempdir;

    #[test]
    fn parses_camel_case_fields() {
        let config = ProjectConfig::from_json(
            r#"{
              "root": "proj",
              "sourceRoot": "proj/app",
              "assets": ["proj/app/favicon.ico", { "glob": "*.svg", "input": "icons", "output": "icons" }],
              "containment": "path-segments"
            }"#,
        )
        .unwrap();

        assert_eq!(config.root, "proj");
        assert_eq!(config.source_root.as_deref(), Some("proj/app"));
        assert_eq!(config.containment, ContainmentCheck::PathSegments);
        assert_eq!(config.assets, vec![
            AssetPattern::from("proj/app/favicon.ico"),
            AssetPattern::Object(AssetPatternObject::new("*.svg", "icons", "icons")),
        ]);

        let layout = config.layout("/ws");
        assert_eq!(layout.resolved_source_root(), "/ws/proj/app");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = ProjectConfig::from_json("{}").unwrap();
        assert!(config.root.is_empty());
        assert!(config.source_root.is_none());
        assert!(config.assets.is_empty());
        assert_eq!(config.containment, ContainmentCheck::StringPrefix);
    }

    #[test]
    fn discover_falls_back_to_defaults() {
        let temp = tempdir().expect("failed to create temp dir");
        let config = ProjectConfig::discover(temp.path());
        assert!(config.assets.is_empty());

        fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "not json").unwrap();
        let config = ProjectConfig::discover(temp.path());
        assert!(config.assets.is_empty());
    }

    #[test]
    fn discover_reads_the_default_file() {
        let temp = tempdir().expect("failed to create temp dir");
        fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"{"root": "proj", "assets": ["proj/src/assets"]}"#,
        )
        .unwrap();

        let config = ProjectConfig::discover(temp.path());
        assert_eq!(config.root, "proj");
        assert_eq!(config.assets, vec![AssetPattern::from("proj/src/assets")]);
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join("broken.json");
        fs::write(&path, r#"{"assets": 3}"#).unwrap();

        let err = ProjectConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
