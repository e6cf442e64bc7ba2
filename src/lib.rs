#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod models;
pub mod normalizer;
pub mod probe;
pub mod project;

pub use asset_paths::ContainmentCheck;
pub use config::{ConfigError, ProjectConfig};
pub use models::{AssetPattern, AssetPatternObject};
pub use normalizer::{AssetNormalizer, MissingSourceRootError, normalize_asset_patterns};
pub use probe::{DirectoryProbe, FsProbe, MemoryProbe};
pub use project::ProjectLayout;
