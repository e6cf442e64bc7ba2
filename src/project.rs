//! Project coordinates: workspace root, project root and source root.

use crate::asset_paths::posix;

/// Directory appended to the project root when no source root is configured.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Where a project lives inside its workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Absolute path every other path is resolved against.
    pub workspace_root: String,
    /// Project directory, relative to the workspace root.
    pub project_root: String,
    /// Source tree, relative to the workspace root. Defaults to `<project_root>/src`.
    pub source_root: Option<String>,
}

impl ProjectLayout {
    /// Layout without an explicit source root.
    pub fn new(workspace_root: impl Into<String>, project_root: impl Into<String>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            project_root: project_root.into(),
            source_root: None,
        }
    }

    /// Set the source root explicitly.
    pub fn with_source_root(mut self, source_root: impl Into<String>) -> Self {
        self.source_root = Some(source_root.into());
        self
    }

    /// Source root as configured, or `<project_root>/src`.
    ///
    /// An empty configured value counts as unset.
    pub fn effective_source_root(&self) -> String {
        match self.source_root.as_deref() {
            Some(source_root) if !source_root.is_empty() => source_root.to_string(),
            _ => posix::join(&self.project_root, DEFAULT_SOURCE_DIR),
        }
    }

    /// Absolute source root.
    pub fn resolved_source_root(&self) -> String {
        self.resolve(&self.effective_source_root())
    }

    /// Resolve a workspace-relative path to an absolute one.
    pub fn resolve(&self, path: &str) -> String {
        posix::resolve(&self.workspace_root, path)
    }
}
