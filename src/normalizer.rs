//! Expansion of shorthand asset paths into explicit copy rules.

use tracing::{debug, trace};

use crate::asset_paths::{ContainmentCheck, posix};
use crate::models::{AssetPattern, AssetPatternObject};
use crate::probe::DirectoryProbe;
use crate::project::ProjectLayout;

/// Glob used for directory assets: every file at any depth.
pub const DIRECTORY_GLOB: &str = "**/*";

/// A shorthand asset path resolved outside the project's source root.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("The {pattern} asset path must start with the project source root.")]
pub struct MissingSourceRootError {
  /// The asset entry exactly as it was declared.
  pub pattern: String,
}

/// Result type returned by asset normalization.
pub type NormalizeResult<T> = Result<T, MissingSourceRootError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssetKind {
  File,
  Directory,
}

/// Turns `assets` lists into explicit copy rules for a single project.
pub struct AssetNormalizer<'a, P: DirectoryProbe + ?Sized> {
  layout: &'a ProjectLayout,
  probe: &'a P,
  containment: ContainmentCheck,
}

impl<'a, P: DirectoryProbe + ?Sized> AssetNormalizer<'a, P> {
  /// Create a normalizer using string-prefix containment.
  pub fn new(layout: &'a ProjectLayout, probe: &'a P) -> Self {
    Self {
      layout,
      probe,
      containment: ContainmentCheck::default(),
    }
  }

  /// Replace the containment check applied to shorthand paths.
  pub fn with_containment(mut self, containment: ContainmentCheck) -> Self {
    self.containment = containment;
    self
  }

  /// Normalize every entry, preserving order.
  ///
  /// Object entries are returned unchanged. Path entries are checked against the source root,
  /// classified through the probe and expanded. The first path outside the source root fails the
  /// whole call.
  pub fn normalize(&self, patterns: &[AssetPattern]) -> NormalizeResult<Vec<AssetPatternObject>> {
    if patterns.is_empty() {
      return Ok(Vec::new());
    }

    let source_root = self.layout.resolved_source_root();
    trace!(
      workspace_root = %self.layout.workspace_root,
      source_root = %source_root,
      "normalizing {} asset pattern(s)",
      patterns.len()
    );

    patterns
      .iter()
      .map(|pattern| match pattern {
        AssetPattern::Object(object) => Ok(object.clone()),
        AssetPattern::Path(path) => self.expand_path(path, &source_root),
      })
      .collect()
  }

  fn expand_path(&self, pattern: &str, source_root: &str) -> NormalizeResult<AssetPatternObject> {
    let asset_path = posix::normalize(pattern);
    let resolved_asset_path = self.layout.resolve(&asset_path);

    if !self.containment.contains(source_root, &resolved_asset_path) {
      return Err(MissingSourceRootError {
        pattern: pattern.to_string(),
      });
    }

    let (glob, input) = match self.classify(&resolved_asset_path) {
      AssetKind::Directory => (DIRECTORY_GLOB.to_string(), asset_path),
      AssetKind::File => (
        posix::basename(&asset_path).to_string(),
        posix::dirname(&asset_path),
      ),
    };

    let output = posix::relative(source_root, &self.layout.resolve(&input));
    debug!(pattern, %glob, %input, %output, "expanded asset path");

    Ok(AssetPatternObject::new(glob, input, output))
  }

  fn classify(&self, resolved_asset_path: &str) -> AssetKind {
    match self.probe.is_directory(resolved_asset_path) {
      Ok(true) => AssetKind::Directory,
      Ok(false) => AssetKind::File,
      Err(err) => {
        debug!(
          path = resolved_asset_path,
          error = %err,
          "directory probe failed, treating asset as a directory"
        );
        AssetKind::Directory
      }
    }
  }
}

/// Normalize `patterns` for the project at `project_root` inside `workspace_root`.
///
/// `source_root` defaults to `<project_root>/src`. Uses string-prefix containment; build an
/// [`AssetNormalizer`] to choose another check.
pub fn normalize_asset_patterns<P: DirectoryProbe + ?Sized>(
  patterns: &[AssetPattern],
  probe: &P,
  workspace_root: &str,
  project_root: &str,
  source_root: Option<&str>,
) -> NormalizeResult<Vec<AssetPatternObject>> {
  let mut layout = ProjectLayout::new(workspace_root, project_root);
  layout.source_root = source_root.map(str::to_string);

  AssetNormalizer::new(&layout, probe).normalize(patterns)
}
