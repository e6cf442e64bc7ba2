//! Asset declarations as they appear in project configuration and after normalization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fully specified copy rule: copy files matching `glob` below `input` into `output`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssetPatternObject {
  /// Glob evaluated relative to `input`.
  pub glob: String,
  /// Directory the glob is applied in, relative to the workspace root.
  pub input: String,
  /// Globs excluded from the match.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ignore: Option<Vec<String>>,
  /// Destination directory within the build output.
  pub output: String,
  /// Fields this crate does not interpret, carried through untouched.
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl AssetPatternObject {
  /// Create a rule without ignore globs or extra fields.
  pub fn new(glob: impl Into<String>, input: impl Into<String>, output: impl Into<String>) -> Self {
    Self {
      glob: glob.into(),
      input: input.into(),
      ignore: None,
      output: output.into(),
      extra: Map::new(),
    }
  }

  /// Attach ignore globs to the rule.
  pub fn with_ignore<I, S>(mut self, ignore: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.ignore = Some(ignore.into_iter().map(Into::into).collect());
    self
  }
}

/// A single entry of an `assets` list.
///
/// JSON strings deserialize into [`AssetPattern::Path`], objects into [`AssetPattern::Object`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AssetPattern {
  /// Shorthand path to a file or directory, relative to the workspace root.
  Path(String),
  /// Explicit copy rule.
  Object(AssetPatternObject),
}

impl From<&str> for AssetPattern {
  fn from(path: &str) -> Self {
    Self::Path(path.to_string())
  }
}

impl From<String> for AssetPattern {
  fn from(path: String) -> Self {
    Self::Path(path)
  }
}

impl From<AssetPatternObject> for AssetPattern {
  fn from(object: AssetPatternObject) -> Self {
    Self::Object(object)
  }
}
