use serde::{Deserialize, Serialize};

/// How a resolved asset path is tested against the resolved source root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainmentCheck {
    /// Plain string prefix test on the resolved paths.
    ///
    /// `/ws/proj/srcish/logo.png` passes for a source root of `/ws/proj/src`.
    #[default]
    StringPrefix,
    /// Prefix test that only accepts matches ending on a segment boundary.
    PathSegments,
}

impl ContainmentCheck {
    /// Returns `true` when `candidate` lies inside `root` under this check.
    pub fn contains(self, root: &str, candidate: &str) -> bool {
        match self {
            Self::StringPrefix => candidate.starts_with(root),
            Self::PathSegments => {
                if candidate == root {
                    return true;
                }
                if root == "/" {
                    return candidate.starts_with('/');
                }

                candidate
                    .strip_prefix(root)
                    .is_some_and(|suffix| suffix.starts_with('/'))
            }
        }
    }
}
