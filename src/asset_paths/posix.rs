//! Lexical path operations over `/`-separated strings.
//!
//! Nothing in here touches the filesystem. Asset declarations are written with forward slashes
//! regardless of platform, so backslashes are folded into `/` on the way in, the same way the
//! rest of the crate treats paths in generated configuration.

/// Collapse `.`, `..`, repeated and trailing separators.
///
/// A leading `..` survives in relative paths and is dropped at the root of absolute ones. An
/// empty relative result becomes `.` and an empty absolute result becomes `/`.
pub fn normalize(path: &str) -> String {
    let path = path.replace('\\', "/");
    let absolute = path.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(segment),
            },
            _ => segments.push(segment),
        }
    }

    if absolute {
        format!("/{}", segments.join("/"))
    } else if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

/// Returns `true` for paths rooted at `/`.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || path.starts_with('\\')
}

/// Join two paths and normalize the result.
pub fn join(base: &str, path: &str) -> String {
    if base.is_empty() {
        return normalize(path);
    }
    if path.is_empty() {
        return normalize(base);
    }

    normalize(&format!("{base}/{path}"))
}

/// Resolve `path` against `base`, keeping `path` when it is already absolute.
pub fn resolve(base: &str, path: &str) -> String {
    if is_absolute(path) {
        normalize(path)
    } else {
        join(base, path)
    }
}

/// Lexical path from `from` to `to`; `.` when both name the same location.
pub fn relative(from: &str, to: &str) -> String {
    let from = normalize(from);
    let to = normalize(to);
    if from == to {
        return ".".to_string();
    }

    let from_segments = segments(&from);
    let to_segments = segments(&to);
    let shared = from_segments
        .iter()
        .zip(&to_segments)
        .take_while(|(left, right)| left == right)
        .count();

    let mut parts = vec![".."; from_segments.len() - shared];
    parts.extend_from_slice(&to_segments[shared..]);

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// Everything before the final segment.
pub fn dirname(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.starts_with('/') { "/" } else { "." }.to_string();
    }

    match trimmed.rfind('/') {
        None => ".".to_string(),
        Some(0) => "/".to_string(),
        Some(index) => trimmed[..index].to_string(),
    }
}

/// The final segment of `path`.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_dots_and_separators() {
        assert_eq!(normalize("./proj/src/./assets/"), "proj/src/assets");
        assert_eq!(normalize("proj//src/../lib"), "proj/lib");
        assert_eq!(normalize(r"proj\src\favicon.ico"), "proj/src/favicon.ico");
        assert_eq!(normalize("../shared/../assets"), "../assets");
        assert_eq!(normalize("/ws/../../etc"), "/etc");
    }

    #[test]
    fn normalizes_empty_paths_to_roots() {
        assert_eq!(normalize(""), ".");
        assert_eq!(normalize("./"), ".");
        assert_eq!(normalize("a/.."), ".");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("/a/.."), "/");
    }

    #[test]
    fn joins_and_resolves() {
        assert_eq!(join("proj", "src"), "proj/src");
        assert_eq!(join("", "src"), "src");
        assert_eq!(join("proj/", ""), "proj");
        assert_eq!(resolve("/ws", "proj/src"), "/ws/proj/src");
        assert_eq!(resolve("/ws", "/elsewhere/src"), "/elsewhere/src");
        assert_eq!(resolve("/ws", "."), "/ws");
        assert_eq!(resolve("/ws", "../outside"), "/outside");
    }

    #[test]
    fn computes_relative_paths() {
        assert_eq!(relative("/ws/proj/src", "/ws/proj/src/assets"), "assets");
        assert_eq!(relative("/ws/proj/src", "/ws/proj/src"), ".");
        assert_eq!(relative("/ws/proj/src", "/ws/proj/srcish"), "../srcish");
        assert_eq!(relative("/ws/a/b", "/ws/c"), "../../c");
        assert_eq!(relative("/ws/proj/src/", "/ws/proj/src/a/b/"), "a/b");
    }

    #[test]
    fn splits_dirname_and_basename() {
        assert_eq!(dirname("proj/src/file.txt"), "proj/src");
        assert_eq!(basename("proj/src/file.txt"), "file.txt");
        assert_eq!(dirname("file.txt"), ".");
        assert_eq!(basename("file.txt"), "file.txt");
        assert_eq!(dirname("/file.txt"), "/");
        assert_eq!(dirname("proj/src/"), "proj");
        assert_eq!(basename("proj/src/"), "src");
    }
}
