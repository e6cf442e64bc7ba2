//! Directory probes used to classify shorthand asset paths.

use std::collections::BTreeSet;
use std::fs;
use std::io;

use crate::asset_paths::posix;

/// Answers whether an absolute path names a directory.
///
/// Errors mean "unknown": the path may not exist, or the backing store may not support the
/// question. Callers decide how to treat that.
pub trait DirectoryProbe {
  /// Returns `Ok(true)` for directories and `Ok(false)` for anything else that exists.
  fn is_directory(&self, path: &str) -> io::Result<bool>;
}

impl<F> DirectoryProbe for F
where
  F: Fn(&str) -> io::Result<bool>,
{
  fn is_directory(&self, path: &str) -> io::Result<bool> {
    self(path)
  }
}

/// Probe backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl DirectoryProbe for FsProbe {
  fn is_directory(&self, path: &str) -> io::Result<bool> {
    fs::metadata(path).map(|metadata| metadata.is_dir())
  }
}

/// In-memory directory tree for callers that describe the workspace without touching disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryProbe {
  directories: BTreeSet<String>,
  files: BTreeSet<String>,
}

impl MemoryProbe {
  /// Create an empty tree. Every lookup fails until paths are added.
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a directory along with its ancestors.
  pub fn add_dir(&mut self, path: &str) -> &mut Self {
    let path = posix::normalize(path);
    self.insert_ancestors(&path);
    self.directories.insert(path);
    self
  }

  /// Register a file; its ancestors become directories.
  pub fn add_file(&mut self, path: &str) -> &mut Self {
    let path = posix::normalize(path);
    self.insert_ancestors(&path);
    self.files.insert(path);
    self
  }

  fn insert_ancestors(&mut self, path: &str) {
    let mut current = posix::dirname(path);
    loop {
      let is_root = current == "/" || current == ".";
      let parent = posix::dirname(&current);
      self.directories.insert(current);
      if is_root {
        break;
      }
      current = parent;
    }
  }
}

impl DirectoryProbe for MemoryProbe {
  fn is_directory(&self, path: &str) -> io::Result<bool> {
    let path = posix::normalize(path);
    if self.directories.contains(&path) {
      Ok(true)
    } else if self.files.contains(&path) {
      Ok(false)
    } else {
      Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("{path} does not exist"),
      ))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn memory_probe_tracks_files_and_ancestors() {
    let mut probe = MemoryProbe::new();
    probe.add_file("/ws/proj/src/assets/logo.png");

    assert!(!probe.is_directory("/ws/proj/src/assets/logo.png").unwrap());
    assert!(probe.is_directory("/ws/proj/src/assets").unwrap());
    assert!(probe.is_directory("/ws/proj/src/").unwrap());
    assert!(probe.is_directory("/").unwrap());
  }

  #[test]
  fn memory_probe_reports_unknown_paths_as_not_found() {
    let mut probe = MemoryProbe::new();
    probe.add_dir("/ws/proj/src");

    let err = probe.is_directory("/ws/proj/src/missing").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
  }

  #[test]
  fn fs_probe_reads_metadata() -> io::Result<()> {
    let temp = tempdir()?;
    let dir = temp.path().join("assets");
    fs::create_dir_all(&dir)?;
    let file = dir.join("logo.png");
    fs::write(&file, b"png")?;

    let probe = FsProbe;
    assert!(probe.is_directory(&dir.to_string_lossy())?);
    assert!(!probe.is_directory(&file.to_string_lossy())?);
    assert!(probe.is_directory(&dir.join("missing").to_string_lossy()).is_err());

    Ok(())
  }

  #[test]
  fn closures_act_as_probes() {
    let probe = |path: &str| -> io::Result<bool> { Ok(path.ends_with("/assets")) };
    assert!(probe.is_directory("/ws/proj/src/assets").unwrap());
    assert!(!probe.is_directory("/ws/proj/src/main.ts").unwrap());
  }
}
