//! Locating `.names`/`.data` files
//!
//! File resolution goes through the [`FileLocator`] trait so callers (and
//! tests) can swap the directory walk for anything that maps a file name
//! to a path. Any `Fn(&str) -> C45Result<PathBuf>` is a locator.
//!
//! [`DirectoryLocator`] searches each root and its descendants depth-first,
//! visiting a directory's files before its subdirectories, with entries
//! sorted by name. The first match in that order wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{C45Error, C45Result};

/// Resolves a dataset file name to a path
pub trait FileLocator {
    /// Find the file called `file_name`
    fn locate(&self, file_name: &str) -> C45Result<PathBuf>;
}

impl<F> FileLocator for F
where
    F: Fn(&str) -> C45Result<PathBuf>,
{
    fn locate(&self, file_name: &str) -> C45Result<PathBuf> {
        self(file_name)
    }
}

/// Searches directory trees for a file by name
#[derive(Debug, Clone)]
pub struct DirectoryLocator {
    roots: Vec<PathBuf>,
}

impl DirectoryLocator {
    /// Search a single directory tree
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![root.into()],
        }
    }

    /// Search several directory trees, in the order given
    pub fn with_roots<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Add another root, searched after the existing ones
    pub fn add_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Every file called `file_name`, in search order
    pub fn candidates(&self, file_name: &str) -> C45Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        for root in &self.roots {
            if !root.is_dir() {
                tracing::debug!("Skipping missing search root {:?}", root);
                continue;
            }
            walk(root, file_name, &mut found)
                .map_err(|e| C45Error::io(root.display().to_string(), e))?;
        }
        Ok(found)
    }
}

impl FileLocator for DirectoryLocator {
    fn locate(&self, file_name: &str) -> C45Result<PathBuf> {
        let mut candidates = self.candidates(file_name)?.into_iter();
        let first = candidates.next().ok_or_else(|| C45Error::FileNotFound {
            name: file_name.to_string(),
            searched: self
                .roots
                .iter()
                .map(|r| r.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })?;

        let others = candidates.count();
        if others > 0 {
            tracing::warn!(
                "Found {} more candidates for {}, using {:?}",
                others,
                file_name,
                first
            );
        }
        Ok(first)
    }
}

/// Find `file_name` in `start_dir` or any of its descendants
pub fn find_file(file_name: &str, start_dir: impl AsRef<Path>) -> C45Result<PathBuf> {
    DirectoryLocator::new(start_dir.as_ref()).locate(file_name)
}

fn walk(dir: &Path, file_name: &str, found: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());

    let mut subdirs = Vec::new();
    for entry in entries {
        // Symlinks are not followed
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            subdirs.push(entry.path());
        } else if entry.file_name().to_str() == Some(file_name) {
            found.push(entry.path());
        }
    }

    for subdir in subdirs {
        walk(&subdir, file_name, found)?;
    }
    Ok(())
}
