//! Path classification
//!
//! This module decides whether a path names a file, a directory, or neither.

use std::path::Path;

/// Kind of filesystem item a path resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// The path exists as neither file nor directory (including nonexistent paths)
    Unknown,
    /// Regular file
    File,
    /// Directory
    Directory,
}

/// Trait for path classifiers
pub trait Classify {
    /// Classify the given path
    ///
    /// Must never fail: syntactically invalid or nonexistent paths classify
    /// as [`ItemKind::Unknown`]. No caching; the answer may change between
    /// calls if the filesystem mutates mid-walk.
    fn classify(&self, path: &Path) -> ItemKind;
}

/// Classifier backed by the live filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsClassifier;

impl FsClassifier {
    /// Create a new FsClassifier
    pub fn new() -> Self {
        Self
    }
}

impl Classify for FsClassifier {
    fn classify(&self, path: &Path) -> ItemKind {
        if path.is_dir() {
            ItemKind::Directory
        } else if path.is_file() {
            ItemKind::File
        } else {
            ItemKind::Unknown
        }
    }
}
