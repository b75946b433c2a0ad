//! Booklet discovery

use std::path::{Path, PathBuf};

use glob::glob;

use crate::error::{Error, Result};

/// Naming convention for exam booklets produced by the exam website.
pub const BOOKLET_PATTERN: &str = "*-book.pdf";

/// Find all booklet PDFs in a directory, sorted lexically.
///
/// An empty result is not an error here; the caller decides whether
/// zero booklets is acceptable.
pub fn find_booklets(directory: &Path) -> Result<Vec<PathBuf>> {
    let pattern = directory.join(BOOKLET_PATTERN);
    let pattern = pattern.to_string_lossy();

    let mut paths = Vec::new();
    for entry in glob(&pattern).map_err(|e| Error::InvalidGlob(e.to_string()))? {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => return Err(Error::Io(e.into_error())),
        }
    }

    // Sort paths for consistent ordering
    paths.sort();

    Ok(paths)
}
