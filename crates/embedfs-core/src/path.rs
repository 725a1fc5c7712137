//! Logical path handling.
//!
//! Store keys are *logical paths*: forward-slash separated, rooted at `/`,
//! independent of the host filesystem's syntax. Every public operation
//! normalizes the caller's input through [`normalize`] before touching the
//! store, so `"a.txt"`, `"/a.txt"` and `"//a.txt"` all address the same
//! record.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Normalizes a caller-supplied path into canonical logical form.
///
/// Backslashes are treated as separators, a leading `/` is forced,
/// redundant separators and `.` segments collapse, and a bare root
/// normalizes to `"/"`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for empty input and for paths with
/// `..` segments — logical paths always address *into* the embedded tree,
/// never out of it.
///
/// # Examples
///
/// ```rust
/// use embedfs_core::path::normalize;
///
/// assert_eq!(normalize("sub//b.bin")?, "/sub/b.bin");
/// assert_eq!(normalize("/./a.txt")?, "/a.txt");
/// assert_eq!(normalize("/")?, "/");
/// assert!(normalize("../escape").is_err());
/// # Ok::<(), embedfs_core::Error>(())
/// ```
pub fn normalize(path: &str) -> Result<String> {
    if path.is_empty() {
        return Err(Error::InvalidArgument {
            message: "path is empty".to_string(),
        });
    }

    let unified = path.replace('\\', "/");
    let mut segments = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                return Err(Error::InvalidArgument {
                    message: format!("path escapes the root: {path}"),
                });
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        Ok("/".to_string())
    } else {
        Ok(format!("/{}", segments.join("/")))
    }
}

/// Maps a logical path to a real location under a local root directory.
///
/// The logical root `"/"` maps to the local root itself.
///
/// # Examples
///
/// ```rust
/// use std::path::Path;
/// use embedfs_core::path::join_local;
///
/// let disk = join_local(Path::new("/srv/assets"), "/sub/b.bin");
/// assert_eq!(disk, Path::new("/srv/assets/sub/b.bin"));
/// ```
#[must_use]
pub fn join_local(root: &Path, logical: &str) -> PathBuf {
    let relative = logical.trim_start_matches('/');
    if relative.is_empty() {
        root.to_path_buf()
    } else {
        root.join(relative)
    }
}

/// Returns the base name of a normalized logical path.
///
/// The root path `"/"` is its own name.
#[must_use]
pub fn base_name(logical: &str) -> &str {
    match logical.rsplit('/').next() {
        Some("") | None => "/",
        Some(name) => name,
    }
}
