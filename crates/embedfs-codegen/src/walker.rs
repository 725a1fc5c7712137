//! Deterministic directory traversal and payload encoding.
//!
//! The walker visits the tree in lexical order per directory level, so the
//! entry list (and therefore the generated artifact) is stable across runs
//! on the same input. Any I/O failure aborts the walk; the caller never
//! sees a partial entry list.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use embedfs_core::{Error, codec, path};

use crate::error::Result;

/// One filesystem entry prepared for embedding.
#[derive(Debug, Clone)]
pub struct PackEntry {
    /// Logical path of the entry, rooted at `/`.
    pub path: String,
    /// Original size of the file in bytes; `0` for directories.
    pub size: u64,
    /// Permission bits captured from the source tree.
    pub mode: u32,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Encoded payload token; empty for directories.
    pub token: String,
}

/// Walks `root` and returns entries for every contained path, excluding
/// the generation target itself.
///
/// The root directory appears as the `/` entry. File payloads are read and
/// encoded during the walk.
///
/// # Errors
///
/// Returns [`Error::NotExist`] when the root is missing, [`Error::NotAFile`]
/// when it is a regular file, and propagates any read, permission, or
/// encoding failure for the contained entries. All failures are fatal to
/// the run.
pub fn collect_entries(root: &Path, target: &Path) -> Result<Vec<PackEntry>> {
    let root = root
        .canonicalize()
        .map_err(|err| Error::from_io(root.display().to_string(), err))?;
    if !root.is_dir() {
        return Err(Error::NotAFile {
            path: root.display().to_string(),
        }
        .into());
    }

    // The target usually sits inside the tree but may not exist yet.
    let target = target.canonicalize().ok();

    let mut entries = Vec::new();
    for walked in WalkDir::new(&root).sort_by_file_name() {
        let entry = walked.map_err(|err| walk_error(&root, err))?;
        if target.as_deref() == Some(entry.path()) {
            continue;
        }

        let meta = entry
            .metadata()
            .map_err(|err| walk_error(entry.path(), err))?;
        let logical = logical_path(&root, entry.path())?;

        if meta.is_dir() {
            entries.push(PackEntry {
                path: logical,
                size: 0,
                mode: permission_bits(&meta),
                is_dir: true,
                token: String::new(),
            });
        } else {
            let bytes = fs::read(entry.path())
                .map_err(|err| Error::from_io(entry.path().display().to_string(), err))?;
            let token = codec::encode(&bytes)?;
            debug!(path = logical, size = bytes.len(), "embedding file");
            entries.push(PackEntry {
                path: logical,
                size: bytes.len() as u64,
                mode: permission_bits(&meta),
                is_dir: false,
                token,
            });
        }
    }

    Ok(entries)
}

fn walk_error(fallback: &Path, err: walkdir::Error) -> Error {
    let path = err
        .path()
        .map_or_else(|| fallback.to_path_buf(), Path::to_path_buf);
    Error::from_io(path.display().to_string(), io::Error::from(err))
}

fn logical_path(root: &Path, absolute: &Path) -> Result<String> {
    let rel: PathBuf = absolute
        .strip_prefix(root)
        .map_err(|_| Error::InvalidArgument {
            message: format!(
                "walked entry {} lies outside the root {}",
                absolute.display(),
                root.display()
            ),
        })?
        .to_path_buf();
    let joined = format!("/{}", rel.display());
    Ok(path::normalize(&joined)?)
}

#[cfg(unix)]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    if meta.is_dir() { 0o755 } else { 0o644 }
}
