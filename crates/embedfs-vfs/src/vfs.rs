//! The virtual filesystem facade.
//!
//! [`EmbedFs`] serves a fixed tree of embedded records and can be switched,
//! per instance, to pass every operation through to a directory on the real
//! filesystem instead. Lookups normalize the requested path first, so the
//! same logical name resolves identically in both modes.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use embedfs_core::{Error, RecordStore, Result, path};

use crate::handle::{EmbeddedFile, FileHandle, FileMeta, LocalFile};
use crate::mode::ModeSwitch;

/// A read-mostly virtual filesystem over an embedded record store.
///
/// Contents stay compressed until a path is first touched; the decoded
/// bytes are then cached on the record, so repeated reads of the same
/// path cost one decode total. All operations take `&self` and the type
/// is safe to share across threads.
///
/// # Examples
///
/// ```rust
/// use embedfs_vfs::{EmbedFs, StoreBuilder};
///
/// let store = StoreBuilder::new()
///     .dir("/", 0o755)
///     .raw_file("/motd.txt", 0o644, "welcome")
///     .build()?;
/// let fs = EmbedFs::new(store);
///
/// assert_eq!(fs.read_file("/motd.txt")?, b"welcome");
/// # Ok::<(), embedfs_vfs::Error>(())
/// ```
#[derive(Debug)]
pub struct EmbedFs {
    store: RecordStore,
    mode: ModeSwitch,
}

impl EmbedFs {
    /// Creates a filesystem serving `store`, starting in embedded mode.
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            mode: ModeSwitch::new(),
        }
    }

    /// Opens a path for seekable reading.
    ///
    /// Directories can be opened; an embedded directory handle reads as
    /// empty, while a local one supports enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a malformed path,
    /// [`Error::NotExist`] for an unknown one, and [`Error::Codec`] if the
    /// embedded payload fails to decode.
    pub fn open(&self, logical: &str) -> Result<FileHandle> {
        let logical = path::normalize(logical)?;
        if let Some(root) = self.mode.local_root() {
            return Self::open_local(&root, &logical);
        }
        self.open_embedded(&logical)
    }

    fn open_embedded(&self, logical: &str) -> Result<FileHandle> {
        let record = self.store.get(logical).ok_or_else(|| Error::NotExist {
            path: logical.to_string(),
        })?;
        let contents = record.materialize()?;
        debug!(path = logical, len = contents.len(), "opened embedded file");
        let meta = FileMeta::new(
            record.name().to_string(),
            record.size(),
            record.mode(),
            record.is_dir(),
            SystemTime::now(),
        );
        Ok(Box::new(EmbeddedFile::new(meta, contents)))
    }

    fn open_local(root: &Path, logical: &str) -> Result<FileHandle> {
        let local = path::join_local(root, logical);
        let file = fs::File::open(&local)
            .map_err(|err| Error::from_io(local.display().to_string(), err))?;
        debug!(path = %local.display(), "opened local file");
        Ok(Box::new(LocalFile::new(local, file)))
    }

    /// Reads a file's full contents as owned bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a malformed path,
    /// [`Error::NotExist`] for an unknown one, [`Error::NotAFile`] when
    /// the path names a directory, and [`Error::Codec`] if the embedded
    /// payload fails to decode.
    pub fn read_file(&self, logical: &str) -> Result<Vec<u8>> {
        let logical = path::normalize(logical)?;
        if let Some(root) = self.mode.local_root() {
            let local = path::join_local(&root, &logical);
            return fs::read(&local)
                .map_err(|err| Error::from_io(local.display().to_string(), err));
        }

        let record = self.store.get(&logical).ok_or_else(|| Error::NotExist {
            path: logical.clone(),
        })?;
        if record.is_dir() {
            return Err(Error::NotAFile { path: logical });
        }
        let contents = record.materialize()?;
        Ok(contents.to_vec())
    }

    /// Replaces a file's contents.
    ///
    /// In embedded mode the path must already exist in the store; the new
    /// bytes are kept in memory as-is and served to subsequent reads.
    /// Record metadata keeps its embed-time values. In local mode this
    /// writes through to the backing directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a malformed path,
    /// [`Error::NotExist`] when an embedded path is unknown, and
    /// [`Error::NotAFile`] when it names a directory. Local-mode OS
    /// failures surface via [`Error::from_io`].
    pub fn write_file(&self, logical: &str, contents: impl Into<Vec<u8>>) -> Result<()> {
        let logical = path::normalize(logical)?;
        let contents = contents.into();
        if let Some(root) = self.mode.local_root() {
            let local = path::join_local(&root, &logical);
            debug!(path = %local.display(), bytes = contents.len(), "writing local file");
            return fs::write(&local, contents)
                .map_err(|err| Error::from_io(local.display().to_string(), err));
        }

        let record = self.store.get(&logical).ok_or_else(|| Error::NotExist {
            path: logical.clone(),
        })?;
        if record.is_dir() {
            return Err(Error::NotAFile { path: logical });
        }
        debug!(path = logical, bytes = contents.len(), "overwriting embedded file");
        record.overwrite(contents);
        Ok(())
    }

    /// Redirects this instance to a directory on the real filesystem.
    ///
    /// An empty `root` is a no-op that leaves the instance embedded.
    pub fn set_local(&self, root: impl Into<PathBuf>) {
        let root = root.into();
        debug!(root = %root.display(), "switching to local mode");
        self.mode.set_local(root);
    }

    /// Returns this instance to embedded mode.
    pub fn set_embedded(&self) {
        debug!("switching to embedded mode");
        self.mode.set_embedded();
    }

    /// Whether operations currently pass through to the real filesystem.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.mode.is_local()
    }

    /// Whether the embedded store holds `logical`, regardless of mode.
    #[must_use]
    pub fn contains(&self, logical: &str) -> bool {
        path::normalize(logical).is_ok_and(|logical| self.store.contains(&logical))
    }

    /// Number of embedded records, directories included.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    /// All embedded paths in sorted order.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        self.store.paths()
    }
}
