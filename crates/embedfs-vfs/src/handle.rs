//! File handles returned by [`EmbedFs::open`](crate::EmbedFs::open).
//!
//! [`VirtualFile`] is the capability a handle offers: seekable reads plus
//! metadata, usable anywhere a generic file-consuming API expects a real
//! file. Two variants implement it — [`EmbeddedFile`] over an in-memory
//! payload and [`LocalFile`] wrapping a real OS file — selected by the
//! owning filesystem's mode switch at open time. Closing is implicit:
//! dropping a handle releases whatever it holds, and embedded handles hold
//! no OS resource at all.

use std::fmt;
use std::fs;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;

use embedfs_core::{Error, Result};

/// Metadata describing an open virtual file.
#[derive(Debug, Clone)]
pub struct FileMeta {
    name: String,
    size: u64,
    mode: u32,
    is_dir: bool,
    modified: SystemTime,
}

impl FileMeta {
    pub(crate) const fn new(
        name: String,
        size: u64,
        mode: u32,
        is_dir: bool,
        modified: SystemTime,
    ) -> Self {
        Self {
            name,
            size,
            mode,
            is_dir,
            modified,
        }
    }

    /// Builds metadata from an OS metadata record (local mode).
    pub(crate) fn from_std(name: String, meta: &fs::Metadata) -> Self {
        Self {
            name,
            size: meta.len(),
            mode: permission_bits(meta),
            is_dir: meta.is_dir(),
            modified: meta.modified().unwrap_or_else(|_| SystemTime::now()),
        }
    }

    /// Base name of the entry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Byte length of the entry.
    ///
    /// For embedded entries this is the size captured at embed time;
    /// runtime overwrites do not update it.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Permission bits.
    #[must_use]
    pub const fn mode(&self) -> u32 {
        self.mode
    }

    /// Whether the entry is a directory.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Modification time.
    ///
    /// Embedded entries do not preserve original timestamps; their
    /// modification time is synthesized at each metadata query.
    #[must_use]
    pub const fn modified(&self) -> SystemTime {
        self.modified
    }
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

/// Read-only, seekable access to one virtual file.
///
/// Implementors are interchangeable with a real file for reading: byte
/// streams via [`Read`], random access via [`Seek`], and metadata on
/// demand. Directory enumeration exists on the interface for the local
/// variant's sake; see [`read_dir`](Self::read_dir) for the embedded
/// variant's behavior.
pub trait VirtualFile: Read + Seek + Send + fmt::Debug {
    /// Returns metadata for the open entry.
    ///
    /// # Errors
    ///
    /// Local handles surface OS metadata failures; embedded handles cannot
    /// fail here.
    fn metadata(&self) -> Result<FileMeta>;

    /// Lists the entries of an open directory.
    ///
    /// # Errors
    ///
    /// Local handles surface OS errors (including being asked to enumerate
    /// a non-directory).
    ///
    /// # Panics
    ///
    /// Embedded handles panic; the embedded tree is not enumerable, and
    /// an empty listing would be wrong rather than harmless.
    fn read_dir(&self) -> Result<Vec<FileMeta>>;
}

/// Boxed handle returned by [`EmbedFs::open`](crate::EmbedFs::open).
pub type FileHandle = Box<dyn VirtualFile>;

/// Handle over an embedded record's decoded payload.
///
/// Holds a shared reference to the record's cached bytes; creating one
/// after the first decode copies nothing.
pub struct EmbeddedFile {
    meta: FileMeta,
    cursor: Cursor<Arc<[u8]>>,
}

impl EmbeddedFile {
    pub(crate) fn new(meta: FileMeta, contents: Arc<[u8]>) -> Self {
        Self {
            meta,
            cursor: Cursor::new(contents),
        }
    }
}

impl Read for EmbeddedFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl Seek for EmbeddedFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}

impl VirtualFile for EmbeddedFile {
    fn metadata(&self) -> Result<FileMeta> {
        let mut meta = self.meta.clone();
        meta.modified = SystemTime::now();
        Ok(meta)
    }

    fn read_dir(&self) -> Result<Vec<FileMeta>> {
        panic!(
            "directory enumeration is not supported for embedded entries (requested for {:?})",
            self.meta.name
        );
    }
}

impl fmt::Debug for EmbeddedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedFile")
            .field("name", &self.meta.name)
            .field("len", &self.cursor.get_ref().len())
            .field("pos", &self.cursor.position())
            .finish()
    }
}

/// Handle over a real file, used in local mode.
#[derive(Debug)]
pub struct LocalFile {
    path: PathBuf,
    inner: fs::File,
}

impl LocalFile {
    pub(crate) const fn new(path: PathBuf, inner: fs::File) -> Self {
        Self { path, inner }
    }
}

impl Read for LocalFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Seek for LocalFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

impl VirtualFile for LocalFile {
    fn metadata(&self) -> Result<FileMeta> {
        let meta = self
            .inner
            .metadata()
            .map_err(|err| Error::from_io(self.path.display().to_string(), err))?;
        let name = self.path.file_name().map_or_else(
            || "/".to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        Ok(FileMeta::from_std(name, &meta))
    }

    fn read_dir(&self) -> Result<Vec<FileMeta>> {
        let reader = fs::read_dir(&self.path)
            .map_err(|err| Error::from_io(self.path.display().to_string(), err))?;
        let mut entries = Vec::new();
        for entry in reader {
            let entry = entry.map_err(|err| Error::from_io(self.path.display().to_string(), err))?;
            let meta = entry
                .metadata()
                .map_err(|err| Error::from_io(entry.path().display().to_string(), err))?;
            entries.push(FileMeta::from_std(
                entry.file_name().to_string_lossy().into_owned(),
                &meta,
            ));
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    fn embedded(contents: &[u8]) -> EmbeddedFile {
        let meta = FileMeta::new(
            "a.txt".to_string(),
            contents.len() as u64,
            0o644,
            false,
            SystemTime::now(),
        );
        EmbeddedFile::new(meta, Arc::from(contents.to_vec()))
    }

    #[test]
    fn test_embedded_reads_from_offset_zero() {
        let mut file = embedded(b"hello world");
        let mut buf = [0u8; 5];
        file.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"hello");
    }

    #[test]
    fn test_embedded_seek_and_read() {
        let mut file = embedded(b"hello world");
        file.seek(SeekFrom::Start(6)).unwrap();
        let mut rest = String::new();
        file.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "world");

        file.seek(SeekFrom::End(-5)).unwrap();
        let mut tail = String::new();
        file.read_to_string(&mut tail).unwrap();
        assert_eq!(tail, "world");
    }

    #[test]
    fn test_embedded_metadata_synthesizes_mtime() {
        let file = embedded(b"hello");
        let before = SystemTime::now() - Duration::from_secs(1);
        let meta = file.metadata().unwrap();
        assert_eq!(meta.name(), "a.txt");
        assert_eq!(meta.size(), 5);
        assert_eq!(meta.mode(), 0o644);
        assert!(!meta.is_dir());
        assert!(meta.modified() > before);
    }

    #[test]
    #[should_panic(expected = "directory enumeration is not supported")]
    fn test_embedded_read_dir_panics() {
        let file = embedded(b"hello");
        let _ = file.read_dir();
    }

    #[test]
    fn test_local_file_read_and_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.txt");
        fs::File::create(&path)
            .unwrap()
            .write_all(b"on disk")
            .unwrap();

        let mut file = LocalFile::new(path.clone(), fs::File::open(&path).unwrap());
        let mut contents = String::new();
        file.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "on disk");

        let meta = file.metadata().unwrap();
        assert_eq!(meta.name(), "local.txt");
        assert_eq!(meta.size(), 7);
        assert!(!meta.is_dir());
    }

    #[test]
    fn test_local_read_dir_lists_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), b"b").unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let handle = LocalFile::new(
            dir.path().to_path_buf(),
            fs::File::open(dir.path()).unwrap(),
        );
        let entries = handle.read_dir().unwrap();
        let names: Vec<&str> = entries.iter().map(FileMeta::name).collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "sub"]);
        assert!(entries[2].is_dir());
    }

    #[test]
    fn test_local_read_dir_on_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        fs::write(&path, b"x").unwrap();

        let handle = LocalFile::new(path.clone(), fs::File::open(&path).unwrap());
        assert!(handle.read_dir().is_err());
    }
}
