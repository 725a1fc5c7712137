//! Per-entry storage with decode-on-first-access caching.
//!
//! A [`FileRecord`] starts out holding the compressed text token emitted at
//! generation time. The first [`materialize`](FileRecord::materialize) call
//! runs the codec under the record's lock and installs the raw bytes;
//! every later call hands out the same shared buffer without touching the
//! codec again. Overwrites replace the payload with caller-supplied raw
//! bytes, after which the token is gone for the life of the process.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::codec;
use crate::Result;

/// Payload cell state. `Encoded` holds the generated token; `Decoded` holds
/// raw bytes, shared so repeated opens are allocation-free.
enum Payload {
    Encoded(String),
    Decoded(Arc<[u8]>),
}

/// One embedded filesystem entry: metadata plus a lazily decoded payload.
///
/// All metadata is fixed at embed time. Only the payload cell mutates, and
/// only under the record's own lock, so two callers on different records
/// never contend.
pub struct FileRecord {
    path: String,
    name: String,
    size: u64,
    mode: u32,
    is_dir: bool,
    payload: Mutex<Payload>,
}

impl FileRecord {
    /// Creates a record whose payload is still in encoded token form.
    pub(crate) fn encoded(path: String, name: String, size: u64, mode: u32, token: String) -> Self {
        Self {
            path,
            name,
            size,
            mode,
            is_dir: false,
            payload: Mutex::new(Payload::Encoded(token)),
        }
    }

    /// Creates a record directly from raw bytes, skipping the codec.
    pub(crate) fn decoded(path: String, name: String, mode: u32, contents: Vec<u8>) -> Self {
        Self {
            path,
            name,
            size: contents.len() as u64,
            mode,
            is_dir: false,
            payload: Mutex::new(Payload::Decoded(Arc::from(contents))),
        }
    }

    /// Creates a directory record. Directories carry an empty payload and
    /// are born in decoded state — there is nothing to materialize.
    pub(crate) fn directory(path: String, name: String, mode: u32) -> Self {
        Self {
            path,
            name,
            size: 0,
            mode,
            is_dir: true,
            payload: Mutex::new(Payload::Decoded(Arc::from(Vec::new()))),
        }
    }

    /// Logical path of this entry, the store key.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base name (last path segment).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Original byte length captured at embed time.
    ///
    /// Runtime overwrites do not update this value; it describes what was
    /// embedded, not what the payload currently holds.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Permission bits captured at embed time.
    #[must_use]
    pub const fn mode(&self) -> u32 {
        self.mode
    }

    /// Whether this entry is a directory.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Whether the payload has been converted to raw bytes.
    ///
    /// Directories and overwritten records report `true`; records still
    /// holding their generated token report `false`.
    #[must_use]
    pub fn is_materialized(&self) -> bool {
        matches!(&*self.payload.lock().unwrap(), Payload::Decoded(_))
    }

    /// Returns the raw contents, decoding the embedded token on first access.
    ///
    /// The decode runs under the record's lock and replaces the token in
    /// place, so concurrent callers serialize here and at most one of them
    /// ever does the codec work; the rest receive the already-installed
    /// buffer. All successful calls return handles to the *same* shared
    /// allocation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Codec`](crate::Error::Codec) if the token is corrupt
    /// or truncated. The payload cell is left in its encoded state, so a
    /// retry sees the identical input (and the identical failure) rather
    /// than a partially decoded record.
    pub fn materialize(&self) -> Result<Arc<[u8]>> {
        let mut payload = self.payload.lock().unwrap();
        match &*payload {
            Payload::Decoded(bytes) => Ok(Arc::clone(bytes)),
            Payload::Encoded(token) => {
                let raw = codec::decode(token)?;
                let bytes: Arc<[u8]> = Arc::from(raw);
                *payload = Payload::Decoded(Arc::clone(&bytes));
                Ok(bytes)
            }
        }
    }

    /// Replaces the payload with raw bytes, marking the record decoded.
    ///
    /// Later reads return these bytes verbatim; they are never fed through
    /// the codec. The override lives in memory only and does not survive
    /// the process.
    pub fn overwrite(&self, contents: Vec<u8>) {
        let mut payload = self.payload.lock().unwrap();
        *payload = Payload::Decoded(Arc::from(contents));
    }
}

impl fmt::Debug for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileRecord")
            .field("path", &self.path)
            .field("size", &self.size)
            .field("mode", &format_args!("{:o}", self.mode))
            .field("is_dir", &self.is_dir)
            .field("materialized", &self.is_materialized())
            .finish()
    }
}
