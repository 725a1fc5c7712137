//! Record store and its builder.
//!
//! The store is a flat map from logical path to [`FileRecord`]. Its key set
//! is fixed at build time; only the payload cells inside the records mutate
//! afterwards, which is what makes unsynchronized concurrent lookup safe.
//!
//! # Examples
//!
//! Generated artifacts reconstruct their store through [`StoreBuilder`]:
//!
//! ```rust
//! use embedfs_core::{codec, StoreBuilder};
//!
//! let token = codec::encode(b"hello")?;
//! let store = StoreBuilder::new()
//!     .dir("/", 0o755)
//!     .file("/a.txt", 5, 0o644, token)
//!     .build()?;
//!
//! let record = store.get("/a.txt").expect("present");
//! assert_eq!(&*record.materialize()?, b"hello");
//! # Ok::<(), embedfs_core::Error>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::path;
use crate::record::FileRecord;
use crate::{Error, Result};

/// Immutable collection of embedded records keyed by logical path.
pub struct RecordStore {
    records: HashMap<String, Arc<FileRecord>>,
}

impl RecordStore {
    /// Looks up a record by its normalized logical path.
    ///
    /// Callers are expected to normalize first (see
    /// [`path::normalize`]); the store itself does exact key matching.
    #[must_use]
    pub fn get(&self, logical: &str) -> Option<&Arc<FileRecord>> {
        self.records.get(logical)
    }

    /// Whether a record exists for the normalized logical path.
    #[must_use]
    pub fn contains(&self, logical: &str) -> bool {
        self.records.contains_key(logical)
    }

    /// Number of records, directories included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All logical paths in the store, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.records.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.records.len())
            .finish()
    }
}

/// Fluent builder for a [`RecordStore`].
///
/// Invalid paths do not abort the chain; errors are collected and the first
/// one is surfaced by [`build`](Self::build). Adding the same path twice
/// keeps the last definition.
#[derive(Debug, Default)]
pub struct StoreBuilder {
    records: HashMap<String, Arc<FileRecord>>,
    errors: Vec<Error>,
}

impl StoreBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file entry holding an encoded payload token.
    ///
    /// `size` is the original pre-compression byte length, as captured at
    /// embed time.
    #[must_use]
    pub fn file(
        mut self,
        path: impl Into<String>,
        size: u64,
        mode: u32,
        token: impl Into<String>,
    ) -> Self {
        match path::normalize(&path.into()) {
            Ok(logical) => {
                let name = path::base_name(&logical).to_string();
                self.records.insert(
                    logical.clone(),
                    Arc::new(FileRecord::encoded(logical, name, size, mode, token.into())),
                );
            }
            Err(err) => self.errors.push(err),
        }
        self
    }

    /// Adds a file entry directly from raw bytes, bypassing the codec.
    ///
    /// Useful for tests and for programmatic callers that already hold the
    /// contents; the record starts out decoded.
    #[must_use]
    pub fn raw_file(mut self, path: impl Into<String>, mode: u32, contents: impl Into<Vec<u8>>) -> Self {
        match path::normalize(&path.into()) {
            Ok(logical) => {
                let name = path::base_name(&logical).to_string();
                self.records.insert(
                    logical.clone(),
                    Arc::new(FileRecord::decoded(logical, name, mode, contents.into())),
                );
            }
            Err(err) => self.errors.push(err),
        }
        self
    }

    /// Adds a directory entry.
    #[must_use]
    pub fn dir(mut self, path: impl Into<String>, mode: u32) -> Self {
        match path::normalize(&path.into()) {
            Ok(logical) => {
                let name = path::base_name(&logical).to_string();
                self.records.insert(
                    logical.clone(),
                    Arc::new(FileRecord::directory(logical, name, mode)),
                );
            }
            Err(err) => self.errors.push(err),
        }
        self
    }

    /// Finalizes the store.
    ///
    /// # Errors
    ///
    /// Returns the first error collected while adding entries.
    pub fn build(self) -> Result<RecordStore> {
        if let Some(err) = self.errors.into_iter().next() {
            return Err(err);
        }
        Ok(RecordStore {
            records: self.records,
        })
    }
}
