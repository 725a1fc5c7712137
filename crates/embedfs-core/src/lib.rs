//! Core primitives for embedded virtual filesystems.
//!
//! This crate carries the pieces shared by the build-time packer and the
//! runtime filesystem:
//!
//! - **[`codec`]** — gzip + base64 payload codec, the normative wire format
//!   for embedded file contents.
//! - **[`record`]** — [`FileRecord`], a per-entry payload cell that decodes
//!   its token once, under its own lock, and caches the raw bytes.
//! - **[`store`]** — [`RecordStore`] mapping logical paths to records, and
//!   the [`StoreBuilder`] generated artifacts use to reconstruct it.
//! - **[`path`]** — logical path normalization and local-disk mapping.
//! - **[`error`]** — the shared error taxonomy.
//!
//! # Examples
//!
//! ```rust
//! use embedfs_core::{codec, StoreBuilder};
//!
//! // What a generated artifact does at startup:
//! let store = StoreBuilder::new()
//!     .dir("/", 0o755)
//!     .file("/greeting.txt", 5, 0o644, codec::encode(b"hello")?)
//!     .build()?;
//!
//! // First access decodes; later accesses reuse the cached bytes.
//! let record = store.get("/greeting.txt").expect("embedded");
//! assert_eq!(&*record.materialize()?, b"hello");
//! assert!(record.is_materialized());
//! # Ok::<(), embedfs_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod codec;
pub mod error;
pub mod path;
pub mod record;
pub mod store;

pub use error::{Error, Result};
pub use record::FileRecord;
pub use store::{RecordStore, StoreBuilder};
