//! Runtime virtual filesystem over an embedded record store.
//!
//! This crate is the runtime half of the embedding pipeline: generated
//! artifacts assemble a [`RecordStore`] of compressed payloads, and
//! [`EmbedFs`] serves it with lazy decode-once semantics. Each instance
//! carries its own mode switch, so the same binary can serve one tree
//! from memory while another instance passes through to a directory on
//! disk for development.
//!
//! # Examples
//!
//! ```rust
//! use std::io::Read;
//!
//! use embedfs_vfs::{EmbedFs, StoreBuilder};
//!
//! let store = StoreBuilder::new()
//!     .dir("/", 0o755)
//!     .raw_file("/greeting.txt", 0o644, "hello")
//!     .build()?;
//! let fs = EmbedFs::new(store);
//!
//! let mut handle = fs.open("/greeting.txt")?;
//! let mut contents = String::new();
//! handle.read_to_string(&mut contents).unwrap();
//! assert_eq!(contents, "hello");
//! # Ok::<(), embedfs_vfs::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod handle;
pub mod mode;
pub mod vfs;

pub use handle::{EmbeddedFile, FileHandle, FileMeta, LocalFile, VirtualFile};
pub use mode::ModeSwitch;
pub use vfs::EmbedFs;

pub use embedfs_core::{Error, RecordStore, Result, StoreBuilder};
