//! Error types for embedded filesystem operations.
//!
//! Every fallible operation across the embedfs crates surfaces one of the
//! semantic kinds defined here, so callers can branch on *what went wrong*
//! rather than string-matching messages. Local-filesystem passthrough maps
//! the common OS failures onto the same kinds via [`Error::from_io`], and
//! anything unclassified travels as [`Error::Io`] with its source attached.
//!
//! # Examples
//!
//! ```rust
//! use embedfs_core::{Error, StoreBuilder};
//!
//! let store = StoreBuilder::new().build().unwrap();
//! let err = store
//!     .get("/missing")
//!     .ok_or_else(|| Error::NotExist { path: "/missing".to_string() })
//!     .unwrap_err();
//! assert!(err.is_not_exist());
//! ```

use std::io;

/// Result type for embedded filesystem operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the embedded filesystem and its build tooling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A call was malformed before any I/O was attempted.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument.
        message: String,
    },

    /// The underlying filesystem refused access (local mode only).
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// Path that could not be accessed.
        path: String,
    },

    /// The target path already exists.
    ///
    /// Reserved for future write-creation semantics; none of the current
    /// operations raise it, but consumers should be prepared to handle it.
    #[error("already exists: {path}")]
    AlreadyExists {
        /// Path that already exists.
        path: String,
    },

    /// No record exists for the path, or the local file is absent.
    #[error("file does not exist: {path}")]
    NotExist {
        /// Path that could not be found.
        path: String,
    },

    /// The path names a directory where a file is required.
    #[error("not a file: {path}")]
    NotAFile {
        /// Path that resolved to a directory.
        path: String,
    },

    /// Encoding or decoding of a payload failed.
    ///
    /// The record involved is left untouched, so the caller may retry or
    /// surface the failure.
    #[error("codec failure: {message}")]
    Codec {
        /// Which codec stage failed and why.
        message: String,
    },

    /// An operating system error without a more specific mapping.
    #[error("i/o failure: {path}")]
    Io {
        /// Path involved in the failed operation.
        path: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Maps an OS error onto the embedded filesystem taxonomy.
    ///
    /// `NotFound` and `PermissionDenied` become their sentinel kinds so a
    /// caller sees the same error whether a path is missing from the store
    /// or missing on disk; everything else passes through as [`Error::Io`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::io;
    /// use embedfs_core::Error;
    ///
    /// let err = Error::from_io("/a.txt", io::Error::from(io::ErrorKind::NotFound));
    /// assert!(err.is_not_exist());
    /// ```
    #[must_use]
    pub fn from_io(path: impl Into<String>, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotExist { path: path.into() },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path: path.into() },
            io::ErrorKind::IsADirectory => Self::NotAFile { path: path.into() },
            _ => Self::Io {
                path: path.into(),
                source,
            },
        }
    }

    /// Returns `true` for [`Error::InvalidArgument`].
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` for [`Error::PermissionDenied`].
    #[must_use]
    pub const fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Returns `true` for [`Error::AlreadyExists`].
    #[must_use]
    pub const fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Returns `true` for [`Error::NotExist`].
    #[must_use]
    pub const fn is_not_exist(&self) -> bool {
        matches!(self, Self::NotExist { .. })
    }

    /// Returns `true` for [`Error::NotAFile`].
    #[must_use]
    pub const fn is_not_a_file(&self) -> bool {
        matches!(self, Self::NotAFile { .. })
    }

    /// Returns `true` for [`Error::Codec`].
    #[must_use]
    pub const fn is_codec(&self) -> bool {
        matches!(self, Self::Codec { .. })
    }
}
