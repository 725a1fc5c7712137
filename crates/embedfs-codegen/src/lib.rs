//! Build-time packer for embedded filesystems.
//!
//! Walks a directory tree, compresses and encodes every file, and renders a
//! self-contained Rust module exposing the tree through `embedfs_vfs`.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod generator;
pub mod stats;
pub mod template_engine;
pub mod walker;

pub use config::PackConfig;
pub use error::{GenerateError, Result};
pub use generator::{PackOutput, Packer};
pub use stats::PackStats;
pub use template_engine::TemplateEngine;
pub use walker::PackEntry;
