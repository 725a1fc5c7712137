//! The packer: walks a source tree and renders the embedded module.
//!
//! The artifact is assembled entirely in memory. Callers write it out only
//! after a successful run, so a failed pack never leaves a truncated module
//! behind.

use std::time::Instant;

use serde::Serialize;
use tracing::info;

use crate::config::PackConfig;
use crate::error::Result;
use crate::stats::PackStats;
use crate::template_engine::TemplateEngine;
use crate::walker::{self, PackEntry};

/// Everything a completed packing run produces.
#[derive(Debug, Clone)]
pub struct PackOutput {
    /// Complete source text of the generated module.
    pub artifact: String,
    /// Totals for the operator-facing summary.
    pub stats: PackStats,
}

/// Packs one directory tree into one generated module.
///
/// # Examples
///
/// ```rust,no_run
/// use embedfs_codegen::{PackConfig, Packer};
///
/// let packer = Packer::new(PackConfig::new("assets/embedded.rs"))?;
/// let output = packer.run()?;
/// std::fs::write("assets/embedded.rs", output.artifact)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Packer {
    config: PackConfig,
    engine: TemplateEngine<'static>,
}

#[derive(Debug, Serialize)]
struct EntryContext {
    is_dir: bool,
    path_literal: String,
    size: u64,
    mode_octal: String,
    token_literal: String,
}

impl From<&PackEntry> for EntryContext {
    fn from(entry: &PackEntry) -> Self {
        Self {
            is_dir: entry.is_dir,
            path_literal: rust_string_literal(&entry.path),
            size: entry.size,
            mode_octal: format!("0o{:o}", entry.mode),
            token_literal: rust_string_literal(&entry.token),
        }
    }
}

#[derive(Debug, Serialize)]
struct ModuleContext {
    command_line: String,
    module_name: String,
    root_display: String,
    entries: String,
    local_activation: String,
}

impl Packer {
    /// Creates a packer for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in templates fail to register.
    pub fn new(config: PackConfig) -> Result<Self> {
        Ok(Self {
            config,
            engine: TemplateEngine::new()?,
        })
    }

    /// The configuration this packer runs with.
    #[must_use]
    pub const fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Walks the tree, encodes payloads, and renders the module.
    ///
    /// With embedding disabled the walk is skipped entirely and the module
    /// carries an empty store.
    ///
    /// # Errors
    ///
    /// Any read, encoding, or rendering failure aborts the run; no partial
    /// artifact is produced.
    pub fn run(&self) -> Result<PackOutput> {
        let start = Instant::now();
        info!(
            target = %self.config.target().display(),
            root = %self.config.root().display(),
            embed = self.config.embed(),
            "packing tree"
        );

        let entries = if self.config.embed() {
            walker::collect_entries(self.config.root(), self.config.target())?
        } else {
            Vec::new()
        };

        let mut stats = tally(&entries);
        let artifact = self.render_module(&entries)?;
        stats.elapsed_us = elapsed_us(start);

        info!(
            files = stats.files_total,
            dirs = stats.dirs_total,
            bytes = stats.bytes_total,
            "pack complete"
        );
        Ok(PackOutput { artifact, stats })
    }

    fn render_module(&self, entries: &[PackEntry]) -> Result<String> {
        let mut lines = String::new();
        for entry in entries {
            lines.push_str(&self.engine.render("entry", &EntryContext::from(entry))?);
            lines.push('\n');
        }

        let context = ModuleContext {
            command_line: self.config.command_line(),
            module_name: self.config.module_name().to_string(),
            root_display: self.root_display(),
            entries: lines,
            local_activation: self.local_activation(),
        };
        self.engine.render("module", &context)
    }

    fn root_display(&self) -> String {
        self.config.root().canonicalize().map_or_else(
            |_| self.config.root().display().to_string(),
            |root| root.display().to_string(),
        )
    }

    fn local_activation(&self) -> String {
        if self.config.local() {
            format!(
                "    fs.set_local({});\n",
                rust_string_literal(&self.root_display())
            )
        } else {
            String::new()
        }
    }
}

fn tally(entries: &[PackEntry]) -> PackStats {
    let mut stats = PackStats::new();
    for entry in entries {
        if entry.is_dir {
            stats.dirs_total += 1;
        } else {
            stats.files_total += 1;
            stats.bytes_total += entry.size;
            stats.bytes_embedded += entry.token.len() as u64;
        }
    }
    stats
}

fn elapsed_us(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}

/// Renders `s` as a double-quoted Rust string literal with escapes.
fn rust_string_literal(s: &str) -> String {
    format!("{s:?}")
}
