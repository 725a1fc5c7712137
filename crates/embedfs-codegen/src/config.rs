//! Configuration for one packing run.

use std::path::{Path, PathBuf};

/// Describes what to pack and where the generated module goes.
///
/// Only the target path is required; the tree root defaults to the
/// directory containing the target, mirroring the common layout where the
/// generated module lives inside the asset tree it embeds (and is excluded
/// from it automatically).
///
/// # Examples
///
/// ```rust
/// use embedfs_codegen::PackConfig;
///
/// let config = PackConfig::new("assets/embedded.rs")
///     .with_embed(false)
///     .with_local(true);
///
/// assert_eq!(config.root(), std::path::Path::new("assets"));
/// assert!(!config.embed());
/// assert!(config.local());
/// ```
#[derive(Debug, Clone)]
pub struct PackConfig {
    target: PathBuf,
    root: PathBuf,
    module_name: String,
    embed: bool,
    local: bool,
}

impl PackConfig {
    /// Creates a configuration for generating `target`.
    ///
    /// The root defaults to the target's parent directory (or `.` when the
    /// target has none) and the module name to the root's base name.
    #[must_use]
    pub fn new(target: impl Into<PathBuf>) -> Self {
        let target = target.into();
        let root = target
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        let module_name = derive_module_name(&root);
        Self {
            target,
            root,
            module_name,
            embed: true,
            local: false,
        }
    }

    /// Overrides the directory tree to pack.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self.module_name = derive_module_name(&self.root);
        self
    }

    /// Controls whether payloads are embedded or only scaffolding is
    /// emitted.
    #[must_use]
    pub const fn with_embed(mut self, embed: bool) -> Self {
        self.embed = embed;
        self
    }

    /// Makes the generated module start in local mode, pointed at the
    /// packed root.
    #[must_use]
    pub const fn with_local(mut self, local: bool) -> Self {
        self.local = local;
        self
    }

    /// Path of the generated module.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Root of the tree being packed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name the generated module is documented under.
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Whether payloads are embedded.
    #[must_use]
    pub const fn embed(&self) -> bool {
        self.embed
    }

    /// Whether the generated module starts in local mode.
    #[must_use]
    pub const fn local(&self) -> bool {
        self.local
    }

    /// The command line that reproduces this configuration, recorded in
    /// the generated module's header.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut line = format!(
            "embedfs --root {} --embed {}",
            self.root.display(),
            self.embed
        );
        if self.local {
            line.push_str(" --local");
        }
        line.push(' ');
        line.push_str(&self.target.display().to_string());
        line
    }
}

fn derive_module_name(root: &Path) -> String {
    root.file_name().map_or_else(
        || "embedded".to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_target() {
        let config = PackConfig::new("web/static/embedded.rs");
        assert_eq!(config.target(), Path::new("web/static/embedded.rs"));
        assert_eq!(config.root(), Path::new("web/static"));
        assert_eq!(config.module_name(), "static");
        assert!(config.embed());
        assert!(!config.local());
    }

    #[test]
    fn test_bare_target_roots_at_current_dir() {
        let config = PackConfig::new("embedded.rs");
        assert_eq!(config.root(), Path::new("."));
    }

    #[test]
    fn test_with_root_rederives_module_name() {
        let config = PackConfig::new("src/assets.rs").with_root("themes/dark");
        assert_eq!(config.root(), Path::new("themes/dark"));
        assert_eq!(config.module_name(), "dark");
    }

    #[test]
    fn test_command_line_round_trips_flags() {
        let config = PackConfig::new("assets/embedded.rs");
        assert_eq!(
            config.command_line(),
            "embedfs --root assets --embed true assets/embedded.rs"
        );

        let config = config.with_embed(false).with_local(true);
        assert_eq!(
            config.command_line(),
            "embedfs --root assets --embed false --local assets/embedded.rs"
        );
    }
}
