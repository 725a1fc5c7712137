//! The switch between embedded and local-filesystem serving.

use std::path::PathBuf;
use std::sync::RwLock;

/// Instance-scoped toggle selecting where lookups resolve.
///
/// Defaults to embedded mode. When a local root is set, every subsequent
/// operation on the owning filesystem delegates to the real disk under that
/// root instead of the record store. The toggle is effective immediately
/// for all concurrent callers and may be flipped any number of times.
///
/// Each [`EmbedFs`](crate::EmbedFs) owns its own switch, so two instances
/// in one process can run in different modes — a generated artifact exposes
/// a single static instance, which is what makes the toggle feel
/// process-wide at the call site.
#[derive(Debug, Default)]
pub struct ModeSwitch {
    root: RwLock<Option<PathBuf>>,
}

impl ModeSwitch {
    /// Creates a switch in embedded mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates local mode rooted at `root`.
    ///
    /// Passing an empty path deactivates local mode instead;
    /// [`set_embedded`](Self::set_embedded) is the explicit spelling of the
    /// same thing.
    pub fn set_local(&self, root: impl Into<PathBuf>) {
        let root = root.into();
        let mut guard = self.root.write().unwrap();
        *guard = if root.as_os_str().is_empty() {
            None
        } else {
            Some(root)
        };
    }

    /// Deactivates local mode, reverting to embedded lookups.
    pub fn set_embedded(&self) {
        *self.root.write().unwrap() = None;
    }

    /// Whether local mode is active.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.root.read().unwrap().is_some()
    }

    /// The active local root, if any.
    #[must_use]
    pub fn local_root(&self) -> Option<PathBuf> {
        self.root.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults_to_embedded() {
        let mode = ModeSwitch::new();
        assert!(!mode.is_local());
        assert!(mode.local_root().is_none());
    }

    #[test]
    fn test_set_local_activates() {
        let mode = ModeSwitch::new();
        mode.set_local("/srv/assets");
        assert!(mode.is_local());
        assert_eq!(mode.local_root().as_deref(), Some(Path::new("/srv/assets")));
    }

    #[test]
    fn test_empty_root_deactivates() {
        let mode = ModeSwitch::new();
        mode.set_local("/srv/assets");
        mode.set_local("");
        assert!(!mode.is_local());
    }

    #[test]
    fn test_set_embedded_deactivates() {
        let mode = ModeSwitch::new();
        mode.set_local("/srv/assets");
        mode.set_embedded();
        assert!(!mode.is_local());
    }

    #[test]
    fn test_toggle_is_repeatable() {
        let mode = ModeSwitch::new();
        mode.set_local("/one");
        mode.set_local("/two");
        assert_eq!(mode.local_root().as_deref(), Some(Path::new("/two")));
        mode.set_embedded();
        mode.set_local("/three");
        assert!(mode.is_local());
    }
}
