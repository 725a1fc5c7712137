//! Failures raised while generating an embedded module.

use thiserror::Error;

/// Result alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors produced by the packer.
///
/// Any failure aborts the whole run; the caller must not write a partial
/// artifact.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The output module template failed to register or render.
    #[error("template rendering failed: {message}")]
    Template {
        /// Renderer diagnostic.
        message: String,
    },

    /// Reading or encoding the source tree failed.
    #[error(transparent)]
    Pack(#[from] embedfs_core::Error),
}

impl GenerateError {
    /// Returns `true` for [`GenerateError::Template`].
    #[must_use]
    pub const fn is_template(&self) -> bool {
        matches!(self, Self::Template { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_error_display() {
        let err = GenerateError::Template {
            message: "unclosed block".to_string(),
        };
        assert_eq!(err.to_string(), "template rendering failed: unclosed block");
        assert!(err.is_template());
    }

    #[test]
    fn test_pack_error_is_transparent() {
        let inner = embedfs_core::Error::NotExist {
            path: "/missing".to_string(),
        };
        let expected = inner.to_string();
        let err = GenerateError::from(inner);
        assert_eq!(err.to_string(), expected);
        assert!(!err.is_template());
    }
}
