//! Template engine for artifact rendering using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in module and
//! entry templates pre-registered.
//!
//! # Examples
//!
//! ```rust
//! use embedfs_codegen::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let line = engine
//!     .render("entry", &json!({
//!         "is_dir": true,
//!         "path_literal": "\"/\"",
//!         "mode_octal": "0o755",
//!     }))
//!     .unwrap();
//! assert!(line.contains(".dir(\"/\", 0o755)"));
//! ```

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{GenerateError, Result};

/// Template engine for artifact rendering.
///
/// Wraps Handlebars with strict mode enabled and escaping disabled: the
/// output is Rust source, and every interpolated value is pre-rendered as
/// a valid Rust literal before it reaches a template.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across thread
/// boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates
    /// registered.
    ///
    /// # Errors
    ///
    /// Returns an error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);

        // Output is Rust source, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_builtin(&mut handlebars, "module", include_str!("../templates/module.rs.hbs"))?;
        Self::register_builtin(&mut handlebars, "entry", include_str!("../templates/entry.rs.hbs"))?;

        Ok(Self { handlebars })
    }

    fn register_builtin(handlebars: &mut Handlebars<'a>, name: &str, template: &str) -> Result<()> {
        handlebars
            .register_template_string(name, template)
            .map_err(|err| GenerateError::Template {
                message: format!("failed to register {name} template: {err}"),
            })
    }

    /// Renders a registered template with the given context.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is unknown, the context is
    /// missing a referenced variable, or rendering fails.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|err| GenerateError::Template {
                message: format!("rendering {template_name} failed: {err}"),
            })
    }

    /// Registers an additional template at runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        Self::register_builtin(&mut self.handlebars, name, template)
    }
}

impl Default for TemplateEngine<'_> {
    fn default() -> Self {
        Self::new().expect("built-in templates are valid")
    }
}
