//! Template rendering for proforma.
//! Wraps MiniJinja behind a small trait so the layout builder does not
//! depend on a concrete engine.
use crate::error::{Error, Result};
use minijinja::{Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `name` - Identifier reported in errors (the file kind)
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
///
/// Undefined variables are an error rather than an empty string, and the
/// trailing newline of a template is kept so fixed templates come out
/// byte-for-byte.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::RenderError` if the template fails to parse or references
    ///   a value missing from the context
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env
            .render_named_str(name, template, context)
            .map_err(|source| Error::RenderError {
                kind: name.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trailing_newline_is_kept() {
        let renderer = MiniJinjaRenderer::new();
        let out = renderer.render("t", "line\n", &json!({})).unwrap();
        assert_eq!(out, "line\n");
    }

    #[test]
    fn test_block_lines_are_trimmed() {
        let renderer = MiniJinjaRenderer::new();
        let template = "a\n{% if flag %}\nb\n{% endif %}\nc\n";
        let out = renderer.render("t", template, &json!({"flag": "yes"})).unwrap();
        assert_eq!(out, "a\nb\nc\n");
        let out = renderer.render("t", template, &json!({"flag": ""})).unwrap();
        assert_eq!(out, "a\nc\n");
    }
}
