use crate::error::Result;
use crate::renderer::TemplateRenderer;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A file to generate: where it goes, its raw template, the values bound
/// to it and, once rendered, its content.
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    identifier: &'static str,
    filename: String,
    directory: PathBuf,
    template: &'static str,
    context: serde_json::Value,
    content: Option<String>,
}

impl FileDescriptor {
    /// Binds the given values to a template.
    ///
    /// # Errors
    /// * `Error::ContextError` if the values do not serialize to a context
    pub fn new<V: Serialize>(
        identifier: &'static str,
        filename: impl Into<String>,
        directory: impl Into<PathBuf>,
        template: &'static str,
        values: &V,
    ) -> Result<Self> {
        Ok(Self {
            identifier,
            filename: filename.into(),
            directory: directory.into(),
            template,
            context: serde_json::to_value(values)?,
            content: None,
        })
    }

    pub fn identifier(&self) -> &'static str {
        self.identifier
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn context(&self) -> &serde_json::Value {
        &self.context
    }

    /// Rendered content, if `render` has succeeded.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Path relative to the project root.
    pub fn relative_path(&self) -> PathBuf {
        if self.directory.as_os_str().is_empty() || self.directory == Path::new(".") {
            PathBuf::from(&self.filename)
        } else {
            self.directory.join(&self.filename)
        }
    }

    /// Renders the template against the bound values and stores the result.
    pub fn render(&mut self, renderer: &dyn TemplateRenderer) -> Result<&str> {
        let rendered = renderer.render(self.identifier, self.template, &self.context)?;
        Ok(self.content.insert(rendered).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MiniJinjaRenderer;

    #[derive(Serialize)]
    struct Values {
        name: String,
    }

    #[test]
    fn test_render_stores_content() {
        let values = Values {
            name: "demo".into(),
        };
        let mut descriptor =
            FileDescriptor::new("greeting", "hello.txt", ".", "hi {{ name }}\n", &values).unwrap();
        assert!(descriptor.content().is_none());
        assert_eq!(descriptor.identifier(), "greeting");
        assert_eq!(descriptor.filename(), "hello.txt");
        assert_eq!(descriptor.directory(), Path::new("."));
        assert_eq!(descriptor.template(), "hi {{ name }}\n");
        assert_eq!(descriptor.context()["name"], "demo");

        let rendered = descriptor.render(&MiniJinjaRenderer::new()).unwrap().to_string();
        assert_eq!(rendered, "hi demo\n");
        assert_eq!(descriptor.content(), Some("hi demo\n"));
        assert_eq!(descriptor.relative_path(), PathBuf::from("hello.txt"));
    }

    #[test]
    fn test_relative_path_in_nested_directory() {
        let descriptor =
            FileDescriptor::new("version", "version.go", "internal/version", "", &()).unwrap();
        assert_eq!(descriptor.directory(), Path::new("internal/version"));
        assert_eq!(
            descriptor.relative_path(),
            PathBuf::from("internal/version/version.go")
        );
    }
}
