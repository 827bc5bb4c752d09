//! Serializing assembled pages and writing them out.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DocConfig;
use crate::templates::{DocumentContext, DocumentTemplate};
use crate::writer::PageBody;

/// Errors that can occur while emitting a page.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to render document: {0}")]
    Template(#[from] minijinja::Error),
}

/// Destination for finished pages.
pub trait DocumentEmitter {
    /// Serialize `body` as a complete document and store it at `path`.
    fn emit(
        &self,
        path: &Path,
        meta_keywords: &[String],
        description: &str,
        body: &PageBody,
    ) -> Result<(), EmitError>;
}

impl<T: DocumentEmitter + ?Sized> DocumentEmitter for &T {
    fn emit(
        &self,
        path: &Path,
        meta_keywords: &[String],
        description: &str,
        body: &PageBody,
    ) -> Result<(), EmitError> {
        (**self).emit(path, meta_keywords, description, body)
    }
}

/// Writes pages as HTML files below an output directory.
pub struct FileEmitter {
    output_dir: PathBuf,
    stylesheet: Option<String>,
    lang: String,
    template: DocumentTemplate,
}

impl FileEmitter {
    /// Create an emitter writing to the configured output directory.
    pub fn new(config: &DocConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            stylesheet: config.stylesheet.clone(),
            lang: config.lang.clone(),
            template: DocumentTemplate::new(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render a complete HTML document without writing it.
    pub fn render(
        &self,
        meta_keywords: &[String],
        description: &str,
        body: &PageBody,
    ) -> Result<String, EmitError> {
        let context = DocumentContext {
            title: body.window_title().to_string(),
            lang: self.lang.clone(),
            generator: concat!("folio ", env!("CARGO_PKG_VERSION")).to_string(),
            keywords: meta_keywords.to_vec(),
            description: description.to_string(),
            stylesheet: self.stylesheet.clone(),
            body: body.tree().to_html(),
        };

        Ok(self.template.render(&context)?)
    }
}

impl DocumentEmitter for FileEmitter {
    fn emit(
        &self,
        path: &Path,
        meta_keywords: &[String],
        description: &str,
        body: &PageBody,
    ) -> Result<(), EmitError> {
        let html = self.render(meta_keywords, description, body)?;
        let target = self.output_dir.join(path);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| EmitError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&target, html).map_err(|source| EmitError::Io {
            path: target.clone(),
            source,
        })?;

        tracing::info!(path = %target.display(), "wrote page");

        Ok(())
    }
}
