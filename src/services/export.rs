//! Full theory export

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use crate::config::ExportConfig;
use crate::content::Catalog;
use crate::models::Section;
use crate::render::{theory_html, theory_markdown};
use crate::utils::errors::Result;
use crate::utils::helpers::sanitize_filename;

/// Paths of the files written by [`TheoryExporter::write_files`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub markdown: PathBuf,
    pub html: PathBuf,
}

#[derive(Clone)]
pub struct TheoryExporter {
    catalog: Arc<Catalog>,
    config: ExportConfig,
    sections: Vec<Section>,
}

impl TheoryExporter {
    pub fn new(catalog: Arc<Catalog>, config: ExportConfig, sections: Vec<Section>) -> Self {
        Self { catalog, config, sections }
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn markdown(&self) -> String {
        theory_markdown(&self.config.title, &self.catalog, &self.sections)
    }

    pub fn html(&self) -> String {
        theory_html(&self.config.title, &self.catalog, &self.sections)
    }

    /// HTML page ready to be sent as a chat document
    pub fn html_document(&self) -> (String, Vec<u8>) {
        (format!("{}.html", self.file_stem()), self.html().into_bytes())
    }

    /// Write the Markdown and HTML documents into `dir`, creating it if needed
    pub async fn write_files(&self, dir: impl AsRef<Path>) -> Result<ExportedFiles> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;

        let stem = self.file_stem();
        let files = ExportedFiles {
            markdown: dir.join(format!("{}.md", stem)),
            html: dir.join(format!("{}.html", stem)),
        };
        tokio::fs::write(&files.markdown, self.markdown()).await?;
        tokio::fs::write(&files.html, self.html()).await?;

        info!(
            markdown = %files.markdown.display(),
            html = %files.html.display(),
            sections = self.sections.len(),
            "Theory exported"
        );
        Ok(files)
    }

    fn file_stem(&self) -> String {
        let stem = sanitize_filename(&self.config.title);
        if stem.is_empty() {
            "theory".to_string()
        } else {
            stem
        }
    }
}
