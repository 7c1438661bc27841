//! Writes the full theory of the configured sections to Markdown and HTML
//!
//! Usage: `export_theory [OUTPUT_DIR]`, the directory defaults to `export.output_dir`.

use std::path::Path;
use std::sync::Arc;
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use TechCards::{config::Settings, content::Catalog, services::TheoryExporter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let settings = Settings::new().context("failed to load settings")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.logging.level))
        .init();

    let catalog = match settings.content.directory.as_deref() {
        Some(directory) => Catalog::load(Path::new(directory))
            .await
            .with_context(|| format!("failed to load content from {}", directory))?,
        None => Catalog::builtin().context("embedded content is invalid")?,
    };

    let output_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| settings.export.output_dir.clone());

    let exporter = TheoryExporter::new(
        Arc::new(catalog),
        settings.export.clone(),
        settings.content.sections.clone(),
    );
    let files = exporter
        .write_files(&output_dir)
        .await
        .with_context(|| format!("failed to write theory into {}", output_dir))?;

    info!(markdown = %files.markdown.display(), html = %files.html.display(), "Done");
    println!("{}\n{}", files.markdown.display(), files.html.display());
    Ok(())
}
