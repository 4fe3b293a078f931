//! Build the standalone portfolio page.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use folio_render::Renderer;
use folio_server::load_portfolio;

use crate::config::load_config;

/// Name of the generated document inside the output directory.
const OUTPUT_FILE: &str = "portfolio.html";

/// Run the build command.
pub async fn run(
    config_path: &Path,
    output: Option<PathBuf>,
    minify: Option<bool>,
    input: Option<PathBuf>,
) -> Result<()> {
    tracing::info!("Building portfolio page...");

    let config = load_config(config_path)?;

    let source = input.unwrap_or_else(|| PathBuf::from(&config.portfolio.file));
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&config.build.output));
    let minify = minify.unwrap_or(config.build.minify);

    let portfolio = load_portfolio(&source)
        .with_context(|| format!("Failed to load {}", source.display()))?;

    let renderer = Renderer::new(config.theme.resolve()).with_minified_css(minify);
    let html = renderer.render(&portfolio)?;

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let output_path = output_dir.join(OUTPUT_FILE);
    fs::write(&output_path, &html)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    tracing::info!(
        "Wrote {} ({} bytes) from {}",
        output_path.display(),
        html.len(),
        source.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn builds_a_standalone_page() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("portfolio.toml");
        let out = temp.path().join("dist");

        fs::write(
            &source,
            r#"
[profile]
name = "Ada Lovelace"
title = "Engineer"
description = "First programmer."

[contact]
email = "ada@example.com"
"#,
        )
        .unwrap();

        run(
            &temp.path().join("folio.toml"),
            Some(out.clone()),
            Some(false),
            Some(source),
        )
        .await
        .unwrap();

        let html = fs::read_to_string(out.join("portfolio.html")).unwrap();
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn missing_source_fails() {
        let temp = tempdir().unwrap();

        let result = run(
            &temp.path().join("folio.toml"),
            Some(temp.path().join("dist")),
            Some(false),
            Some(temp.path().join("nope.toml")),
        )
        .await;

        assert!(result.is_err());
    }
}
