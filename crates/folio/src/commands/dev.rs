//! Live preview server command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use folio_server::{PreviewServer, PreviewServerConfig};

use crate::config::load_config;

/// Run the preview server.
pub async fn run(
    config_path: &Path,
    port: u16,
    open: bool,
    input: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let file = input.unwrap_or_else(|| PathBuf::from(&config.portfolio.file));

    if !file.exists() {
        anyhow::bail!(
            "Portfolio file not found: {}. Run 'folio init' first.",
            file.display()
        );
    }

    tracing::info!("Starting preview server on port {}", port);

    let server_config = PreviewServerConfig {
        file,
        port,
        open,
        theme: config.theme.resolve(),
        ..Default::default()
    };

    PreviewServer::new(server_config).start().await?;

    Ok(())
}
