//! Wizard API server command.

use std::path::Path;

use anyhow::Result;

use folio_server::{WizardServer, WizardServerConfig};

use crate::config::load_config;

/// Run the wizard server.
pub async fn run(config_path: &Path, port: u16, jwt_secret: Option<String>) -> Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting wizard server on port {}", port);

    let server_config = WizardServerConfig {
        port,
        jwt_secret,
        theme: config.theme.resolve(),
        ..Default::default()
    };

    WizardServer::new(server_config).start().await?;

    Ok(())
}
