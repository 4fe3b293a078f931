//! Initialize a portfolio project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    // Create default config
    let config_path = Path::new("folio.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write folio.toml")?;
        tracing::info!("Created folio.toml");
    } else {
        tracing::warn!("folio.toml already exists. Use --yes to overwrite.");
    }

    // Create starter portfolio
    let portfolio_path = Path::new("portfolio.toml");
    if !portfolio_path.exists() || yes {
        fs::write(portfolio_path, DEFAULT_PORTFOLIO).context("Failed to write portfolio.toml")?;
        tracing::info!("Created portfolio.toml");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Edit portfolio.toml, then run 'folio dev' to preview your page.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

[portfolio]
# Portfolio data file (TOML or JSON)
file = "portfolio.toml"

[build]
# Output directory for the generated page
output = "dist"

# Minify the embedded stylesheet
minify = true

[theme]
# Color preset: classic | slate | violet
preset = "classic"

# Layout flags
# show_hero = true
# contact_form = true
"#;

const DEFAULT_PORTFOLIO: &str = r#"# Your portfolio data. Every list section is optional: leave it out and the
# generated page omits the section entirely.

[profile]
name = "Your Name"
title = "Your Title"
description = "A few sentences about who you are and what you do."

[contact]
email = "you@example.com"
# phone = "+1 555 0100"
# linkedin = "https://linkedin.com/in/you"
# github = "https://github.com/you"
# website = "https://example.com"

[[projects]]
title = "My First Project"
description = "What it does and why it matters."
technologies = ["Rust", "HTML"]
# link = "https://github.com/you/project"
# image = "https://example.com/screenshot.png"

[[skills]]
name = "Rust"
level = 4   # 1-5, drives the fill bar

[[experience]]
company = "Acme Corp"
position = "Engineer"
description = "Built things."
start_date = "2022-01"
# end_date omitted means "Present"

[[education]]
institution = "State University"
degree = "BSc"
field = "Computer Science"
start_date = "2018-09"
end_date = "2022-06"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_portfolio_parses() {
        let portfolio: folio_model::Portfolio = toml::from_str(DEFAULT_PORTFOLIO).unwrap();

        assert_eq!(portfolio.projects.len(), 1);
        assert_eq!(portfolio.skills[0].level, 4);
        assert!(portfolio.experience[0].end_date.is_none());
    }

    #[test]
    fn starter_config_parses() {
        let config: crate::config::ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.theme.preset, "classic");
        assert_eq!(config.portfolio.file, "portfolio.toml");
    }
}
