//! Configuration file structure (folio.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use folio_render::Theme;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub portfolio: PortfolioConfig,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default = "default_file")]
    pub file: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_minify")]
    pub minify: bool,
}

#[derive(Debug, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_preset")]
    pub preset: String,
    pub show_hero: Option<bool>,
    pub contact_form: Option<bool>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            minify: default_minify(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            show_hero: None,
            contact_form: None,
        }
    }
}

impl ThemeConfig {
    /// Resolve the configured preset and flag overrides into a theme.
    pub fn resolve(&self) -> Theme {
        let mut theme = Theme::preset(&self.preset).unwrap_or_else(|| {
            tracing::warn!("Unknown theme preset '{}', using classic", self.preset);
            Theme::classic()
        });
        if let Some(show_hero) = self.show_hero {
            theme.show_hero = show_hero;
        }
        if let Some(contact_form) = self.contact_form {
            theme.contact_form = contact_form;
        }
        theme
    }
}

fn default_file() -> String {
    "portfolio.toml".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_minify() -> bool {
    true
}
fn default_preset() -> String {
    "classic".to_string()
}

/// Load configuration from folio.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_config_is_missing() {
        let config = load_config(Path::new("does-not-exist.toml")).unwrap();

        assert_eq!(config.portfolio.file, "portfolio.toml");
        assert_eq!(config.build.output, "dist");
        assert!(config.build.minify);
        assert_eq!(config.theme.preset, "classic");
    }

    #[test]
    fn parses_theme_overrides() {
        let config: ConfigFile = toml::from_str(
            r#"
[theme]
preset = "violet"
contact_form = false
"#,
        )
        .unwrap();

        let theme = config.theme.resolve();

        assert_eq!(theme.colors.primary, "#9333ea");
        assert!(!theme.contact_form);
        assert!(theme.show_hero);
    }

    #[test]
    fn unknown_preset_falls_back_to_classic() {
        let config = ThemeConfig {
            preset: "brutalist".to_string(),
            show_hero: None,
            contact_form: None,
        };

        assert_eq!(config.resolve(), Theme::classic());
    }
}
