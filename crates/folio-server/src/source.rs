//! Loading portfolio aggregates from disk.
//!
//! Used by the dev preview server and the build command. The wizard API never
//! touches the filesystem.

use std::fs;
use std::path::Path;

use folio_model::Portfolio;

/// Errors loading a portfolio source file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Unsupported portfolio format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}

/// Load a portfolio aggregate from a TOML or JSON file, by extension.
pub fn load_portfolio(path: &Path) -> Result<Portfolio, SourceError> {
    let content = fs::read_to_string(path).map_err(|e| SourceError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "toml" => toml::from_str(&content).map_err(|e| SourceError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
        "json" => serde_json::from_str(&content).map_err(|e| SourceError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
        other => Err(SourceError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_toml_sources() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("portfolio.toml");
        fs::write(
            &path,
            r#"
[profile]
name = "Ada Lovelace"
title = "Engineer"

[contact]
email = "ada@example.com"
"#,
        )
        .unwrap();

        let portfolio = load_portfolio(&path).unwrap();

        assert_eq!(portfolio.profile.name, "Ada Lovelace");
        assert_eq!(portfolio.contact.email, "ada@example.com");
    }

    #[test]
    fn loads_json_sources() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("portfolio.json");
        fs::write(
            &path,
            r#"{"profile": {"name": "Grace", "title": "Admiral", "description": ""}}"#,
        )
        .unwrap();

        let portfolio = load_portfolio(&path).unwrap();

        assert_eq!(portfolio.profile.name, "Grace");
    }

    #[test]
    fn rejects_unknown_extensions() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("portfolio.yaml");
        fs::write(&path, "profile:\n  name: Ada").unwrap();

        let result = load_portfolio(&path);

        assert!(matches!(result, Err(SourceError::UnsupportedFormat(_))));
    }

    #[test]
    fn surfaces_parse_errors() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("portfolio.toml");
        fs::write(&path, "not [valid toml").unwrap();

        let result = load_portfolio(&path);

        assert!(matches!(result, Err(SourceError::ParseError { .. })));
    }
}
