//! Style-variant configuration for the document assembler.
//!
//! One parameterized renderer replaces per-style template forks: a theme is a
//! set of color tokens plus layout flags, and every token lands in the
//! `:root` block of the embedded stylesheet.

use serde::{Deserialize, Serialize};

/// Color tokens emitted as CSS custom properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: String,
    pub primary_dark: String,
    pub primary_light: String,
    pub secondary: String,
    pub secondary_dark: String,
    pub accent: String,
    pub text: String,
    pub text_light: String,
    pub text_lighter: String,
    pub background: String,
    pub background_alt: String,
    pub border: String,
    pub border_light: String,
}

/// A style variant: color tokens plus layout flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub colors: ColorTokens,

    /// Render the hero banner above the About section
    #[serde(default = "default_true")]
    pub show_hero: bool,

    /// Render the static "Send a Message" form beside the contact info
    #[serde(default = "default_true")]
    pub contact_form: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::classic()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl ColorTokens {
    /// Blue/violet palette, the builder's default.
    pub fn classic() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            primary_dark: "#2563eb".to_string(),
            primary_light: "#60a5fa".to_string(),
            secondary: "#8b5cf6".to_string(),
            secondary_dark: "#7c3aed".to_string(),
            accent: "#f43f5e".to_string(),
            text: "#1f2937".to_string(),
            text_light: "#6b7280".to_string(),
            text_lighter: "#9ca3af".to_string(),
            background: "#ffffff".to_string(),
            background_alt: "#f9fafb".to_string(),
            border: "#e5e7eb".to_string(),
            border_light: "#f3f4f6".to_string(),
        }
    }

    /// Muted gray-blue palette.
    pub fn slate() -> Self {
        Self {
            primary: "#475569".to_string(),
            primary_dark: "#334155".to_string(),
            primary_light: "#64748b".to_string(),
            secondary: "#0ea5e9".to_string(),
            secondary_dark: "#0284c7".to_string(),
            accent: "#f59e0b".to_string(),
            ..Self::classic()
        }
    }

    /// Purple/pink palette.
    pub fn violet() -> Self {
        Self {
            primary: "#9333ea".to_string(),
            primary_dark: "#7e22ce".to_string(),
            primary_light: "#a855f7".to_string(),
            secondary: "#ec4899".to_string(),
            secondary_dark: "#db2777".to_string(),
            accent: "#f43f5e".to_string(),
            ..Self::classic()
        }
    }
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            colors: ColorTokens::classic(),
            show_hero: true,
            contact_form: true,
        }
    }

    pub fn slate() -> Self {
        Self {
            colors: ColorTokens::slate(),
            ..Self::classic()
        }
    }

    pub fn violet() -> Self {
        Self {
            colors: ColorTokens::violet(),
            ..Self::classic()
        }
    }

    /// Look up a named preset.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "slate" => Some(Self::slate()),
            "violet" => Some(Self::violet()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic() {
        assert_eq!(Theme::default(), Theme::classic());
    }

    #[test]
    fn looks_up_presets_by_name() {
        assert!(Theme::preset("classic").is_some());
        assert!(Theme::preset("slate").is_some());
        assert!(Theme::preset("violet").is_some());
        assert!(Theme::preset("brutalist").is_none());
    }

    #[test]
    fn presets_differ_in_primary_color() {
        assert_ne!(
            Theme::slate().colors.primary,
            Theme::violet().colors.primary
        );
    }
}
