//! The portfolio aggregate and its entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The person behind the portfolio.
///
/// All fields are required strings; empty strings render as empty content
/// (the renderer does not validate).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Professional title, e.g. "Software Engineer"
    #[serde(default)]
    pub title: String,

    /// Free-text bio, used for the About section and page metadata
    #[serde(default)]
    pub description: String,
}

/// Contact channels. Optional fields that are absent contribute nothing to
/// the output, not an empty affordance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A project entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Rendered as inline tags, in list order, no de-duplication
    #[serde(default)]
    pub technologies: Vec<String>,

    /// Absent means no "View Project" affordance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Absent means a placeholder glyph instead of an `<img>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A skill with a 1-5 proficiency level.
///
/// The level drives a proportional visual fill (`level/5`). Out-of-range
/// values are not clamped anywhere downstream; the wizard's field validation
/// owns the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub name: String,

    pub level: u8,
}

/// An education entry. Dates are `"YYYY-MM"` strings; a missing `end_date`
/// renders as "Present".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub institution: String,

    #[serde(default)]
    pub degree: String,

    #[serde(default)]
    pub field: String,

    #[serde(default)]
    pub start_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// An experience entry. Same date rules as [`EducationEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub company: String,

    #[serde(default)]
    pub position: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub start_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// The complete in-memory record of one wizard session's input.
///
/// Every list may be empty; the renderer omits the corresponding section
/// entirely. Ordering within each list is insertion order and is preserved
/// verbatim in output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub profile: Profile,

    #[serde(default)]
    pub contact: Contact,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub skills: Vec<Skill>,

    #[serde(default)]
    pub education: Vec<EducationEntry>,

    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_aggregate_is_empty() {
        let portfolio = Portfolio::default();

        assert!(portfolio.profile.name.is_empty());
        assert!(portfolio.contact.email.is_empty());
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.skills.is_empty());
        assert!(portfolio.education.is_empty());
        assert!(portfolio.experience.is_empty());
    }

    #[test]
    fn deserializes_from_toml_without_ids() {
        let toml = r#"
[profile]
name = "Ada Lovelace"
title = "Engineer"
description = "First programmer."

[contact]
email = "ada@example.com"

[[projects]]
title = "Analytical Engine"
technologies = ["Math", "Mechanics"]

[[skills]]
name = "Mathematics"
level = 5
"#;

        let portfolio: Portfolio = toml::from_str(toml).unwrap();

        assert_eq!(portfolio.profile.name, "Ada Lovelace");
        assert_eq!(portfolio.projects.len(), 1);
        assert_eq!(portfolio.projects[0].technologies, ["Math", "Mechanics"]);
        assert!(portfolio.projects[0].link.is_none());
        assert_eq!(portfolio.skills[0].level, 5);
        // Missing ids are assigned on deserialization
        assert_ne!(portfolio.projects[0].id, portfolio.skills[0].id);
    }

    #[test]
    fn json_round_trips() {
        let mut portfolio = Portfolio::default();
        portfolio.profile.name = "Grace Hopper".to_string();
        portfolio.contact.github = Some("https://github.com/grace".to_string());

        let json = serde_json::to_string(&portfolio).unwrap();
        let back: Portfolio = serde_json::from_str(&json).unwrap();

        assert_eq!(back, portfolio);
    }

    #[test]
    fn absent_contact_fields_are_skipped_in_json() {
        let contact = Contact {
            email: "a@b.com".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&contact).unwrap();

        assert!(json.contains("email"));
        assert!(!json.contains("phone"));
        assert!(!json.contains("linkedin"));
    }
}
