//! Per-entity fragment data.
//!
//! Converts one model entity into the flat, serializable shape its template
//! fragment consumes: dates formatted, skill levels turned into fill
//! percentages, empty optional strings dropped. All free text stays raw here;
//! escaping happens at the template boundary.

use serde::Serialize;

use folio_model::{Contact, EducationEntry, ExperienceEntry, Project, Skill};

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a `"YYYY-MM"` date as `"{Mon} {YYYY}"`, e.g. `"2023-04"` ->
/// `"Apr 2023"`. A value of any other shape passes through verbatim: dates
/// are strings by contract and the renderer must not fail on well-typed
/// input.
pub fn format_month(date: &str) -> String {
    let parsed = date.split_once('-').and_then(|(year, month)| {
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let month: usize = month.parse().ok()?;
        let name = SHORT_MONTHS.get(month.checked_sub(1)?)?;
        Some(format!("{} {}", name, year))
    });
    parsed.unwrap_or_else(|| date.to_string())
}

/// Format a start/end pair as `"Apr 2023 - Present"`. An absent end date
/// always yields the literal `"Present"`.
pub fn date_range(start: &str, end: Option<&str>) -> String {
    let end = match end {
        Some(end) => format_month(end),
        None => "Present".to_string(),
    };
    format!("{} - {}", format_month(start), end)
}

/// A project card.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectField {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub image: Option<String>,
}

pub fn project_field(project: &Project) -> ProjectField {
    ProjectField {
        title: project.title.clone(),
        description: project.description.clone(),
        technologies: project.technologies.clone(),
        link: non_empty(project.link.as_deref()),
        image: non_empty(project.image.as_deref()),
    }
}

/// A skill card. `percent` is the proportional fill width: `level/5` of the
/// bar, so level 3 is 60. Out-of-range levels are not clamped.
#[derive(Debug, Clone, Serialize)]
pub struct SkillField {
    pub name: String,
    pub percent: u16,
}

pub fn skill_field(skill: &Skill) -> SkillField {
    SkillField {
        name: skill.name.clone(),
        percent: skill.level as u16 * 20,
    }
}

/// One entry on the combined Experience & Education timeline.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineField {
    pub period: String,
    pub heading: String,
    pub subheading: String,
    pub detail: Option<String>,
}

pub fn experience_field(entry: &ExperienceEntry) -> TimelineField {
    TimelineField {
        period: date_range(&entry.start_date, entry.end_date.as_deref()),
        heading: entry.position.clone(),
        subheading: entry.company.clone(),
        detail: Some(entry.description.clone()),
    }
}

pub fn education_field(entry: &EducationEntry) -> TimelineField {
    TimelineField {
        period: date_range(&entry.start_date, entry.end_date.as_deref()),
        heading: entry.institution.clone(),
        subheading: format!("{} in {}", entry.degree, entry.field),
        detail: None,
    }
}

/// Contact channels with empty optionals dropped, so the template's presence
/// checks are the single inclusion rule.
#[derive(Debug, Clone, Serialize)]
pub struct ContactField {
    pub email: String,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

pub fn contact_field(contact: &Contact) -> ContactField {
    ContactField {
        email: contact.email.clone(),
        phone: non_empty(contact.phone.as_deref()),
        linkedin: non_empty(contact.linkedin.as_deref()),
        github: non_empty(contact.github.as_deref()),
        website: non_empty(contact.website.as_deref()),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn formats_year_month_dates() {
        assert_eq!(format_month("2023-04"), "Apr 2023");
        assert_eq!(format_month("2022-01"), "Jan 2022");
        assert_eq!(format_month("1999-12"), "Dec 1999");
    }

    #[test]
    fn echoes_malformed_dates_verbatim() {
        assert_eq!(format_month("April 2023"), "April 2023");
        assert_eq!(format_month("2023-13"), "2023-13");
        assert_eq!(format_month("23-04"), "23-04");
        assert_eq!(format_month(""), "");
    }

    #[test]
    fn missing_end_date_renders_present() {
        assert_eq!(date_range("2022-01", None), "Jan 2022 - Present");
        assert_eq!(date_range("2020-06", Some("2021-09")), "Jun 2020 - Sep 2021");
    }

    #[test]
    fn skill_percent_is_level_over_five() {
        let skill = Skill {
            id: Uuid::new_v4(),
            name: "Rust".to_string(),
            level: 3,
        };

        assert_eq!(skill_field(&skill).percent, 60);
    }

    #[test]
    fn out_of_range_level_is_not_clamped() {
        let skill = Skill {
            id: Uuid::new_v4(),
            name: "Enthusiasm".to_string(),
            level: 7,
        };

        assert_eq!(skill_field(&skill).percent, 140);
    }

    #[test]
    fn empty_contact_channels_are_dropped() {
        let contact = Contact {
            email: "a@b.com".to_string(),
            phone: Some(String::new()),
            github: Some("https://github.com/a".to_string()),
            ..Default::default()
        };

        let field = contact_field(&contact);

        assert!(field.phone.is_none());
        assert_eq!(field.github.as_deref(), Some("https://github.com/a"));
        assert!(field.linkedin.is_none());
    }

    #[test]
    fn education_subheading_joins_degree_and_field() {
        let entry = EducationEntry {
            id: Uuid::new_v4(),
            institution: "University of London".to_string(),
            degree: "BSc".to_string(),
            field: "Mathematics".to_string(),
            start_date: "1833-06".to_string(),
            end_date: None,
        };

        let field = education_field(&entry);

        assert_eq!(field.subheading, "BSc in Mathematics");
        assert_eq!(field.period, "Jun 1833 - Present");
        assert!(field.detail.is_none());
    }
}
