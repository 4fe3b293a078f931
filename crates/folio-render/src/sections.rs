//! Section composition.
//!
//! Decides which sections of the document appear and in what fixed order:
//! About, Projects, Skills, Experience & Education, Contact. A section backed
//! by a list is included iff that list is non-empty; About and Contact are
//! unconditional. The header nav mirrors this list exactly.

use serde::Serialize;

use folio_model::Portfolio;

/// One region of the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Projects,
    Skills,
    /// Experience and education share one timeline section.
    Experience,
    Contact,
}

impl Section {
    /// Anchor id used for `section id=` and nav `href="#..."`.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the header nav.
    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }
}

/// A header nav entry, one per composed section.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

/// Select the sections for an aggregate, in display order. Pure filter,
/// never fails.
pub fn compose(portfolio: &Portfolio) -> Vec<Section> {
    let mut sections = vec![Section::About];
    if !portfolio.projects.is_empty() {
        sections.push(Section::Projects);
    }
    if !portfolio.skills.is_empty() {
        sections.push(Section::Skills);
    }
    if !portfolio.experience.is_empty() || !portfolio.education.is_empty() {
        sections.push(Section::Experience);
    }
    sections.push(Section::Contact);
    sections
}

/// Nav links for a composed section list.
pub fn nav_links(sections: &[Section]) -> Vec<NavLink> {
    sections
        .iter()
        .map(|section| NavLink {
            label: section.label(),
            anchor: section.anchor(),
        })
        .collect()
}
