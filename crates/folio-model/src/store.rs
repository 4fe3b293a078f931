//! In-memory portfolio store.
//!
//! One store per wizard session. Wizard steps mutate it incrementally:
//! merge-patch on the scalar groups (profile, contact) and add/update/remove
//! on the list entities. List entities get a fresh v4 id on add; ids carry no
//! meaning beyond addressing update/remove.
//!
//! The store is synchronous and single-threaded. Callers that share it across
//! tasks wrap it in a lock so a render always sees a consistent snapshot.

use uuid::Uuid;

use crate::portfolio::{
    Contact, EducationEntry, ExperienceEntry, Portfolio, Profile, Project, Skill,
};

/// Errors from store mutations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("No entry with id {0}")]
    NotFound(Uuid),
}

/// Merge-patch for [`Profile`]. `None` leaves the existing value.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Merge-patch for [`Contact`].
///
/// Optional channels use a double `Option`: the outer level distinguishes
/// "leave as is" from "set", and setting an empty string clears the channel.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ContactPatch {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

/// Fields of a new or patched project. On add, missing fields default.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub link: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<u8>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// The wizard's mutable view of one portfolio aggregate.
#[derive(Debug, Clone, Default)]
pub struct PortfolioStore {
    portfolio: Portfolio,
}

impl PortfolioStore {
    /// Create a store with the all-empty default aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing aggregate.
    pub fn with_portfolio(portfolio: Portfolio) -> Self {
        Self { portfolio }
    }

    /// Read-only view of the current aggregate.
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Snapshot the current aggregate for rendering.
    pub fn snapshot(&self) -> Portfolio {
        self.portfolio.clone()
    }

    /// Replace the whole aggregate (used when reloading from a file).
    pub fn replace(&mut self, portfolio: Portfolio) {
        self.portfolio = portfolio;
    }

    /// Discard all input and return to the all-empty defaults.
    pub fn reset(&mut self) {
        self.portfolio = Portfolio::default();
    }

    pub fn update_profile(&mut self, patch: ProfilePatch) {
        let profile = &mut self.portfolio.profile;
        merge(&mut profile.name, patch.name);
        merge(&mut profile.title, patch.title);
        merge(&mut profile.description, patch.description);
    }

    pub fn update_contact(&mut self, patch: ContactPatch) {
        let contact = &mut self.portfolio.contact;
        merge(&mut contact.email, patch.email);
        merge_channel(&mut contact.phone, patch.phone);
        merge_channel(&mut contact.linkedin, patch.linkedin);
        merge_channel(&mut contact.github, patch.github);
        merge_channel(&mut contact.website, patch.website);
    }

    pub fn add_project(&mut self, fields: ProjectPatch) -> &Project {
        self.portfolio.projects.push(Project {
            id: Uuid::new_v4(),
            title: fields.title.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            technologies: fields.technologies.unwrap_or_default(),
            link: normalize(fields.link),
            image: normalize(fields.image),
        });
        self.portfolio.projects.last().unwrap()
    }

    pub fn update_project(&mut self, id: Uuid, patch: ProjectPatch) -> Result<&Project, StoreError> {
        let project = find_mut(&mut self.portfolio.projects, id, |p| p.id)?;
        merge(&mut project.title, patch.title);
        merge(&mut project.description, patch.description);
        if let Some(technologies) = patch.technologies {
            project.technologies = technologies;
        }
        merge_channel(&mut project.link, patch.link);
        merge_channel(&mut project.image, patch.image);
        Ok(project)
    }

    pub fn remove_project(&mut self, id: Uuid) -> Result<(), StoreError> {
        remove(&mut self.portfolio.projects, id, |p| p.id)
    }

    pub fn add_skill(&mut self, fields: SkillPatch) -> &Skill {
        self.portfolio.skills.push(Skill {
            id: Uuid::new_v4(),
            name: fields.name.unwrap_or_default(),
            level: fields.level.unwrap_or(1),
        });
        self.portfolio.skills.last().unwrap()
    }

    pub fn update_skill(&mut self, id: Uuid, patch: SkillPatch) -> Result<&Skill, StoreError> {
        let skill = find_mut(&mut self.portfolio.skills, id, |s| s.id)?;
        merge(&mut skill.name, patch.name);
        if let Some(level) = patch.level {
            skill.level = level;
        }
        Ok(skill)
    }

    pub fn remove_skill(&mut self, id: Uuid) -> Result<(), StoreError> {
        remove(&mut self.portfolio.skills, id, |s| s.id)
    }

    pub fn add_education(&mut self, fields: EducationPatch) -> &EducationEntry {
        self.portfolio.education.push(EducationEntry {
            id: Uuid::new_v4(),
            institution: fields.institution.unwrap_or_default(),
            degree: fields.degree.unwrap_or_default(),
            field: fields.field.unwrap_or_default(),
            start_date: fields.start_date.unwrap_or_default(),
            end_date: normalize(fields.end_date),
        });
        self.portfolio.education.last().unwrap()
    }

    pub fn update_education(
        &mut self,
        id: Uuid,
        patch: EducationPatch,
    ) -> Result<&EducationEntry, StoreError> {
        let entry = find_mut(&mut self.portfolio.education, id, |e| e.id)?;
        merge(&mut entry.institution, patch.institution);
        merge(&mut entry.degree, patch.degree);
        merge(&mut entry.field, patch.field);
        merge(&mut entry.start_date, patch.start_date);
        merge_channel(&mut entry.end_date, patch.end_date);
        Ok(entry)
    }

    pub fn remove_education(&mut self, id: Uuid) -> Result<(), StoreError> {
        remove(&mut self.portfolio.education, id, |e| e.id)
    }

    pub fn add_experience(&mut self, fields: ExperiencePatch) -> &ExperienceEntry {
        self.portfolio.experience.push(ExperienceEntry {
            id: Uuid::new_v4(),
            company: fields.company.unwrap_or_default(),
            position: fields.position.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            start_date: fields.start_date.unwrap_or_default(),
            end_date: normalize(fields.end_date),
        });
        self.portfolio.experience.last().unwrap()
    }

    pub fn update_experience(
        &mut self,
        id: Uuid,
        patch: ExperiencePatch,
    ) -> Result<&ExperienceEntry, StoreError> {
        let entry = find_mut(&mut self.portfolio.experience, id, |e| e.id)?;
        merge(&mut entry.company, patch.company);
        merge(&mut entry.position, patch.position);
        merge(&mut entry.description, patch.description);
        merge(&mut entry.start_date, patch.start_date);
        merge_channel(&mut entry.end_date, patch.end_date);
        Ok(entry)
    }

    pub fn remove_experience(&mut self, id: Uuid) -> Result<(), StoreError> {
        remove(&mut self.portfolio.experience, id, |e| e.id)
    }
}

fn merge(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Set an optional channel: an empty string clears it, `None` leaves it.
fn merge_channel(slot: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        *slot = if value.is_empty() { None } else { Some(value) };
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn find_mut<T>(items: &mut [T], id: Uuid, key: impl Fn(&T) -> Uuid) -> Result<&mut T, StoreError> {
    items
        .iter_mut()
        .find(|item| key(item) == id)
        .ok_or(StoreError::NotFound(id))
}

fn remove<T>(items: &mut Vec<T>, id: Uuid, key: impl Fn(&T) -> Uuid) -> Result<(), StoreError> {
    let position = items
        .iter()
        .position(|item| key(item) == id)
        .ok_or(StoreError::NotFound(id))?;
    items.remove(position);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_unique_ids_and_preserves_order() {
        let mut store = PortfolioStore::new();

        let first = store
            .add_project(ProjectPatch {
                title: Some("First".to_string()),
                ..Default::default()
            })
            .id;
        let second = store
            .add_project(ProjectPatch {
                title: Some("Second".to_string()),
                ..Default::default()
            })
            .id;

        assert_ne!(first, second);
        let titles: Vec<_> = store
            .portfolio()
            .projects
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let mut store = PortfolioStore::new();
        let id = store
            .add_project(ProjectPatch {
                title: Some("Engine".to_string()),
                description: Some("A machine".to_string()),
                technologies: Some(vec!["Brass".to_string()]),
                ..Default::default()
            })
            .id;

        store
            .update_project(
                id,
                ProjectPatch {
                    description: Some("A general-purpose machine".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let project = &store.portfolio().projects[0];
        assert_eq!(project.title, "Engine");
        assert_eq!(project.description, "A general-purpose machine");
        assert_eq!(project.technologies, ["Brass"]);
    }

    #[test]
    fn remove_unknown_id_errors() {
        let mut store = PortfolioStore::new();

        let result = store.remove_skill(Uuid::new_v4());

        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn contact_patch_clears_channel_with_empty_string() {
        let mut store = PortfolioStore::new();
        store.update_contact(ContactPatch {
            email: Some("ada@example.com".to_string()),
            github: Some("https://github.com/ada".to_string()),
            ..Default::default()
        });
        assert!(store.portfolio().contact.github.is_some());

        store.update_contact(ContactPatch {
            github: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(store.portfolio().contact.email, "ada@example.com");
        assert!(store.portfolio().contact.github.is_none());
    }

    #[test]
    fn profile_patch_leaves_unset_fields() {
        let mut store = PortfolioStore::new();
        store.update_profile(ProfilePatch {
            name: Some("Ada".to_string()),
            title: Some("Engineer".to_string()),
            ..Default::default()
        });

        store.update_profile(ProfilePatch {
            title: Some("Analyst".to_string()),
            ..Default::default()
        });

        assert_eq!(store.portfolio().profile.name, "Ada");
        assert_eq!(store.portfolio().profile.title, "Analyst");
    }

    #[test]
    fn reset_returns_to_defaults() {
        let mut store = PortfolioStore::new();
        store.add_skill(SkillPatch {
            name: Some("Rust".to_string()),
            level: Some(4),
        });

        store.reset();

        assert_eq!(store.portfolio(), &Portfolio::default());
    }

    #[test]
    fn education_end_date_defaults_to_present() {
        let mut store = PortfolioStore::new();
        store.add_education(EducationPatch {
            institution: Some("University of London".to_string()),
            start_date: Some("1833-06".to_string()),
            ..Default::default()
        });

        assert!(store.portfolio().education[0].end_date.is_none());
    }
}
