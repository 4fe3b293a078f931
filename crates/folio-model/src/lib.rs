//! Portfolio data model for folio.
//!
//! Defines the aggregate a wizard session edits and the in-memory store that
//! mutates it. The renderer consumes the aggregate read-only.

pub mod portfolio;
pub mod store;

pub use portfolio::{
    Contact, EducationEntry, ExperienceEntry, Portfolio, Profile, Project, Skill,
};
pub use store::{
    ContactPatch, EducationPatch, ExperiencePatch, PortfolioStore, ProfilePatch, ProjectPatch,
    SkillPatch, StoreError,
};
