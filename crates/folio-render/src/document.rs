//! Document assembly.
//!
//! `render` is the crate's single entry point: compose the sections for the
//! aggregate, build the per-entity fragment data, and wrap everything in the
//! static shell (head metadata, embedded stylesheet, header/nav, embedded
//! behavior script, footer). Pure transform with no I/O and no clock access, so equal
//! aggregates produce byte-identical documents.

use folio_model::Portfolio;

use crate::assets::Assets;
use crate::fields;
use crate::sections;
use crate::templates::{PageContext, TemplateEngine};
use crate::theme::Theme;

/// Maximum length of the `<meta name="description">` content.
const META_DESCRIPTION_CHARS: usize = 160;

/// Maximum length of the hero blurb before it is elided.
const HERO_BLURB_CHARS: usize = 150;

/// Errors that can occur while rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders portfolio aggregates into standalone HTML documents.
pub struct Renderer {
    theme: Theme,
    minify_css: bool,
    engine: TemplateEngine,
}

impl Renderer {
    /// Create a renderer for a theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            minify_css: false,
            engine: TemplateEngine::new(),
        }
    }

    /// Minify the embedded stylesheet. Falls back to the unminified sheet if
    /// minification fails.
    pub fn with_minified_css(mut self, minify: bool) -> Self {
        self.minify_css = minify;
        self
    }

    /// Render an aggregate into a complete HTML document.
    ///
    /// Never fails on well-typed input; an all-empty aggregate still yields a
    /// minimal valid document with the About and Contact sections.
    pub fn render(&self, portfolio: &Portfolio) -> Result<String, RenderError> {
        let sections = sections::compose(portfolio);
        tracing::debug!(sections = sections.len(), "Rendering portfolio document");

        let styles = {
            let css = Assets::stylesheet(&self.theme);
            if self.minify_css {
                Assets::minify_css(&css).unwrap_or(css)
            } else {
                css
            }
        };

        let mut timeline: Vec<_> = portfolio
            .experience
            .iter()
            .map(fields::experience_field)
            .collect();
        timeline.extend(portfolio.education.iter().map(fields::education_field));

        let profile = &portfolio.profile;
        let ctx = PageContext {
            name: profile.name.clone(),
            title: profile.title.clone(),
            description: profile.description.clone(),
            meta_description: truncate_chars(&profile.description, META_DESCRIPTION_CHARS),
            hero_blurb: elide_chars(&profile.description, HERO_BLURB_CHARS),
            nav: sections::nav_links(&sections),
            sections: sections.into_iter().map(|s| s.anchor()).collect(),
            projects: portfolio.projects.iter().map(fields::project_field).collect(),
            skills: portfolio.skills.iter().map(fields::skill_field).collect(),
            timeline,
            contact: fields::contact_field(&portfolio.contact),
            show_hero: self.theme.show_hero,
            contact_form: self.theme.contact_form,
            styles,
            script: Assets::script(),
        };

        Ok(self.engine.render_page(&ctx)?)
    }
}

/// Render with the default theme.
pub fn render(portfolio: &Portfolio) -> Result<String, RenderError> {
    Renderer::new(Theme::default()).render(portfolio)
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn elide_chars(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut truncated = truncate_chars(text, max);
        truncated.push_str("...");
        truncated
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{Contact, EducationEntry, ExperienceEntry, Profile, Project, Skill};
    use uuid::Uuid;

    fn ada() -> Portfolio {
        Portfolio {
            profile: Profile {
                name: "Ada Lovelace".to_string(),
                title: "Engineer".to_string(),
                description: "Wrote the first published algorithm.".to_string(),
            },
            contact: Contact {
                email: "ada@example.com".to_string(),
                ..Default::default()
            },
            projects: vec![Project {
                id: Uuid::new_v4(),
                title: "Analytical Engine".to_string(),
                description: "A general-purpose mechanical computer.".to_string(),
                technologies: vec!["Math".to_string(), "Mechanics".to_string()],
                link: None,
                image: None,
            }],
            skills: vec![],
            education: vec![],
            experience: vec![],
        }
    }

    #[test]
    fn render_is_idempotent() {
        let portfolio = ada();

        let first = render(&portfolio).unwrap();
        let second = render(&portfolio).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn end_to_end_document_contents() {
        let html = render(&ada()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        for expected in [
            "Ada Lovelace",
            "Engineer",
            "Analytical Engine",
            "Math",
            "Mechanics",
            "ada@example.com",
        ] {
            assert!(html.contains(expected), "missing {expected:?}");
        }
        assert!(!html.contains(r#"id="skills""#));
        assert!(!html.contains(r#"id="experience""#));
    }

    #[test]
    fn empty_aggregate_yields_minimal_document() {
        let html = render(&Portfolio::default()).unwrap();

        assert!(html.contains(r#"id="about""#));
        assert!(html.contains(r#"id="contact""#));
        assert!(!html.contains(r#"id="projects""#));
    }

    #[test]
    fn omitted_sections_have_no_nav_links() {
        let html = render(&ada()).unwrap();

        assert!(html.contains(r##"href="#projects""##));
        assert!(!html.contains(r##"href="#skills""##));
        assert!(!html.contains(r##"href="#experience""##));
    }

    #[test]
    fn escapes_hostile_description() {
        let mut portfolio = ada();
        portfolio.profile.description = "<script>alert(1)</script>".to_string();

        let html = render(&portfolio).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn skill_level_three_fills_sixty_percent() {
        let mut portfolio = ada();
        portfolio.skills.push(Skill {
            id: Uuid::new_v4(),
            name: "Rust".to_string(),
            level: 3,
        });

        let html = render(&portfolio).unwrap();

        assert!(html.contains("width: 60%;"));
    }

    #[test]
    fn missing_end_date_renders_present() {
        let mut portfolio = ada();
        portfolio.experience.push(ExperienceEntry {
            id: Uuid::new_v4(),
            company: "Analytical Engines Ltd".to_string(),
            position: "Consultant".to_string(),
            description: "Programs for the engine.".to_string(),
            start_date: "2022-01".to_string(),
            end_date: None,
        });

        let html = render(&portfolio).unwrap();

        assert!(html.contains("Jan 2022 - Present"));
    }

    #[test]
    fn experience_precedes_education_on_the_timeline() {
        let mut portfolio = ada();
        portfolio.experience.push(ExperienceEntry {
            id: Uuid::new_v4(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            description: String::new(),
            start_date: "2020-01".to_string(),
            end_date: None,
        });
        portfolio.education.push(EducationEntry {
            id: Uuid::new_v4(),
            institution: "University of London".to_string(),
            degree: "BSc".to_string(),
            field: "Mathematics".to_string(),
            start_date: "2010-09".to_string(),
            end_date: Some("2014-06".to_string()),
        });

        let html = render(&portfolio).unwrap();

        let company = html.find("Acme").unwrap();
        let institution = html.find("University of London").unwrap();
        assert!(company < institution);
    }

    #[test]
    fn email_only_contact_renders_single_channel() {
        let mut portfolio = ada();
        portfolio.contact = Contact {
            email: "a@b.com".to_string(),
            ..Default::default()
        };

        let html = render(&portfolio).unwrap();

        assert_eq!(html.matches(r#"class="contact-item""#).count(), 1);
        assert_eq!(html.matches(r#"class="social-link""#).count(), 0);
    }

    #[test]
    fn meta_description_is_truncated_to_160_chars() {
        let mut portfolio = ada();
        portfolio.profile.description = "x".repeat(400);

        let html = render(&portfolio).unwrap();

        let expected = format!(r#"<meta name="description" content="{}">"#, "x".repeat(160));
        assert!(html.contains(&expected));
        assert!(html.contains(&format!("{}...", "x".repeat(150))));
    }

    #[test]
    fn technologies_keep_order_and_duplicates() {
        let mut portfolio = ada();
        portfolio.projects[0].technologies =
            vec!["Rust".to_string(), "rust".to_string(), "Rust".to_string()];

        let html = render(&portfolio).unwrap();

        assert_eq!(html.matches(r#"<span class="project-tag">Rust</span>"#).count(), 2);
        assert_eq!(html.matches(r#"<span class="project-tag">rust</span>"#).count(), 1);
    }

    #[test]
    fn project_link_and_image_are_conditional() {
        let mut portfolio = ada();
        let html = render(&portfolio).unwrap();
        assert!(!html.contains("View Project"));
        assert!(html.contains("project-image-placeholder"));

        portfolio.projects[0].link = Some("https://example.com/engine".to_string());
        portfolio.projects[0].image = Some("https://example.com/engine.png".to_string());
        let html = render(&portfolio).unwrap();
        assert!(html.contains("View Project"));
        assert!(html.contains(r#"<img src="https://example.com/engine.png" alt="Analytical Engine">"#));
        assert!(!html.contains("project-image-placeholder"));
    }

    #[test]
    fn themed_renderer_embeds_its_palette() {
        let html = Renderer::new(Theme::violet()).render(&ada()).unwrap();

        assert!(html.contains("--color-primary: #9333ea;"));
    }
}
