//! Template engine for the generated portfolio page.
//!
//! Every template name ends in `.html` so minijinja's default auto-escape
//! policy applies: user-supplied text is escaped at the single point where it
//! enters markup. Only the embedded stylesheet and behavior script are marked
//! `safe`; the inline SVG icons live in the template bodies themselves.

use minijinja::{context, Environment};

use crate::fields::{ContactField, ProjectField, SkillField, TimelineField};
use crate::sections::NavLink;

/// Context for rendering the complete document.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Display name
    pub name: String,
    /// Professional title
    pub title: String,
    /// Full About text
    pub description: String,
    /// `description` truncated to 160 characters for `<meta name="description">`
    pub meta_description: String,
    /// `description` truncated to 150 characters for the hero banner
    pub hero_blurb: String,
    /// Composed section anchors, in display order
    pub sections: Vec<&'static str>,
    /// Header nav links, mirroring `sections`
    pub nav: Vec<NavLink>,
    pub projects: Vec<ProjectField>,
    pub skills: Vec<SkillField>,
    /// Experience entries followed by education entries
    pub timeline: Vec<TimelineField>,
    pub contact: ContactField,
    /// Render the hero banner
    pub show_hero: bool,
    /// Render the static message form in the contact section
    pub contact_form: bool,
    /// Embedded stylesheet (trusted)
    pub styles: String,
    /// Embedded behavior script (trusted)
    pub script: &'static str,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        let templates = [
            ("page.html", PAGE_TEMPLATE),
            ("nav.html", NAV_TEMPLATE),
            ("section/about.html", ABOUT_TEMPLATE),
            ("section/projects.html", PROJECTS_TEMPLATE),
            ("section/skills.html", SKILLS_TEMPLATE),
            ("section/experience.html", EXPERIENCE_TEMPLATE),
            ("section/contact.html", CONTACT_TEMPLATE),
        ];

        for (name, source) in templates {
            env.add_template(name, source)
                .expect("Failed to add built-in template");
        }

        Self { env }
    }

    /// Render the complete document.
    pub fn render_page(&self, ctx: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            name => &ctx.name,
            title => &ctx.title,
            description => &ctx.description,
            meta_description => &ctx.meta_description,
            hero_blurb => &ctx.hero_blurb,
            sections => &ctx.sections,
            nav => &ctx.nav,
            projects => &ctx.projects,
            skills => &ctx.skills,
            timeline => &ctx.timeline,
            contact => &ctx.contact,
            show_hero => &ctx.show_hero,
            contact_form => &ctx.contact_form,
            styles => &ctx.styles,
            script => &ctx.script,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="description" content="{{ meta_description }}">
  <title>{{ name }} - {{ title }}</title>
  <style>
{{ styles | safe }}
  </style>
</head>
<body>
  <header class="header">
    <div class="container header-container">
      <a href="#" class="logo">
        <span class="logo-gradient">{{ name }}</span>
      </a>
      <nav class="nav">
        <ul class="nav-list">
{% include "nav.html" %}
        </ul>
        <button class="mobile-menu-btn" aria-label="Toggle menu">
          <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <line x1="3" y1="12" x2="21" y2="12"></line>
            <line x1="3" y1="6" x2="21" y2="6"></line>
            <line x1="3" y1="18" x2="21" y2="18"></line>
          </svg>
        </button>
      </nav>
    </div>
    <div class="mobile-menu hidden">
      <ul class="nav-list">
{% include "nav.html" %}
      </ul>
    </div>
  </header>
{% if show_hero %}
  <section id="hero" class="hero">
    <div class="container hero-container">
      <div class="hero-content">
        <h1 class="hero-title">Hi, I'm {{ name }}</h1>
        <p class="hero-subtitle">{{ title }}</p>
        <p class="hero-description">{{ hero_blurb }}</p>
        <a href="#contact" class="hero-cta">Get In Touch</a>
      </div>
      <div class="hero-image">
        <div class="hero-image-placeholder">
          <svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1" stroke-linecap="round" stroke-linejoin="round">
            <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"></path>
            <circle cx="12" cy="7" r="4"></circle>
          </svg>
        </div>
      </div>
    </div>
  </section>
{% endif %}
{% for section in sections %}{% include "section/" ~ section ~ ".html" %}{% endfor %}
  <footer class="footer">
    <div class="container">
      <div class="footer-content">
        <div class="footer-logo">{{ name }}</div>
        <p>{{ title }}</p>
        <div class="footer-social">
{%- if contact.linkedin %}
          <a href="{{ contact.linkedin }}" target="_blank" rel="noopener noreferrer" class="footer-social-link" aria-label="LinkedIn">
            <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="currentColor">
              <path d="M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z"/>
            </svg>
          </a>
{%- endif %}
{%- if contact.github %}
          <a href="{{ contact.github }}" target="_blank" rel="noopener noreferrer" class="footer-social-link" aria-label="GitHub">
            <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="currentColor">
              <path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/>
            </svg>
          </a>
{%- endif %}
{%- if contact.website %}
          <a href="{{ contact.website }}" target="_blank" rel="noopener noreferrer" class="footer-social-link" aria-label="Website">
            <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
              <circle cx="12" cy="12" r="10"></circle>
              <line x1="2" y1="12" x2="22" y2="12"></line>
              <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"></path>
            </svg>
          </a>
{%- endif %}
        </div>
        <div class="footer-copyright">
          &copy; {{ name }}. All rights reserved.
        </div>
      </div>
    </div>
  </footer>
  <script>
{{ script | safe }}
  </script>
</body>
</html>"##;

const NAV_TEMPLATE: &str = r##"{%- for item in nav %}
          <li class="nav-item"><a href="#{{ item.anchor }}" class="nav-link">{{ item.label }}</a></li>
{%- endfor %}"##;

const ABOUT_TEMPLATE: &str = r##"  <section id="about" class="section about">
    <div class="container">
      <h2 class="section-title">About Me</h2>
      <div class="about-content">
        <p>{{ description }}</p>
      </div>
    </div>
  </section>
"##;

const PROJECTS_TEMPLATE: &str = r##"  <section id="projects" class="section projects">
    <div class="container">
      <h2 class="section-title">My Projects</h2>
      <div class="projects-grid">
{%- for project in projects %}
        <div class="project-card">
          <div class="project-image">
{%- if project.image %}
            <img src="{{ project.image }}" alt="{{ project.title }}">
{%- else %}
            <div class="project-image-placeholder">
              <svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1" stroke-linecap="round" stroke-linejoin="round">
                <rect x="3" y="3" width="18" height="18" rx="2" ry="2"></rect>
                <circle cx="8.5" cy="8.5" r="1.5"></circle>
                <polyline points="21 15 16 10 5 21"></polyline>
              </svg>
            </div>
{%- endif %}
          </div>
          <div class="project-content">
            <h3 class="project-title">{{ project.title }}</h3>
            <p class="project-description">{{ project.description }}</p>
            <div class="project-tags">
{%- for tech in project.technologies %}
              <span class="project-tag">{{ tech }}</span>
{%- endfor %}
            </div>
{%- if project.link %}
            <a href="{{ project.link }}" target="_blank" rel="noopener noreferrer" class="project-link">
              View Project
              <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <line x1="5" y1="12" x2="19" y2="12"></line>
                <polyline points="12 5 19 12 12 19"></polyline>
              </svg>
            </a>
{%- endif %}
          </div>
        </div>
{%- endfor %}
      </div>
    </div>
  </section>
"##;

const SKILLS_TEMPLATE: &str = r##"  <section id="skills" class="section skills">
    <div class="container">
      <h2 class="section-title">My Skills</h2>
      <div class="skills-grid">
{%- for skill in skills %}
        <div class="skill-card">
          <div class="skill-icon">
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
              <path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"></path>
            </svg>
          </div>
          <h3 class="skill-name">{{ skill.name }}</h3>
          <div class="skill-level">
            <div class="skill-progress" style="width: {{ skill.percent }}%;"></div>
          </div>
        </div>
{%- endfor %}
      </div>
    </div>
  </section>
"##;

const EXPERIENCE_TEMPLATE: &str = r##"  <section id="experience" class="section experience">
    <div class="container">
      <h2 class="section-title">Experience &amp; Education</h2>
      <div class="timeline">
{%- for item in timeline %}
        <div class="timeline-item">
          <div class="timeline-dot"></div>
          <div class="timeline-content">
            <div class="timeline-date">{{ item.period }}</div>
            <h3 class="timeline-title">{{ item.heading }}</h3>
            <p class="timeline-subtitle">{{ item.subheading }}</p>
{%- if item.detail %}
            <p>{{ item.detail }}</p>
{%- endif %}
          </div>
        </div>
{%- endfor %}
      </div>
    </div>
  </section>
"##;

const CONTACT_TEMPLATE: &str = r##"  <section id="contact" class="section contact">
    <div class="container">
      <h2 class="section-title">Get In Touch</h2>
      <div class="contact-grid{% if not contact_form %} single{% endif %}">
        <div class="contact-info">
          <h3 class="contact-title">Contact Information</h3>
          <div class="contact-item">
            <div class="contact-icon">
              <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path>
                <polyline points="22,6 12,13 2,6"></polyline>
              </svg>
            </div>
            <div>
              <p class="contact-label">Email</p>
              <p class="contact-value">
                <a href="mailto:{{ contact.email }}">{{ contact.email }}</a>
              </p>
            </div>
          </div>
{%- if contact.phone %}
          <div class="contact-item">
            <div class="contact-icon">
              <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"></path>
              </svg>
            </div>
            <div>
              <p class="contact-label">Phone</p>
              <p class="contact-value">{{ contact.phone }}</p>
            </div>
          </div>
{%- endif %}
          <div class="social-links">
{%- if contact.linkedin %}
            <a href="{{ contact.linkedin }}" target="_blank" rel="noopener noreferrer" class="social-link" aria-label="LinkedIn">
              <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
                <path d="M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z"/>
              </svg>
            </a>
{%- endif %}
{%- if contact.github %}
            <a href="{{ contact.github }}" target="_blank" rel="noopener noreferrer" class="social-link" aria-label="GitHub">
              <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
                <path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/>
              </svg>
            </a>
{%- endif %}
{%- if contact.website %}
            <a href="{{ contact.website }}" target="_blank" rel="noopener noreferrer" class="social-link" aria-label="Website">
              <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <circle cx="12" cy="12" r="10"></circle>
                <line x1="2" y1="12" x2="22" y2="12"></line>
                <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"></path>
              </svg>
            </a>
{%- endif %}
          </div>
        </div>
{%- if contact_form %}
        <div class="contact-form">
          <h3 class="contact-title">Send a Message</h3>
          <form>
            <div class="form-group">
              <label for="name" class="form-label">Name</label>
              <input type="text" id="name" class="form-input" placeholder="Your name">
            </div>
            <div class="form-group">
              <label for="email" class="form-label">Email</label>
              <input type="email" id="email" class="form-input" placeholder="Your email">
            </div>
            <div class="form-group">
              <label for="message" class="form-label">Message</label>
              <textarea id="message" class="form-textarea" placeholder="Your message"></textarea>
            </div>
            <button type="submit" class="form-button">Send Message</button>
          </form>
        </div>
{%- endif %}
      </div>
    </div>
  </section>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::ContactField;

    fn empty_context() -> PageContext {
        PageContext {
            name: "Ada Lovelace".to_string(),
            title: "Engineer".to_string(),
            description: "First programmer.".to_string(),
            meta_description: "First programmer.".to_string(),
            hero_blurb: "First programmer.".to_string(),
            sections: vec!["about", "contact"],
            nav: vec![],
            projects: vec![],
            skills: vec![],
            timeline: vec![],
            contact: ContactField {
                email: "ada@example.com".to_string(),
                phone: None,
                linkedin: None,
                github: None,
                website: None,
            },
            show_hero: true,
            contact_form: true,
            styles: String::new(),
            script: "",
        }
    }

    #[test]
    fn renders_head_title_from_name_and_title() {
        let engine = TemplateEngine::new();

        let html = engine.render_page(&empty_context()).unwrap();

        assert!(html.contains("<title>Ada Lovelace - Engineer</title>"));
        assert!(html.contains("mailto:ada@example.com"));
    }

    #[test]
    fn escapes_interpolated_values() {
        let engine = TemplateEngine::new();
        let mut ctx = empty_context();
        ctx.description = "<script>alert(1)</script>".to_string();

        let html = engine.render_page(&ctx).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn includes_only_composed_sections() {
        let engine = TemplateEngine::new();
        let ctx = empty_context();

        let html = engine.render_page(&ctx).unwrap();

        assert!(html.contains(r#"id="about""#));
        assert!(html.contains(r#"id="contact""#));
        assert!(!html.contains(r#"id="projects""#));
        assert!(!html.contains(r#"id="skills""#));
        assert!(!html.contains(r#"id="experience""#));
    }

    #[test]
    fn contact_form_flag_switches_layout() {
        let engine = TemplateEngine::new();
        let mut ctx = empty_context();
        ctx.contact_form = false;

        let html = engine.render_page(&ctx).unwrap();

        assert!(!html.contains("Send a Message"));
        assert!(html.contains(r#"class="contact-grid single""#));
    }
}
