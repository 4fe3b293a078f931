//! Embedded assets for the generated document.
//!
//! The output must be portable as a single file, so the stylesheet and the
//! behavior script are inlined rather than linked. The `:root` block is
//! generated from the theme's color tokens; everything after it is static.

use crate::theme::Theme;

/// Asset pipeline utilities.
pub struct Assets;

impl Assets {
    /// Generate the embedded stylesheet for a theme.
    pub fn stylesheet(theme: &Theme) -> String {
        let colors = &theme.colors;
        format!(
            r#"    /* Modern CSS Reset */
    *, *::before, *::after {{
      box-sizing: border-box;
    }}

    body, h1, h2, h3, h4, p, figure, blockquote, dl, dd {{
      margin: 0;
    }}

    /* Custom Properties */
    :root {{
      --color-primary: {primary};
      --color-primary-dark: {primary_dark};
      --color-primary-light: {primary_light};
      --color-secondary: {secondary};
      --color-secondary-dark: {secondary_dark};
      --color-accent: {accent};
      --color-text: {text};
      --color-text-light: {text_light};
      --color-text-lighter: {text_lighter};
      --color-background: {background};
      --color-background-alt: {background_alt};
      --color-border: {border};
      --color-border-light: {border_light};
      --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
      --shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
      --shadow-md: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
      --shadow-lg: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
      --font-sans: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
      --transition: all 0.3s ease;
      --container-width: 1200px;
      --header-height: 70px;
      --section-spacing: 5rem;
      --border-radius: 0.5rem;
      --border-radius-lg: 1rem;
    }}
{body}"#,
            primary = colors.primary,
            primary_dark = colors.primary_dark,
            primary_light = colors.primary_light,
            secondary = colors.secondary,
            secondary_dark = colors.secondary_dark,
            accent = colors.accent,
            text = colors.text,
            text_light = colors.text_light,
            text_lighter = colors.text_lighter,
            background = colors.background,
            background_alt = colors.background_alt,
            border = colors.border,
            border_light = colors.border_light,
            body = STATIC_CSS,
        )
    }

    /// The embedded behavior script: header scroll state, mobile nav toggle,
    /// smooth scrolling, active nav-link highlighting.
    pub fn script() -> &'static str {
        BEHAVIOR_SCRIPT
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const STATIC_CSS: &str = r#"
    /* Base Styles */
    html {
      scroll-behavior: smooth;
    }

    body {
      font-family: var(--font-sans);
      color: var(--color-text);
      line-height: 1.6;
      background-color: var(--color-background);
      -webkit-font-smoothing: antialiased;
      -moz-osx-font-smoothing: grayscale;
    }

    img {
      max-width: 100%;
      display: block;
    }

    a {
      color: var(--color-primary);
      text-decoration: none;
      transition: var(--transition);
    }

    a:hover {
      color: var(--color-primary-dark);
    }

    /* Typography */
    h1, h2, h3, h4, h5, h6 {
      line-height: 1.2;
      font-weight: 700;
      margin-bottom: 1rem;
      color: var(--color-text);
    }

    h1 {
      font-size: 3rem;
      letter-spacing: -0.025em;
    }

    h2 {
      font-size: 2.25rem;
      letter-spacing: -0.025em;
    }

    h3 {
      font-size: 1.5rem;
    }

    h4 {
      font-size: 1.25rem;
    }

    p {
      margin-bottom: 1.5rem;
    }

    /* Layout */
    .container {
      width: 100%;
      max-width: var(--container-width);
      margin: 0 auto;
      padding: 0 1.5rem;
    }

    .section {
      padding: var(--section-spacing) 0;
    }

    .section-title {
      text-align: center;
      margin-bottom: 3rem;
      position: relative;
    }

    .section-title::after {
      content: '';
      position: absolute;
      bottom: -0.75rem;
      left: 50%;
      transform: translateX(-50%);
      width: 5rem;
      height: 0.25rem;
      background: linear-gradient(to right, var(--color-primary), var(--color-secondary));
      border-radius: 9999px;
    }

    /* Header */
    .header {
      position: fixed;
      top: 0;
      left: 0;
      right: 0;
      height: var(--header-height);
      background-color: rgba(255, 255, 255, 0.95);
      backdrop-filter: blur(10px);
      -webkit-backdrop-filter: blur(10px);
      box-shadow: var(--shadow-sm);
      z-index: 100;
      transition: var(--transition);
    }

    .header.scrolled {
      box-shadow: var(--shadow);
    }

    .header-container {
      display: flex;
      justify-content: space-between;
      align-items: center;
      height: 100%;
    }

    .logo {
      font-size: 1.5rem;
      font-weight: 700;
      color: var(--color-text);
      display: flex;
      align-items: center;
    }

    .logo-gradient {
      background: linear-gradient(to right, var(--color-primary), var(--color-secondary));
      -webkit-background-clip: text;
      background-clip: text;
      -webkit-text-fill-color: transparent;
    }

    .nav {
      display: flex;
      align-items: center;
    }

    .nav-list {
      display: flex;
      list-style: none;
      padding: 0;
      margin: 0;
    }

    .nav-item {
      margin-left: 2rem;
    }

    .nav-link {
      color: var(--color-text);
      font-weight: 500;
      position: relative;
    }

    .nav-link:hover {
      color: var(--color-primary);
    }

    .nav-link::after {
      content: '';
      position: absolute;
      bottom: -0.25rem;
      left: 0;
      width: 0;
      height: 2px;
      background-color: var(--color-primary);
      transition: var(--transition);
    }

    .nav-link:hover::after {
      width: 100%;
    }

    .nav-link.active {
      color: var(--color-primary);
    }

    .nav-link.active::after {
      width: 100%;
    }

    .mobile-menu-btn {
      display: none;
      background: none;
      border: none;
      cursor: pointer;
      padding: 0.5rem;
      color: var(--color-text);
    }

    .mobile-menu.hidden {
      display: none;
    }

    /* Hero Section */
    .hero {
      padding-top: calc(var(--header-height) + 5rem);
      padding-bottom: 5rem;
      background: linear-gradient(to bottom right, var(--color-background-alt), var(--color-background));
      position: relative;
      overflow: hidden;
    }

    .hero::before {
      content: '';
      position: absolute;
      top: -10%;
      right: -10%;
      width: 50%;
      height: 70%;
      background: linear-gradient(to bottom right, rgba(59, 130, 246, 0.1), rgba(139, 92, 246, 0.1));
      border-radius: 50%;
      z-index: 0;
    }

    .hero-container {
      display: flex;
      align-items: center;
      justify-content: space-between;
      position: relative;
      z-index: 1;
    }

    .hero-content {
      max-width: 600px;
    }

    .hero-title {
      font-size: 3.5rem;
      margin-bottom: 1.5rem;
      line-height: 1.1;
    }

    .hero-subtitle {
      font-size: 1.5rem;
      color: var(--color-primary);
      margin-bottom: 1.5rem;
      font-weight: 600;
    }

    .hero-description {
      font-size: 1.125rem;
      color: var(--color-text-light);
      margin-bottom: 2rem;
    }

    .hero-cta {
      display: inline-block;
      background: linear-gradient(to right, var(--color-primary), var(--color-secondary));
      color: white;
      padding: 0.75rem 2rem;
      border-radius: 9999px;
      font-weight: 600;
      box-shadow: var(--shadow);
      transition: var(--transition);
    }

    .hero-cta:hover {
      transform: translateY(-3px);
      box-shadow: var(--shadow-md);
      color: white;
    }

    .hero-image {
      width: 350px;
      height: 350px;
      border-radius: 50%;
      overflow: hidden;
      box-shadow: var(--shadow-lg);
      border: 5px solid white;
      position: relative;
    }

    .hero-image-placeholder {
      width: 100%;
      height: 100%;
      background-color: var(--color-background-alt);
      display: flex;
      align-items: center;
      justify-content: center;
      color: var(--color-text-light);
    }

    /* About Section */
    .about {
      background-color: var(--color-background);
    }

    .about-content {
      max-width: 800px;
      margin: 0 auto;
      font-size: 1.125rem;
    }

    /* Projects Section */
    .projects {
      background-color: var(--color-background-alt);
    }

    .projects-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(350px, 1fr));
      gap: 2rem;
    }

    .project-card {
      background-color: var(--color-background);
      border-radius: var(--border-radius-lg);
      overflow: hidden;
      box-shadow: var(--shadow);
      transition: var(--transition);
    }

    .project-card:hover {
      transform: translateY(-5px);
      box-shadow: var(--shadow-md);
    }

    .project-image {
      height: 200px;
      background-color: var(--color-background-alt);
      position: relative;
    }

    .project-image img {
      width: 100%;
      height: 100%;
      object-fit: cover;
    }

    .project-image-placeholder {
      width: 100%;
      height: 100%;
      display: flex;
      align-items: center;
      justify-content: center;
      color: var(--color-text-light);
    }

    .project-content {
      padding: 1.5rem;
    }

    .project-title {
      font-size: 1.25rem;
      margin-bottom: 0.5rem;
    }

    .project-description {
      color: var(--color-text-light);
      margin-bottom: 1rem;
    }

    .project-tags {
      display: flex;
      flex-wrap: wrap;
      gap: 0.5rem;
      margin-bottom: 1rem;
    }

    .project-tag {
      background-color: var(--color-background-alt);
      color: var(--color-text);
      padding: 0.25rem 0.75rem;
      border-radius: 9999px;
      font-size: 0.75rem;
      font-weight: 500;
    }

    .project-link {
      display: inline-flex;
      align-items: center;
      color: var(--color-primary);
      font-weight: 500;
    }

    .project-link svg {
      margin-left: 0.25rem;
      transition: var(--transition);
    }

    .project-link:hover svg {
      transform: translateX(3px);
    }

    /* Skills Section */
    .skills {
      background-color: var(--color-background);
    }

    .skills-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
      gap: 2rem;
    }

    .skill-card {
      background-color: var(--color-background);
      border: 1px solid var(--color-border-light);
      border-radius: var(--border-radius);
      padding: 1.5rem;
      text-align: center;
      transition: var(--transition);
    }

    .skill-card:hover {
      transform: translateY(-5px);
      box-shadow: var(--shadow);
      border-color: var(--color-primary-light);
    }

    .skill-icon {
      width: 4rem;
      height: 4rem;
      background-color: var(--color-background-alt);
      border-radius: 50%;
      display: flex;
      align-items: center;
      justify-content: center;
      margin: 0 auto 1rem;
      color: var(--color-primary);
    }

    .skill-name {
      font-weight: 600;
      margin-bottom: 0.5rem;
    }

    .skill-level {
      width: 100%;
      height: 0.5rem;
      background-color: var(--color-background-alt);
      border-radius: 9999px;
      overflow: hidden;
      margin-top: 0.75rem;
    }

    .skill-progress {
      height: 100%;
      background: linear-gradient(to right, var(--color-primary), var(--color-secondary));
      border-radius: 9999px;
    }

    /* Experience & Education Section */
    .experience {
      background-color: var(--color-background-alt);
    }

    .timeline {
      max-width: 800px;
      margin: 0 auto;
      position: relative;
    }

    .timeline::before {
      content: '';
      position: absolute;
      top: 0;
      bottom: 0;
      left: 0;
      width: 2px;
      background: linear-gradient(to bottom, var(--color-primary), var(--color-secondary));
    }

    .timeline-item {
      position: relative;
      padding-left: 2.5rem;
      padding-bottom: 3rem;
    }

    .timeline-item:last-child {
      padding-bottom: 0;
    }

    .timeline-dot {
      position: absolute;
      top: 0;
      left: -0.5rem;
      width: 1rem;
      height: 1rem;
      border-radius: 50%;
      background: linear-gradient(to right, var(--color-primary), var(--color-secondary));
      border: 2px solid white;
    }

    .timeline-content {
      background-color: var(--color-background);
      border-radius: var(--border-radius);
      padding: 1.5rem;
      box-shadow: var(--shadow);
    }

    .timeline-date {
      display: inline-block;
      background: linear-gradient(to right, var(--color-primary), var(--color-secondary));
      color: white;
      padding: 0.25rem 0.75rem;
      border-radius: 9999px;
      font-size: 0.875rem;
      margin-bottom: 0.75rem;
    }

    .timeline-title {
      font-size: 1.25rem;
      margin-bottom: 0.25rem;
    }

    .timeline-subtitle {
      color: var(--color-primary);
      font-weight: 500;
      margin-bottom: 0.75rem;
    }

    /* Contact Section */
    .contact {
      background-color: var(--color-background);
    }

    .contact-grid {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 3rem;
    }

    .contact-grid.single {
      grid-template-columns: 1fr;
      max-width: 600px;
      margin: 0 auto;
    }

    .contact-info {
      background-color: var(--color-background);
      border-radius: var(--border-radius);
      padding: 2rem;
      box-shadow: var(--shadow);
    }

    .contact-title {
      font-size: 1.5rem;
      margin-bottom: 1.5rem;
      background: linear-gradient(to right, var(--color-primary), var(--color-secondary));
      -webkit-background-clip: text;
      background-clip: text;
      -webkit-text-fill-color: transparent;
    }

    .contact-item {
      display: flex;
      align-items: flex-start;
      margin-bottom: 1.5rem;
    }

    .contact-icon {
      width: 3rem;
      height: 3rem;
      background: linear-gradient(to right, var(--color-primary), var(--color-secondary));
      border-radius: 50%;
      display: flex;
      align-items: center;
      justify-content: center;
      margin-right: 1rem;
      color: white;
      flex-shrink: 0;
    }

    .contact-label {
      font-size: 0.875rem;
      color: var(--color-text-light);
      margin-bottom: 0.25rem;
    }

    .contact-value {
      font-weight: 500;
    }

    .contact-value a {
      color: var(--color-text);
    }

    .contact-value a:hover {
      color: var(--color-primary);
    }

    .social-links {
      display: flex;
      gap: 1rem;
      margin-top: 2rem;
    }

    .social-link {
      width: 3rem;
      height: 3rem;
      border-radius: 50%;
      display: flex;
      align-items: center;
      justify-content: center;
      background-color: var(--color-background-alt);
      color: var(--color-text);
      transition: var(--transition);
    }

    .social-link:hover {
      transform: translateY(-3px);
      background: linear-gradient(to right, var(--color-primary), var(--color-secondary));
      color: white;
    }

    .contact-form {
      background-color: var(--color-background);
      border-radius: var(--border-radius);
      padding: 2rem;
      box-shadow: var(--shadow);
    }

    .form-group {
      margin-bottom: 1.5rem;
    }

    .form-label {
      display: block;
      margin-bottom: 0.5rem;
      font-weight: 500;
    }

    .form-input,
    .form-textarea {
      width: 100%;
      padding: 0.75rem 1rem;
      border: 1px solid var(--color-border);
      border-radius: var(--border-radius);
      background-color: var(--color-background);
      color: var(--color-text);
      font-family: inherit;
      font-size: 1rem;
      transition: var(--transition);
    }

    .form-input:focus,
    .form-textarea:focus {
      outline: none;
      border-color: var(--color-primary);
    }

    .form-textarea {
      min-height: 150px;
      resize: vertical;
    }

    .form-button {
      display: inline-block;
      background: linear-gradient(to right, var(--color-primary), var(--color-secondary));
      color: white;
      padding: 0.75rem 2rem;
      border: none;
      border-radius: 9999px;
      font-weight: 600;
      cursor: pointer;
      transition: var(--transition);
      width: 100%;
    }

    .form-button:hover {
      transform: translateY(-3px);
      box-shadow: var(--shadow);
    }

    /* Footer */
    .footer {
      background-color: var(--color-background-alt);
      padding: 3rem 0;
      text-align: center;
    }

    .footer-content {
      max-width: 600px;
      margin: 0 auto;
    }

    .footer-logo {
      font-size: 1.5rem;
      font-weight: 700;
      margin-bottom: 1rem;
      background: linear-gradient(to right, var(--color-primary), var(--color-secondary));
      -webkit-background-clip: text;
      background-clip: text;
      -webkit-text-fill-color: transparent;
    }

    .footer-social {
      display: flex;
      justify-content: center;
      gap: 1rem;
      margin: 1.5rem 0;
    }

    .footer-social-link {
      width: 2.5rem;
      height: 2.5rem;
      border-radius: 50%;
      display: flex;
      align-items: center;
      justify-content: center;
      background-color: var(--color-background);
      color: var(--color-text);
      transition: var(--transition);
    }

    .footer-social-link:hover {
      background: linear-gradient(to right, var(--color-primary), var(--color-secondary));
      color: white;
    }

    .footer-copyright {
      color: var(--color-text-light);
      font-size: 0.875rem;
    }

    /* Responsive Styles */
    @media (max-width: 1024px) {
      .hero-title {
        font-size: 3rem;
      }

      .hero-image {
        width: 300px;
        height: 300px;
      }
    }

    @media (max-width: 768px) {
      :root {
        --section-spacing: 4rem;
      }

      .section-title {
        margin-bottom: 2rem;
      }

      .hero-container {
        flex-direction: column;
        text-align: center;
      }

      .hero-content {
        margin-bottom: 3rem;
      }

      .hero-title {
        font-size: 2.5rem;
      }

      .hero-image {
        width: 250px;
        height: 250px;
      }

      .contact-grid {
        grid-template-columns: 1fr;
      }

      .nav-list {
        display: none;
      }

      .mobile-menu-btn {
        display: block;
      }

      .mobile-menu {
        position: fixed;
        top: var(--header-height);
        left: 0;
        right: 0;
        background-color: var(--color-background);
        padding: 1.5rem;
        box-shadow: var(--shadow);
        z-index: 99;
      }

      .mobile-menu .nav-list {
        display: flex;
        flex-direction: column;
      }

      .mobile-menu .nav-item {
        margin: 0;
        margin-bottom: 1rem;
      }

      .mobile-menu .nav-item:last-child {
        margin-bottom: 0;
      }
    }

    @media (max-width: 640px) {
      :root {
        --section-spacing: 3rem;
      }

      h1 {
        font-size: 2.25rem;
      }

      h2 {
        font-size: 1.75rem;
      }

      .hero-title {
        font-size: 2rem;
      }

      .hero-subtitle {
        font-size: 1.25rem;
      }

      .projects-grid {
        grid-template-columns: 1fr;
      }

      .skills-grid {
        grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
      }
    }
"#;

const BEHAVIOR_SCRIPT: &str = r##"    document.addEventListener('DOMContentLoaded', function () {
      var header = document.querySelector('.header');
      var mobileMenuBtn = document.querySelector('.mobile-menu-btn');
      var mobileMenu = document.querySelector('.mobile-menu');

      // Header scroll effect
      window.addEventListener('scroll', function () {
        if (window.scrollY > 50) {
          header.classList.add('scrolled');
        } else {
          header.classList.remove('scrolled');
        }
      });

      // Mobile menu toggle
      if (mobileMenuBtn && mobileMenu) {
        mobileMenuBtn.addEventListener('click', function () {
          mobileMenu.classList.toggle('hidden');
        });
      }

      // Smooth scrolling for anchor links
      document.querySelectorAll('a[href^="#"]').forEach(function (anchor) {
        anchor.addEventListener('click', function (e) {
          e.preventDefault();

          var targetId = this.getAttribute('href');
          if (targetId === '#') return;

          var target = document.querySelector(targetId);
          if (target) {
            var headerOffset = 80;
            var position = target.getBoundingClientRect().top + window.pageYOffset - headerOffset;

            window.scrollTo({ top: position, behavior: 'smooth' });

            if (mobileMenu && !mobileMenu.classList.contains('hidden')) {
              mobileMenu.classList.add('hidden');
            }
          }
        });
      });

      // Active nav link highlighting
      var sections = document.querySelectorAll('section[id]');

      function highlightNavLink() {
        var scrollY = window.pageYOffset;

        sections.forEach(function (section) {
          var sectionTop = section.offsetTop - 100;
          var sectionId = section.getAttribute('id');
          var link = document.querySelector('.nav-link[href="#' + sectionId + '"]');
          if (!link) return;

          if (scrollY > sectionTop && scrollY <= sectionTop + section.offsetHeight) {
            link.classList.add('active');
          } else {
            link.classList.remove('active');
          }
        });
      }

      window.addEventListener('scroll', highlightNavLink);
    });
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_carries_theme_tokens() {
        let css = Assets::stylesheet(&Theme::classic());

        assert!(css.contains(":root"));
        assert!(css.contains("--color-primary: #3b82f6;"));
        assert!(css.contains("@media (max-width: 640px)"));
    }

    #[test]
    fn preset_palettes_change_the_tokens() {
        let css = Assets::stylesheet(&Theme::violet());

        assert!(css.contains("--color-primary: #9333ea;"));
    }

    #[test]
    fn script_covers_nav_behaviors() {
        let js = Assets::script();

        assert!(js.contains("scrolled"));
        assert!(js.contains("mobile-menu"));
        assert!(js.contains("behavior: 'smooth'"));
        assert!(js.contains("highlightNavLink"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = Assets::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }
}
