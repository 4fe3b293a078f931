//! Static portfolio page generator.
//!
//! Renders a [`folio_model::Portfolio`] into a single self-contained HTML
//! document: inline stylesheet, inline SVG icons, inline behavior script.
//! Rendering is a pure transform of its input; equal aggregates produce
//! byte-identical output.

pub mod assets;
pub mod document;
pub mod fields;
pub mod sections;
pub mod templates;
pub mod theme;

pub use document::{render, RenderError, Renderer};
pub use sections::Section;
pub use theme::Theme;
