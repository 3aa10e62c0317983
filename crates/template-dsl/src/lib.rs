//! A fluent, code-based API for building documents.
//!
//! Builders produce IDF nodes directly. Reusable pieces are plain "widget
//! functions" that return a pre-configured builder:
//!
//! ```ignore
//! use skyedoc_template_dsl::builders::*;
//! use skyedoc_template_dsl::StyledWidget;
//!
//! fn lead_paragraph(text: &str, style: RunStyle) -> Paragraph {
//!     Paragraph::new()
//!         .child(Text::styled(text, style))
//!         .spacing_after(12.0)
//!         .widow_control(true)
//! }
//! ```
//!
//! The end goal is a [`Template`], whose [`Template::build`] yields the
//! [`skyedoc_idf::Document`] handed to a serializer.

mod image;
mod list;
mod misc;
mod node;
mod paragraph;
mod style;
mod template;
mod text;
mod widgets;

/// Contains all the building blocks for assembling a document.
///
/// Import with `use skyedoc_template_dsl::builders::*;` for convenience.
pub mod builders {
    pub use super::image::Image;
    pub use super::list::{BulletList, ListItem};
    pub use super::misc::{Rule, Spacer};
    pub use super::paragraph::Paragraph;
    pub use super::text::Text;
    pub use skyedoc_idf::{BlockRole, Indent, RunStyle};
}

pub use self::node::TemplateBuilder;
pub use self::style::StyledWidget;
pub use self::template::Template;
pub use self::widgets::*;
