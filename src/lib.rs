//! Generates the SkyeTrain guide as WordprocessingML documents.
//!
//! Content and design tokens go through the template [`renderer`] into an
//! IDF block tree, which the `.docx` serializer turns into a package. The
//! [`pipeline`] ties these together with logo loading and file output.

pub mod brand;
pub mod content;
mod error;
pub mod pipeline;
pub mod renderer;

pub use content::{Content, Paragraph, Section, Span};
pub use error::PipelineError;
pub use pipeline::{DocumentPipeline, PipelineBuilder};
pub use renderer::render;
pub use skyedoc_style::{DesignTokens, PageGeometry, Preset, TokenSet};
