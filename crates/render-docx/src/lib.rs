//! WordprocessingML (`.docx`) serializer for IDF documents.
//!
//! The package is assembled in memory part by part: `quick-xml` writes each
//! XML part and `zip` stores them in an OPC container. Output is
//! byte-for-byte deterministic when [`DocxOptions::created`] is fixed.

mod media;
mod parts;
mod renderer;
mod story;
mod writer;
mod xml;

pub use renderer::{DocxOptions, DocxRenderer};
pub use writer::PackageWriter;

/// Serializes a document into an in-memory `.docx` package.
pub fn render_to_bytes(
    document: &skyedoc_idf::Document,
    options: DocxOptions,
) -> Result<Vec<u8>, skyedoc_render_core::RenderError> {
    let cursor = skyedoc_render_core::render_to_writer(
        DocxRenderer::new(options),
        document,
        std::io::Cursor::new(Vec::new()),
    )?;
    Ok(cursor.into_inner())
}
