use crate::error::RenderError;
use skyedoc_idf::{Document, SharedData};
use std::collections::BTreeMap;
use std::io::{Seek, Write};

/// A trait for document serializers.
///
/// Calls must come in order: `begin_document`, `add_resources`,
/// `render_document`, then `finish`, which hands the writer back.
pub trait DocumentRenderer<W: Write + Seek + Send> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError>;

    fn add_resources(&mut self, resources: &BTreeMap<String, SharedData>)
    -> Result<(), RenderError>;

    fn render_document(&mut self, document: &Document) -> Result<(), RenderError>;

    fn finish(self: Box<Self>) -> Result<W, RenderError>;
}

/// Drives a renderer through the full protocol for one document.
pub fn render_to_writer<W, R>(mut renderer: R, document: &Document, writer: W) -> Result<W, RenderError>
where
    W: Write + Seek + Send,
    R: DocumentRenderer<W>,
{
    renderer.begin_document(writer)?;
    renderer.add_resources(&document.resources)?;
    renderer.render_document(document)?;
    Box::new(renderer).finish()
}
