use crate::media::MediaTable;
use crate::parts::{self, PartSet};
use crate::story::{SectionRefs, StoryPart, StoryWriter};
use crate::writer::PackageWriter;
use chrono::{DateTime, Utc};
use skyedoc_idf::{Document, IRNode, SharedData};
use skyedoc_render_core::{DocumentRenderer, RenderError};
use std::collections::BTreeMap;
use std::io::{Seek, Write};

/// Settings that are not part of the document itself.
#[derive(Debug, Clone, Default)]
pub struct DocxOptions {
    /// Creation timestamp written into the core properties. `None` uses the
    /// current time, which makes the output differ between runs.
    pub created: Option<DateTime<Utc>>,
}

impl DocxOptions {
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}

/// Serializes one `Document` into a `.docx` package.
pub struct DocxRenderer<W: Write + Seek + Send> {
    options: DocxOptions,
    package: Option<PackageWriter<W>>,
    media: MediaTable,
    rendered: bool,
}

impl<W: Write + Seek + Send> DocxRenderer<W> {
    pub fn new(options: DocxOptions) -> Self {
        Self {
            options,
            package: None,
            media: MediaTable::default(),
            rendered: false,
        }
    }

    fn package(&mut self) -> Result<&mut PackageWriter<W>, RenderError> {
        self.package
            .as_mut()
            .ok_or(RenderError::InvalidState("begin_document was not called"))
    }

    fn story(
        &self,
        root: &'static str,
        blocks: &[IRNode],
        numbering: &BTreeMap<String, u32>,
        drawing_id: &mut u32,
    ) -> Result<StoryPart, RenderError> {
        let mut story = StoryWriter::new(root, &self.media, numbering, drawing_id)?;
        story.blocks(blocks)?;
        story.finish()
    }
}

impl<W: Write + Seek + Send> DocumentRenderer<W> for DocxRenderer<W> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError> {
        if self.package.is_some() {
            return Err(RenderError::InvalidState("begin_document called twice"));
        }
        self.package = Some(PackageWriter::new(writer));
        Ok(())
    }

    fn add_resources(&mut self, resources: &BTreeMap<String, SharedData>) -> Result<(), RenderError> {
        for (src, data) in resources {
            let entry = self.media.register(src, data.clone())?;
            log::debug!(
                "Registered resource '{}' as {} ({} bytes)",
                src,
                entry.part_name(),
                data.len()
            );
        }
        Ok(())
    }

    fn render_document(&mut self, document: &Document) -> Result<(), RenderError> {
        if self.rendered {
            return Err(RenderError::InvalidState("render_document called twice"));
        }
        self.package()?;

        let referenced = document.image_sources();
        for (src, _) in self.media.entries() {
            if !referenced.contains(&src) {
                log::warn!("Resource '{}' is not referenced by any block and will be unused", src);
            }
        }

        let numbering_ids: BTreeMap<String, u32> = document
            .numbering
            .iter()
            .enumerate()
            .map(|(i, def)| (def.reference.clone(), i as u32 + 1))
            .collect();
        let parts_present = PartSet {
            numbering: !document.numbering.is_empty(),
            header: !document.header.is_empty(),
            footer: !document.footer.is_empty(),
        };

        // Stories are written before anything touches the archive so that a
        // missing resource or numbering reference leaves no partial package.
        let mut drawing_id = 0;
        let header = parts_present
            .header
            .then(|| self.story("w:hdr", &document.header, &numbering_ids, &mut drawing_id))
            .transpose()?;
        let body = {
            let mut story = StoryWriter::new("w:document", &self.media, &numbering_ids, &mut drawing_id)?;
            let refs = SectionRefs {
                header: parts_present.header.then_some(parts::HEADER_REL_ID),
                footer: parts_present.footer.then_some(parts::FOOTER_REL_ID),
            };
            story.body(&document.body, &document.page, &refs)?;
            story.finish()?
        };
        let footer = parts_present
            .footer
            .then(|| self.story("w:ftr", &document.footer, &numbering_ids, &mut drawing_id))
            .transpose()?;

        let created = self.options.created.unwrap_or_else(Utc::now);
        let mut package_parts: Vec<(String, Vec<u8>)> = vec![
            (
                "[Content_Types].xml".to_string(),
                parts::content_types(parts_present, &self.media)?,
            ),
            ("_rels/.rels".to_string(), parts::package_relationships()?),
            (
                parts::CORE_PART.to_string(),
                parts::core_properties(&document.metadata, created)?,
            ),
            (
                "word/_rels/document.xml.rels".to_string(),
                parts::document_relationships(parts_present, &self.media, &body.images)?,
            ),
            (parts::DOCUMENT_PART.to_string(), body.bytes),
            (parts::STYLES_PART.to_string(), parts::styles(&document.defaults)?),
        ];
        if parts_present.numbering {
            package_parts.push((
                parts::NUMBERING_PART.to_string(),
                parts::numbering(&document.numbering)?,
            ));
        }
        for (part, story) in [(parts::HEADER_PART, header), (parts::FOOTER_PART, footer)] {
            let Some(story) = story else { continue };
            if !story.images.is_empty() {
                let file = part.trim_start_matches("word/");
                package_parts.push((
                    format!("word/_rels/{}.rels", file),
                    parts::image_relationships(&self.media, &story.images)?,
                ));
            }
            package_parts.push((part.to_string(), story.bytes));
        }

        let package = self
            .package
            .as_mut()
            .ok_or(RenderError::InvalidState("begin_document was not called"))?;
        for (name, bytes) in &package_parts {
            package.write_part(name, bytes)?;
        }
        for (_, entry) in self.media.entries() {
            package.write_part(&entry.part_name(), &entry.data)?;
        }
        log::debug!(
            "Serialized {} blocks into {} package parts",
            document.header.len() + document.body.len() + document.footer.len(),
            package.parts_written()
        );
        self.rendered = true;
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<W, RenderError> {
        if !self.rendered {
            return Err(RenderError::InvalidState("finish called before render_document"));
        }
        let package = self
            .package
            .ok_or(RenderError::InvalidState("begin_document was not called"))?;
        package.finish()
    }
}
