//! Block and run serialization for the story parts: the main document, the
//! header and the footer all share the same paragraph model.

use crate::media::MediaTable;
use crate::xml::{STORY_NAMESPACES, XmlWriter};
use skyedoc_idf::{IRNode, NumberingRef, PageSetup, ParagraphStyle, Run};
use skyedoc_render_core::RenderError;
use skyedoc_render_core::utils::{eighth_points, half_points, line_240ths, px_to_emu, twips};
use skyedoc_style::{Border, BorderStyle, TextAlign};
use skyedoc_types::PixelExtent;
use std::collections::BTreeMap;

const PICTURE_URI: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

/// Relationship ids the section properties point at.
pub(crate) struct SectionRefs<'a> {
    pub header: Option<&'a str>,
    pub footer: Option<&'a str>,
}

/// A finished story part and the media indices it embeds.
pub(crate) struct StoryPart {
    pub bytes: Vec<u8>,
    pub images: Vec<usize>,
}

pub(crate) struct StoryWriter<'a> {
    xml: XmlWriter,
    root: &'static str,
    media: &'a MediaTable,
    numbering: &'a BTreeMap<String, u32>,
    drawing_id: &'a mut u32,
    images: Vec<usize>,
}

impl<'a> StoryWriter<'a> {
    /// Opens a story part whose root element is `root` (`w:document`,
    /// `w:hdr` or `w:ftr`).
    pub fn new(
        root: &'static str,
        media: &'a MediaTable,
        numbering: &'a BTreeMap<String, u32>,
        drawing_id: &'a mut u32,
    ) -> Result<Self, RenderError> {
        let mut xml = XmlWriter::part()?;
        xml.start(root, &STORY_NAMESPACES)?;
        Ok(Self {
            xml,
            root,
            media,
            numbering,
            drawing_id,
            images: Vec::new(),
        })
    }

    /// Writes `<w:body>` with the blocks and the closing section properties.
    pub fn body(
        &mut self,
        blocks: &[IRNode],
        page: &PageSetup,
        refs: &SectionRefs<'_>,
    ) -> Result<(), RenderError> {
        self.xml.start("w:body", &[])?;
        self.blocks(blocks)?;
        self.section(page, refs)?;
        self.xml.end("w:body")
    }

    pub fn blocks(&mut self, blocks: &[IRNode]) -> Result<(), RenderError> {
        for block in blocks {
            self.block(block)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<StoryPart, RenderError> {
        self.xml.end(self.root)?;
        Ok(StoryPart {
            bytes: self.xml.into_bytes(),
            images: self.images,
        })
    }

    fn block(&mut self, node: &IRNode) -> Result<(), RenderError> {
        self.xml.start("w:p", &[])?;
        match node {
            IRNode::Paragraph { meta, children } => {
                self.paragraph_properties(&meta.style, None)?;
                self.runs(children)?;
            }
            IRNode::ListItem {
                meta,
                numbering,
                children,
            } => {
                self.paragraph_properties(&meta.style, Some(numbering))?;
                self.runs(children)?;
            }
            IRNode::Image { meta, src, extent } => {
                self.paragraph_properties(&meta.style, None)?;
                self.drawing(src, *extent)?;
            }
            IRNode::Rule { meta } | IRNode::Spacer { meta } => {
                self.paragraph_properties(&meta.style, None)?;
            }
        }
        self.xml.end("w:p")
    }

    fn paragraph_properties(
        &mut self,
        style: &ParagraphStyle,
        numbering: Option<&NumberingRef>,
    ) -> Result<(), RenderError> {
        let xml = &mut self.xml;
        xml.start("w:pPr", &[])?;
        if style.keep_with_next {
            xml.empty("w:keepNext", &[])?;
        }
        if style.keep_lines {
            xml.empty("w:keepLines", &[])?;
        }
        if style.widow_control {
            xml.empty("w:widowControl", &[])?;
        }
        if let Some(numbering) = numbering {
            let num_id = self
                .numbering
                .get(&numbering.reference)
                .ok_or_else(|| RenderError::UnknownNumbering(numbering.reference.clone()))?;
            xml.start("w:numPr", &[])?;
            xml.val("w:ilvl", &numbering.level.to_string())?;
            xml.val("w:numId", &num_id.to_string())?;
            xml.end("w:numPr")?;
        }
        if style.has_borders() {
            xml.start("w:pBdr", &[])?;
            for (edge, border) in [
                ("w:top", &style.border_top),
                ("w:left", &style.border_left),
                ("w:bottom", &style.border_bottom),
            ] {
                if let Some(border) = border {
                    border_element(xml, edge, border)?;
                }
            }
            xml.end("w:pBdr")?;
        }

        let before = twips(style.spacing_before).to_string();
        let after = twips(style.spacing_after).to_string();
        let line = style.line_height.map(|l| line_240ths(l).to_string());
        let mut spacing = vec![("w:before", before.as_str()), ("w:after", after.as_str())];
        if let Some(line) = &line {
            spacing.push(("w:line", line.as_str()));
            spacing.push(("w:lineRule", "auto"));
        }
        xml.empty("w:spacing", &spacing)?;

        if let Some(indent) = style.indent {
            let left = twips(indent.left).to_string();
            let hanging = twips(indent.hanging).to_string();
            xml.empty("w:ind", &[("w:left", left.as_str()), ("w:hanging", hanging.as_str())])?;
        }
        xml.val("w:jc", justification(style.align))?;
        xml.end("w:pPr")
    }

    fn runs(&mut self, runs: &[Run]) -> Result<(), RenderError> {
        for run in runs {
            self.run(run)?;
        }
        Ok(())
    }

    fn run(&mut self, run: &Run) -> Result<(), RenderError> {
        let xml = &mut self.xml;
        let style = &run.style;
        xml.start("w:r", &[])?;
        xml.start("w:rPr", &[])?;
        let family = style.font_family.as_str();
        xml.empty(
            "w:rFonts",
            &[("w:ascii", family), ("w:hAnsi", family), ("w:cs", family)],
        )?;
        if style.is_bold() {
            xml.empty("w:b", &[])?;
            xml.empty("w:bCs", &[])?;
        }
        if style.is_italic() {
            xml.empty("w:i", &[])?;
            xml.empty("w:iCs", &[])?;
        }
        xml.val("w:color", &style.color.to_hex())?;
        if let Some(tracking) = style.letter_spacing {
            xml.val("w:spacing", &twips(tracking).to_string())?;
        }
        let size = half_points(style.font_size).to_string();
        xml.val("w:sz", &size)?;
        xml.val("w:szCs", &size)?;
        xml.end("w:rPr")?;

        for (i, line) in run.text.split('\n').enumerate() {
            if i > 0 {
                xml.empty("w:br", &[])?;
            }
            for (j, segment) in line.split('\t').enumerate() {
                if j > 0 {
                    xml.empty("w:tab", &[])?;
                }
                let segment = segment.replace('\r', "");
                if !segment.is_empty() {
                    xml.text_element("w:t", &[("xml:space", "preserve")], &segment)?;
                }
            }
        }
        xml.end("w:r")
    }

    fn drawing(&mut self, src: &str, extent: PixelExtent) -> Result<(), RenderError> {
        let entry = self
            .media
            .get(src)
            .ok_or_else(|| RenderError::MissingResource(src.to_string()))?;
        if !self.images.contains(&entry.index) {
            self.images.push(entry.index);
        }
        *self.drawing_id += 1;
        let id = self.drawing_id.to_string();
        let name = format!("Picture {}", id);
        let file_name = format!("image{}.{}", entry.index, entry.format.extension());
        let rel_id = entry.rel_id();
        let cx = px_to_emu(extent.width).to_string();
        let cy = px_to_emu(extent.height).to_string();

        let xml = &mut self.xml;
        xml.start("w:r", &[])?;
        xml.start("w:drawing", &[])?;
        xml.start(
            "wp:inline",
            &[("distT", "0"), ("distB", "0"), ("distL", "0"), ("distR", "0")],
        )?;
        xml.empty("wp:extent", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
        xml.empty("wp:effectExtent", &[("l", "0"), ("t", "0"), ("r", "0"), ("b", "0")])?;
        xml.empty("wp:docPr", &[("id", id.as_str()), ("name", name.as_str())])?;
        xml.start("wp:cNvGraphicFramePr", &[])?;
        xml.empty("a:graphicFrameLocks", &[("noChangeAspect", "1")])?;
        xml.end("wp:cNvGraphicFramePr")?;

        xml.start("a:graphic", &[])?;
        xml.start("a:graphicData", &[("uri", PICTURE_URI)])?;
        xml.start("pic:pic", &[])?;
        xml.start("pic:nvPicPr", &[])?;
        xml.empty("pic:cNvPr", &[("id", id.as_str()), ("name", file_name.as_str())])?;
        xml.empty("pic:cNvPicPr", &[])?;
        xml.end("pic:nvPicPr")?;
        xml.start("pic:blipFill", &[])?;
        xml.empty("a:blip", &[("r:embed", rel_id.as_str())])?;
        xml.start("a:stretch", &[])?;
        xml.empty("a:fillRect", &[])?;
        xml.end("a:stretch")?;
        xml.end("pic:blipFill")?;
        xml.start("pic:spPr", &[])?;
        xml.start("a:xfrm", &[])?;
        xml.empty("a:off", &[("x", "0"), ("y", "0")])?;
        xml.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
        xml.end("a:xfrm")?;
        xml.start("a:prstGeom", &[("prst", "rect")])?;
        xml.empty("a:avLst", &[])?;
        xml.end("a:prstGeom")?;
        xml.end("pic:spPr")?;
        xml.end("pic:pic")?;
        xml.end("a:graphicData")?;
        xml.end("a:graphic")?;

        xml.end("wp:inline")?;
        xml.end("w:drawing")?;
        xml.end("w:r")
    }

    fn section(&mut self, page: &PageSetup, refs: &SectionRefs<'_>) -> Result<(), RenderError> {
        let xml = &mut self.xml;
        xml.start("w:sectPr", &[])?;
        if let Some(id) = refs.header {
            xml.empty("w:headerReference", &[("w:type", "default"), ("r:id", id)])?;
        }
        if let Some(id) = refs.footer {
            xml.empty("w:footerReference", &[("w:type", "default"), ("r:id", id)])?;
        }
        let width = twips(page.width).to_string();
        let height = twips(page.height).to_string();
        xml.empty("w:pgSz", &[("w:w", width.as_str()), ("w:h", height.as_str())])?;

        let m = &page.margins;
        let [top, right, bottom, left, header, footer] = [
            m.top,
            m.right,
            m.bottom,
            m.left,
            page.header_distance,
            page.footer_distance,
        ]
        .map(|v| twips(v).to_string());
        xml.empty(
            "w:pgMar",
            &[
                ("w:top", top.as_str()),
                ("w:right", right.as_str()),
                ("w:bottom", bottom.as_str()),
                ("w:left", left.as_str()),
                ("w:header", header.as_str()),
                ("w:footer", footer.as_str()),
                ("w:gutter", "0"),
            ],
        )?;
        xml.end("w:sectPr")
    }
}

fn justification(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
        TextAlign::Justify => "both",
    }
}

fn border_element(xml: &mut XmlWriter, edge: &str, border: &Border) -> Result<(), RenderError> {
    let style = match border.style {
        BorderStyle::None => "nil",
        BorderStyle::Solid => "single",
        BorderStyle::Dashed => "dashed",
        BorderStyle::Dotted => "dotted",
        BorderStyle::Double => "double",
    };
    let size = eighth_points(border.width).to_string();
    // Border spacing is stored in whole points, 0 to 31.
    let space = border.space.round().clamp(0.0, 31.0).to_string();
    let color = border.color.to_hex();
    xml.empty(
        edge,
        &[
            ("w:val", style),
            ("w:sz", size.as_str()),
            ("w:space", space.as_str()),
            ("w:color", color.as_str()),
        ],
    )
}
