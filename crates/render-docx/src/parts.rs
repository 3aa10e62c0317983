//! The non-story parts of the package.

use crate::media::MediaTable;
use crate::xml::{NS_CONTENT_TYPES, NS_PKG_RELS, NS_W, XmlWriter};
use chrono::{DateTime, SecondsFormat, Utc};
use skyedoc_idf::{DocumentDefaults, DocumentMetadata, NumberingDefinition};
use skyedoc_render_core::RenderError;
use skyedoc_render_core::utils::{half_points, twips};
use skyedoc_style::TextAlign;

pub(crate) const DOCUMENT_PART: &str = "word/document.xml";
pub(crate) const STYLES_PART: &str = "word/styles.xml";
pub(crate) const NUMBERING_PART: &str = "word/numbering.xml";
pub(crate) const HEADER_PART: &str = "word/header1.xml";
pub(crate) const FOOTER_PART: &str = "word/footer1.xml";
pub(crate) const CORE_PART: &str = "docProps/core.xml";

pub(crate) const HEADER_REL_ID: &str = "rIdHeader1";
pub(crate) const FOOTER_REL_ID: &str = "rIdFooter1";

const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const REL_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";

const CT_MAIN: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const CT_STYLES: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
const CT_NUMBERING: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
const CT_HEADER: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml";
const CT_FOOTER: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml";
const CT_CORE: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const CT_RELS: &str = "application/vnd.openxmlformats-package.relationships+xml";

/// One entry of a relationship part.
pub(crate) struct Relationship {
    pub id: String,
    pub kind: String,
    pub target: String,
}

impl Relationship {
    /// A relationship whose type lives under the officeDocument namespace,
    /// e.g. `styles` or `image`.
    pub fn office(id: impl Into<String>, kind: &str, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: format!("{}/{}", REL_BASE, kind),
            target: target.into(),
        }
    }

    pub fn image(media: &MediaTable, index: usize) -> Option<Self> {
        media
            .entries()
            .into_iter()
            .find(|(_, e)| e.index == index)
            .map(|(_, e)| Self::office(e.rel_id(), "image", e.target()))
    }
}

/// Which optional story parts the package carries.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PartSet {
    pub numbering: bool,
    pub header: bool,
    pub footer: bool,
}

pub(crate) fn content_types(parts: PartSet, media: &MediaTable) -> Result<Vec<u8>, RenderError> {
    let mut xml = XmlWriter::part()?;
    xml.start("Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    xml.empty("Default", &[("Extension", "rels"), ("ContentType", CT_RELS)])?;
    xml.empty("Default", &[("Extension", "xml"), ("ContentType", "application/xml")])?;
    for format in media.formats() {
        xml.empty(
            "Default",
            &[("Extension", format.extension()), ("ContentType", format.mime_type())],
        )?;
    }

    let mut overrides = vec![(DOCUMENT_PART, CT_MAIN), (STYLES_PART, CT_STYLES)];
    if parts.numbering {
        overrides.push((NUMBERING_PART, CT_NUMBERING));
    }
    if parts.header {
        overrides.push((HEADER_PART, CT_HEADER));
    }
    if parts.footer {
        overrides.push((FOOTER_PART, CT_FOOTER));
    }
    overrides.push((CORE_PART, CT_CORE));
    for (part, content_type) in overrides {
        let name = format!("/{}", part);
        xml.empty(
            "Override",
            &[("PartName", name.as_str()), ("ContentType", content_type)],
        )?;
    }
    xml.end("Types")?;
    Ok(xml.into_bytes())
}

pub(crate) fn package_relationships() -> Result<Vec<u8>, RenderError> {
    relationships(&[
        Relationship::office("rId1", "officeDocument", DOCUMENT_PART),
        Relationship {
            id: "rId2".to_string(),
            kind: REL_CORE_PROPERTIES.to_string(),
            target: CORE_PART.to_string(),
        },
    ])
}

/// The relationships of `word/document.xml`.
pub(crate) fn document_relationships(
    parts: PartSet,
    media: &MediaTable,
    images: &[usize],
) -> Result<Vec<u8>, RenderError> {
    let mut rels = vec![Relationship::office("rIdStyles", "styles", "styles.xml")];
    if parts.numbering {
        rels.push(Relationship::office("rIdNumbering", "numbering", "numbering.xml"));
    }
    if parts.header {
        rels.push(Relationship::office(HEADER_REL_ID, "header", "header1.xml"));
    }
    if parts.footer {
        rels.push(Relationship::office(FOOTER_REL_ID, "footer", "footer1.xml"));
    }
    rels.extend(images.iter().filter_map(|&i| Relationship::image(media, i)));
    relationships(&rels)
}

/// The relationships of a header or footer part; only needed when it embeds
/// images.
pub(crate) fn image_relationships(media: &MediaTable, images: &[usize]) -> Result<Vec<u8>, RenderError> {
    let rels: Vec<_> = images
        .iter()
        .filter_map(|&i| Relationship::image(media, i))
        .collect();
    relationships(&rels)
}

fn relationships(rels: &[Relationship]) -> Result<Vec<u8>, RenderError> {
    let mut xml = XmlWriter::part()?;
    xml.start("Relationships", &[("xmlns", NS_PKG_RELS)])?;
    for rel in rels {
        xml.empty(
            "Relationship",
            &[
                ("Id", rel.id.as_str()),
                ("Type", rel.kind.as_str()),
                ("Target", rel.target.as_str()),
            ],
        )?;
    }
    xml.end("Relationships")?;
    Ok(xml.into_bytes())
}

pub(crate) fn core_properties(
    metadata: &DocumentMetadata,
    created: DateTime<Utc>,
) -> Result<Vec<u8>, RenderError> {
    let timestamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut xml = XmlWriter::part()?;
    xml.start(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    xml.text_element("dc:title", &[], &metadata.title)?;
    if let Some(subject) = &metadata.subject {
        xml.text_element("dc:subject", &[], subject)?;
    }
    xml.text_element("dc:creator", &[], &metadata.creator)?;
    xml.text_element("cp:lastModifiedBy", &[], &metadata.creator)?;
    for element in ["dcterms:created", "dcterms:modified"] {
        xml.text_element(element, &[("xsi:type", "dcterms:W3CDTF")], &timestamp)?;
    }
    xml.end("cp:coreProperties")?;
    Ok(xml.into_bytes())
}

/// Document defaults plus a `Normal` paragraph style. Every run carries its
/// own full formatting, so no further styles are needed.
pub(crate) fn styles(defaults: &DocumentDefaults) -> Result<Vec<u8>, RenderError> {
    let family = defaults.font_family.as_str();
    let size = half_points(defaults.font_size).to_string();
    let color = defaults.color.to_hex();

    let mut xml = XmlWriter::part()?;
    xml.start("w:styles", &[("xmlns:w", NS_W)])?;
    xml.start("w:docDefaults", &[])?;
    xml.start("w:rPrDefault", &[])?;
    xml.start("w:rPr", &[])?;
    xml.empty(
        "w:rFonts",
        &[("w:ascii", family), ("w:hAnsi", family), ("w:cs", family)],
    )?;
    xml.val("w:color", &color)?;
    xml.val("w:sz", &size)?;
    xml.val("w:szCs", &size)?;
    xml.end("w:rPr")?;
    xml.end("w:rPrDefault")?;
    xml.start("w:pPrDefault", &[])?;
    xml.start("w:pPr", &[])?;
    xml.empty("w:spacing", &[("w:before", "0"), ("w:after", "0")])?;
    xml.end("w:pPr")?;
    xml.end("w:pPrDefault")?;
    xml.end("w:docDefaults")?;

    xml.start(
        "w:style",
        &[("w:type", "paragraph"), ("w:default", "1"), ("w:styleId", "Normal")],
    )?;
    xml.val("w:name", "Normal")?;
    xml.empty("w:qFormat", &[])?;
    xml.end("w:style")?;
    xml.end("w:styles")?;
    Ok(xml.into_bytes())
}

/// One abstract definition per `NumberingDefinition`, each bound to a
/// concrete `w:num` whose id is its position plus one.
pub(crate) fn numbering(definitions: &[NumberingDefinition]) -> Result<Vec<u8>, RenderError> {
    let mut xml = XmlWriter::part()?;
    xml.start("w:numbering", &[("xmlns:w", NS_W)])?;
    for (abstract_id, definition) in definitions.iter().enumerate() {
        let abstract_id = abstract_id.to_string();
        xml.start("w:abstractNum", &[("w:abstractNumId", abstract_id.as_str())])?;
        xml.val("w:multiLevelType", "singleLevel")?;
        for level in &definition.levels {
            let ilvl = level.level.to_string();
            let left = twips(level.indent.left).to_string();
            let hanging = twips(level.indent.hanging).to_string();
            xml.start("w:lvl", &[("w:ilvl", ilvl.as_str())])?;
            xml.val("w:start", "1")?;
            xml.val(
                "w:numFmt",
                if level.kind.is_bullet() { "bullet" } else { "decimal" },
            )?;
            xml.val("w:lvlText", level.kind.marker())?;
            xml.val(
                "w:lvlJc",
                match level.align {
                    TextAlign::Right => "right",
                    TextAlign::Center => "center",
                    TextAlign::Left | TextAlign::Justify => "left",
                },
            )?;
            xml.start("w:pPr", &[])?;
            xml.empty("w:ind", &[("w:left", left.as_str()), ("w:hanging", hanging.as_str())])?;
            xml.end("w:pPr")?;
            xml.end("w:lvl")?;
        }
        xml.end("w:abstractNum")?;
    }
    for (index, _) in definitions.iter().enumerate() {
        let num_id = (index + 1).to_string();
        let abstract_id = index.to_string();
        xml.start("w:num", &[("w:numId", num_id.as_str())])?;
        xml.val("w:abstractNumId", &abstract_id)?;
        xml.end("w:num")?;
    }
    xml.end("w:numbering")?;
    Ok(xml.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use skyedoc_idf::{Indent, NumberingLevel};
    use skyedoc_style::ListStyleType;

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn content_types_list_only_present_parts() {
        let parts = PartSet {
            numbering: false,
            header: true,
            footer: false,
        };
        let out = text(content_types(parts, &MediaTable::default()).unwrap());
        assert!(out.contains("PartName=\"/word/document.xml\""));
        assert!(out.contains("PartName=\"/word/header1.xml\""));
        assert!(!out.contains("numbering.xml"));
        assert!(!out.contains("footer1.xml"));
        assert!(!out.contains("Extension=\"png\""));
    }

    #[test]
    fn core_properties_use_w3cdtf_timestamps() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let metadata = DocumentMetadata {
            title: "Guide & Notes".to_string(),
            subject: None,
            creator: "SkyeTrain".to_string(),
        };
        let out = text(core_properties(&metadata, created).unwrap());
        assert!(out.contains("<dc:title>Guide &amp; Notes</dc:title>"));
        assert!(out.contains(
            "<dcterms:created xsi:type=\"dcterms:W3CDTF\">2024-03-01T12:30:00Z</dcterms:created>"
        ));
        assert!(!out.contains("dc:subject"));
    }

    #[test]
    fn numbering_binds_each_definition_to_a_num() {
        let definition = NumberingDefinition {
            reference: "skyetrain-bullets".to_string(),
            levels: vec![NumberingLevel {
                level: 0,
                kind: ListStyleType::Disc,
                indent: Indent {
                    left: 18.0,
                    hanging: 12.0,
                },
                align: TextAlign::Left,
            }],
        };
        let out = text(numbering(&[definition]).unwrap());
        assert!(out.contains("<w:numFmt w:val=\"bullet\"/><w:lvlText w:val=\"\u{2022}\"/>"));
        assert!(out.contains("<w:ind w:left=\"360\" w:hanging=\"240\"/>"));
        assert!(out.contains("<w:num w:numId=\"1\"><w:abstractNumId w:val=\"0\"/></w:num>"));
    }

    #[test]
    fn document_relationships_include_images_used() {
        let mut media = MediaTable::default();
        media
            .register("logo", std::sync::Arc::new(b"\x89PNG\r\n\x1a\n".to_vec()))
            .unwrap();
        let parts = PartSet {
            numbering: true,
            header: true,
            footer: true,
        };
        let out = text(document_relationships(parts, &media, &[1]).unwrap());
        assert!(out.contains("Id=\"rIdImage1\""));
        assert!(out.contains("Target=\"media/image1.png\""));
        assert!(out.contains(&format!("Type=\"{}/footer\"", REL_BASE)));
    }
}
