//! Intermediate Document Format (IDF)
//! The in-memory block tree produced by the template renderer and consumed by
//! document serializers. Nothing in here knows about any file format.

use skyedoc_style::{Border, FontStyle, FontWeight, ListStyleType, Margins, PageGeometry, TextAlign};
use skyedoc_types::{Color, PixelExtent};
use std::collections::BTreeMap;
use std::sync::Arc;

// --- Shared Types ---

/// A reference-counted container for shared, immutable data like images.
pub type SharedData = Arc<Vec<u8>>;

/// Raster formats a document may embed, recognized by their magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else {
            None
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
        }
    }
}

/// What a block is for. Serializers ignore it; it lets callers and tests
/// reason about the document structure without inspecting styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockRole {
    Logo,
    Title,
    Subtitle,
    TitleRule,
    Author,
    Heading,
    #[default]
    Body,
    Bullet,
    Spacer,
    After,
    HeaderLabel,
    FooterLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Indent {
    pub left: f32,
    pub hanging: f32,
}

/// Paragraph-level formatting. Lengths are in points; `line_height` is a
/// multiple of the font size.
///
/// `keep_with_next`, `keep_lines` and `widow_control` are pagination hints
/// passed through to the consuming application; nothing here enforces them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphStyle {
    pub align: TextAlign,
    pub spacing_before: f32,
    pub spacing_after: f32,
    pub line_height: Option<f32>,
    pub keep_with_next: bool,
    pub keep_lines: bool,
    pub widow_control: bool,
    pub border_top: Option<Border>,
    pub border_bottom: Option<Border>,
    pub border_left: Option<Border>,
    pub indent: Option<Indent>,
}

impl ParagraphStyle {
    pub fn has_borders(&self) -> bool {
        self.border_top.is_some() || self.border_bottom.is_some() || self.border_left.is_some()
    }
}

/// A common metadata structure for all block-level `IRNode`s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeMetadata {
    pub role: BlockRole,
    pub style: ParagraphStyle,
}

// --- Inline Content ---

/// Fully resolved character formatting. Every run carries exactly one family,
/// size and color; there is no inheritance.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStyle {
    pub font_family: String,
    pub font_size: f32,
    pub color: Color,
    pub weight: FontWeight,
    pub style: FontStyle,
    /// Extra spacing between characters, in points.
    pub letter_spacing: Option<f32>,
}

impl RunStyle {
    pub fn is_bold(&self) -> bool {
        self.weight.is_bold()
    }

    pub fn is_italic(&self) -> bool {
        self.style.is_italic()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub style: RunStyle,
}

// --- Main Node Enum ---

/// A reference from a list item to a document-wide numbering definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberingRef {
    pub reference: String,
    pub level: u8,
}

/// Represents a block-level element in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum IRNode {
    /// A paragraph of text runs.
    Paragraph { meta: NodeMetadata, children: Vec<Run> },
    /// A block image, sized for display. `src` names an entry in
    /// [`Document::resources`].
    Image {
        meta: NodeMetadata,
        src: String,
        extent: PixelExtent,
    },
    /// One item of a numbered or bulleted list.
    ListItem {
        meta: NodeMetadata,
        numbering: NumberingRef,
        children: Vec<Run>,
    },
    /// An empty paragraph drawn as a horizontal line via its borders.
    Rule { meta: NodeMetadata },
    /// An empty paragraph that only contributes vertical space.
    Spacer { meta: NodeMetadata },
}

impl IRNode {
    pub fn meta(&self) -> &NodeMetadata {
        match self {
            IRNode::Paragraph { meta, .. }
            | IRNode::Image { meta, .. }
            | IRNode::ListItem { meta, .. }
            | IRNode::Rule { meta }
            | IRNode::Spacer { meta } => meta,
        }
    }

    pub fn role(&self) -> BlockRole {
        self.meta().role
    }

    pub fn style(&self) -> &ParagraphStyle {
        &self.meta().style
    }

    /// The text runs of the block; empty for images, rules and spacers.
    pub fn runs(&self) -> &[Run] {
        match self {
            IRNode::Paragraph { children, .. } | IRNode::ListItem { children, .. } => children,
            IRNode::Image { .. } | IRNode::Rule { .. } | IRNode::Spacer { .. } => &[],
        }
    }

    /// The concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs().iter().map(|r| r.text.as_str()).collect()
    }

    /// Returns a string identifier for the node type, used in logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            IRNode::Paragraph { .. } => "paragraph",
            IRNode::Image { .. } => "image",
            IRNode::ListItem { .. } => "list-item",
            IRNode::Rule { .. } => "rule",
            IRNode::Spacer { .. } => "spacer",
        }
    }
}

// --- Document-level Structures ---

#[derive(Debug, Clone, PartialEq)]
pub struct NumberingLevel {
    pub level: u8,
    pub kind: ListStyleType,
    pub indent: Indent,
    pub align: TextAlign,
}

/// A named list definition shared by every list item that references it.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberingDefinition {
    pub reference: String,
    pub levels: Vec<NumberingLevel>,
}

/// Physical page setup, in points.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
    pub header_distance: f32,
    pub footer_distance: f32,
}

impl From<&PageGeometry> for PageSetup {
    fn from(geometry: &PageGeometry) -> Self {
        Self {
            width: geometry.width,
            height: geometry.height,
            margins: geometry.margins,
            header_distance: geometry.header_distance,
            footer_distance: geometry.footer_distance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentMetadata {
    pub title: String,
    pub subject: Option<String>,
    pub creator: String,
}

/// Character defaults applied to any text that does not set its own.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentDefaults {
    pub font_family: String,
    pub font_size: f32,
    pub color: Color,
}

/// The root of a rendered document: one page setup, a running header and
/// footer, numbering definitions, the body blocks and the binary resources
/// the blocks reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub metadata: DocumentMetadata,
    pub defaults: DocumentDefaults,
    pub page: PageSetup,
    pub header: Vec<IRNode>,
    pub footer: Vec<IRNode>,
    pub numbering: Vec<NumberingDefinition>,
    pub body: Vec<IRNode>,
    pub resources: BTreeMap<String, SharedData>,
}

impl Document {
    pub fn add_resource(&mut self, src: impl Into<String>, data: SharedData) {
        self.resources.insert(src.into(), data);
    }

    pub fn numbering_definition(&self, reference: &str) -> Option<&NumberingDefinition> {
        self.numbering.iter().find(|n| n.reference == reference)
    }

    /// All blocks in document order: header, body, footer.
    pub fn all_blocks(&self) -> impl Iterator<Item = &IRNode> {
        self.header.iter().chain(self.body.iter()).chain(self.footer.iter())
    }

    /// Every image `src` referenced anywhere in the document, in order of
    /// first appearance.
    pub fn image_sources(&self) -> Vec<&str> {
        let mut sources: Vec<&str> = Vec::new();
        for node in self.all_blocks() {
            if let IRNode::Image { src, .. } = node
                && !sources.contains(&src.as_str())
            {
                sources.push(src);
            }
        }
        sources
    }
}
