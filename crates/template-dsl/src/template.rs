use crate::node::TemplateBuilder;
use skyedoc_idf::{Document, DocumentDefaults, DocumentMetadata, NumberingDefinition, PageSetup};
use std::collections::BTreeMap;

/// The top-level container for a programmatically-defined document.
///
/// Holds the page setup, the running header and footer, the list definitions
/// and the body builders. [`Template::build`] consumes it into a
/// [`Document`].
#[derive(Clone)]
pub struct Template {
    metadata: DocumentMetadata,
    defaults: DocumentDefaults,
    page: PageSetup,
    header: Vec<Box<dyn TemplateBuilder>>,
    footer: Vec<Box<dyn TemplateBuilder>>,
    numbering: Vec<NumberingDefinition>,
    body: Vec<Box<dyn TemplateBuilder>>,
}

impl Template {
    pub fn new(page: PageSetup, defaults: DocumentDefaults) -> Self {
        Self {
            metadata: DocumentMetadata::default(),
            defaults,
            page,
            header: vec![],
            footer: vec![],
            numbering: vec![],
            body: vec![],
        }
    }

    pub fn metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Adds a block to the header repeated on every page.
    pub fn header(mut self, child: impl TemplateBuilder + 'static) -> Self {
        self.header.push(Box::new(child));
        self
    }

    /// Adds a block to the footer repeated on every page.
    pub fn footer(mut self, child: impl TemplateBuilder + 'static) -> Self {
        self.footer.push(Box::new(child));
        self
    }

    /// Registers a list definition that `ListItem`s can reference by name.
    pub fn numbering(mut self, definition: NumberingDefinition) -> Self {
        self.numbering.push(definition);
        self
    }

    pub fn child(mut self, child: impl TemplateBuilder + 'static) -> Self {
        self.body.push(Box::new(child));
        self
    }

    /// Appends already-boxed builders, e.g. the output of a widget function
    /// that produces a variable number of blocks.
    pub fn children(mut self, children: impl IntoIterator<Item = Box<dyn TemplateBuilder>>) -> Self {
        self.body.extend(children);
        self
    }

    /// Consumes the template and produces the finished document tree. The
    /// returned document has no resources attached yet.
    pub fn build(self) -> Document {
        Document {
            metadata: self.metadata,
            defaults: self.defaults,
            page: self.page,
            header: self.header.into_iter().map(|b| b.build()).collect(),
            footer: self.footer.into_iter().map(|b| b.build()).collect(),
            numbering: self.numbering,
            body: self.body.into_iter().map(|b| b.build()).collect(),
            resources: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;
    use crate::style::StyledWidget;
    use crate::widgets::{accent_rule, centered, right_aligned, spacer};
    use skyedoc_idf::IRNode;
    use skyedoc_style::{FontStyle, FontWeight, PageGeometry, TextAlign};
    use skyedoc_types::Color;

    fn body_style() -> RunStyle {
        RunStyle {
            font_family: "Georgia".to_string(),
            font_size: 11.0,
            color: Color::gray(34),
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
            letter_spacing: None,
        }
    }

    fn template() -> Template {
        Template::new(
            PageSetup::from(&PageGeometry::wide()),
            DocumentDefaults {
                font_family: "Georgia".to_string(),
                font_size: 11.0,
                color: Color::gray(34),
            },
        )
    }

    #[test]
    fn builds_blocks_in_insertion_order() {
        let doc = template()
            .child(centered(Paragraph::new().child(Text::styled("Title", body_style()))))
            .child(accent_rule(Color::rgb(200, 16, 46), 1.5, 8.0))
            .child(right_aligned(Paragraph::new().child(Text::styled("by Someone", body_style()))))
            .child(spacer(6.0))
            .build();

        let kinds: Vec<&str> = doc.body.iter().map(IRNode::kind).collect();
        assert_eq!(kinds, vec!["paragraph", "rule", "paragraph", "spacer"]);
        assert_eq!(doc.body[0].style().align, TextAlign::Center);
        assert_eq!(doc.body[2].style().align, TextAlign::Right);
        assert_eq!(doc.body[3].style().spacing_after, 6.0);
        assert!(doc.resources.is_empty());
    }

    #[test]
    fn text_setters_adjust_the_run_style() {
        let run = Text::styled("Bold italic", body_style())
            .font("Arial")
            .bold(true)
            .italic(true)
            .letter_spacing(2.0)
            .build();
        assert_eq!(run.style.font_family, "Arial");
        assert!(run.style.is_bold());
        assert!(run.style.is_italic());
        assert_eq!(run.style.letter_spacing, Some(2.0));
    }

    #[test]
    fn list_items_reference_their_definition() {
        let doc = template()
            .numbering(BulletList::new("bullets").indent(18.0, 12.0).build())
            .child(ListItem::new("bullets").child(Text::styled("One", body_style())))
            .build();

        let IRNode::ListItem { numbering, .. } = &doc.body[0] else {
            panic!("expected a list item");
        };
        assert_eq!(numbering.reference, "bullets");
        assert_eq!(numbering.level, 0);
        let definition = doc.numbering_definition("bullets").unwrap();
        assert_eq!(definition.levels[0].kind.marker(), "\u{2022}");
        assert_eq!(definition.levels[0].indent.left, 18.0);
    }

    #[test]
    fn header_and_footer_are_separate_from_body() {
        let doc = template()
            .header(Paragraph::new().role(BlockRole::HeaderLabel))
            .footer(Paragraph::new().role(BlockRole::FooterLabel))
            .build();
        assert!(doc.body.is_empty());
        assert_eq!(doc.header[0].role(), BlockRole::HeaderLabel);
        assert_eq!(doc.footer[0].role(), BlockRole::FooterLabel);
    }
}
