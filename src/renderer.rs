//! The template renderer: content plus design tokens plus page geometry in,
//! a styled block tree out.
//!
//! [`render`] is pure. It references the logo by [`LOGO_RESOURCE`] and leaves
//! loading the bytes to the caller (see [`crate::pipeline`]).

use crate::brand::{HEADER_LABEL, SITE_LABEL};
use crate::content::{Content, Paragraph as ContentParagraph, Section};
use skyedoc_idf::{Document, DocumentDefaults, DocumentMetadata, PageSetup};
use skyedoc_style::{Border, DesignTokens, PageGeometry};
use skyedoc_template_dsl::builders::*;
use skyedoc_template_dsl::{StyledWidget, Template, TemplateBuilder, accent_rule, centered, right_aligned, spacer};
use skyedoc_types::Color;

/// The resource name under which the logo image must be attached.
pub const LOGO_RESOURCE: &str = "logo";

/// The single list definition every bullet refers to.
pub const BULLET_LIST: &str = "skyetrain-bullets";

/// Weight of the rules under the header and over the footer, in points.
const RUNNING_RULE_WEIGHT: f32 = 0.75;
/// Gap between the running rules and their label, in points.
const RUNNING_RULE_GAP: f32 = 4.0;

pub fn render(content: &Content, tokens: &DesignTokens, geometry: &PageGeometry) -> Document {
    let styler = Styler { tokens };
    let palette = &tokens.palette;
    let sizes = &tokens.sizes;
    let spacing = &tokens.spacing;

    let mut template = Template::new(
        PageSetup::from(geometry),
        DocumentDefaults {
            font_family: tokens.fonts.body.clone(),
            font_size: sizes.body,
            color: palette.ink,
        },
    )
    .metadata(DocumentMetadata {
        title: content.title.clone(),
        subject: Some(content.subtitle.clone()),
        creator: content.author.clone(),
    })
    .header(
        right_aligned(Paragraph::new().child(styler.text(
            HEADER_LABEL,
            true,
            false,
            sizes.header,
            palette.muted,
        )))
        .border_bottom(Border::solid(RUNNING_RULE_WEIGHT, palette.accent_blue).with_space(RUNNING_RULE_GAP))
        .role(BlockRole::HeaderLabel),
    )
    .footer(
        centered(Paragraph::new().child(styler.text(
            SITE_LABEL,
            false,
            true,
            sizes.footer,
            palette.muted,
        )))
        .border_top(Border::solid(RUNNING_RULE_WEIGHT, palette.accent_blue).with_space(RUNNING_RULE_GAP))
        .role(BlockRole::FooterLabel),
    )
    .numbering(
        BulletList::new(BULLET_LIST)
            .indent(spacing.bullet_indent, spacing.bullet_hanging)
            .build(),
    );

    // Title block
    template = template
        .child(centered(Image::new(LOGO_RESOURCE, geometry.logo_extent())).spacing_after(spacing.logo_after))
        .child(
            centered(Paragraph::new().child(
                styler
                    .text(&content.title, true, false, sizes.title, palette.navy)
                    .letter_spacing(spacing.title_tracking),
            ))
            .spacing_after(spacing.title_after)
            .role(BlockRole::Title),
        )
        .child(
            centered(Paragraph::new().child(styler.text(
                &content.subtitle,
                false,
                true,
                sizes.subtitle,
                palette.muted,
            )))
            .spacing_after(spacing.subtitle_after)
            .role(BlockRole::Subtitle),
        )
        .child(accent_rule(palette.accent_red, spacing.rule_weight, spacing.rule_after))
        .child(
            right_aligned(Paragraph::new().child(styler.text(
                &format!("by {}", content.author),
                false,
                false,
                sizes.author,
                palette.muted,
            )))
            .spacing_after(spacing.author_after)
            .role(BlockRole::Author),
        );

    for section in &content.sections {
        template = template.children(styler.section(section));
    }

    let document = template.build();
    log::debug!(
        "Rendered {} sections into {} body blocks for the {} preset",
        content.sections.len(),
        document.body.len(),
        geometry.preset
    );
    document
}

/// Resolves span flags into fully specified runs and paragraph styles.
struct Styler<'a> {
    tokens: &'a DesignTokens,
}

impl Styler<'_> {
    /// The one place a run's font is chosen: heading family iff bold.
    fn text(&self, content: &str, bold: bool, italic: bool, size: f32, color: Color) -> Text {
        Text::styled(
            content,
            RunStyle {
                font_family: self.tokens.fonts.resolve(bold).to_string(),
                font_size: size,
                color,
                weight: bold.into(),
                style: italic.into(),
                letter_spacing: None,
            },
        )
    }

    fn section(&self, section: &Section) -> Vec<Box<dyn TemplateBuilder>> {
        let mut blocks: Vec<Box<dyn TemplateBuilder>> = vec![Box::new(self.heading(&section.heading))];
        blocks.extend(section.paragraphs.iter().map(|p| self.body(p, BlockRole::Body)));
        self.bullets_then_after(&mut blocks, &section.bullets, &section.after);
        self.bullets_then_after(&mut blocks, &section.bullets2, &section.after2);
        blocks
    }

    /// Bullets, then a spacer and the follow-up paragraphs. The spacer only
    /// appears when there is something after it.
    fn bullets_then_after(
        &self,
        blocks: &mut Vec<Box<dyn TemplateBuilder>>,
        bullets: &[String],
        after: &[ContentParagraph],
    ) {
        blocks.extend(bullets.iter().map(|b| self.bullet(b)));
        if !after.is_empty() {
            blocks.push(Box::new(spacer(self.tokens.spacing.spacer)));
            blocks.extend(after.iter().map(|p| self.body(p, BlockRole::After)));
        }
    }

    fn heading(&self, heading: &str) -> Paragraph {
        let t = self.tokens;
        Paragraph::new()
            .child(self.text(heading, true, false, t.sizes.heading, t.palette.navy))
            .border_left(
                Border::solid(t.spacing.heading_border_weight, t.palette.accent_blue)
                    .with_space(t.spacing.heading_border_gap),
            )
            .spacing_before(t.spacing.heading_before)
            .spacing_after(t.spacing.heading_after)
            .keep_with_next(true)
            .keep_lines(true)
            .role(BlockRole::Heading)
    }

    fn body(&self, paragraph: &ContentParagraph, role: BlockRole) -> Box<dyn TemplateBuilder> {
        let t = self.tokens;
        let runs = paragraph
            .spans()
            .iter()
            .map(|span| self.text(&span.text, span.bold, span.italic, t.sizes.body, t.palette.ink));
        Box::new(
            Paragraph::new()
                .children(runs)
                .spacing_after(t.spacing.paragraph_after)
                .line_height(t.spacing.line_height)
                .widow_control(true)
                .role(role),
        )
    }

    fn bullet(&self, text: &str) -> Box<dyn TemplateBuilder> {
        let t = self.tokens;
        Box::new(
            ListItem::new(BULLET_LIST)
                .child(self.text(text, false, false, t.sizes.body, t.palette.ink))
                .spacing_after(t.spacing.bullet_after)
                .line_height(t.spacing.line_height)
                .widow_control(true),
        )
    }
}
