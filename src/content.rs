//! The content model: what the guide says, independent of how it looks.
//!
//! Content is usually the built-in [`crate::brand::content`], but it can also
//! be loaded from JSON. The JSON form accepts two shorthands that are
//! normalized while deserializing:
//!
//! ```json
//! { "heading": "Welcome",
//!   "paragraphs": [
//!     "A plain paragraph",
//!     ["Mixed ", { "text": "bold", "bold": true }, " text"]
//!   ] }
//! ```
//!
//! A span may be a bare string, and a paragraph may be a bare string instead
//! of a list of spans. Missing lists are empty.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::PipelineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Content {
    pub fn new(title: &str, subtitle: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            author: author.to_string(),
            sections: vec![],
        }
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("Failed to read content from '{}': {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }
}

/// A titled block of the guide. Blocks render in a fixed order: heading,
/// paragraphs, bullets, `after`, `bullets2`, `after2`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub after: Vec<Paragraph>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets2: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub after2: Vec<Paragraph>,
}

impl Section {
    pub fn new(heading: &str) -> Self {
        Self {
            heading: heading.to_string(),
            ..Default::default()
        }
    }

    pub fn paragraph(mut self, paragraph: impl Into<Paragraph>) -> Self {
        self.paragraphs.push(paragraph.into());
        self
    }

    pub fn bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets.extend(bullets.into_iter().map(Into::into));
        self
    }

    pub fn after(mut self, paragraph: impl Into<Paragraph>) -> Self {
        self.after.push(paragraph.into());
        self
    }

    pub fn bullets2<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets2.extend(bullets.into_iter().map(Into::into));
        self
    }

    pub fn after2(mut self, paragraph: impl Into<Paragraph>) -> Self {
        self.after2.push(paragraph.into());
        self
    }
}

/// An ordered list of spans.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "ParagraphRepr")]
pub struct Paragraph(pub Vec<Span>);

impl Paragraph {
    pub fn new(spans: Vec<Span>) -> Self {
        Self(spans)
    }

    pub fn spans(&self) -> &[Span] {
        &self.0
    }
}

impl From<&str> for Paragraph {
    fn from(text: &str) -> Self {
        Self(vec![Span::plain(text)])
    }
}

impl From<Vec<Span>> for Paragraph {
    fn from(spans: Vec<Span>) -> Self {
        Self(spans)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ParagraphRepr {
    Text(String),
    Spans(Vec<Span>),
}

impl From<ParagraphRepr> for Paragraph {
    fn from(repr: ParagraphRepr) -> Self {
        match repr {
            ParagraphRepr::Text(text) => Paragraph(vec![Span::plain(&text)]),
            ParagraphRepr::Spans(spans) => Paragraph(spans),
        }
    }
}

/// A run of text with emphasis flags.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "SpanRepr")]
pub struct Span {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl Span {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn bold(text: &str) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn italic(text: &str) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }
}

impl From<&str> for Span {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SpanRepr {
    Text(String),
    Styled {
        text: String,
        #[serde(default)]
        bold: bool,
        #[serde(default)]
        italic: bool,
    },
}

impl From<SpanRepr> for Span {
    fn from(repr: SpanRepr) -> Self {
        match repr {
            SpanRepr::Text(text) => Span {
                text,
                ..Default::default()
            },
            SpanRepr::Styled { text, bold, italic } => Span { text, bold, italic },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_shorthands_are_normalized() {
        let section: Section = serde_json::from_value(json!({
            "heading": "Welcome",
            "paragraphs": [
                "Plain paragraph",
                ["Mixed ", { "text": "bold", "bold": true }, { "text": "both", "bold": true, "italic": true }]
            ]
        }))
        .unwrap();

        assert_eq!(section.paragraphs[0], Paragraph::from("Plain paragraph"));
        let spans = section.paragraphs[1].spans();
        assert_eq!(spans[0], Span::plain("Mixed "));
        assert_eq!(spans[1], Span::bold("bold"));
        assert!(spans[2].bold && spans[2].italic);
        assert!(section.bullets.is_empty());
        assert!(section.after2.is_empty());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let content = Content::from_json(r#"{"title":"T","subtitle":"S","author":"A"}"#).unwrap();
        assert!(content.sections.is_empty());
    }

    #[test]
    fn serializes_back_to_the_canonical_form() {
        let content = Content::new("T", "S", "A").section(
            Section::new("H")
                .paragraph(vec![Span::italic("note")])
                .bullets(["one"]),
        );
        let value = serde_json::to_value(&content).unwrap();
        assert_eq!(
            value["sections"][0]["paragraphs"][0][0],
            json!({ "text": "note", "bold": false, "italic": true })
        );
        assert!(value["sections"][0].get("after").is_none());

        let back: Content = serde_json::from_value(value).unwrap();
        assert_eq!(back, content);
    }

    #[test]
    fn non_string_text_is_rejected() {
        let err = Content::from_json(r#"{"title":"T","subtitle":"S","author":"A","sections":[{"heading":"H","paragraphs":[[{"text":5}]]}]}"#);
        assert!(matches!(err, Err(PipelineError::ContentJson(_))));
    }
}
