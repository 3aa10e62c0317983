use skyedoc_idf::{Run, RunStyle};
use skyedoc_style::{FontStyle, FontWeight};
use skyedoc_types::Color;

/// Builder for an inline run of text.
///
/// A `Text` always carries a complete [`RunStyle`]; the setters adjust
/// individual properties of it.
#[derive(Clone, Debug)]
pub struct Text {
    content: String,
    style: RunStyle,
}

impl Text {
    pub fn styled(content: &str, style: RunStyle) -> Self {
        Self {
            content: content.to_string(),
            style,
        }
    }

    pub fn font(mut self, family: &str) -> Self {
        self.style.font_family = family.to_string();
        self
    }

    pub fn size(mut self, points: f32) -> Self {
        self.style.font_size = points;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.style.weight = FontWeight::from(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.style.style = FontStyle::from(italic);
        self
    }

    pub fn letter_spacing(mut self, points: f32) -> Self {
        self.style.letter_spacing = Some(points);
        self
    }

    pub fn build(self) -> Run {
        Run {
            text: self.content,
            style: self.style,
        }
    }
}

impl From<Text> for Run {
    fn from(text: Text) -> Self {
        text.build()
    }
}
