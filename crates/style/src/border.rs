use serde::{Deserialize, Serialize};
use skyedoc_types::Color;
use std::hash::{Hash, Hasher};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum BorderStyle {
    None,
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
}

/// A single paragraph edge border.
///
/// `width` is the line weight in points; `space` is the gap between the line
/// and the paragraph text, also in points.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f32,
    pub style: BorderStyle,
    pub color: Color,
    #[serde(default)]
    pub space: f32,
}

impl Eq for Border {}

impl Hash for Border {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.to_bits().hash(state);
        self.style.hash(state);
        self.color.hash(state);
        self.space.to_bits().hash(state);
    }
}

impl Border {
    pub fn solid(width: f32, color: Color) -> Self {
        Self {
            width,
            style: BorderStyle::Solid,
            color,
            space: 0.0,
        }
    }

    pub fn with_space(mut self, space: f32) -> Self {
        self.space = space;
        self
    }
}
