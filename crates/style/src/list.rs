//! List marker kinds.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ListStyleType {
    #[default]
    Disc,
    Circle,
    Square,
    Decimal,
}

impl ListStyleType {
    /// The level text written into the numbering definition. Decimal lists
    /// use the `%1.` placeholder for the level counter.
    pub fn marker(&self) -> &'static str {
        match self {
            ListStyleType::Disc => "\u{2022}",
            ListStyleType::Circle => "\u{25E6}",
            ListStyleType::Square => "\u{25AA}",
            ListStyleType::Decimal => "%1.",
        }
    }

    pub fn is_bullet(&self) -> bool {
        !matches!(self, ListStyleType::Decimal)
    }
}
