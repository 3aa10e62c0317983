//! Style primitives, page geometry presets and validated design tokens.

pub mod border;
pub mod dimension;
pub mod font;
pub mod list;
pub mod text;
pub mod tokens;

pub use border::{Border, BorderStyle};
pub use dimension::{Margins, PageGeometry, Preset};
pub use font::{FontStyle, FontWeight};
pub use list::ListStyleType;
pub use text::TextAlign;
pub use tokens::{DesignTokens, Fonts, Palette, Sizes, Spacing, TokenError, TokenSet};
