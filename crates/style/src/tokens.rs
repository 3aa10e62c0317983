//! Design tokens: the named colors, fonts, sizes and gaps every rendered
//! element draws from.
//!
//! Tokens arrive as a loosely-typed [`TokenSet`] (string-keyed maps, usually a
//! built-in constant or a JSON file) and are validated once into
//! [`DesignTokens`]. Validation reports every missing key at once, so a
//! broken token set is a single, enumerable construction error rather than a
//! failure halfway through rendering.

use serde::{Deserialize, Serialize};
use skyedoc_types::Color;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    #[error("Missing design tokens: {}", .0.join(", "))]
    Missing(Vec<String>),

    #[error("Invalid color for token '{key}': {message}")]
    InvalidColor { key: String, message: String },

    #[error("Invalid value {value} for token '{key}'")]
    InvalidValue { key: String, value: f32 },
}

/// The raw, unvalidated form of a token set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenSet {
    #[serde(default)]
    pub palette: BTreeMap<String, String>,
    #[serde(default)]
    pub fonts: BTreeMap<String, String>,
    #[serde(default)]
    pub sizes: BTreeMap<String, f32>,
    #[serde(default)]
    pub spacing: BTreeMap<String, f32>,
}

impl TokenSet {
    pub fn color(mut self, key: &str, hex: &str) -> Self {
        self.palette.insert(key.to_string(), hex.to_string());
        self
    }

    pub fn font(mut self, key: &str, family: &str) -> Self {
        self.fonts.insert(key.to_string(), family.to_string());
        self
    }

    pub fn size(mut self, key: &str, points: f32) -> Self {
        self.sizes.insert(key.to_string(), points);
        self
    }

    pub fn gap(mut self, key: &str, value: f32) -> Self {
        self.spacing.insert(key.to_string(), value);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Body copy.
    pub ink: Color,
    /// Title and section headings.
    pub navy: Color,
    /// Secondary text: subtitle, byline, running header and footer.
    pub muted: Color,
    pub accent_red: Color,
    pub accent_blue: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fonts {
    pub body: String,
    pub heading: String,
}

impl Fonts {
    /// Bold text is set in the heading family, everything else in the body
    /// family.
    pub fn resolve(&self, bold: bool) -> &str {
        if bold { &self.heading } else { &self.body }
    }
}

/// Font sizes in points.
#[derive(Debug, Clone, PartialEq)]
pub struct Sizes {
    pub title: f32,
    pub subtitle: f32,
    pub author: f32,
    pub heading: f32,
    pub body: f32,
    pub header: f32,
    pub footer: f32,
}

/// Gaps, rule weights and indents in points; `line_height` is a multiple of
/// the font size.
#[derive(Debug, Clone, PartialEq)]
pub struct Spacing {
    pub logo_after: f32,
    pub title_tracking: f32,
    pub title_after: f32,
    pub subtitle_after: f32,
    pub rule_weight: f32,
    pub rule_after: f32,
    pub author_after: f32,
    pub heading_before: f32,
    pub heading_after: f32,
    pub heading_border_weight: f32,
    pub heading_border_gap: f32,
    pub paragraph_after: f32,
    pub bullet_after: f32,
    pub bullet_indent: f32,
    pub bullet_hanging: f32,
    pub spacer: f32,
    pub line_height: f32,
}

/// A complete, validated token set. Every field is guaranteed present.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignTokens {
    pub palette: Palette,
    pub fonts: Fonts,
    pub sizes: Sizes,
    pub spacing: Spacing,
}

impl DesignTokens {
    pub fn from_token_set(set: &TokenSet) -> Result<Self, TokenError> {
        let mut reader = TokenReader::new(set);

        let palette = Palette {
            ink: reader.color("ink"),
            navy: reader.color("navy"),
            muted: reader.color("muted"),
            accent_red: reader.color("accent-red"),
            accent_blue: reader.color("accent-blue"),
        };
        let fonts = Fonts {
            body: reader.font("body"),
            heading: reader.font("heading"),
        };
        let sizes = Sizes {
            title: reader.size("title"),
            subtitle: reader.size("subtitle"),
            author: reader.size("author"),
            heading: reader.size("heading"),
            body: reader.size("body"),
            header: reader.size("header"),
            footer: reader.size("footer"),
        };
        let spacing = Spacing {
            logo_after: reader.gap("logo-after"),
            title_tracking: reader.gap("title-tracking"),
            title_after: reader.gap("title-after"),
            subtitle_after: reader.gap("subtitle-after"),
            rule_weight: reader.positive_gap("rule-weight"),
            rule_after: reader.gap("rule-after"),
            author_after: reader.gap("author-after"),
            heading_before: reader.gap("heading-before"),
            heading_after: reader.gap("heading-after"),
            heading_border_weight: reader.positive_gap("heading-border-weight"),
            heading_border_gap: reader.gap("heading-border-gap"),
            paragraph_after: reader.gap("paragraph-after"),
            bullet_after: reader.gap("bullet-after"),
            bullet_indent: reader.gap("bullet-indent"),
            bullet_hanging: reader.gap("bullet-hanging"),
            spacer: reader.gap("spacer"),
            line_height: reader.positive_gap("line-height"),
        };

        reader.finish()?;
        Ok(Self {
            palette,
            fonts,
            sizes,
            spacing,
        })
    }
}

impl TryFrom<&TokenSet> for DesignTokens {
    type Error = TokenError;

    fn try_from(set: &TokenSet) -> Result<Self, Self::Error> {
        Self::from_token_set(set)
    }
}

impl TryFrom<TokenSet> for DesignTokens {
    type Error = TokenError;

    fn try_from(set: TokenSet) -> Result<Self, Self::Error> {
        Self::from_token_set(&set)
    }
}

/// Reads required keys, substituting a placeholder for anything missing or
/// malformed and remembering the problem for [`TokenReader::finish`].
struct TokenReader<'a> {
    set: &'a TokenSet,
    missing: Vec<String>,
    invalid: Option<TokenError>,
}

impl<'a> TokenReader<'a> {
    fn new(set: &'a TokenSet) -> Self {
        Self {
            set,
            missing: Vec::new(),
            invalid: None,
        }
    }

    fn color(&mut self, key: &str) -> Color {
        let set = self.set;
        let Some(raw) = set.palette.get(key) else {
            self.missing.push(format!("palette.{}", key));
            return Color::default();
        };
        raw.parse::<Color>().unwrap_or_else(|message| {
            self.invalid.get_or_insert(TokenError::InvalidColor {
                key: format!("palette.{}", key),
                message,
            });
            Color::default()
        })
    }

    fn font(&mut self, key: &str) -> String {
        match self.set.fonts.get(key) {
            Some(family) if !family.trim().is_empty() => family.clone(),
            _ => {
                self.missing.push(format!("fonts.{}", key));
                String::new()
            }
        }
    }

    fn size(&mut self, key: &str) -> f32 {
        let value = self.number("sizes", key, |set| &set.sizes);
        if value.is_some_and(|v| v <= 0.0) {
            self.reject(format!("sizes.{}", key), value.unwrap_or_default());
        }
        value.unwrap_or_default()
    }

    fn gap(&mut self, key: &str) -> f32 {
        let value = self.number("spacing", key, |set| &set.spacing);
        if value.is_some_and(|v| v < 0.0) {
            self.reject(format!("spacing.{}", key), value.unwrap_or_default());
        }
        value.unwrap_or_default()
    }

    fn positive_gap(&mut self, key: &str) -> f32 {
        let value = self.number("spacing", key, |set| &set.spacing);
        if value.is_some_and(|v| v <= 0.0) {
            self.reject(format!("spacing.{}", key), value.unwrap_or_default());
        }
        value.unwrap_or_default()
    }

    fn number(
        &mut self,
        group: &str,
        key: &str,
        map: impl Fn(&TokenSet) -> &BTreeMap<String, f32>,
    ) -> Option<f32> {
        let value = map(self.set).get(key).copied();
        match value {
            Some(v) if v.is_finite() => Some(v),
            Some(v) => {
                self.reject(format!("{}.{}", group, key), v);
                None
            }
            None => {
                self.missing.push(format!("{}.{}", group, key));
                None
            }
        }
    }

    fn reject(&mut self, key: String, value: f32) {
        self.invalid
            .get_or_insert(TokenError::InvalidValue { key, value });
    }

    fn finish(self) -> Result<(), TokenError> {
        if !self.missing.is_empty() {
            return Err(TokenError::Missing(self.missing));
        }
        if let Some(err) = self.invalid {
            return Err(err);
        }
        log::debug!(
            "Validated design tokens ({} colors, {} fonts, {} sizes, {} gaps)",
            self.set.palette.len(),
            self.set.fonts.len(),
            self.set.sizes.len(),
            self.set.spacing.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_set() -> TokenSet {
        let mut set = TokenSet::default()
            .color("ink", "#222222")
            .color("navy", "#1B2A4A")
            .color("muted", "#666666")
            .color("accent-red", "#C8102E")
            .color("accent-blue", "#1F6FB2")
            .font("body", "Georgia")
            .font("heading", "Arial");
        for key in ["title", "subtitle", "author", "heading", "body", "header", "footer"] {
            set = set.size(key, 10.0);
        }
        for key in [
            "logo-after",
            "title-tracking",
            "title-after",
            "subtitle-after",
            "rule-weight",
            "rule-after",
            "author-after",
            "heading-before",
            "heading-after",
            "heading-border-weight",
            "heading-border-gap",
            "paragraph-after",
            "bullet-after",
            "bullet-indent",
            "bullet-hanging",
            "spacer",
            "line-height",
        ] {
            set = set.gap(key, 1.0);
        }
        set
    }

    #[test]
    fn complete_set_validates() {
        let tokens = DesignTokens::try_from(complete_set()).unwrap();
        assert_eq!(tokens.palette.accent_red, Color::rgb(0xC8, 0x10, 0x2E));
        assert_eq!(tokens.fonts.heading, "Arial");
    }

    #[test]
    fn every_missing_key_is_reported() {
        let mut set = complete_set();
        set.palette.remove("accent-blue");
        set.fonts.remove("heading");
        set.spacing.remove("spacer");

        let err = DesignTokens::from_token_set(&set).unwrap_err();
        assert_eq!(
            err,
            TokenError::Missing(vec![
                "palette.accent-blue".to_string(),
                "fonts.heading".to_string(),
                "spacing.spacer".to_string(),
            ])
        );
    }

    #[test]
    fn empty_set_lists_all_required_keys() {
        let TokenError::Missing(keys) = DesignTokens::from_token_set(&TokenSet::default()).unwrap_err() else {
            panic!("expected missing keys");
        };
        assert_eq!(keys.len(), 5 + 2 + 7 + 17);
    }

    #[test]
    fn malformed_color_is_rejected() {
        let set = complete_set().color("navy", "navy");
        let err = DesignTokens::from_token_set(&set).unwrap_err();
        assert!(matches!(err, TokenError::InvalidColor { ref key, .. } if key == "palette.navy"));
    }

    #[test]
    fn non_ascii_color_is_rejected() {
        let set = complete_set().color("ink", "#\u{e9}1");
        let err = DesignTokens::from_token_set(&set).unwrap_err();
        assert!(matches!(err, TokenError::InvalidColor { ref key, .. } if key == "palette.ink"));
    }

    #[test]
    fn non_positive_sizes_are_rejected() {
        let set = complete_set().size("body", 0.0);
        let err = DesignTokens::from_token_set(&set).unwrap_err();
        assert_eq!(
            err,
            TokenError::InvalidValue {
                key: "sizes.body".to_string(),
                value: 0.0
            }
        );
    }

    #[test]
    fn zero_border_weight_is_rejected() {
        let set = complete_set().gap("heading-border-weight", 0.0);
        let err = DesignTokens::from_token_set(&set).unwrap_err();
        assert!(matches!(err, TokenError::InvalidValue { ref key, .. } if key == "spacing.heading-border-weight"));

        let set = complete_set().gap("spacer", 0.0);
        assert!(DesignTokens::from_token_set(&set).is_ok());
    }

    #[test]
    fn bold_resolves_to_heading_family() {
        let tokens = DesignTokens::try_from(complete_set()).unwrap();
        assert_eq!(tokens.fonts.resolve(true), "Arial");
        assert_eq!(tokens.fonts.resolve(false), "Georgia");
    }

    #[test]
    fn token_set_deserializes_from_json() {
        let json = r##"{"palette": {"ink": "#000"}, "sizes": {"body": 11}}"##;
        let set: TokenSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.palette["ink"], "#000");
        assert_eq!(set.sizes["body"], 11.0);
        assert!(set.fonts.is_empty());
    }
}
