use crate::builders::{Rule, Spacer};
use crate::style::StyledWidget;
use skyedoc_style::{Border, TextAlign};
use skyedoc_types::Color;

pub fn centered<W: StyledWidget>(widget: W) -> W {
    widget.align(TextAlign::Center)
}

pub fn right_aligned<W: StyledWidget>(widget: W) -> W {
    widget.align(TextAlign::Right)
}

/// A full-width horizontal line of the given color and weight, followed by
/// `after` points of space.
pub fn accent_rule(color: Color, weight: f32, after: f32) -> Rule {
    Rule::new(Border::solid(weight, color)).spacing_after(after)
}

pub fn spacer(points: f32) -> Spacer {
    Spacer::new(points)
}
