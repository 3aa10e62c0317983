use skyedoc_idf::{BlockRole, Indent, ParagraphStyle};
use skyedoc_style::{Border, TextAlign};

/// The core trait for setting paragraph formatting fluently.
pub trait StyledWidget: Sized {
    fn style_mut(&mut self) -> &mut ParagraphStyle;

    fn role_mut(&mut self) -> &mut BlockRole;

    fn role(mut self, role: BlockRole) -> Self {
        *self.role_mut() = role;
        self
    }

    fn align(mut self, align: TextAlign) -> Self {
        self.style_mut().align = align;
        self
    }

    fn spacing_before(mut self, points: f32) -> Self {
        self.style_mut().spacing_before = points;
        self
    }

    fn spacing_after(mut self, points: f32) -> Self {
        self.style_mut().spacing_after = points;
        self
    }

    fn line_height(mut self, multiple: f32) -> Self {
        self.style_mut().line_height = Some(multiple);
        self
    }

    fn keep_with_next(mut self, keep: bool) -> Self {
        self.style_mut().keep_with_next = keep;
        self
    }

    fn keep_lines(mut self, keep: bool) -> Self {
        self.style_mut().keep_lines = keep;
        self
    }

    fn widow_control(mut self, enabled: bool) -> Self {
        self.style_mut().widow_control = enabled;
        self
    }

    fn border_top(mut self, border: Border) -> Self {
        self.style_mut().border_top = Some(border);
        self
    }

    fn border_bottom(mut self, border: Border) -> Self {
        self.style_mut().border_bottom = Some(border);
        self
    }

    fn border_left(mut self, border: Border) -> Self {
        self.style_mut().border_left = Some(border);
        self
    }

    fn indent(mut self, left: f32, hanging: f32) -> Self {
        self.style_mut().indent = Some(Indent { left, hanging });
        self
    }
}

/// Implements [`StyledWidget`] for builder structs holding a
/// `meta: NodeMetadata` field.
macro_rules! impl_styled_widget {
    ($($t:ty),+) => {
        $(
            impl $crate::style::StyledWidget for $t {
                fn style_mut(&mut self) -> &mut ::skyedoc_idf::ParagraphStyle {
                    &mut self.meta.style
                }

                fn role_mut(&mut self) -> &mut ::skyedoc_idf::BlockRole {
                    &mut self.meta.role
                }
            }
        )+
    };
}

pub(crate) use impl_styled_widget;
