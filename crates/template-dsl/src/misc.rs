use crate::node::TemplateBuilder;
use crate::style::impl_styled_widget;
use skyedoc_idf::{BlockRole, IRNode, NodeMetadata};
use skyedoc_style::Border;

/// Builder for a horizontal `Rule`: an empty paragraph whose bottom border
/// draws the line.
#[derive(Clone)]
pub struct Rule {
    meta: NodeMetadata,
}

impl Rule {
    pub fn new(border: Border) -> Self {
        let mut meta = NodeMetadata {
            role: BlockRole::TitleRule,
            ..Default::default()
        };
        meta.style.border_bottom = Some(border);
        Self { meta }
    }
}

impl TemplateBuilder for Rule {
    fn build(self: Box<Self>) -> IRNode {
        IRNode::Rule { meta: self.meta }
    }
}

/// Builder for vertical whitespace between blocks.
#[derive(Clone)]
pub struct Spacer {
    meta: NodeMetadata,
}

impl Spacer {
    pub fn new(points: f32) -> Self {
        let mut meta = NodeMetadata {
            role: BlockRole::Spacer,
            ..Default::default()
        };
        meta.style.spacing_after = points;
        Self { meta }
    }
}

impl TemplateBuilder for Spacer {
    fn build(self: Box<Self>) -> IRNode {
        IRNode::Spacer { meta: self.meta }
    }
}

impl_styled_widget!(Rule, Spacer);
