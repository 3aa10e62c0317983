use crate::node::TemplateBuilder;
use crate::style::impl_styled_widget;
use skyedoc_idf::{IRNode, NodeMetadata, Run};

/// Builder for a `Paragraph` block.
#[derive(Default, Clone)]
pub struct Paragraph {
    meta: NodeMetadata,
    children: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a run (a built [`Run`] or a [`crate::builders::Text`]).
    pub fn child(mut self, run: impl Into<Run>) -> Self {
        self.children.push(run.into());
        self
    }

    /// Adds several runs at once, in order.
    pub fn children<I, R>(mut self, runs: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Run>,
    {
        self.children.extend(runs.into_iter().map(Into::into));
        self
    }
}

impl TemplateBuilder for Paragraph {
    fn build(self: Box<Self>) -> IRNode {
        IRNode::Paragraph {
            meta: self.meta,
            children: self.children,
        }
    }
}

impl_styled_widget!(Paragraph);
