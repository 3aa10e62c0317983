use crate::node::TemplateBuilder;
use crate::style::impl_styled_widget;
use skyedoc_idf::{
    BlockRole, IRNode, Indent, NodeMetadata, NumberingDefinition, NumberingLevel, NumberingRef,
    Run,
};
use skyedoc_style::{ListStyleType, TextAlign};

/// Builder for one `ListItem` of a named list definition.
#[derive(Clone)]
pub struct ListItem {
    meta: NodeMetadata,
    numbering: NumberingRef,
    children: Vec<Run>,
}

impl ListItem {
    /// Creates an item at level 0 of the list definition named `reference`.
    pub fn new(reference: &str) -> Self {
        Self {
            meta: NodeMetadata {
                role: BlockRole::Bullet,
                ..Default::default()
            },
            numbering: NumberingRef {
                reference: reference.to_string(),
                level: 0,
            },
            children: vec![],
        }
    }

    pub fn child(mut self, run: impl Into<Run>) -> Self {
        self.children.push(run.into());
        self
    }
}

impl TemplateBuilder for ListItem {
    fn build(self: Box<Self>) -> IRNode {
        IRNode::ListItem {
            meta: self.meta,
            numbering: self.numbering,
            children: self.children,
        }
    }
}

impl_styled_widget!(ListItem);

/// Builder for a single-level list definition shared by many `ListItem`s.
#[derive(Clone, Debug)]
pub struct BulletList {
    reference: String,
    kind: ListStyleType,
    indent: Indent,
}

impl BulletList {
    pub fn new(reference: &str) -> Self {
        Self {
            reference: reference.to_string(),
            kind: ListStyleType::Disc,
            indent: Indent::default(),
        }
    }

    pub fn marker(mut self, kind: ListStyleType) -> Self {
        self.kind = kind;
        self
    }

    /// Text indent from the margin and how far the marker hangs to its left.
    pub fn indent(mut self, left: f32, hanging: f32) -> Self {
        self.indent = Indent { left, hanging };
        self
    }

    pub fn build(self) -> NumberingDefinition {
        NumberingDefinition {
            reference: self.reference,
            levels: vec![NumberingLevel {
                level: 0,
                kind: self.kind,
                indent: self.indent,
                align: TextAlign::Left,
            }],
        }
    }
}
