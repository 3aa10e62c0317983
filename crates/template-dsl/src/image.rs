use crate::node::TemplateBuilder;
use crate::style::impl_styled_widget;
use skyedoc_idf::{BlockRole, IRNode, NodeMetadata};
use skyedoc_types::PixelExtent;

/// Builder for a block-level `Image`.
#[derive(Clone)]
pub struct Image {
    meta: NodeMetadata,
    src: String,
    extent: PixelExtent,
}

impl Image {
    pub fn new(src: &str, extent: PixelExtent) -> Self {
        Self {
            meta: NodeMetadata {
                role: BlockRole::Logo,
                ..Default::default()
            },
            src: src.to_string(),
            extent,
        }
    }
}

impl TemplateBuilder for Image {
    fn build(self: Box<Self>) -> IRNode {
        IRNode::Image {
            meta: self.meta,
            src: self.src,
            extent: self.extent,
        }
    }
}

impl_styled_widget!(Image);
