use crate::attributes::ResolvedAttributes;
use crate::box_model::BoxWidths;
use crate::components::{badge, body, raw, ComponentKind};
use crate::conditional::ConditionalWrap;
use crate::context::LayoutContext;
use crate::document::Node;
use crate::error::MjmlResult;
use crate::style::StyleMap;

/// Everything the compiler worked out about one node, ready for a template.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeBundle<'a> {
    pub kind: ComponentKind,
    pub node: &'a Node,
    pub attributes: ResolvedAttributes,
    pub styles: StyleMap,
    pub box_widths: BoxWidths,
    pub content_width: Option<f64>,
    pub wrap: ConditionalWrap,
    /// Context the node received from its parent
    pub context: LayoutContext,
}

/// A node together with its markup.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNode<'a> {
    pub bundle: NodeBundle<'a>,
    pub html: String,
}

/// Turns a resolved node and its rendered children into markup.
///
/// A parent is responsible for applying each child's [`ConditionalWrap`].
pub trait Renderer {
    fn render(&self, node: &NodeBundle<'_>, children: &[RenderedNode<'_>]) -> MjmlResult<String>;
}

/// Built-in table-based email templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, node: &NodeBundle<'_>, children: &[RenderedNode<'_>]) -> MjmlResult<String> {
        Ok(match node.kind {
            ComponentKind::Body => body::render(node, children),
            ComponentKind::Badge => badge::render(node),
            ComponentKind::Raw => raw::render(node),
        })
    }
}
