//! Depth-first traversal: context flows down, markup flows back up.

use crate::attributes::resolve;
use crate::box_model::BoxWidths;
use crate::components::ComponentKind;
use crate::conditional::ConditionalWrap;
use crate::config::{CompilerConfig, ValidationLevel};
use crate::context::{derive_child_context, BackgroundAccumulator, LayoutContext};
use crate::document::{Document, Node};
use crate::error::{MjmlError, MjmlResult};
use crate::head::AttributeDefaults;
use crate::render::{HtmlRenderer, NodeBundle, RenderedNode, Renderer};
use crate::style::build_styles;

/// Result of one compile call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOutput {
    /// Markup of the body
    pub html: String,
    pub title: Option<String>,
    pub preview: Option<String>,
    /// Background color announced by the body, for the enclosing `<body>` tag
    pub background_color: Option<String>,
    /// Non-fatal attribute problems, in document order
    pub diagnostics: Vec<MjmlError>,
}

/// State owned by one compile call.
struct RenderScope<'r> {
    defaults: AttributeDefaults,
    renderer: &'r dyn Renderer,
    background: BackgroundAccumulator,
    diagnostics: Vec<MjmlError>,
}

/// Compile a document with the built-in templates.
pub fn compile(document: &Document, config: &CompilerConfig) -> MjmlResult<CompileOutput> {
    compile_with(document, config, &HtmlRenderer)
}

/// Compile a document with a custom renderer.
pub fn compile_with(
    document: &Document,
    config: &CompilerConfig,
    renderer: &dyn Renderer,
) -> MjmlResult<CompileOutput> {
    let mut scope = RenderScope {
        defaults: config.attributes.merged_with(&document.head.attributes),
        renderer,
        background: BackgroundAccumulator::new(),
        diagnostics: Vec::new(),
    };

    let root = LayoutContext::root(config.container_width);
    let rendered = visit(&document.body, &root, &mut scope)?;

    let diagnostics = match config.validation {
        ValidationLevel::Soft => scope.diagnostics,
        ValidationLevel::Skip => Vec::new(),
    };

    Ok(CompileOutput {
        html: rendered.html,
        title: document.head.title.clone(),
        preview: document.head.preview.clone(),
        background_color: scope.background.into_inner(),
        diagnostics,
    })
}

fn visit<'a>(
    node: &'a Node,
    context: &LayoutContext,
    scope: &mut RenderScope<'_>,
) -> MjmlResult<RenderedNode<'a>> {
    let kind = ComponentKind::from_tag(&node.tag).ok_or_else(|| MjmlError::UnknownComponent {
        tag: node.tag.clone(),
    })?;
    log::debug!(
        "visiting <{}> in a {}px container",
        kind.tag(),
        context.container_width
    );

    let kind_defaults = scope.defaults.for_node(kind.tag(), &node.mj_classes());
    let attributes = resolve(kind.tag(), kind.schema(), &kind_defaults, &node.attributes);
    scope
        .diagnostics
        .extend(attributes.diagnostics().iter().cloned());

    let styles = build_styles(kind, &attributes, context);
    let box_widths = BoxWidths::from_attributes(&attributes, context);
    let content_width = kind.content_width(&attributes);
    if let Some(width) = content_width.filter(|w| *w < 0.0) {
        log::warn!(
            "<{}>: paddings and borders exceed the declared width ({}px left)",
            kind.tag(),
            width
        );
        scope.diagnostics.push(MjmlError::ImpossibleBox {
            component: kind.tag().to_string(),
            width,
        });
    }
    let wrap = ConditionalWrap::for_node(kind, &attributes, context);

    for child in &node.children {
        if let Some(child_kind) = ComponentKind::from_tag(&child.tag) {
            if !kind.accepts_child(child_kind) {
                return Err(MjmlError::MisplacedComponent {
                    parent: kind.tag().to_string(),
                    tag: child.tag.clone(),
                });
            }
        }
    }

    let child_context = derive_child_context(context, kind, &attributes);
    let children = node
        .children
        .iter()
        .map(|child| visit(child, &child_context, scope))
        .collect::<MjmlResult<Vec<_>>>()?;

    if kind.establishes_background() {
        if let Some(color) = attributes.raw("background-color") {
            scope.background.set(color);
        }
    }

    let bundle = NodeBundle {
        kind,
        node,
        attributes,
        styles,
        box_widths,
        content_width,
        wrap,
        context: context.clone(),
    };
    let html = scope.renderer.render(&bundle, &children)?;

    Ok(RenderedNode { bundle, html })
}
