use roxmltree::Node as XmlNode;

use crate::attributes::AttributeMap;
use crate::components::ComponentKind;
use crate::document::{Document, Node};
use crate::error::{MjmlError, MjmlResult};
use crate::head::{AttributeDefaults, Head};

/// Synthetic root tag used to wrap content (allows `<mj-head>` and `<mj-body>` as siblings)
const WRAPPER: &str = "__mjml_root__";

fn wrap(xml: &str) -> String {
    format!("<{0}>{1}</{0}>", WRAPPER, xml)
}

// ─── Public parse functions ──────────────────────────────────────────────────

/// Parse a document. The `<mjml>` root element is optional.
pub fn parse_document(xml: &str) -> MjmlResult<Document> {
    let wrapped = wrap(xml);
    let doc = roxmltree::Document::parse(&wrapped)?;
    let mut root = doc.root_element();

    let top: Vec<_> = element_children(root).collect();
    if top.is_empty() {
        return Err(MjmlError::EmptyDocument);
    }
    if let [single] = top.as_slice() {
        if single.tag_name().name() == "mjml" {
            root = *single;
        }
    }

    let mut head = Head::default();
    let mut body: Option<Node> = None;

    for child in element_children(root) {
        match child.tag_name().name() {
            "mj-head" => head = parse_head_node(child)?,
            "mj-body" => {
                if body.is_some() {
                    return Err(MjmlError::MultipleBodies);
                }
                body = Some(parse_component_node(child)?);
            }
            other => {
                return Err(MjmlError::InvalidHeadElement {
                    parent: "mjml".to_string(),
                    tag: other.to_string(),
                    reason: "expected <mj-head> or <mj-body>".to_string(),
                });
            }
        }
    }

    let body = body.ok_or(MjmlError::MissingBody)?;
    log::debug!(
        "parsed document: {} top-level block(s) in body",
        body.children.len()
    );
    Ok(Document { head, body })
}

// ─── Head parsing ────────────────────────────────────────────────────────────

fn parse_head_node(node: XmlNode) -> MjmlResult<Head> {
    let mut head = Head::default();

    for child in element_children(node) {
        match child.tag_name().name() {
            "mj-title" => head.title = Some(text_content(child)),
            "mj-preview" => head.preview = Some(text_content(child)),
            "mj-attributes" => head.attributes = parse_attributes_node(child)?,
            other => {
                return Err(MjmlError::InvalidHeadElement {
                    parent: "mj-head".to_string(),
                    tag: other.to_string(),
                    reason: "expected <mj-title>, <mj-preview> or <mj-attributes>".to_string(),
                });
            }
        }
    }

    Ok(head)
}

fn parse_attributes_node(node: XmlNode) -> MjmlResult<AttributeDefaults> {
    let mut defaults = AttributeDefaults::default();

    for child in element_children(node) {
        let name = child.tag_name().name();
        let attributes = collect_attributes(child);
        match name {
            "mj-all" => defaults.all.extend(attributes),
            "mj-class" => {
                let mut attributes = attributes;
                let class = attributes.remove("name").ok_or_else(|| {
                    MjmlError::InvalidHeadElement {
                        parent: "mj-attributes".to_string(),
                        tag: name.to_string(),
                        reason: "missing required attribute 'name'".to_string(),
                    }
                })?;
                defaults.classes.entry(class).or_default().extend(attributes);
            }
            tag if ComponentKind::from_tag(tag).is_some() => {
                defaults
                    .tags
                    .entry(tag.to_string())
                    .or_default()
                    .extend(attributes);
            }
            other => {
                return Err(MjmlError::InvalidHeadElement {
                    parent: "mj-attributes".to_string(),
                    tag: other.to_string(),
                    reason: "expected <mj-all>, <mj-class> or a component tag".to_string(),
                });
            }
        }
    }

    Ok(defaults)
}

// ─── Component parsing ───────────────────────────────────────────────────────

/// Parse a component element into a [`Node`].
///
/// Only the body takes component children, so the tree is at most two
/// levels deep.
pub fn parse_component_node(node: XmlNode) -> MjmlResult<Node> {
    let tag = node.tag_name().name();
    let kind = ComponentKind::from_tag(tag).ok_or_else(|| MjmlError::UnknownComponent {
        tag: tag.to_string(),
    })?;

    let mut parsed = Node::new(tag);
    parsed.attributes = collect_attributes(node);

    if kind.accepts_children() {
        for child in element_children(node) {
            let child_tag = child.tag_name().name();
            if let Some(child_kind) = ComponentKind::from_tag(child_tag) {
                if !kind.accepts_child(child_kind) {
                    return Err(MjmlError::MisplacedComponent {
                        parent: tag.to_string(),
                        tag: child_tag.to_string(),
                    });
                }
            }
            parsed.children.push(parse_component_node(child)?);
        }
    } else {
        parsed.content = inner_markup(node).to_string();
    }

    Ok(parsed)
}

// ─── Utility helpers ─────────────────────────────────────────────────────────

/// Iterator over element children (skips text/comment nodes).
fn element_children<'a, 'input>(
    node: XmlNode<'a, 'input>,
) -> impl Iterator<Item = XmlNode<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

fn collect_attributes(node: XmlNode) -> AttributeMap {
    node.attributes()
        .map(|attr| (attr.name().to_string(), attr.value().to_string()))
        .collect()
}

fn text_content(node: XmlNode) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Source text between an element's start and end tags.
fn inner_markup<'a>(node: XmlNode<'_, 'a>) -> &'a str {
    let (Some(first), Some(last)) = (node.first_child(), node.last_child()) else {
        return "";
    };
    let input = node.document().input_text();
    &input[first.range().start..last.range().end]
}
