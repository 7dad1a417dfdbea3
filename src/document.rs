use crate::attributes::AttributeMap;
use crate::head::Head;
use serde::{Deserialize, Serialize};

/// One component in the document tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Component tag, e.g. `mj-badge`
    pub tag: String,
    #[serde(default)]
    pub attributes: AttributeMap,
    /// Inner markup of content-bearing kinds (`mj-badge`, `mj-raw`)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Class names listed in the node's `mj-class` attribute
    pub fn mj_classes(&self) -> Vec<&str> {
        self.attributes
            .get("mj-class")
            .map(|classes| classes.split_whitespace().collect())
            .unwrap_or_default()
    }
}

/// A parsed document: head metadata and the body tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub head: Head,
    pub body: Node,
}

impl Document {
    pub fn new(body: Node) -> Self {
        Self {
            head: Head::default(),
            body,
        }
    }

    /// Returns the head title, if one was declared
    pub fn title(&self) -> Option<&str> {
        self.head.title.as_deref()
    }
}
