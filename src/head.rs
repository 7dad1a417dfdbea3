use crate::attributes::AttributeMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Head section of a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Head {
    /// Document title (`<mj-title>`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Inbox preview text (`<mj-preview>`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    /// Defaults declared in `<mj-attributes>`
    #[serde(default)]
    pub attributes: AttributeDefaults,
}

/// Document-level attribute defaults.
///
/// For a node, `all` applies first, then the entry for its tag, then each
/// class named in its `mj-class` attribute, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeDefaults {
    /// `<mj-all>`: every component kind
    pub all: AttributeMap,
    /// Per-tag defaults, keyed by component tag
    pub tags: BTreeMap<String, AttributeMap>,
    /// `<mj-class name="...">` bundles
    pub classes: BTreeMap<String, AttributeMap>,
}

impl AttributeDefaults {
    /// Layer `other` on top of `self`; `other` wins per attribute.
    pub fn merged_with(&self, other: &AttributeDefaults) -> AttributeDefaults {
        let mut merged = self.clone();
        merged
            .all
            .extend(other.all.iter().map(|(k, v)| (k.clone(), v.clone())));
        for (tag, attrs) in &other.tags {
            merged
                .tags
                .entry(tag.clone())
                .or_default()
                .extend(attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        for (class, attrs) in &other.classes {
            merged
                .classes
                .entry(class.clone())
                .or_default()
                .extend(attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged
    }

    /// Defaults applying to one node of `tag` using the given classes.
    pub fn for_node(&self, tag: &str, classes: &[&str]) -> AttributeMap {
        let mut defaults = self.all.clone();
        if let Some(tag_defaults) = self.tags.get(tag) {
            defaults.extend(tag_defaults.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        for class in classes {
            match self.classes.get(*class) {
                Some(class_defaults) => {
                    defaults.extend(class_defaults.iter().map(|(k, v)| (k.clone(), v.clone())))
                }
                None => log::warn!("<{}>: mj-class '{}' is not declared", tag, class),
            }
        }
        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> AttributeMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_for_node_layers_all_tag_and_classes() {
        let mut defaults = AttributeDefaults::default();
        defaults.all = map(&[("color", "black"), ("font-size", "10px")]);
        defaults
            .tags
            .insert("mj-badge".to_string(), map(&[("color", "navy")]));
        defaults
            .classes
            .insert("loud".to_string(), map(&[("font-size", "20px")]));
        defaults
            .classes
            .insert("quiet".to_string(), map(&[("font-size", "8px")]));

        let badge = defaults.for_node("mj-badge", &["loud", "quiet"]);
        assert_eq!(badge.get("color").map(String::as_str), Some("navy"));
        assert_eq!(badge.get("font-size").map(String::as_str), Some("8px"));

        let body = defaults.for_node("mj-body", &["missing"]);
        assert_eq!(body.get("color").map(String::as_str), Some("black"));
    }

    #[test]
    fn test_merged_with_prefers_other() {
        let mut base = AttributeDefaults::default();
        base.all = map(&[("color", "black"), ("padding", "0")]);
        let mut over = AttributeDefaults::default();
        over.all = map(&[("color", "white")]);

        let merged = base.merged_with(&over);
        assert_eq!(merged.all, map(&[("color", "white"), ("padding", "0")]));
    }
}
