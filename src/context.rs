use crate::attributes::ResolvedAttributes;
use crate::components::ComponentKind;
use crate::validator::{AttributeValue, Length};
use crate::schema::LengthUnit;

/// Ambient layout state handed from a node to its children.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutContext {
    /// Width available to the node, in pixels
    pub container_width: f64,
    pub background_color: Option<String>,
}

impl LayoutContext {
    pub fn root(container_width: f64) -> Self {
        Self {
            container_width,
            background_color: None,
        }
    }

    /// Container width as a CSS length, e.g. `600px`
    pub fn container_width_px(&self) -> String {
        Length::px(self.container_width).to_string()
    }
}

/// Context for the children of `kind`.
///
/// Layout-owning kinds narrow the container to their own pixel width and
/// expose their background color; every other kind passes the parent's
/// context through.
pub fn derive_child_context(
    parent: &LayoutContext,
    kind: ComponentKind,
    attrs: &ResolvedAttributes,
) -> LayoutContext {
    if !kind.owns_layout() {
        return parent.clone();
    }

    let container_width = match attrs.get("width") {
        Some(AttributeValue::Length(Length {
            value,
            unit: LengthUnit::Px,
        })) => *value,
        _ => parent.container_width,
    };
    let background_color = attrs
        .raw("background-color")
        .map(str::to_string)
        .or_else(|| parent.background_color.clone());

    log::debug!(
        "<{}> children get container width {}px",
        kind.tag(),
        container_width
    );

    LayoutContext {
        container_width,
        background_color,
    }
}

/// Background color announced by the body for the enclosing document.
///
/// One accumulator lives for exactly one compile call. Writers run after
/// their subtree has been visited; the last write wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundAccumulator {
    color: Option<String>,
}

impl BackgroundAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, color: &str) {
        if let Some(previous) = &self.color {
            log::debug!("background color {} replaced by {}", previous, color);
        }
        self.color = Some(color.to_string());
    }

    pub fn get(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn into_inner(self) -> Option<String> {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{resolve, AttributeMap};

    fn attrs(kind: ComponentKind, pairs: &[(&str, &str)]) -> ResolvedAttributes {
        let user: AttributeMap = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        resolve(kind.tag(), kind.schema(), &AttributeMap::new(), &user)
    }

    #[test]
    fn test_body_narrows_container_width() {
        let parent = LayoutContext::root(800.0);
        let body = attrs(ComponentKind::Body, &[("width", "480px"), ("background-color", "#eee")]);

        let child = derive_child_context(&parent, ComponentKind::Body, &body);
        assert_eq!(child.container_width, 480.0);
        assert_eq!(child.background_color.as_deref(), Some("#eee"));
        assert_eq!(child.container_width_px(), "480px");
        // parent untouched
        assert_eq!(parent, LayoutContext::root(800.0));
    }

    #[test]
    fn test_body_uses_declared_default_width() {
        let parent = LayoutContext::root(800.0);
        let body = attrs(ComponentKind::Body, &[]);
        let child = derive_child_context(&parent, ComponentKind::Body, &body);
        assert_eq!(child.container_width, 600.0);
    }

    #[test]
    fn test_bare_zero_width_propagates() {
        let parent = LayoutContext::root(600.0);
        let body = attrs(ComponentKind::Body, &[("width", "0")]);
        assert!(body.diagnostics().is_empty());

        let child = derive_child_context(&parent, ComponentKind::Body, &body);
        assert_eq!(child.container_width, 0.0);
        assert_eq!(child.container_width_px(), "0px");
    }

    #[test]
    fn test_other_kinds_pass_context_through() {
        let parent = LayoutContext {
            container_width: 320.0,
            background_color: Some("red".to_string()),
        };
        let badge = attrs(ComponentKind::Badge, &[("width", "100px")]);
        assert_eq!(derive_child_context(&parent, ComponentKind::Badge, &badge), parent);
    }

    #[test]
    fn test_accumulator_last_write_wins() {
        let mut background = BackgroundAccumulator::new();
        assert_eq!(background.get(), None);
        background.set("#fff");
        background.set("#000");
        assert_eq!(background.get(), Some("#000"));
        assert_eq!(BackgroundAccumulator::new().get(), None);
    }
}
