use crate::attributes::ResolvedAttributes;
use crate::components::{self, ComponentKind};
use crate::context::LayoutContext;
use std::collections::BTreeMap;

/// CSS declarations of one style bucket, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Styles {
    declarations: Vec<(&'static str, String)>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing an earlier value in place.
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Set a property only when the value is present.
    pub fn set_opt<S: Into<String>>(self, property: &'static str, value: Option<S>) -> Self {
        match value {
            Some(value) => self.set(property, value),
            None => self,
        }
    }

    pub fn extend(self, other: &Styles) -> Self {
        other
            .declarations
            .iter()
            .fold(self, |styles, (p, v)| styles.set(*p, v.clone()))
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Inline style text, e.g. `width:100%;color:red;`
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (property, value) in &self.declarations {
            css.push_str(property);
            css.push(':');
            css.push_str(value);
            css.push(';');
        }
        css
    }
}

/// Named style buckets of one node ("table", "td", "content", ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    buckets: BTreeMap<&'static str, Styles>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, bucket: &'static str, styles: Styles) {
        self.buckets.insert(bucket, styles);
    }

    pub fn get(&self, bucket: &str) -> Option<&Styles> {
        self.buckets.get(bucket)
    }

    /// Inline CSS of a bucket; empty when the bucket is missing.
    pub fn css(&self, bucket: &str) -> String {
        self.get(bucket).map(Styles::to_css).unwrap_or_default()
    }
}

/// Style buckets of a node of `kind`.
pub fn build_styles(
    kind: ComponentKind,
    attrs: &ResolvedAttributes,
    context: &LayoutContext,
) -> StyleMap {
    match kind {
        ComponentKind::Body => components::body::styles(attrs, context),
        ComponentKind::Badge => components::badge::styles(attrs),
        ComponentKind::Raw => StyleMap::new(),
    }
}

/// Background declarations for a node that may carry a background image.
///
/// With an image the discrete `background-*` properties are used, since
/// Yahoo Mail drops the `background` shorthand.
pub fn background_styles(attrs: &ResolvedAttributes) -> Styles {
    match attrs.raw("background-url") {
        Some(url) => Styles::new()
            .set_opt("background-color", attrs.raw("background-color"))
            .set("background-image", format!("url('{}')", url))
            .set("background-position", background_position(attrs))
            .set_opt("background-repeat", attrs.raw("background-repeat"))
            .set_opt("background-size", attrs.raw("background-size")),
        None => Styles::new()
            .set_opt("background", attrs.raw("background-color"))
            .set_opt("background-color", attrs.raw("background-color")),
    }
}

/// `background-position` as "x y", with the per-axis attributes winning.
pub fn background_position(attrs: &ResolvedAttributes) -> String {
    let (x, y) = parse_background_position(attrs.raw("background-position").unwrap_or(""));
    let x = attrs.raw("background-position-x").unwrap_or(x);
    let y = attrs.raw("background-position-y").unwrap_or(y);
    format!("{} {}", x, y)
}

fn parse_background_position(position: &str) -> (&str, &str) {
    let parts: Vec<&str> = position.split_whitespace().collect();
    match *parts.as_slice() {
        [single] if matches!(single, "top" | "bottom") => ("center", single),
        [single] => (single, "center"),
        [first, second]
            if matches!(first, "top" | "bottom")
                || (first == "center" && matches!(second, "left" | "right")) =>
        {
            (second, first)
        }
        [first, second] => (first, second),
        _ => ("center", "top"),
    }
}
