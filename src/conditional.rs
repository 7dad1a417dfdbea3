//! Outlook / MSO conditional comments.

use crate::attributes::ResolvedAttributes;
use crate::components::ComponentKind;
use crate::context::LayoutContext;
use crate::html::html_attributes;

pub const START_CONDITIONAL: &str = "<!--[if mso | IE]>";
pub const END_CONDITIONAL: &str = "<![endif]-->";

/// Markup only Outlook and old IE will read.
pub fn conditional(content: &str) -> String {
    format!("{}{}{}", START_CONDITIONAL, content, END_CONDITIONAL)
}

/// Whether a node's output needs an Outlook-only table cell around it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionalWrap {
    pub needs_outlook_wrapper: bool,
    /// Attributes of the wrapping `<td>`
    pub attributes: Vec<(&'static str, Option<String>)>,
}

impl ConditionalWrap {
    pub fn none() -> Self {
        Self::default()
    }

    /// Raw kinds emit no table rows of their own and are never wrapped.
    /// Every other kind gets a `<tr><td>` sized to its container.
    pub fn for_node(
        kind: ComponentKind,
        attrs: &ResolvedAttributes,
        context: &LayoutContext,
    ) -> Self {
        if kind.is_raw() {
            return Self::none();
        }

        Self {
            needs_outlook_wrapper: true,
            attributes: vec![
                ("align", attrs.raw("align").map(str::to_string)),
                ("class", suffix_css_classes(attrs.raw("css-class"), "outlook")),
                ("width", Some(context.container_width_px())),
            ],
        }
    }
}

/// Surround `inner` with the Outlook wrapper when required.
///
/// `inner` is copied through untouched.
pub fn wrap_if_needed(wrap: &ConditionalWrap, inner: &str) -> String {
    if !wrap.needs_outlook_wrapper {
        return inner.to_string();
    }

    format!(
        "{}\n{}\n{}",
        conditional(&format!("<tr><td{}>", html_attributes(&wrap.attributes))),
        inner,
        conditional("</td></tr>")
    )
}

/// `"a b"` with suffix `outlook` becomes `"a-outlook b-outlook"`.
pub fn suffix_css_classes(classes: Option<&str>, suffix: &str) -> Option<String> {
    let suffixed: Vec<String> = classes?
        .split_whitespace()
        .map(|class| format!("{}-{}", class, suffix))
        .collect();

    if suffixed.is_empty() {
        None
    } else {
        Some(suffixed.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{resolve, AttributeMap};

    fn resolved(kind: ComponentKind, pairs: &[(&str, &str)]) -> ResolvedAttributes {
        let user: AttributeMap = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        resolve(kind.tag(), kind.schema(), &AttributeMap::new(), &user)
    }

    #[test]
    fn test_raw_is_never_wrapped() {
        let attrs = resolved(ComponentKind::Raw, &[]);
        let wrap = ConditionalWrap::for_node(ComponentKind::Raw, &attrs, &LayoutContext::root(600.0));
        assert!(!wrap.needs_outlook_wrapper);
        assert_eq!(wrap_if_needed(&wrap, "<p>raw</p>"), "<p>raw</p>");
    }

    #[test]
    fn test_badge_wrapper_carries_container_width() {
        let attrs = resolved(ComponentKind::Badge, &[("css-class", "pill big")]);
        let wrap = ConditionalWrap::for_node(ComponentKind::Badge, &attrs, &LayoutContext::root(480.0));
        assert!(wrap.needs_outlook_wrapper);

        let html = wrap_if_needed(&wrap, "<table></table>");
        assert_eq!(
            html,
            "<!--[if mso | IE]><tr><td align=\"center\" class=\"pill-outlook big-outlook\" width=\"480px\"><![endif]-->\n\
             <table></table>\n\
             <!--[if mso | IE]></td></tr><![endif]-->"
        );
    }

    #[test]
    fn test_wrap_is_reversible() {
        let attrs = resolved(ComponentKind::Badge, &[]);
        let wrap = ConditionalWrap::for_node(ComponentKind::Badge, &attrs, &LayoutContext::root(600.0));
        let inner = "  <p>keep   me</p>\n";
        let html = wrap_if_needed(&wrap, inner);

        let start = html.find(END_CONDITIONAL).unwrap() + END_CONDITIONAL.len() + 1;
        let end = html.rfind(START_CONDITIONAL).unwrap() - 1;
        assert_eq!(&html[start..end], inner);
    }

    #[test]
    fn test_suffix_css_classes() {
        assert_eq!(suffix_css_classes(None, "outlook"), None);
        assert_eq!(suffix_css_classes(Some("  "), "outlook"), None);
        assert_eq!(
            suffix_css_classes(Some("a b"), "outlook"),
            Some("a-outlook b-outlook".to_string())
        );
    }
}
