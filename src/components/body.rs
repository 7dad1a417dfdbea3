//! `mj-body`: the centred, fixed-width column that holds every other block.

use super::{PX, PX_PERCENT};
use crate::attributes::ResolvedAttributes;
use crate::conditional::{conditional, suffix_css_classes, wrap_if_needed};
use crate::context::LayoutContext;
use crate::html::html_attributes;
use crate::render::{NodeBundle, RenderedNode};
use crate::schema::{AttributeSchema, TypeSpec};
use crate::style::{background_styles, StyleMap, Styles};

pub static SCHEMA: AttributeSchema = AttributeSchema::new(
    &[
        ("width", TypeSpec::unit(PX)),
        ("wrapper-class", TypeSpec::PlainString),
        ("background-color", TypeSpec::Color),
        ("background-url", TypeSpec::PlainString),
        ("background-repeat", TypeSpec::Enum(&["repeat", "no-repeat"])),
        ("background-size", TypeSpec::PlainString),
        ("background-position", TypeSpec::PlainString),
        ("background-position-x", TypeSpec::PlainString),
        ("background-position-y", TypeSpec::PlainString),
        ("border", TypeSpec::PlainString),
        ("border-bottom", TypeSpec::PlainString),
        ("border-left", TypeSpec::PlainString),
        ("border-radius", TypeSpec::PlainString),
        ("border-right", TypeSpec::PlainString),
        ("border-top", TypeSpec::PlainString),
        ("direction", TypeSpec::Enum(&["ltr", "rtl"])),
        ("full-width", TypeSpec::Enum(&["full-width"])),
        ("padding", TypeSpec::shorthand(PX_PERCENT)),
        ("padding-top", TypeSpec::unit(PX_PERCENT)),
        ("padding-bottom", TypeSpec::unit(PX_PERCENT)),
        ("padding-left", TypeSpec::unit(PX_PERCENT)),
        ("padding-right", TypeSpec::unit(PX_PERCENT)),
        ("text-align", TypeSpec::Enum(&["left", "center", "right"])),
        ("text-padding", TypeSpec::shorthand(PX_PERCENT)),
    ],
    &[
        ("background-repeat", "repeat"),
        ("background-size", "auto"),
        ("background-position", "top center"),
        ("direction", "ltr"),
        ("width", "600px"),
        ("padding", "20px 0"),
        ("text-align", "center"),
        ("text-padding", "4px 4px 4px 0"),
    ],
);

pub fn is_full_width(attrs: &ResolvedAttributes) -> bool {
    attrs.raw("full-width") == Some("full-width")
}

pub fn styles(attrs: &ResolvedAttributes, context: &LayoutContext) -> StyleMap {
    let full_width = is_full_width(attrs);
    let background = background_styles(attrs);
    let (outer_background, inner_background) = if full_width {
        (background, Styles::new())
    } else {
        (Styles::new(), background)
    };
    let border_radius = attrs.raw("border-radius");

    let mut map = StyleMap::new();
    map.insert(
        "tableFullwidth",
        outer_background
            .set("width", "100%")
            .set_opt("border-radius", border_radius),
    );
    map.insert(
        "table",
        Styles::new()
            .extend(&inner_background)
            .set("width", "100%")
            .set_opt("border-radius", border_radius),
    );
    map.insert(
        "td",
        Styles::new()
            .set_opt("border", attrs.raw("border"))
            .set_opt("border-bottom", attrs.raw("border-bottom"))
            .set_opt("border-left", attrs.raw("border-left"))
            .set_opt("border-right", attrs.raw("border-right"))
            .set_opt("border-top", attrs.raw("border-top"))
            .set_opt("direction", attrs.raw("direction"))
            .set("font-size", "0px")
            .set_opt("padding", attrs.raw("padding"))
            .set_opt("padding-bottom", attrs.raw("padding-bottom"))
            .set_opt("padding-left", attrs.raw("padding-left"))
            .set_opt("padding-right", attrs.raw("padding-right"))
            .set_opt("padding-top", attrs.raw("padding-top"))
            .set_opt("text-align", attrs.raw("text-align")),
    );
    map.insert(
        "div",
        inner_background
            .set("margin", "0px auto")
            .set_opt("border-radius", border_radius)
            .set("max-width", context.container_width_px()),
    );
    map.insert(
        "innerDiv",
        Styles::new().set("line-height", "0").set("font-size", "0"),
    );
    map
}

pub fn render(node: &NodeBundle<'_>, children: &[RenderedNode<'_>]) -> String {
    let attrs = &node.attributes;
    let outlook_class = suffix_css_classes(attrs.raw("css-class"), "outlook");
    let width = node.context.container_width;

    let before = conditional(&format!(
        "<table{}><tr><td style=\"line-height:0px;font-size:0px;mso-line-height-rule:exactly;\">",
        html_attributes(&[
            ("align", Some("center".to_string())),
            ("border", Some("0".to_string())),
            ("cellpadding", Some("0".to_string())),
            ("cellspacing", Some("0".to_string())),
            ("class", outlook_class),
            ("style", Some(format!("width:{};", node.context.container_width_px()))),
            ("width", Some(width.trunc().to_string())),
        ])
    ));

    let wrapped_children: Vec<String> = children
        .iter()
        .map(|child| wrap_if_needed(&child.bundle.wrap, &child.html))
        .collect();

    let section = format!(
        "<div{}>\n\
         <table{}>\n<tbody>\n<tr>\n<td{}>\n\
         {}\n{}\n{}\n\
         </td>\n</tr>\n</tbody>\n</table>\n</div>",
        html_attributes(&[
            ("class", attrs.raw("css-class").map(str::to_string)),
            ("style", Some(node.styles.css("div"))),
        ]),
        html_attributes(&[
            ("align", Some("center".to_string())),
            ("border", Some("0".to_string())),
            ("cellpadding", Some("0".to_string())),
            ("cellspacing", Some("0".to_string())),
            ("role", Some("presentation".to_string())),
            ("style", Some(node.styles.css("table"))),
        ]),
        html_attributes(&[
            ("style", Some(node.styles.css("td"))),
            ("class", attrs.raw("wrapper-class").map(str::to_string)),
        ]),
        conditional("<table role=\"presentation\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\">"),
        wrapped_children.join("\n"),
        conditional("</table>"),
    );

    let after = conditional("</td></tr></table>");

    if is_full_width(attrs) {
        return format!(
            "<table{}>\n<tbody>\n<tr>\n<td>\n{}\n{}\n{}\n</td>\n</tr>\n</tbody>\n</table>",
            html_attributes(&[
                ("align", Some("center".to_string())),
                ("class", attrs.raw("css-class").map(str::to_string)),
                ("border", Some("0".to_string())),
                ("cellpadding", Some("0".to_string())),
                ("cellspacing", Some("0".to_string())),
                ("role", Some("presentation".to_string())),
                ("style", Some(node.styles.css("tableFullwidth"))),
            ]),
            before,
            section,
            after
        );
    }

    format!("{}\n{}\n{}", before, section, after)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{resolve, AttributeMap};

    fn resolved(pairs: &[(&str, &str)]) -> ResolvedAttributes {
        let user: AttributeMap = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        resolve("mj-body", &SCHEMA, &AttributeMap::new(), &user)
    }

    #[test]
    fn test_default_styles() {
        let map = styles(&resolved(&[]), &LayoutContext::root(600.0));
        assert_eq!(
            map.css("td"),
            "direction:ltr;font-size:0px;padding:20px 0;text-align:center;"
        );
        assert_eq!(map.css("div"), "margin:0px auto;max-width:600px;");
        assert_eq!(map.css("table"), "width:100%;");
        assert_eq!(map.css("innerDiv"), "line-height:0;font-size:0;");
    }

    #[test]
    fn test_background_moves_to_full_width_table() {
        let attrs = resolved(&[("background-color", "#abcdef"), ("full-width", "full-width")]);
        let map = styles(&attrs, &LayoutContext::root(600.0));
        assert_eq!(map.get("tableFullwidth").unwrap().get("background"), Some("#abcdef"));
        assert!(!map.get("table").unwrap().contains("background"));
        assert!(!map.get("div").unwrap().contains("background"));

        let attrs = resolved(&[("background-color", "#abcdef")]);
        let map = styles(&attrs, &LayoutContext::root(600.0));
        assert!(!map.get("tableFullwidth").unwrap().contains("background"));
        assert_eq!(map.get("div").unwrap().get("background"), Some("#abcdef"));
    }

    #[test]
    fn test_absent_borders_are_not_emitted() {
        let map = styles(&resolved(&[("border-top", "2px solid red")]), &LayoutContext::root(600.0));
        let td = map.get("td").unwrap();
        assert_eq!(td.get("border-top"), Some("2px solid red"));
        assert!(!td.contains("border"));
        assert!(!td.contains("border-bottom"));
    }
}
