//! `mj-badge`: a small inline label, optionally a link, optionally with an icon.

use super::{PX, PX_PERCENT};
use crate::attributes::ResolvedAttributes;
use crate::box_model::{compute_inner_width, BorderSpec, Sides};
use crate::html::html_attributes;
use crate::render::NodeBundle;
use crate::schema::{AttributeSchema, LengthUnit, TypeSpec};
use crate::style::{StyleMap, Styles};
use crate::validator::{AttributeValue, Color};

pub static SCHEMA: AttributeSchema = AttributeSchema::new(
    &[
        ("align", TypeSpec::Enum(&["left", "center", "right"])),
        ("img", TypeSpec::PlainString),
        ("background-color", TypeSpec::Color),
        ("border-bottom", TypeSpec::PlainString),
        ("border-left", TypeSpec::PlainString),
        ("border-radius", TypeSpec::PlainString),
        ("border-right", TypeSpec::PlainString),
        ("border-top", TypeSpec::PlainString),
        ("border", TypeSpec::PlainString),
        ("color", TypeSpec::Color),
        ("container-background-color", TypeSpec::Color),
        ("font-family", TypeSpec::PlainString),
        ("font-size", TypeSpec::unit(PX)),
        ("font-style", TypeSpec::PlainString),
        ("font-weight", TypeSpec::PlainString),
        ("height", TypeSpec::unit(PX_PERCENT)),
        ("href", TypeSpec::PlainString),
        ("name", TypeSpec::PlainString),
        ("inner-padding", TypeSpec::shorthand(PX_PERCENT)),
        (
            "letter-spacing",
            TypeSpec::unit_with_negative(&[LengthUnit::Px, LengthUnit::Em]),
        ),
        (
            "line-height",
            TypeSpec::unit(&[LengthUnit::Px, LengthUnit::Percent, LengthUnit::Unitless]),
        ),
        ("padding-bottom", TypeSpec::unit(PX_PERCENT)),
        ("padding-left", TypeSpec::unit(PX_PERCENT)),
        ("padding-right", TypeSpec::unit(PX_PERCENT)),
        ("padding-top", TypeSpec::unit(PX_PERCENT)),
        ("padding", TypeSpec::shorthand(PX_PERCENT)),
        ("rel", TypeSpec::PlainString),
        ("target", TypeSpec::PlainString),
        ("text-decoration", TypeSpec::PlainString),
        ("text-transform", TypeSpec::PlainString),
        ("vertical-align", TypeSpec::Enum(&["top", "bottom", "middle"])),
        ("text-align", TypeSpec::Enum(&["left", "right", "center"])),
        ("width", TypeSpec::unit(PX_PERCENT)),
    ],
    &[
        ("align", "center"),
        ("color", "#000000"),
        ("font-family", "Ubuntu, Helvetica, Arial, sans-serif"),
        ("font-size", "12px"),
        ("font-weight", "bold"),
        ("inner-padding", "7px 16px"),
        ("line-height", "120%"),
        ("padding", "10px 25px"),
        ("target", "_blank"),
        ("border", "1px solid #babbbe"),
        ("text-decoration", "none"),
        ("text-transform", "none"),
        ("vertical-align", "middle"),
    ],
);

/// Width of the label itself: declared width minus inner padding and borders.
///
/// `None` unless the width is declared in pixels.
pub fn content_width(attrs: &ResolvedAttributes) -> Option<f64> {
    compute_inner_width(
        attrs.raw("width"),
        &BorderSpec::from_attributes(attrs),
        &Sides::from_attribute(attrs, "inner-padding"),
    )
}

pub fn styles(attrs: &ResolvedAttributes) -> StyleMap {
    let background = attrs.raw("background-color");
    let border_radius = attrs.raw("border-radius");

    let mut map = StyleMap::new();
    map.insert(
        "table",
        Styles::new()
            .set("border-collapse", "separate")
            .set_opt("width", attrs.raw("width"))
            .set("line-height", "100%"),
    );
    map.insert(
        "td",
        Styles::new()
            .set_opt("border", attrs.raw("border"))
            .set_opt("border-bottom", attrs.raw("border-bottom"))
            .set_opt("border-left", attrs.raw("border-left"))
            .set_opt("border-radius", border_radius)
            .set_opt("border-right", attrs.raw("border-right"))
            .set_opt("border-top", attrs.raw("border-top"))
            .set("cursor", "auto")
            .set_opt("font-style", attrs.raw("font-style"))
            .set_opt("height", attrs.raw("height"))
            .set_opt("mso-padding-alt", attrs.raw("inner-padding"))
            .set_opt("text-align", attrs.raw("text-align"))
            .set_opt("background", background),
    );
    map.insert(
        "content",
        Styles::new()
            .set("display", "inline-block")
            .set_opt("width", content_width(attrs).map(|w| format!("{}px", w)))
            .set_opt("background", background)
            .set_opt("color", attrs.raw("color"))
            .set_opt("font-family", attrs.raw("font-family"))
            .set_opt("font-size", attrs.raw("font-size"))
            .set_opt("font-style", attrs.raw("font-style"))
            .set_opt("font-weight", attrs.raw("font-weight"))
            .set_opt("line-height", attrs.raw("line-height"))
            .set_opt("letter-spacing", attrs.raw("letter-spacing"))
            .set("margin", "0")
            .set_opt("text-decoration", attrs.raw("text-decoration"))
            .set_opt("text-transform", attrs.raw("text-transform"))
            .set_opt("padding", attrs.raw("inner-padding"))
            .set("mso-padding-alt", "0px")
            .set_opt("border-radius", border_radius),
    );
    map
}

pub fn render(node: &NodeBundle<'_>) -> String {
    let attrs = &node.attributes;
    let href = attrs.raw("href").map(str::to_string);
    let tag = if href.is_some() { "a" } else { "p" };

    let bgcolor = match attrs.get("background-color") {
        Some(AttributeValue::Color(Color::None)) | None => None,
        Some(_) => attrs.raw("background-color").map(str::to_string),
    };

    let image = attrs
        .raw("img")
        .map(|src| format!("<img{} />", html_attributes(&[("src", Some(src.to_string()))])))
        .unwrap_or_default();

    format!(
        "<table{}>\n<tr>\n<td{}>\n<{}{}>\n{}{}\n</{}>\n</td>\n</tr>\n</table>",
        html_attributes(&[
            ("border", Some("0".to_string())),
            ("cellpadding", Some("0".to_string())),
            ("cellspacing", Some("0".to_string())),
            ("role", Some("presentation".to_string())),
            ("style", Some(node.styles.css("table"))),
        ]),
        html_attributes(&[
            ("align", Some("center".to_string())),
            ("bgcolor", bgcolor),
            ("role", Some("presentation".to_string())),
            ("style", Some(node.styles.css("td"))),
            ("valign", attrs.raw("vertical-align").map(str::to_string)),
        ]),
        tag,
        html_attributes(&[
            ("href", href.clone()),
            ("rel", attrs.raw("rel").map(str::to_string)),
            ("name", attrs.raw("name").map(str::to_string)),
            ("style", Some(node.styles.css("content"))),
            (
                "target",
                href.as_ref().and(attrs.raw("target").map(str::to_string)),
            ),
        ]),
        image,
        node.node.content.trim(),
        tag,
    )
}
