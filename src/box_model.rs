//! Pixel arithmetic for fixed-width email tables.

use crate::attributes::ResolvedAttributes;
use crate::context::LayoutContext;
use crate::validator::Side;
use regex::Regex;
use std::sync::OnceLock;

/// Border declarations relevant to a box's horizontal extent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BorderSpec<'a> {
    pub border: Option<&'a str>,
    pub left: Option<&'a str>,
    pub right: Option<&'a str>,
}

impl<'a> BorderSpec<'a> {
    pub fn from_attributes(attrs: &'a ResolvedAttributes) -> Self {
        Self {
            border: attrs.raw("border"),
            left: attrs.raw("border-left"),
            right: attrs.raw("border-right"),
        }
    }

    /// Left plus right border thickness.
    pub fn horizontal(&self) -> f64 {
        self.side(self.left) + self.side(self.right)
    }

    fn side(&self, specific: Option<&'a str>) -> f64 {
        specific
            .filter(|s| !s.is_empty())
            .or(self.border)
            .map(parse_border_width)
            .unwrap_or(0.0)
    }
}

/// Expanded padding of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn from_attribute(attrs: &ResolvedAttributes, name: &str) -> Self {
        Self {
            top: attrs.get_shorthand_side(name, Side::Top),
            right: attrs.get_shorthand_side(name, Side::Right),
            bottom: attrs.get_shorthand_side(name, Side::Bottom),
            left: attrs.get_shorthand_side(name, Side::Left),
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }
}

/// Thickness of a `border` declaration: its first standalone integer.
pub fn parse_border_width(border: &str) -> f64 {
    static BORDER_WIDTH_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = BORDER_WIDTH_REGEX.get_or_init(|| Regex::new(r"(?:^|\s)(\d+)").unwrap());

    re.captures(border)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Split a declared width into its number and unit. A bare number is pixels.
pub fn parse_width(width: &str) -> Option<(f64, &str)> {
    static WIDTH_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = WIDTH_REGEX.get_or_init(|| Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*(px|%)?\s*$").unwrap());

    let caps = re.captures(width)?;
    let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let unit = caps.get(2).map_or("px", |m| m.as_str());
    Some((value, unit))
}

/// Usable content width inside a declared width.
///
/// `None` when the width is absent or not in pixels: a percentage depends on
/// sibling content and cannot be resolved here. A negative result means the
/// paddings and borders do not fit and is returned unchanged.
pub fn compute_inner_width(
    declared_width: Option<&str>,
    border: &BorderSpec,
    padding: &Sides,
) -> Option<f64> {
    let (value, unit) = parse_width(declared_width?)?;
    if unit != "px" {
        return None;
    }

    Some(value - padding.horizontal() - border.horizontal())
}

/// Horizontal box of a node inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxWidths {
    pub total_width: f64,
    pub borders: f64,
    pub paddings: f64,
    pub box_width: f64,
}

impl BoxWidths {
    pub fn from_attributes(attrs: &ResolvedAttributes, context: &LayoutContext) -> Self {
        let total_width = context.container_width;
        let paddings = Sides::from_attribute(attrs, "padding").horizontal();
        let borders = BorderSpec::from_attributes(attrs).horizontal();

        Self {
            total_width,
            borders,
            paddings,
            box_width: total_width - paddings - borders,
        }
    }
}
