use crate::error::{MjmlError, MjmlResult};
use crate::schema::{LengthUnit, TypeSpec, UnitSpec};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A number with its unit, e.g. `10px`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

/// One to four lengths, expanded to sides by the CSS shorthand rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Shorthand(Vec<Length>);

impl Shorthand {
    pub fn new(tokens: Vec<Length>) -> Self {
        Self(tokens)
    }

    pub fn side(&self, side: Side) -> Length {
        let t = &self.0;
        let index = match (t.len(), side) {
            (1, _) => 0,
            (2, Side::Top | Side::Bottom) => 0,
            (2, Side::Right | Side::Left) => 1,
            (3, Side::Top) => 0,
            (3, Side::Right | Side::Left) => 1,
            (3, Side::Bottom) => 2,
            (_, Side::Top) => 0,
            (_, Side::Right) => 1,
            (_, Side::Bottom) => 2,
            (_, Side::Left) => 3,
        };
        t.get(index).copied().unwrap_or(Length::px(0.0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Hex(String),
    Functional(String),
    Named(String),
    Transparent,
    None,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex(v) | Color::Functional(v) | Color::Named(v) => f.write_str(v),
            Color::Transparent => f.write_str("transparent"),
            Color::None => f.write_str("none"),
        }
    }
}

/// A validated attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Enum(String),
    Length(Length),
    Shorthand(Shorthand),
    Color(Color),
    String(String),
}

/// Validate a raw attribute value against its declared type.
pub fn validate(attribute: &str, raw: &str, spec: &TypeSpec) -> MjmlResult<AttributeValue> {
    let raw = raw.trim();
    match spec {
        TypeSpec::Enum(allowed) => {
            if allowed.contains(&raw) {
                Ok(AttributeValue::Enum(raw.to_string()))
            } else {
                Err(invalid(attribute, raw, spec))
            }
        }
        TypeSpec::Unit(unit_spec) => validate_unit(attribute, raw, unit_spec, spec),
        TypeSpec::Color => validate_color(attribute, raw).map(AttributeValue::Color),
        TypeSpec::PlainString => Ok(AttributeValue::String(raw.to_string())),
    }
}

fn invalid(attribute: &str, raw: &str, spec: &TypeSpec) -> MjmlError {
    MjmlError::ValidationError {
        attribute: attribute.to_string(),
        value: raw.to_string(),
        expected: spec.describe(),
    }
}

fn validate_unit(
    attribute: &str,
    raw: &str,
    unit_spec: &UnitSpec,
    spec: &TypeSpec,
) -> MjmlResult<AttributeValue> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if !unit_spec.repeat.contains(tokens.len()) {
        return Err(invalid(attribute, raw, spec));
    }

    let mut lengths = Vec::with_capacity(tokens.len());
    for token in tokens {
        let mut length = parse_length(token).ok_or_else(|| invalid(attribute, raw, spec))?;
        if length.value < 0.0 && !unit_spec.allow_negative {
            return Err(invalid(attribute, raw, spec));
        }
        // A bare zero needs no unit
        let zero = length.value == 0.0 && length.unit == LengthUnit::Unitless;
        if !zero && !unit_spec.units.contains(&length.unit) {
            return Err(invalid(attribute, raw, spec));
        }
        if zero && !unit_spec.units.contains(&LengthUnit::Unitless) {
            length.unit = zero_unit(unit_spec);
        }
        lengths.push(length);
    }

    if unit_spec.repeat.is_repeatable() {
        Ok(AttributeValue::Shorthand(Shorthand::new(lengths)))
    } else {
        Ok(AttributeValue::Length(lengths[0]))
    }
}

/// Unit given to a bare `0` when the type has no unitless form.
fn zero_unit(unit_spec: &UnitSpec) -> LengthUnit {
    if unit_spec.units.contains(&LengthUnit::Px) {
        LengthUnit::Px
    } else {
        unit_spec.units.first().copied().unwrap_or(LengthUnit::Px)
    }
}

/// Parse a single `<number><unit>` token.
pub fn parse_length(token: &str) -> Option<Length> {
    static LENGTH_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = LENGTH_REGEX.get_or_init(|| Regex::new(r"^(-?(?:\d+\.?\d*|\.\d+))(px|%|em)?$").unwrap());

    let caps = re.captures(token)?;
    let value = caps[1].parse::<f64>().ok()?;
    let unit = LengthUnit::from_suffix(caps.get(2).map_or("", |m| m.as_str()))?;
    Some(Length { value, unit })
}

pub fn validate_color(attribute: &str, color: &str) -> MjmlResult<Color> {
    static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
    static FUNCTIONAL_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
    let hex_regex = HEX_COLOR_REGEX
        .get_or_init(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());
    let functional_regex = FUNCTIONAL_COLOR_REGEX.get_or_init(|| {
        Regex::new(r"^rgba?\(\s*\d{1,3}%?\s*,\s*\d{1,3}%?\s*,\s*\d{1,3}%?\s*(?:,\s*(?:\d*\.)?\d+\s*)?\)$")
            .unwrap()
    });

    match color {
        "none" => return Ok(Color::None),
        "transparent" => return Ok(Color::Transparent),
        _ => {}
    }

    if hex_regex.is_match(color) {
        Ok(Color::Hex(color.to_string()))
    } else if functional_regex.is_match(color) {
        Ok(Color::Functional(color.to_string()))
    } else if NAMED_COLORS.contains(&color.to_ascii_lowercase().as_str()) {
        Ok(Color::Named(color.to_string()))
    } else {
        Err(MjmlError::ValidationError {
            attribute: attribute.to_string(),
            value: color.to_string(),
            expected: TypeSpec::Color.describe(),
        })
    }
}

const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen",
];
