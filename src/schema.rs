//! Attribute schemas: the closed set of attribute types a component kind
//! can declare, and the per-kind tables of declared attributes and defaults.

use std::fmt;

/// Units a length attribute may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Percent,
    Em,
    /// A bare number (e.g. `line-height="1.5"`)
    Unitless,
}

impl LengthUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Percent => "%",
            LengthUnit::Em => "em",
            LengthUnit::Unitless => "",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "px" => Some(LengthUnit::Px),
            "%" => Some(LengthUnit::Percent),
            "em" => Some(LengthUnit::Em),
            "" => Some(LengthUnit::Unitless),
            _ => None,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many space-separated tokens a unit attribute accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeat {
    pub min: usize,
    pub max: usize,
}

impl Repeat {
    pub const ONCE: Repeat = Repeat { min: 1, max: 1 };
    pub const SHORTHAND: Repeat = Repeat { min: 1, max: 4 };

    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }

    pub fn is_repeatable(&self) -> bool {
        self.max > 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSpec {
    pub units: &'static [LengthUnit],
    pub allow_negative: bool,
    pub repeat: Repeat,
}

/// Declared type of one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSpec {
    Enum(&'static [&'static str]),
    Unit(UnitSpec),
    Color,
    PlainString,
}

impl TypeSpec {
    pub const fn unit(units: &'static [LengthUnit]) -> Self {
        TypeSpec::Unit(UnitSpec {
            units,
            allow_negative: false,
            repeat: Repeat::ONCE,
        })
    }

    pub const fn unit_with_negative(units: &'static [LengthUnit]) -> Self {
        TypeSpec::Unit(UnitSpec {
            units,
            allow_negative: true,
            repeat: Repeat::ONCE,
        })
    }

    /// CSS shorthand: 1 to 4 tokens
    pub const fn shorthand(units: &'static [LengthUnit]) -> Self {
        TypeSpec::Unit(UnitSpec {
            units,
            allow_negative: false,
            repeat: Repeat::SHORTHAND,
        })
    }

    /// Human readable shape, used in validation messages.
    pub fn describe(&self) -> String {
        match self {
            TypeSpec::Enum(allowed) => format!("one of: {}", allowed.join(", ")),
            TypeSpec::Unit(spec) => {
                let units: Vec<String> = spec
                    .units
                    .iter()
                    .map(|u| match u {
                        LengthUnit::Unitless => "unitless".to_string(),
                        other => other.as_str().to_string(),
                    })
                    .collect();
                let sign = if spec.allow_negative { "signed " } else { "" };
                if spec.repeat.is_repeatable() {
                    format!(
                        "{}-{} {}lengths in {}",
                        spec.repeat.min,
                        spec.repeat.max,
                        sign,
                        units.join(", ")
                    )
                } else {
                    format!("a {}length in {}", sign, units.join(", "))
                }
            }
            TypeSpec::Color => "a color (#rgb, #rrggbb, rgb(), rgba() or a named color)".to_string(),
            TypeSpec::PlainString => "a string".to_string(),
        }
    }
}

/// The declared attributes of one component kind and their defaults.
///
/// Build it with [`AttributeSchema::new`] inside a `static` so the
/// defaults check runs during compilation.
#[derive(Debug)]
pub struct AttributeSchema {
    pub attributes: &'static [(&'static str, TypeSpec)],
    pub defaults: &'static [(&'static str, &'static str)],
}

impl AttributeSchema {
    pub const fn new(
        attributes: &'static [(&'static str, TypeSpec)],
        defaults: &'static [(&'static str, &'static str)],
    ) -> Self {
        let mut i = 0;
        while i < defaults.len() {
            assert!(
                declares(attributes, defaults[i].0),
                "default declared for an attribute missing from the schema"
            );
            i += 1;
        }
        Self {
            attributes,
            defaults,
        }
    }

    pub fn type_of(&self, name: &str) -> Option<&TypeSpec> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, spec)| spec)
    }

    pub fn default_of(&self, name: &str) -> Option<&'static str> {
        self.defaults
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.type_of(name).is_some()
    }
}

/// Attributes every component kind accepts.
pub static GLOBAL_SCHEMA: AttributeSchema = AttributeSchema::new(
    &[
        ("css-class", TypeSpec::PlainString),
        ("mj-class", TypeSpec::PlainString),
    ],
    &[],
);

const fn declares(attributes: &[(&str, TypeSpec)], name: &str) -> bool {
    let mut i = 0;
    while i < attributes.len() {
        if str_eq(attributes[i].0, name) {
            return true;
        }
        i += 1;
    }
    false
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: AttributeSchema = AttributeSchema::new(
        &[
            ("align", TypeSpec::Enum(&["left", "center", "right"])),
            ("padding", TypeSpec::shorthand(&[LengthUnit::Px, LengthUnit::Percent])),
        ],
        &[("align", "center")],
    );

    #[test]
    fn test_schema_lookup() {
        assert!(SAMPLE.declares("align"));
        assert!(!SAMPLE.declares("color"));
        assert_eq!(SAMPLE.default_of("align"), Some("center"));
        assert_eq!(SAMPLE.default_of("padding"), None);
    }

    #[test]
    fn test_describe_shorthand() {
        let spec = SAMPLE.type_of("padding").unwrap();
        assert_eq!(spec.describe(), "1-4 lengths in px, %");
    }

    #[test]
    fn test_const_str_eq() {
        assert!(str_eq("padding", "padding"));
        assert!(!str_eq("padding", "padding-left"));
    }
}
