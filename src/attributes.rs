//! Attribute resolution: declared defaults, document-level defaults and user
//! overrides merged into one validated mapping per node.

use crate::error::MjmlError;
use crate::schema::{AttributeSchema, TypeSpec, GLOBAL_SCHEMA};
use crate::validator::{validate, AttributeValue, Side};
use std::collections::BTreeMap;

/// Raw attribute mapping as written in markup or configuration.
pub type AttributeMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAttribute {
    pub raw: String,
    pub value: AttributeValue,
}

/// Validated attributes of one node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedAttributes {
    values: BTreeMap<String, ResolvedAttribute>,
    diagnostics: Vec<MjmlError>,
}

impl ResolvedAttributes {
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name).map(|a| &a.value)
    }

    /// The attribute's text, as it will appear in CSS or HTML output.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|a| a.raw.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Per-side numeric value of a box attribute such as `padding`.
    ///
    /// A set `<name>-<side>` attribute wins over the shorthand. Missing
    /// values count as zero; the unit is ignored.
    pub fn get_shorthand_side(&self, name: &str, side: Side) -> f64 {
        let specific = format!("{}-{}", name, side.as_str());
        if let Some(AttributeValue::Length(length)) = self.get(&specific) {
            return length.value;
        }

        match self.get(name) {
            Some(AttributeValue::Shorthand(shorthand)) => shorthand.side(side).value,
            Some(AttributeValue::Length(length)) => length.value,
            _ => 0.0,
        }
    }

    /// Problems met while resolving: unknown attributes and invalid values.
    pub fn diagnostics(&self) -> &[MjmlError] {
        &self.diagnostics
    }
}

/// Resolve one node's attributes.
///
/// For every attribute the schema declares, the first non-empty value among
/// the user override, the kind default and the declared default is validated.
/// Invalid values and unknown user attributes are logged, recorded as
/// diagnostics and dropped; resolution itself never fails.
pub fn resolve(
    kind: &str,
    schema: &AttributeSchema,
    kind_defaults: &AttributeMap,
    user_overrides: &AttributeMap,
) -> ResolvedAttributes {
    let mut resolved = ResolvedAttributes::default();

    for name in user_overrides.keys() {
        if !schema.declares(name) && !GLOBAL_SCHEMA.declares(name) {
            log::warn!("<{}>: unknown attribute '{}' dropped", kind, name);
            resolved.diagnostics.push(MjmlError::SchemaViolation {
                component: kind.to_string(),
                attribute: name.clone(),
            });
        }
    }

    let declared = schema
        .attributes
        .iter()
        .chain(GLOBAL_SCHEMA.attributes.iter());

    for (name, spec) in declared {
        let Some(raw) = pick(name, schema, kind_defaults, user_overrides) else {
            continue;
        };
        resolve_one(kind, name, raw, spec, &mut resolved);
    }

    resolved
}

fn pick<'a>(
    name: &str,
    schema: &'a AttributeSchema,
    kind_defaults: &'a AttributeMap,
    user_overrides: &'a AttributeMap,
) -> Option<&'a str> {
    let non_empty = |value: &'a String| Some(value.as_str()).filter(|v| !v.trim().is_empty());

    user_overrides
        .get(name)
        .and_then(non_empty)
        .or_else(|| kind_defaults.get(name).and_then(non_empty))
        .or_else(|| schema.default_of(name))
}

fn resolve_one(
    kind: &str,
    name: &str,
    raw: &str,
    spec: &TypeSpec,
    resolved: &mut ResolvedAttributes,
) {
    match validate(name, raw, spec) {
        Ok(value) => {
            log::trace!("<{}>: {}=\"{}\"", kind, name, raw);
            resolved.values.insert(
                name.to_string(),
                ResolvedAttribute {
                    raw: raw.trim().to_string(),
                    value,
                },
            );
        }
        Err(err) => {
            log::warn!("<{}>: {}; attribute left unset", kind, err);
            resolved.diagnostics.push(err);
        }
    }
}
