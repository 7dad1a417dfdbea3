use crate::attributes::ResolvedAttributes;
use crate::schema::{AttributeSchema, LengthUnit};

pub mod badge;
pub mod body;
pub mod raw;

pub(crate) const PX: &[LengthUnit] = &[LengthUnit::Px];
pub(crate) const PX_PERCENT: &[LengthUnit] = &[LengthUnit::Px, LengthUnit::Percent];

/// The set of tags the compiler knows how to render
pub const BUILTIN_COMPONENTS: &[&str] = &["mj-body", "mj-badge", "mj-raw"];

/// Node kind: selects the schema, context rule, style rule and template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Body,
    Badge,
    Raw,
}

impl ComponentKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "mj-body" => Some(ComponentKind::Body),
            "mj-badge" => Some(ComponentKind::Badge),
            "mj-raw" => Some(ComponentKind::Raw),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ComponentKind::Body => "mj-body",
            ComponentKind::Badge => "mj-badge",
            ComponentKind::Raw => "mj-raw",
        }
    }

    pub fn schema(&self) -> &'static AttributeSchema {
        match self {
            ComponentKind::Body => &body::SCHEMA,
            ComponentKind::Badge => &badge::SCHEMA,
            ComponentKind::Raw => &raw::SCHEMA,
        }
    }

    /// Raw kinds copy their content verbatim and emit no layout markup.
    pub fn is_raw(&self) -> bool {
        matches!(self, ComponentKind::Raw)
    }

    /// Layout owners set the container width seen by their children.
    pub fn owns_layout(&self) -> bool {
        matches!(self, ComponentKind::Body)
    }

    pub fn establishes_background(&self) -> bool {
        matches!(self, ComponentKind::Body)
    }

    /// Kinds whose element children are components rather than content.
    pub fn accepts_children(&self) -> bool {
        matches!(self, ComponentKind::Body)
    }

    /// Whether `child` may appear directly inside this kind.
    ///
    /// A body holds blocks but never another body.
    pub fn accepts_child(&self, child: ComponentKind) -> bool {
        self.accepts_children() && child != ComponentKind::Body
    }

    /// Width left for the node's content, when the kind has one.
    pub fn content_width(&self, attrs: &ResolvedAttributes) -> Option<f64> {
        match self {
            ComponentKind::Badge => badge::content_width(attrs),
            ComponentKind::Body | ComponentKind::Raw => None,
        }
    }
}
