use thiserror::Error;

pub type MjmlResult<T> = Result<T, MjmlError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MjmlError {
    // --- attribute layer (non-fatal, collected as diagnostics) ---

    #[error("Unknown attribute '{attribute}' on <{component}>: dropped")]
    SchemaViolation { component: String, attribute: String },

    #[error("Invalid value '{value}' for attribute '{attribute}': expected {expected}")]
    ValidationError {
        attribute: String,
        value: String,
        expected: String,
    },

    #[error("Impossible box on <{component}>: paddings and borders leave {width}px of content width")]
    ImpossibleBox { component: String, width: f64 },

    // --- structural errors (fatal) ---

    #[error("Unknown component <{tag}>")]
    UnknownComponent { tag: String },

    #[error("Invalid element <{tag}> in {parent}: {reason}")]
    InvalidHeadElement {
        parent: String,
        tag: String,
        reason: String,
    },

    #[error("Empty document: no <mj-body> found")]
    EmptyDocument,

    #[error("Document has content but is missing an <mj-body> section")]
    MissingBody,

    #[error("Multiple <mj-body> sections found. A document must have exactly one body")]
    MultipleBodies,

    #[error("<{tag}> cannot be placed inside <{parent}>")]
    MisplacedComponent { parent: String, tag: String },

    #[error("XML parse error: {0}")]
    XmlError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl MjmlError {
    /// Whether this error only degrades output instead of aborting a compile.
    pub fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            MjmlError::SchemaViolation { .. }
                | MjmlError::ValidationError { .. }
                | MjmlError::ImpossibleBox { .. }
        )
    }
}

impl From<roxmltree::Error> for MjmlError {
    fn from(err: roxmltree::Error) -> Self {
        MjmlError::XmlError(err.to_string())
    }
}

impl From<serde_yaml::Error> for MjmlError {
    fn from(err: serde_yaml::Error) -> Self {
        MjmlError::ConfigError(err.to_string())
    }
}
