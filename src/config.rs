use crate::error::{MjmlError, MjmlResult};
use crate::head::AttributeDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What happens to attribute diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    /// Report diagnostics in the compile output
    #[default]
    Soft,
    /// Degrade silently; diagnostics are discarded
    Skip,
}

/// Compiler settings, usually loaded from a YAML file.
///
/// ```yaml
/// container_width: 600
/// validation: soft
/// attributes:
///   all:
///     font-family: "Arial, sans-serif"
///   tags:
///     mj-badge:
///       background-color: "#4a90e2"
///   classes:
///     muted:
///       color: "#888888"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Width handed to the body by the root context, in pixels
    pub container_width: f64,
    pub validation: ValidationLevel,
    /// Defaults below any `<mj-attributes>` declared in the document head
    pub attributes: AttributeDefaults,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            container_width: 600.0,
            validation: ValidationLevel::Soft,
            attributes: AttributeDefaults::default(),
        }
    }
}

impl CompilerConfig {
    pub fn from_yaml_str(yaml: &str) -> MjmlResult<Self> {
        let config: CompilerConfig = serde_yaml::from_str(yaml)?;
        if !(config.container_width.is_finite() && config.container_width > 0.0) {
            return Err(MjmlError::ConfigError(format!(
                "container_width must be a positive number, got {}",
                config.container_width
            )));
        }
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> MjmlResult<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|e| {
            MjmlError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&yaml)
    }
}
