//! # MJML component engine
//!
//! Compiles a tree of MJML-style components into HTML that survives email
//! clients, Outlook included.
//!
//! ## Features
//! - Typed attribute schemas per component, validated value by value
//! - Attribute resolution: declared defaults, `<mj-attributes>` / config
//!   defaults, `mj-class` bundles and user overrides
//! - Pixel-accurate content widths under padding and borders
//! - Layout context propagation (container width, background)
//! - Outlook conditional wrappers around table rows
//!
//! Malformed attributes never abort a compile: they are dropped, logged
//! through the `log` facade and returned as diagnostics.
//!
//! ## Example
//! ```ignore
//! use mjml_engine::{compile_str, CompilerConfig};
//!
//! let xml = r#"
//! <mjml>
//!   <mj-body background-color="#f4f4f4">
//!     <mj-badge background-color="#4a90e2" color="#ffffff">New</mj-badge>
//!   </mj-body>
//! </mjml>
//! "#;
//!
//! let output = compile_str(xml, &CompilerConfig::default()).expect("Failed to compile");
//! assert_eq!(output.background_color.as_deref(), Some("#f4f4f4"));
//! ```

pub mod attributes;
pub mod box_model;
pub mod compiler;
pub mod components;
pub mod conditional;
pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod head;
pub mod html;
pub mod parser;
pub mod render;
pub mod schema;
pub mod style;
pub mod validator;

// --- Core types ---
pub use attributes::{AttributeMap, ResolvedAttributes};
pub use box_model::{compute_inner_width, BorderSpec, BoxWidths, Sides};
pub use compiler::CompileOutput;
pub use components::ComponentKind;
pub use conditional::{wrap_if_needed, ConditionalWrap};
pub use config::{CompilerConfig, ValidationLevel};
pub use context::{derive_child_context, BackgroundAccumulator, LayoutContext};
pub use document::{Document, Node};
pub use error::{MjmlError, MjmlResult};
pub use head::{AttributeDefaults, Head};
pub use render::{HtmlRenderer, NodeBundle, RenderedNode, Renderer};
pub use schema::{AttributeSchema, LengthUnit, TypeSpec};
pub use style::{build_styles, StyleMap, Styles};
pub use validator::{validate, AttributeValue, Color, Length, Shorthand, Side};

/// Parse a document (`<mjml>` root optional)
pub fn parse_document(xml: &str) -> MjmlResult<Document> {
    parser::parse_document(xml)
}

/// Compile a parsed document with the built-in templates
pub fn compile(document: &Document, config: &CompilerConfig) -> MjmlResult<CompileOutput> {
    compiler::compile(document, config)
}

/// Compile a parsed document with a custom renderer
pub fn compile_with(
    document: &Document,
    config: &CompilerConfig,
    renderer: &dyn Renderer,
) -> MjmlResult<CompileOutput> {
    compiler::compile_with(document, config, renderer)
}

/// Parse and compile in one step
pub fn compile_str(xml: &str, config: &CompilerConfig) -> MjmlResult<CompileOutput> {
    let document = parse_document(xml)?;
    compile(&document, config)
}
