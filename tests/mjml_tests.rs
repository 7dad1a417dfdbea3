use mjml_engine::{
    compile, compile_str, parse_document, CompilerConfig, Document, MjmlError, Node,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

fn get_fixture_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(filename);
    path
}

fn read_fixture(filename: &str) -> String {
    fs::read_to_string(get_fixture_path(filename)).unwrap()
}

// Fixture documents
#[test]
fn test_newsletter_compiles_cleanly() {
    let output = compile_str(&read_fixture("newsletter.mjml"), &CompilerConfig::default()).unwrap();

    assert!(
        output.diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        output.diagnostics
    );
    assert_eq!(output.title.as_deref(), Some("Weekly digest"));
    assert_eq!(output.preview.as_deref(), Some("What shipped this week"));
    assert_eq!(output.background_color.as_deref(), Some("#f4f4f4"));
}

#[test]
fn test_newsletter_wraps_badges_but_not_raw() {
    let html = compile_str(&read_fixture("newsletter.mjml"), &CompilerConfig::default())
        .unwrap()
        .html;

    assert!(html.contains(
        "<!--[if mso | IE]><tr><td align=\"center\" width=\"480px\"><![endif]-->\n<table"
    ));
    assert!(html.contains(
        "<!--[if mso | IE]><tr><td align=\"left\" width=\"480px\"><![endif]-->\n<table"
    ));
    assert_eq!(html.matches("<tr><td align=").count(), 2);
    assert!(html.contains("\n<p class=\"intro\">Hello there</p>\n"));
}

#[test]
fn test_newsletter_badge_output() {
    let html = compile_str(&read_fixture("newsletter.mjml"), &CompilerConfig::default())
        .unwrap()
        .html;

    // 120px - 2 * 10px inner padding (mj-class) - 2 * 1px default border
    assert!(html.contains("display:inline-block;width:98px;background:#4a90e2;color:#ffffff;"));
    assert!(html.contains("font-family:Helvetica, Arial, sans-serif;"));
    assert!(html.contains("border-radius:12px;"));
    assert!(html.contains("<a href=\"https://example.com/new\""));
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("bgcolor=\"#4a90e2\""));
    // background-color="none" keeps its style but emits no bgcolor
    assert!(html.contains("background:none;"));
    assert_eq!(html.matches("bgcolor=").count(), 1);
    assert!(html.contains("<p style=\"display:inline-block;"));
}

#[test]
fn test_newsletter_body_outlook_table() {
    let html = compile_str(&read_fixture("newsletter.mjml"), &CompilerConfig::default())
        .unwrap()
        .html;

    assert!(html.starts_with(
        "<!--[if mso | IE]><table align=\"center\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\" class=\"digest-outlook\" style=\"width:600px;\" width=\"600\">"
    ));
    assert!(html.contains("<div class=\"digest\" style=\"background:#f4f4f4;background-color:#f4f4f4;margin:0px auto;max-width:600px;\">"));
    assert!(html.ends_with("<!--[if mso | IE]></td></tr></table><![endif]-->"));
}

#[test]
fn test_invalid_attributes_degrade_gracefully() {
    let output =
        compile_str(&read_fixture("invalid-attributes.mjml"), &CompilerConfig::default()).unwrap();

    let expected = vec![
        MjmlError::ValidationError {
            attribute: "width".to_string(),
            value: "100%".to_string(),
            expected: "a length in px".to_string(),
        },
        MjmlError::ValidationError {
            attribute: "background-color".to_string(),
            value: "not-a-color".to_string(),
            expected: "a color (#rgb, #rrggbb, rgb(), rgba() or a named color)".to_string(),
        },
        MjmlError::SchemaViolation {
            component: "mj-badge".to_string(),
            attribute: "colour".to_string(),
        },
        MjmlError::ValidationError {
            attribute: "align".to_string(),
            value: "middle".to_string(),
            expected: "one of: left, center, right".to_string(),
        },
        MjmlError::ValidationError {
            attribute: "font-size".to_string(),
            value: "12pt".to_string(),
            expected: "a length in px".to_string(),
        },
    ];
    assert_eq!(output.diagnostics, expected);
    assert!(output.diagnostics.iter().all(MjmlError::is_diagnostic));

    // invalid body width leaves the root width in place; invalid align is omitted
    assert!(output
        .html
        .contains("<!--[if mso | IE]><tr><td width=\"600px\"><![endif]-->"));
    assert!(!output.html.contains("font-size:12pt"));
    assert!(!output.html.contains("colour"));
    assert_eq!(output.background_color, None);
}

#[test]
fn test_background_image_uses_discrete_properties() {
    let html = compile_str(&read_fixture("background-image.mjml"), &CompilerConfig::default())
        .unwrap()
        .html;

    assert!(html.starts_with("<table align=\"center\" border=\"0\""));
    assert!(html.contains(
        "style=\"background-color:#222222;background-image:url('https://example.com/hero.png');background-position:center bottom;background-repeat:repeat;background-size:auto;width:100%;\""
    ));
    assert!(!html.contains("background:#222222"));
}

#[test]
fn test_unknown_component_is_fatal() {
    let result = compile_str(&read_fixture("unknown-component.mjml"), &CompilerConfig::default());
    assert!(matches!(result, Err(MjmlError::UnknownComponent { .. })));
}

// Configuration
#[test]
fn test_config_defaults_sit_below_head_attributes() {
    let config = CompilerConfig::from_file(get_fixture_path("config.yaml")).unwrap();
    assert_eq!(config.container_width, 640.0);

    let html = compile_str(&read_fixture("newsletter.mjml"), &config).unwrap().html;
    // head wins for color and font-family, config still supplies font-size
    assert!(html.contains("color:#ffffff;"));
    assert!(html.contains("font-family:Helvetica, Arial, sans-serif;"));
    assert!(html.contains("font-size:14px;"));
    assert!(!html.contains("Georgia"));
    assert!(html.contains("width=\"640\""));
}

#[test]
fn test_missing_config_file() {
    let result = CompilerConfig::from_file(get_fixture_path("does-not-exist.yaml"));
    assert!(matches!(result, Err(MjmlError::ConfigError(_))));
}

// Resolution precedence through the whole pipeline
#[test]
fn test_attribute_precedence_end_to_end() {
    let with_user = r#"
<mjml>
  <mj-head><mj-attributes><mj-badge align="left" /></mj-attributes></mj-head>
  <mj-body><mj-badge align="right">x</mj-badge></mj-body>
</mjml>"#;
    let with_kind = r#"
<mjml>
  <mj-head><mj-attributes><mj-badge align="left" /></mj-attributes></mj-head>
  <mj-body><mj-badge>x</mj-badge></mj-body>
</mjml>"#;
    let declared_only = "<mj-body><mj-badge>x</mj-badge></mj-body>";

    let config = CompilerConfig::default();
    for (xml, align) in [(with_user, "right"), (with_kind, "left"), (declared_only, "center")] {
        let html = compile_str(xml, &config).unwrap().html;
        assert!(
            html.contains(&format!("<tr><td align=\"{}\" width=\"600px\">", align)),
            "expected align {} in {}",
            align,
            html
        );
    }
}

#[test]
fn test_badge_image_source_is_escaped() {
    let xml = r#"<mj-body><mj-badge img='icon.png" onerror="x'>Hot</mj-badge></mj-body>"#;
    let html = compile_str(xml, &CompilerConfig::default()).unwrap().html;
    assert!(html.contains("<img src=\"icon.png&quot; onerror=&quot;x\" />Hot"));
}

#[test]
fn test_zero_body_width_reaches_children() {
    let output = compile_str(
        "<mj-body width=\"0\"><mj-badge>x</mj-badge></mj-body>",
        &CompilerConfig::default(),
    )
    .unwrap();
    assert!(output.diagnostics.is_empty());
    assert!(output
        .html
        .contains("<!--[if mso | IE]><tr><td align=\"center\" width=\"0px\"><![endif]-->"));
}

#[test]
fn test_nested_body_is_rejected() {
    let result = compile_str(
        "<mj-body><mj-body width=\"300px\"><mj-badge>x</mj-badge></mj-body></mj-body>",
        &CompilerConfig::default(),
    );
    assert!(matches!(result, Err(MjmlError::MisplacedComponent { .. })));
}

#[test]
fn test_compiles_are_independent() {
    let config = CompilerConfig::default();
    let colored = parse_document(&read_fixture("newsletter.mjml")).unwrap();
    let plain = Document::new(Node::new("mj-body").with_child(Node::new("mj-raw").with_content("<hr/>")));

    assert_eq!(
        compile(&colored, &config).unwrap().background_color.as_deref(),
        Some("#f4f4f4")
    );
    let second = compile(&plain, &config).unwrap();
    assert_eq!(second.background_color, None);
    assert!(second.html.contains("\n<hr/>\n"));
}

#[test]
fn test_document_round_trips_through_yaml() {
    let doc = parse_document(&read_fixture("newsletter.mjml")).unwrap();
    let yaml = serde_yaml::to_string(&doc).unwrap();
    let back: Document = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, doc);
}
