/// Render ` name="value"` pairs, skipping absent and empty values.
pub fn html_attributes(attributes: &[(&str, Option<String>)]) -> String {
    let mut out = String::new();
    for (name, value) in attributes {
        let Some(value) = value.as_deref().filter(|v| !v.is_empty()) else {
            continue;
        };
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&value.replace('"', "&quot;"));
        out.push('"');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_missing_values() {
        let attrs = [
            ("border", Some("0".to_string())),
            ("class", None),
            ("style", Some(String::new())),
            ("title", Some("say \"hi\"".to_string())),
        ];
        assert_eq!(
            html_attributes(&attrs),
            " border=\"0\" title=\"say &quot;hi&quot;\""
        );
    }
}
