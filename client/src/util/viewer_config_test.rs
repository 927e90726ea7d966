use super::*;

#[test]
fn missing_element_gives_defaults() {
    assert_eq!(parse_embedded(None).unwrap(), ViewerConfig::default());
}

#[test]
fn blank_element_gives_defaults() {
    assert_eq!(parse_embedded(Some("  \n ")).unwrap(), ViewerConfig::default());
}

#[test]
fn fields_override_individually() {
    let config = parse_embedded(Some(r#"{"font_url": "/fonts/label.json", "divisions": 8}"#)).unwrap();
    assert_eq!(config.font_url, "/fonts/label.json");
    assert_eq!(config.divisions, 8);
    assert_eq!(config.service_url, ViewerConfig::default().service_url);
}

#[test]
fn malformed_element_is_an_error() {
    assert!(parse_embedded(Some("{ not json")).is_err());
}
