use super::*;

#[test]
fn empty_object_is_the_stock_headline() {
    let config = RevealConfig::from_json_str("{}").unwrap();
    assert_eq!(config, RevealConfig::default());
    assert_eq!(config.text().unwrap(), RevealText::headline());
}

#[test]
fn partial_overrides_apply() {
    let config = RevealConfig::from_json_str(
        r#"{ "lines": ["HELLO"], "letter_duration": 0.2, "ease": "linear" }"#,
    )
    .unwrap();
    let text = config.text().unwrap();
    assert_eq!(text.total_letters(), 5);
    assert_eq!(text.stagger().letter_duration(), 0.2);
    assert_eq!(text.stagger().ease(), Ease::Linear);
    assert_eq!(config.window, RevealWindow::default());
}

#[test]
fn invalid_values_are_validation_errors() {
    let err = RevealConfig::from_json_str(r#"{ "letter_duration": 0 }"#).unwrap_err();
    assert!(matches!(err, RevealError::Validation(_)));

    let err = RevealConfig::from_json_str(
        r#"{ "window": { "start_fraction": 0.1, "end_fraction": 0.9 } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, RevealError::Validation(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = RevealConfig::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, RevealError::Serde(_)));
    let err = RevealConfig::from_json_str(r#"{ "colour": "red" }"#).unwrap_err();
    assert!(matches!(err, RevealError::Serde(_)));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = RevealConfig::from_json_path(Path::new("target/does/not/exist.json")).unwrap_err();
    assert!(matches!(err, RevealError::Config(_)));
}

#[test]
fn pretty_json_reloads() {
    let config = RevealConfig {
        lines: vec!["AB CD".to_owned()],
        ..RevealConfig::default()
    };
    let json = config.to_json_pretty().unwrap();
    assert_eq!(RevealConfig::from_json_str(&json).unwrap(), config);
}
