//! Tests for table configuration.

use std::io::Write;

use super::*;

#[test]
fn test_defaults() {
    let config = TableConfig::default();
    assert_eq!(config.seating.host, "host");
    assert_eq!(config.seating.search_mode, SearchMode::Sequential);
    assert_eq!(config.dishes.root, "");
    assert_eq!(config.order.display_limit, 100);
    assert_eq!(config.order.guests[0], "Elaine");
    assert_eq!(config.order.guests.len(), 8);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [seating]
        host = "Larry"
        search_mode = "parallel"

        [dishes]
        root = "start"

        [order]
        display_limit = 5
        guests = ["x", "y", "z"]
    "#;

    let config = TableConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.seating.host, "Larry");
    assert_eq!(config.seating.search_mode, SearchMode::Parallel);
    assert_eq!(config.dishes.root, "start");
    assert_eq!(config.order.display_limit, 5);
    assert_eq!(config.order.guests, vec!["x", "y", "z"]);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = TableConfig::from_toml_str("[order]\ndisplay_limit = 3\n").unwrap();
    assert_eq!(config.order.display_limit, 3);
    assert_eq!(config.order.guests.len(), 8);
    assert_eq!(config.seating, SeatingConfig::default());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        seating:
          host: Susan
        dishes:
          root: menu
    "#;

    let config = TableConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.seating.host, "Susan");
    assert_eq!(config.seating.search_mode, SearchMode::Sequential);
    assert_eq!(config.dishes.root, "menu");
}

#[test]
fn test_invalid_toml() {
    let err = TableConfig::from_toml_str("[seating]\nsearch_mode = \"sideways\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_builder() {
    let config = TableConfig::new()
        .with_host("Uncle Leo")
        .with_search_mode(SearchMode::Parallel)
        .with_dish_root("root")
        .with_display_limit(7);

    assert_eq!(config.seating.host, "Uncle Leo");
    assert_eq!(config.seating.search_mode, SearchMode::Parallel);
    assert_eq!(config.dishes.root, "root");
    assert_eq!(config.order.display_limit, 7);
}

#[test]
fn test_validate_rejects_empty_host() {
    let config = TableConfig::new().with_host("");
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_empty_guest_list() {
    let config = TableConfig::from_toml_str("[order]\nguests = []\n").unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_load_missing_file() {
    let err = TableConfig::load("definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_toml_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[seating]\nhost = \"Kramer\"").unwrap();

    let config = TableConfig::load(file.path()).unwrap();
    assert_eq!(config.seating.host, "Kramer");
}

#[test]
fn test_load_yaml_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "order:\n  display_limit: 2").unwrap();

    let config = TableConfig::load(file.path()).unwrap();
    assert_eq!(config.order.display_limit, 2);
}

#[test]
fn test_load_validates() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[seating]\nhost = \"\"").unwrap();

    assert!(matches!(
        TableConfig::load(file.path()),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_serialize_roundtrip_preserves_values() {
    let config = TableConfig::new().with_host("Babu");
    let text = toml::to_string(&config).unwrap();
    assert_eq!(TableConfig::from_toml_str(&text).unwrap(), config);
}
