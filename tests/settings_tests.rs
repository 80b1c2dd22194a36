//! Tests for settings defaults, serialization and normalization

use adhan_times::settings::{LocationMode, Settings};

#[test]
fn test_default_settings() {
    let settings = Settings::default();

    assert_eq!(settings.location_mode, LocationMode::Geo);
    assert_eq!(settings.city, "");
    assert_eq!(settings.country, "");
    assert_eq!(settings.method, "2");
    assert_eq!(settings.school, "0");
    assert_eq!(settings.hijri_adjustment, "0");
}

#[test]
fn test_settings_roundtrip() {
    let mut settings = Settings::default();
    settings.location_mode = LocationMode::City;
    settings.city = "Istanbul".to_string();
    settings.country = "Turkey".to_string();
    settings.method = "13".to_string();
    settings.hijri_adjustment = "-1".to_string();

    let toml_str = toml::to_string(&settings).expect("Serialization failed");
    let parsed: Settings = toml::from_str(&toml_str).expect("Deserialization failed");

    assert_eq!(parsed.location_mode, LocationMode::City);
    assert_eq!(parsed.city, "Istanbul");
    assert_eq!(parsed.country, "Turkey");
    assert_eq!(parsed.method, "13");
    assert_eq!(parsed.hijri_adjustment, "-1");
}

#[test]
fn test_partial_file_merges_over_defaults() {
    let partial = r#"
        location_mode = "city"
        city = "Cairo"
    "#;

    let settings: Settings = toml::from_str(partial).expect("Partial deserialization failed");

    assert_eq!(settings.location_mode, LocationMode::City);
    assert_eq!(settings.city, "Cairo");
    // Absent fields fall back to defaults
    assert_eq!(settings.country, "");
    assert_eq!(settings.method, "2");
    assert_eq!(settings.school, "0");
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let with_extra = r#"
        city = "Cairo"
        unknown_field = "should be ignored"
    "#;

    let settings: Settings = toml::from_str(with_extra).expect("Deserialization failed");
    assert_eq!(settings.city, "Cairo");
}

#[test]
fn test_save_normalization_trims_whitespace() {
    let mut settings = Settings::default();
    settings.city = "  Mecca  ".to_string();
    settings.country = "\tSaudi Arabia ".to_string();

    let record = settings.normalized();
    assert_eq!(record.city, "Mecca");
    assert_eq!(record.country, "Saudi Arabia");
    // Everything else is written back unchanged
    assert_eq!(record.method, settings.method);
    assert_eq!(record.location_mode, settings.location_mode);
}
