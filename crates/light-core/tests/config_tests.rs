// Integration tests for query-string configuration.

use light_core::*;

#[test]
fn empty_query_gives_defaults() {
    assert_eq!(LightConfig::from_query("").unwrap(), LightConfig::default());
    assert_eq!(LightConfig::from_query("?").unwrap(), LightConfig::default());
}

#[test]
fn parses_all_known_keys() {
    let cfg = LightConfig::from_query("?brightness=0.4&warmth=0.75&sensitivity=300").unwrap();
    assert_eq!(cfg.initial, LightState::new(0.4, 0.75));
    assert_eq!(cfg.sensitivity, 300.0);
}

#[test]
fn starting_values_are_clamped() {
    let cfg = LightConfig::from_query("brightness=0&warmth=7").unwrap();
    assert_eq!(cfg.initial.brightness(), BRIGHTNESS_MIN);
    assert_eq!(cfg.initial.warmth(), WARMTH_MAX);
}

#[test]
fn unknown_keys_and_empty_pairs_are_skipped() {
    let cfg = LightConfig::from_query("?theme=dark&&warmth=0.2&").unwrap();
    assert_eq!(cfg.initial.warmth(), 0.2);
    assert_eq!(cfg.sensitivity, SENSITIVITY);
}

#[test]
fn rejects_bad_numbers() {
    let err = LightConfig::from_query("warmth=warm").unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidNumber {
            key: "warmth".into(),
            value: "warm".into()
        }
    );
    assert!(matches!(
        LightConfig::from_query("brightness=NaN"),
        Err(ConfigError::InvalidNumber { .. })
    ));
    assert!(matches!(
        LightConfig::from_query("sensitivity=inf"),
        Err(ConfigError::InvalidNumber { .. })
    ));
}

#[test]
fn rejects_missing_values() {
    assert_eq!(
        LightConfig::from_query("warmth").unwrap_err(),
        ConfigError::MissingValue("warmth".into())
    );
}

#[test]
fn rejects_non_positive_sensitivity() {
    assert_eq!(
        LightConfig::from_query("sensitivity=0").unwrap_err(),
        ConfigError::InvalidSensitivity(0.0)
    );
    assert!(matches!(
        LightConfig::from_query("sensitivity=-5"),
        Err(ConfigError::InvalidSensitivity(_))
    ));
}

#[test]
fn errors_render_readable_messages() {
    let err = LightConfig::from_query("sensitivity=-5").unwrap_err();
    assert_eq!(
        err.to_string(),
        "sensitivity must be a positive finite number, got -5"
    );
}
