//! Tests for the validated generation config.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GenerationConfig;
/// let cfg = GenerationConfig::default();
/// assert!(cfg.fault_delta > 0.0);
/// ```
#[test]
fn default_config_is_valid() {
    let cfg = GenerationConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.fault_delta, DEFAULT_FAULT_DELTA);
    assert_eq!(cfg.fault_scale, DEFAULT_FAULT_SCALE);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GenerationConfig::new(0.0, 1.0).unwrap_err(),
        ConfigError::InvalidFaultDelta(0.0)
    );
    assert_eq!(
        GenerationConfig::new(0.8, -0.5).unwrap_err(),
        ConfigError::InvalidFaultScale(-0.5)
    );
    assert!(GenerationConfig::new(f64::NAN, 1.0).is_err());
    assert!(GenerationConfig::new(0.8, f64::INFINITY).is_err());
}

#[test]
fn with_fault_scale_keeps_other_fields() {
    let cfg = GenerationConfig::default()
        .with_seed(42)
        .with_fault_scale(0.5)
        .unwrap();
    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.fault_scale, 0.5);
    assert_eq!(cfg.fault_delta, DEFAULT_FAULT_DELTA);
}

#[test]
fn validate_catches_hand_built_values() {
    let cfg = GenerationConfig {
        fault_delta: -1.0,
        ..GenerationConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::InvalidFaultDelta(-1.0)));
}

#[test]
fn error_messages_name_the_field() {
    assert!(ConfigError::InvalidFaultDelta(0.0)
        .to_string()
        .contains("fault_delta"));
    assert!(ConfigError::InvalidFaultScale(0.0)
        .to_string()
        .contains("fault_scale"));
}
