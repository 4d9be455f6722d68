//! # Configuration Tests
//!
//! Tests for the cache geometry: defaults, derived sizes, JSON
//! deserialization and validation.

use csim_core::config::CacheConfig;
use csim_core::ConfigError;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_config_default() {
    let config = CacheConfig::default();
    assert_eq!(config, CacheConfig::new(4, 1, 4));
    assert!(config.validate().is_ok());
}

#[test]
fn test_derived_sizes() {
    let config = CacheConfig::new(5, 4, 6);
    assert_eq!(config.num_sets(), 32);
    assert_eq!(config.block_bytes(), 64);
    assert_eq!(config.total_lines(), 128);
    assert_eq!(config.capacity_bytes(), 8192);
}

#[test]
fn test_single_set_single_byte_blocks() {
    let config = CacheConfig::new(0, 1, 0);
    assert!(config.validate().is_ok());
    assert_eq!(config.num_sets(), 1);
    assert_eq!(config.block_bytes(), 1);
    assert_eq!(config.capacity_bytes(), 1);
}

#[test]
fn test_json_short_names() {
    let config = CacheConfig::from_json(r#"{ "s": 2, "E": 8, "b": 3 }"#).unwrap();
    assert_eq!(config, CacheConfig::new(2, 8, 3));
}

#[test]
fn test_json_long_names() {
    let json = r#"{ "set_bits": 6, "lines_per_set": 2, "block_bits": 5 }"#;
    let config = CacheConfig::from_json(json).unwrap();
    assert_eq!(config, CacheConfig::new(6, 2, 5));
}

#[test]
fn test_json_missing_fields_use_defaults() {
    let config = CacheConfig::from_json(r#"{ "E": 4 }"#).unwrap();
    assert_eq!(config, CacheConfig::new(4, 4, 4));
}

#[test]
fn test_json_round_trip_through_serialize() {
    let config = CacheConfig::new(3, 2, 7);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"set_bits":3,"lines_per_set":2,"block_bits":7}"#);
}

#[test]
fn test_json_syntax_error() {
    let err = CacheConfig::from_json("{ s: 1 ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_json_invalid_geometry_is_rejected() {
    let err = CacheConfig::from_json(r#"{ "E": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroAssociativity));
}

#[rstest]
#[case(CacheConfig::new(4, 0, 4))]
fn test_validate_zero_associativity(#[case] config: CacheConfig) {
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ZeroAssociativity)
    ));
}

#[rstest]
#[case(33, 0)]
#[case(64, 0)]
fn test_validate_too_many_sets(#[case] set_bits: u32, #[case] block_bits: u32) {
    let config = CacheConfig::new(set_bits, 1, block_bits);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::TooManySets { set_bits: s }) if s == set_bits
    ));
}

#[rstest]
#[case(32, 33)]
#[case(0, 65)]
#[case(1, u32::MAX)]
fn test_validate_address_too_wide(#[case] set_bits: u32, #[case] block_bits: u32) {
    let config = CacheConfig::new(set_bits, 1, block_bits);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::AddressTooWide { .. })
    ));
}

#[test]
fn test_validate_accepts_full_address_width() {
    assert!(CacheConfig::new(32, 1, 32).validate().is_ok());
    assert!(CacheConfig::new(0, 1, 64).validate().is_ok());
}

#[rstest]
#[case(CacheConfig::new(0, 1, 1), 's')]
#[case(CacheConfig::new(1, 0, 1), 'E')]
#[case(CacheConfig::new(1, 1, 0), 'b')]
fn test_require_positive_names_the_option(#[case] config: CacheConfig, #[case] name: char) {
    assert!(matches!(
        config.require_positive(),
        Err(ConfigError::NonPositive { name: n }) if n == name
    ));
}

#[test]
fn test_require_positive_accepts_positive_geometry() {
    assert!(CacheConfig::new(1, 1, 1).require_positive().is_ok());
}

#[test]
fn test_display() {
    assert_eq!(
        CacheConfig::new(4, 2, 4).to_string(),
        "s=4 E=2 b=4 (16 sets x 2 lines x 16 B)"
    );
}
