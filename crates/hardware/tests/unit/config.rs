//! # Configuration Tests
//!
//! Defaults, JSON deserialization and validation.

use tomasim_core::common::ConfigError;
use tomasim_core::config::*;
use tomasim_core::core::BackendType;
use tomasim_core::isa::FuncClass;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.general.backend, BackendType::OutOfOrder);
    assert!(!config.general.trace);
    assert_eq!(config.general.max_cycles, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_pool_defaults() {
    let stations = StationConfig::default();
    assert_eq!(stations.add_sub, 6);
    assert_eq!(stations.mul_div, 3);
    assert_eq!(stations.load_buffer, 3);

    let units = UnitConfig::default();
    assert_eq!(units.add_sub, 3);
    assert_eq!(units.mul_div, 2);
    assert_eq!(units.load_buffer, 2);
}

#[test]
fn test_latency_defaults() {
    let lat = LatencyConfig::default();
    assert_eq!(lat.add_sub, 3);
    assert_eq!(lat.mul, 4);
    assert_eq!(lat.div, 4);
    assert_eq!(lat.div_by_zero, 1);
    assert_eq!(lat.load, 3);
    assert_eq!(lat.jump, 1);
}

#[test]
fn test_empty_json_is_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.stations.count(FuncClass::AddSub), 6);
    assert_eq!(config.units.count(FuncClass::LoadBuffer), 2);
}

#[test]
fn test_partial_json_keeps_other_defaults() {
    let json = r#"{
        "general": { "backend": "InOrder", "max_cycles": 1000 },
        "units": { "mul_div": 1 },
        "latency": { "div": 40 }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.general.backend, BackendType::InOrder);
    assert_eq!(config.general.max_cycles, Some(1000));
    assert!(!config.general.trace);
    assert_eq!(config.units.mul_div, 1);
    assert_eq!(config.units.add_sub, 3);
    assert_eq!(config.latency.div, 40);
    assert_eq!(config.latency.mul, 4);
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        Config::from_json("{ \"general\": "),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_zero_station_count_rejected() {
    let err = Config::from_json(r#"{ "stations": { "load_buffer": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NoStations(FuncClass::LoadBuffer)));
}

#[test]
fn test_zero_unit_count_rejected() {
    let err = Config::from_json(r#"{ "units": { "add_sub": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NoUnits(FuncClass::AddSub)));
}

#[test]
fn test_zero_latency_rejected() {
    let err = Config::from_json(r#"{ "latency": { "jump": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroLatency(_)));
    assert!(err.to_string().contains("jump"));
}
