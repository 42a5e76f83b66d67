//! Tests for engine configuration.

use consorte_core::config::EngineConfig;
use consorte_core::constants;
use consorte_core::errors::error_code::ConsorteErrorCode;

#[test]
fn test_defaults_match_constants() {
    let config = EngineConfig::default();
    assert_eq!(
        config.effective_max_candidate_tiers(),
        constants::MAX_CANDIDATE_TIERS
    );
    assert_eq!(
        config.effective_max_units_per_entry(),
        constants::MAX_UNITS_PER_ENTRY
    );
    assert_eq!(
        config.effective_cache_capacity(),
        constants::DEFAULT_CACHE_CAPACITY
    );
}

#[test]
fn test_partial_toml_overrides() {
    let config = EngineConfig::from_toml_str("max_candidate_tiers = 5").unwrap();
    assert_eq!(config.effective_max_candidate_tiers(), 5);
    // Untouched knobs keep their constant-backed defaults.
    assert_eq!(
        config.effective_max_units_per_entry(),
        constants::MAX_UNITS_PER_ENTRY
    );
}

#[test]
fn test_full_toml() {
    let config = EngineConfig::from_toml_str(
        "max_candidate_tiers = 3\nmax_units_per_entry = 4\ncache_capacity = 16",
    )
    .unwrap();
    assert_eq!(config.effective_max_candidate_tiers(), 3);
    assert_eq!(config.effective_max_units_per_entry(), 4);
    assert_eq!(config.effective_cache_capacity(), 16);
}

#[test]
fn test_zero_limits_clamp_to_one() {
    let config =
        EngineConfig::from_toml_str("max_candidate_tiers = 0\nmax_units_per_entry = 0").unwrap();
    assert_eq!(config.effective_max_candidate_tiers(), 1);
    assert_eq!(config.effective_max_units_per_entry(), 1);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = EngineConfig::from_toml_str("max_candidate_tiers = \"ten\"").unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
