//! Tests for tracing setup and span-field conventions.

use std::collections::HashSet;

use consorte_core::tracing::{init_tracing, metrics};

#[test]
fn test_init_tracing_is_idempotent() {
    // A second call must be a no-op, not a re-register panic.
    init_tracing();
    init_tracing();
}

#[test]
fn test_metric_field_names_are_snake_case_and_unique() {
    let fields = [
        metrics::COMPOSE_CANDIDATES,
        metrics::COMPOSE_EXCESS,
        metrics::CACHE_HITS,
        metrics::CACHE_MISSES,
        metrics::CACHE_HIT_RATE,
    ];

    let unique: HashSet<&str> = fields.iter().copied().collect();
    assert_eq!(unique.len(), fields.len());

    for field in fields {
        assert!(!field.is_empty());
        assert!(
            field
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '_'),
            "field {field} must be snake_case"
        );
    }
}
