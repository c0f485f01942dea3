//! Property-based tests for loki_core using proptest

use loki_core::prelude::*;
use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Critical),
        Just(LogLevel::Fatal),
    ]
}

fn any_label_map() -> impl Strategy<Value = HashMap<String, String>> {
    proptest::collection::hash_map("[a-z_]{1,8}", "[a-zA-Z0-9_]{0,8}", 0..5)
}

fn any_field_set() -> impl Strategy<Value = FieldSet> {
    proptest::collection::btree_map("[a-z_]{1,8}", "[a-zA-Z0-9]{0,8}", 0..6)
        .prop_map(|m| m.into_iter().collect())
}

// ============================================================================
// LogLevel
// ============================================================================

proptest! {
    /// String conversions roundtrip for every level
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Ordering matches the numeric discriminants
    #[test]
    fn test_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;
        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }

    /// The enabled-check is exactly a threshold comparison
    #[test]
    fn test_enabled_is_threshold(min in any_level(), level in any_level()) {
        let config = LokiConfig { send_level: min, ..LokiConfig::default() };
        let factory = |_c: ClientConfig| -> Result<std::sync::Arc<dyn PushClient>> {
            Ok(std::sync::Arc::new(NullClient))
        };
        let core = LokiCore::new(config, &factory).unwrap();
        prop_assert_eq!(core.enabled(level), level >= min);
    }
}

struct NullClient;

impl PushClient for NullClient {
    fn debug(&self, _line: &str) -> Result<()> {
        Ok(())
    }
    fn info(&self, _line: &str) -> Result<()> {
        Ok(())
    }
    fn warn(&self, _line: &str) -> Result<()> {
        Ok(())
    }
    fn error(&self, _line: &str) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Configuration normalization
// ============================================================================

proptest! {
    /// Already-set fields survive normalization unchanged; empty fields get
    /// the documented defaults
    #[test]
    fn test_normalization_preserves_set_fields(
        url in proptest::option::of("[a-z]{3,10}"),
        label in proptest::option::of("[a-z]{1,10}"),
        labels in any_label_map(),
        wait_secs in 0u64..100,
        entries in 0usize..100_000,
    ) {
        let config = LokiConfig {
            url: url.clone().map(|u| format!("http://{}:3100", u)).unwrap_or_default(),
            level_label: label.clone().unwrap_or_default(),
            labels: labels.clone(),
            batch_wait: Duration::from_secs(wait_secs),
            batch_entries: entries,
            ..LokiConfig::default()
        };
        let normalized = config.clone().normalized();

        match url {
            Some(_) => prop_assert_eq!(&normalized.url, &config.url),
            None => prop_assert_eq!(normalized.url.as_str(), "http://localhost:3100/api/prom/push"),
        }
        match label {
            Some(_) => prop_assert_eq!(&normalized.level_label, &config.level_label),
            None => prop_assert_eq!(normalized.level_label.as_str(), "severity"),
        }
        if labels.is_empty() {
            prop_assert_eq!(normalized.labels.len(), 2);
        } else {
            prop_assert_eq!(&normalized.labels, &labels);
        }
        if wait_secs == 0 {
            prop_assert_eq!(normalized.batch_wait, Duration::from_secs(5));
        } else {
            prop_assert_eq!(normalized.batch_wait, Duration::from_secs(wait_secs));
        }
        if entries == 0 {
            prop_assert_eq!(normalized.batch_entries, 10_000);
        } else {
            prop_assert_eq!(normalized.batch_entries, entries);
        }
    }

    /// Normalizing twice is the same as normalizing once
    #[test]
    fn test_normalization_idempotent(labels in any_label_map(), entries in 0usize..100) {
        let config = LokiConfig {
            labels,
            batch_entries: entries,
            ..LokiConfig::default()
        };
        let once = config.normalized();
        let twice = once.clone().normalized();
        prop_assert_eq!(once.url, twice.url);
        prop_assert_eq!(once.level_label, twice.level_label);
        prop_assert_eq!(once.labels, twice.labels);
        prop_assert_eq!(once.batch_wait, twice.batch_wait);
        prop_assert_eq!(once.batch_entries, twice.batch_entries);
    }
}

// ============================================================================
// Label composition
// ============================================================================

fn parse_labels(rendered: &str) -> HashMap<String, String> {
    let inner = rendered
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .expect("label string must be brace-delimited");
    inner
        .split(", ")
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').expect("pair must contain '='");
            (k.to_string(), v.trim_matches('"').to_string())
        })
        .collect()
}

proptest! {
    /// The rendered label string always contains the severity pair and every
    /// configured key, independent of map iteration order
    #[test]
    fn test_label_composition_complete(labels in any_label_map(), level in any_level()) {
        let rendered = loki_core::core::compose_labels(&labels, "severity", level.to_str());
        let parsed = parse_labels(&rendered);

        prop_assert_eq!(parsed.get("severity"), Some(&level.to_str().to_string()));
        for (k, v) in &labels {
            if k != "severity" {
                prop_assert_eq!(parsed.get(k), Some(v));
            }
        }
    }
}

// ============================================================================
// Field context overlay
// ============================================================================

proptest! {
    /// Chained extension equals a single extension with the pre-merged sets
    #[test]
    fn test_overlay_associative(
        a in any_field_set(),
        b in any_field_set(),
        c in any_field_set(),
    ) {
        let chained = a.overlay(&b).overlay(&c);
        let combined = a.overlay(&b.overlay(&c));
        prop_assert_eq!(chained, combined);
    }

    /// Extension never mutates the parent set
    #[test]
    fn test_overlay_copy_safe(parent in any_field_set(), extra in any_field_set()) {
        let snapshot = parent.clone();
        let child = parent.overlay(&extra);
        let _mutated = child.with_field("mutation", "yes");
        prop_assert_eq!(parent, snapshot);
    }
}
