//! Label-set composition for per-level push clients
//!
//! Loki attaches a label set to every batch. Each push client in the pool is
//! frozen with one rendered label string, built here once at construction
//! time by overlaying the severity onto the configured labels.

use std::collections::HashMap;

/// Overlay `{level_label: level_name}` onto the configured labels and render
/// the result as Loki's brace-delimited label string, e.g.
/// `{severity="INFO", source="test"}`.
///
/// The configured map is never mutated; the severity entry wins if the key
/// collides. Key order follows map iteration order and is unspecified.
pub fn compose_labels(
    labels: &HashMap<String, String>,
    level_label: &str,
    level_name: &str,
) -> String {
    let mut composed = labels.clone();
    composed.insert(level_label.to_string(), level_name.to_string());

    let rendered = composed
        .iter()
        .map(|(k, v)| format!(r#"{}="{}""#, k, v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", rendered)
}
