//! Config validation: unknown-key detection with "did you mean?" hints.
//!
//! The raw TOML is walked as a `toml::Value` tree before serde sees it.
//! Every dotted key path that `HealthConfig` does not define yields a
//! warning, with the nearest known key (by edit distance) as a suggestion.
//! Warnings never reject a config; serde's `#[serde(default)]` fills the gaps.

use std::collections::HashSet;

/// Maximum edit distance for a known key to count as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A non-fatal config warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)?;
        if let Some(s) = &self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Every valid dotted key path of `HealthConfig`.
///
/// Must be kept in step with the section structs in `health_config.rs`.
pub fn known_config_keys() -> HashSet<&'static str> {
    [
        // [model]
        "model",
        "model.base_model",
        "model.training_type",
        "model.label",
        // [training]
        "training",
        "training.learning_rate",
        "training.num_epochs",
        // [risk]
        "risk",
        "risk.low_utilization",
        "risk.medium_utilization",
        "risk.delayed_days",
        "risk.critical_days",
        "risk.min_allocation_rate",
        // [portfolio]
        "portfolio",
        "portfolio.delayed_share_pct",
        "portfolio.at_risk_share_pct",
        "portfolio.on_track_share_pct",
        // [display]
        "display",
        "display.currency_symbol",
    ]
    .into_iter()
    .collect()
}

// ============================================================================
// Key Walking
// ============================================================================

/// Collect the dotted path of every key in a TOML tree, tables included.
///
/// `{ risk = { delayed_days = 90 } }` yields `["risk", "risk.delayed_days"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let Some(table) = value.as_table() else {
        return Vec::new();
    };

    table
        .iter()
        .flat_map(|(key, child)| {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            let nested = walk_toml_keys(child, &path);
            std::iter::once(path).chain(nested)
        })
        .collect()
}

// ============================================================================
// Suggestions
// ============================================================================

/// Levenshtein edit distance, counted in chars.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }

    row[b.len()]
}

/// Nearest known key within [`MAX_SUGGESTION_DISTANCE`] edits, if any.
///
/// Ties resolve to the lexicographically smallest key so the result does
/// not depend on `HashSet` iteration order.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (edit_distance(unknown, k), k))
        .filter(|&(dist, _)| dist <= MAX_SUGGESTION_DISTANCE)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Entry Point
// ============================================================================

/// Warnings for every unknown key in a raw TOML document.
///
/// Unparseable documents produce no warnings; serde reports those.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("epochs", "epochs"), 0);
        assert_eq!(edit_distance("num_epocs", "num_epochs"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_edit_distance_counts_chars_not_bytes() {
        assert_eq!(edit_distance("₹", "$"), 1);
    }

    #[test]
    fn test_walk_toml_keys_nested() {
        let toml: toml::Value = r#"
            [risk]
            delayed_days = 90
            [display]
            currency_symbol = "$"
        "#
        .parse()
        .unwrap();
        let keys = walk_toml_keys(&toml, "");
        for expected in ["risk", "risk.delayed_days", "display", "display.currency_symbol"] {
            assert!(keys.contains(&expected.to_string()), "missing {expected}: {keys:?}");
        }
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn test_typo_key_produces_warning_with_suggestion() {
        let warnings = validate_unknown_keys(
            r#"
[training]
num_epocs = 4
"#,
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "training.num_epocs");
        assert_eq!(warnings[0].suggestion.as_deref(), Some("training.num_epochs"));
        assert!(warnings[0].to_string().contains("did you mean"));
    }

    #[test]
    fn test_valid_keys_produce_zero_warnings() {
        let warnings = validate_unknown_keys(
            r#"
[model]
base_model = "local/stub"

[risk]
low_utilization = 0.25
critical_days = 150

[display]
currency_symbol = "$"
"#,
        );
        assert!(warnings.is_empty(), "Expected 0 warnings, got: {warnings:?}");
    }

    #[test]
    fn test_unknown_section_warns_without_suggestion() {
        let warnings = validate_unknown_keys(
            r#"
[completely_unrelated_section]
value = 1
"#,
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.suggestion.is_none()));
    }

    #[test]
    fn test_unparseable_document_is_left_to_serde() {
        assert!(validate_unknown_keys("[risk\n").is_empty());
    }

    #[test]
    fn test_known_keys_cover_every_section() {
        let known = known_config_keys();
        for section in ["model", "training", "risk", "portfolio", "display"] {
            assert!(known.contains(section), "missing section {section}");
        }
    }
}
