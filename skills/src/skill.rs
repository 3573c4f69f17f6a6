//! Skill entries and the group file format.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::SkillError;

/// Group used when none is given.
pub const DEFAULT_GROUP: &str = "skills";

/// Category given to skills added without one.
pub const DEFAULT_CATEGORY: &str = "default";

/// Highest level a skill can have.
pub const MAX_LEVEL: f64 = 10.0;

/// One skill's level and category as stored in a group file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SkillEntry {
    /// Self-rated level between 0 and 10.
    pub level: f64,
    /// Category label used for grouping in listings and plots.
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl SkillEntry {
    /// Create an entry, falling back to the default category when `category` is blank.
    #[must_use]
    pub fn new(level: f64, category: impl Into<String>) -> Self {
        let category = category.into();
        let category = if category.trim().is_empty() {
            default_category()
        } else {
            category
        };
        Self { level, category }
    }

    /// Create an entry in the default category.
    #[must_use]
    pub fn uncategorized(level: f64) -> Self {
        Self::new(level, DEFAULT_CATEGORY)
    }

    /// Whether the entry sits in the default category.
    #[must_use]
    pub fn is_default_category(&self) -> bool {
        self.category == DEFAULT_CATEGORY
    }
}

/// Skills of one group keyed by name, in file order.
pub type SkillGroup = IndexMap<String, SkillEntry>;

/// Skill names mapped to their bare levels, as handed to the chart renderer.
pub type Levels = IndexMap<String, f64>;

/// Entry shapes accepted when reading a group file.
///
/// Older files stored only the level per skill.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum StoredEntry {
    Full(SkillEntry),
    Level(f64),
}

impl From<StoredEntry> for SkillEntry {
    fn from(stored: StoredEntry) -> Self {
        match stored {
            StoredEntry::Full(entry) => entry,
            StoredEntry::Level(level) => Self::uncategorized(level),
        }
    }
}

/// Check that `level` lies within `[0, 10]`.
///
/// # Errors
///
/// Returns a message describing the violation.
pub fn check_level(level: f64) -> Result<f64, String> {
    if level.is_finite() && (0.0..=MAX_LEVEL).contains(&level) {
        Ok(level)
    } else {
        Err(format!("level {level} is not between 0 and {MAX_LEVEL}"))
    }
}

/// Parse a level from user input and check its range.
///
/// # Errors
///
/// Returns a message if the input is not a number or out of range.
pub fn parse_level(input: &str) -> Result<f64, String> {
    let level: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", input.trim()))?;
    check_level(level)
}

/// Validate untrusted JSON against the group file schema.
///
/// Every value must be an object with a numeric `level` in `[0, 10]` and a
/// non-empty string `category`. Extra keys inside an entry are ignored.
///
/// # Errors
///
/// Returns [`SkillError::Validation`] naming the first offending entry.
pub fn validate_group(value: &Value, source_name: &str) -> Result<SkillGroup, SkillError> {
    let Value::Object(map) = value else {
        return Err(SkillError::validation(
            source_name,
            "top level must be an object of skills",
        ));
    };

    let mut group = SkillGroup::with_capacity(map.len());
    for (name, raw) in map {
        let Value::Object(fields) = raw else {
            return Err(SkillError::validation(
                source_name,
                format!("skill '{name}' must be an object with level and category"),
            ));
        };

        let level = fields
            .get("level")
            .and_then(Value::as_f64)
            .ok_or_else(|| {
                SkillError::validation(source_name, format!("skill '{name}' has no numeric level"))
            })?;
        check_level(level)
            .map_err(|reason| SkillError::validation(source_name, format!("skill '{name}': {reason}")))?;

        let category = fields
            .get("category")
            .and_then(Value::as_str)
            .filter(|category| !category.is_empty())
            .ok_or_else(|| {
                SkillError::validation(source_name, format!("skill '{name}' has no category"))
            })?;

        group.insert(
            name.clone(),
            SkillEntry {
                level,
                category: category.to_string(),
            },
        );
    }

    Ok(group)
}

/// JSON Schema describing a group file.
#[must_use]
pub fn group_schema() -> schemars::Schema {
    schemars::schema_for!(std::collections::BTreeMap<String, SkillEntry>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_category_falls_back_to_default() {
        let entry = SkillEntry::new(4.0, "  ");
        assert_eq!(entry.category, DEFAULT_CATEGORY);
        assert!(entry.is_default_category());
    }

    #[test]
    fn test_stored_entry_accepts_legacy_levels() {
        let group: IndexMap<String, StoredEntry> =
            serde_json::from_str(r#"{"Rust": 7.5, "Go": {"level": 3, "category": "lang"}}"#)
                .unwrap();
        let group: SkillGroup = group.into_iter().map(|(k, v)| (k, v.into())).collect();

        assert_eq!(group["Rust"], SkillEntry::uncategorized(7.5));
        assert_eq!(group["Go"], SkillEntry::new(3.0, "lang"));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(" 8.5 "), Ok(8.5));
        assert_eq!(parse_level("0"), Ok(0.0));
        assert!(parse_level("10.5").is_err());
        assert!(parse_level("-1").is_err());
        assert!(parse_level("NaN").is_err());
        assert!(parse_level("high").is_err());
    }

    #[test]
    fn test_validate_group_accepts_schema() {
        let value = json!({
            "Python": {"level": 8.5, "category": "languages", "note": "ignored"},
            "SQL": {"level": 5, "category": "default"}
        });

        let group = validate_group(&value, "in.json").unwrap();
        assert_eq!(group.len(), 2);
        assert_eq!(group["Python"], SkillEntry::new(8.5, "languages"));
        assert_eq!(group["SQL"].level, 5.0);
    }

    #[test]
    fn test_validate_group_rejects_missing_level() {
        let value = json!({"Python": {"category": "languages"}});
        let result = validate_group(&value, "in.json");
        assert!(matches!(result, Err(SkillError::Validation { .. })));
    }

    #[test]
    fn test_validate_group_rejects_wrong_shapes() {
        for value in [
            json!([1, 2, 3]),
            json!({"Python": 8}),
            json!({"Python": {"level": "high", "category": "x"}}),
            json!({"Python": {"level": 11, "category": "x"}}),
            json!({"Python": {"level": 3, "category": 4}}),
            json!({"Python": {"level": 3, "category": ""}}),
        ] {
            assert!(
                validate_group(&value, "in.json").is_err(),
                "accepted {value}"
            );
        }
    }

    #[test]
    fn test_group_schema_describes_entries() {
        let schema = serde_json::to_value(group_schema()).unwrap();
        let text = schema.to_string();
        assert!(text.contains("level"));
        assert!(text.contains("category"));
    }
}
