//! Store record shapes.
//!
//! Records arrive as untyped JSON. They are resolved into typed values once,
//! here, so the rest of the session code never branches on JSON shape.

use serde_json::Value;

/// Profile record stored under `users/<key>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileRecord {
    /// `{ "name": "..." }`, possibly with other fields.
    Structured { name: String },
    /// Legacy shape: the display name stored as a bare string.
    LegacyName(String),
}

impl ProfileRecord {
    /// Resolves a raw value. Returns `None` for any other shape.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(Self::LegacyName(name.clone())),
            Value::Object(map) => match map.get("name") {
                Some(Value::String(name)) => Some(Self::Structured { name: name.clone() }),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Structured { name } | Self::LegacyName(name) => name,
        }
    }
}

/// Resolves a raw score value.
///
/// Accepts integers that fit in `i64` and floats with no fractional part in
/// the same range. Out-of-range numbers are malformed, never clamped.
pub fn score_from_value(value: &Value) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    const LOWER: f64 = i64::MIN as f64;
    const UPPER: f64 = i64::MAX as f64;

    let Value::Number(number) = value else {
        return None;
    };
    if let Some(score) = number.as_i64() {
        return Some(score);
    }
    if !number.is_f64() {
        // u64 above i64::MAX
        return None;
    }
    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && (LOWER..UPPER).contains(f))
        .map(|f| f as i64)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_profile_bare_string() {
        let record = ProfileRecord::from_value(&json!("Alice")).unwrap();
        assert_eq!(record, ProfileRecord::LegacyName("Alice".to_string()));
        assert_eq!(record.display_name(), "Alice");
    }

    #[test]
    fn test_profile_structured() {
        let record = ProfileRecord::from_value(&json!({"name": "Bob", "roll": 12})).unwrap();
        assert_eq!(record.display_name(), "Bob");
    }

    #[test]
    fn test_profile_structured_empty_name() {
        let record = ProfileRecord::from_value(&json!({"name": ""})).unwrap();
        assert_eq!(
            record,
            ProfileRecord::Structured {
                name: String::new()
            }
        );
        assert_eq!(record.display_name(), "");
    }

    #[test]
    fn test_profile_malformed_shapes() {
        assert_eq!(ProfileRecord::from_value(&json!(42)), None);
        assert_eq!(ProfileRecord::from_value(&json!(["Bob"])), None);
        assert_eq!(ProfileRecord::from_value(&json!({"nick": "Bob"})), None);
        assert_eq!(ProfileRecord::from_value(&json!({"name": 7})), None);
        assert_eq!(ProfileRecord::from_value(&Value::Null), None);
    }

    #[test]
    fn test_score_values() {
        assert_eq!(score_from_value(&json!(42)), Some(42));
        assert_eq!(score_from_value(&json!(-5)), Some(-5));
        assert_eq!(score_from_value(&json!(90.0)), Some(90));
        assert_eq!(score_from_value(&json!(12.5)), None);
        assert_eq!(score_from_value(&json!("42")), None);
        assert_eq!(score_from_value(&json!({"score": 1})), None);
    }

    #[test]
    fn test_score_out_of_range_is_malformed() {
        assert_eq!(score_from_value(&json!(i64::MAX)), Some(i64::MAX));
        assert_eq!(score_from_value(&json!(u64::MAX)), None);
        assert_eq!(score_from_value(&json!(1e20)), None);
        assert_eq!(score_from_value(&json!(-1e19)), None);
    }
}
