//! Reconstructed literal values
//!
//! A [`LiteralValue`] is an in-memory value rebuilt from a literal syntax
//! subtree without executing code. The variant set is closed so the
//! reconstructor stays a total function over node kinds: anything it does
//! not understand becomes [`LiteralValue::Null`] instead of failing the
//! whole walk.

use serde_json::{Map as JsonMap, Value as JsonValue};

/// A literal value reconstructed from source syntax
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// Mapping literal; insertion order is preserved
    Map(Vec<(LiteralValue, LiteralValue)>),
    /// List literal
    List(Vec<LiteralValue>),
    /// Tuple literal (fixed-size, immutable in the source language)
    Tuple(Vec<LiteralValue>),
    /// Set literal; duplicates collapsed, order not guaranteed
    Set(Vec<LiteralValue>),
    /// String literal
    Str(String),
    /// Integer literal
    Int(i64),
    /// Floating point literal
    Float(f64),
    /// Boolean literal
    Bool(bool),
    /// The source language's `None`
    None,
    /// Symbolic placeholder for a bare name or attribute chain
    /// (e.g. `"self.name"`); variables are never resolved
    Symbol(String),
    /// Degradation value for unsupported node kinds
    Null,
}

impl LiteralValue {
    /// View this value as a mapping, if it is one
    pub fn as_map(&self) -> Option<&[(LiteralValue, LiteralValue)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// View this value as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// View this value as an ordered sequence (list or tuple), if it is one
    pub fn as_sequence(&self) -> Option<&[LiteralValue]> {
        match self {
            Self::List(items) | Self::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a string key in a mapping value
    ///
    /// Returns `None` when this value is not a mapping or the key is absent.
    pub fn get(&self, key: &str) -> Option<&LiteralValue> {
        self.as_map()?.iter().find_map(|(k, v)| match k {
            Self::Str(s) if s == key => Some(v),
            _ => None,
        })
    }

    /// Render the wire form sent to a schema oracle
    ///
    /// Symbols render as strings (the placeholder text is the value),
    /// tuples and sets render as arrays, and both `None` and `Null`
    /// render as JSON null.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Map(entries) => {
                let mut map = JsonMap::new();
                for (key, value) in entries {
                    map.insert(key.json_key(), value.to_json());
                }
                JsonValue::Object(map)
            }
            Self::List(items) | Self::Tuple(items) | Self::Set(items) => {
                JsonValue::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Str(s) | Self::Symbol(s) => JsonValue::String(s.clone()),
            Self::Int(n) => JsonValue::from(*n),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map_or(JsonValue::Null, JsonValue::Number),
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::None | Self::Null => JsonValue::Null,
        }
    }

    /// Render a value as a JSON object key
    ///
    /// JSON keys must be strings; non-string keys use their display form.
    fn json_key(&self) -> String {
        match self {
            Self::Str(s) | Self::Symbol(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::None | Self::Null => "null".to_string(),
            other => other.to_json().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_finds_string_keys_in_order() {
        let value = LiteralValue::Map(vec![
            (
                LiteralValue::Str("type".into()),
                LiteralValue::Str("function".into()),
            ),
            (LiteralValue::Str("strict".into()), LiteralValue::Bool(true)),
        ]);

        assert_eq!(
            value.get("type"),
            Some(&LiteralValue::Str("function".into()))
        );
        assert_eq!(value.get("strict"), Some(&LiteralValue::Bool(true)));
        assert_eq!(value.get("missing"), None);
    }

    #[test]
    fn test_to_json_renders_symbols_as_strings() {
        let value = LiteralValue::Map(vec![(
            LiteralValue::Str("name".into()),
            LiteralValue::Symbol("self.name".into()),
        )]);

        assert_eq!(
            value.to_json(),
            serde_json::json!({ "name": "self.name" })
        );
    }

    #[test]
    fn test_to_json_renders_tuple_and_set_as_arrays() {
        let tuple = LiteralValue::Tuple(vec![LiteralValue::Int(1), LiteralValue::Int(2)]);
        let set = LiteralValue::Set(vec![LiteralValue::Str("a".into())]);

        assert_eq!(tuple.to_json(), serde_json::json!([1, 2]));
        assert_eq!(set.to_json(), serde_json::json!(["a"]));
    }

    #[test]
    fn test_to_json_renders_none_and_null_as_json_null() {
        assert_eq!(LiteralValue::None.to_json(), JsonValue::Null);
        assert_eq!(LiteralValue::Null.to_json(), JsonValue::Null);
    }

    #[test]
    fn test_non_string_map_keys_are_stringified() {
        let value = LiteralValue::Map(vec![(LiteralValue::Int(3), LiteralValue::Bool(false))]);
        assert_eq!(value.to_json(), serde_json::json!({ "3": false }));
    }
}
