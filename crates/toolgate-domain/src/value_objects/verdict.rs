//! Validation verdicts

use serde::{Deserialize, Serialize};

/// Structured result of checking one definition against the rule set
///
/// A verdict is a pure function of (definition, rule set); no state carries
/// between validations, and a verdict is never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// True iff both `errors` and `missing_fields` are empty
    pub valid: bool,
    /// Every violation found, in rule order; never stops at the first
    #[serde(default)]
    pub errors: Vec<String>,
    /// Every absent required key, as a dotted path from the definition root
    #[serde(default)]
    pub missing_fields: Vec<String>,
}

impl ValidationVerdict {
    /// Build a verdict from collected violations
    ///
    /// `valid` is derived, not supplied: a definition is valid iff nothing
    /// was found wrong with it.
    pub fn from_violations(errors: Vec<String>, missing_fields: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty() && missing_fields.is_empty(),
            errors,
            missing_fields,
        }
    }

    /// A verdict with no violations
    pub fn valid() -> Self {
        Self::from_violations(Vec::new(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_is_derived_from_emptiness() {
        assert!(ValidationVerdict::from_violations(vec![], vec![]).valid);
        assert!(!ValidationVerdict::from_violations(vec!["bad".into()], vec![]).valid);
        assert!(!ValidationVerdict::from_violations(vec![], vec!["type".into()]).valid);
    }

    #[test]
    fn test_deserializes_with_missing_lists() {
        // Oracle replies may omit empty lists; they default to empty.
        let verdict: ValidationVerdict = serde_json::from_str(r#"{"valid": true}"#).unwrap();
        assert!(verdict.valid);
        assert!(verdict.errors.is_empty());
        assert!(verdict.missing_fields.is_empty());
    }
}
