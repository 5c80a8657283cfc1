//! Markdown detection for description strings
//!
//! A schema description is plain prose; formatting markup leaks rendering
//! artifacts into model prompts. Detection is intentionally conservative:
//! single-character emphasis is not flagged because asterisks and
//! underscores appear legitimately in prose and identifiers.

use once_cell::sync::Lazy;
use regex::RegexSet;

static MARKDOWN_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"`",                    // inline or fenced code
        r"\*\*[^*]+\*\*",        // bold
        r"__[^_]+__",            // bold, underscore form
        r"(?m)^\s{0,3}#{1,6}\s", // ATX heading
        r"\[[^\]]+\]\([^)]*\)",  // link
        r"(?m)^\s*[-*]\s+",      // list bullet
    ])
    .expect("markdown patterns compile")
});

/// Check whether a description string contains markdown formatting
pub fn contains_markdown(text: &str) -> bool {
    MARKDOWN_PATTERNS.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prose_passes() {
        assert!(!contains_markdown(
            "Retrieves current weather for the given location."
        ));
        assert!(!contains_markdown("City and country e.g. Bogota, Colombia"));
    }

    #[test]
    fn test_identifiers_and_arithmetic_pass() {
        assert!(!contains_markdown("Use snake_case names like max_results."));
        assert!(!contains_markdown("Value is a * b when scaled."));
    }

    #[test]
    fn test_formatting_is_flagged() {
        assert!(contains_markdown("Returns the `weather` payload"));
        assert!(contains_markdown("This is **required** for all calls"));
        assert!(contains_markdown("# Weather\nfetches data"));
        assert!(contains_markdown("See [docs](https://example.com)"));
        assert!(contains_markdown("Options:\n- celsius\n- fahrenheit"));
    }
}
