//! Structural validation of tool schemas
//!
//! Applies the function-calling schema contract to a reconstructed
//! definition and produces a [`toolgate_domain::ValidationVerdict`]. The
//! validator is a pure function: it enumerates every violation found
//! (never stopping at the first) and carries no state between calls.
//!
//! Markdown detection lives in its own module so the judgment strategy can
//! change without touching the structural rules.

pub mod markdown;
pub mod rules;

pub use markdown::contains_markdown;
pub use rules::validate_definition;
