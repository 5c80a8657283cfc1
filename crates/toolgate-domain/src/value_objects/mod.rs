//! Domain value objects
//!
//! Immutable data carried between the analysis, validation, and reporting
//! layers. Everything here is constructed once and never mutated.

pub mod literal;
pub mod outcome;
pub mod tool;
pub mod verdict;

pub use literal::LiteralValue;
pub use outcome::{FileOutcome, ReviewComment};
pub use tool::{ToolMarkers, ToolRecord};
pub use verdict::ValidationVerdict;
