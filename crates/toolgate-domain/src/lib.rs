//! Domain layer for toolgate
//!
//! Pure value objects and error types shared by every other crate in the
//! workspace. This crate has no I/O and no knowledge of tree-sitter, HTTP,
//! or any other infrastructure concern.

pub mod constants;
pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::literal::LiteralValue;
pub use value_objects::outcome::{FileOutcome, ReviewComment};
pub use value_objects::tool::{ToolMarkers, ToolRecord};
pub use value_objects::verdict::ValidationVerdict;
