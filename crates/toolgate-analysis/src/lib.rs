//! Static analysis of Python tool definitions
//!
//! Extracts machine-callable tool schemas from source text without ever
//! executing it. The pipeline is a pure syntax-tree walk over an immutable
//! parsed representation:
//!
//! 1. [`SourceUnit::parse`] turns source text into a tree-sitter tree;
//!    a parse failure is fatal for the whole file.
//! 2. [`DefinitionExtractor`] scans top-level class declarations, applies
//!    the tool-class qualification predicate (base marker + registration
//!    decorator), and harvests each qualifying class's `definition`
//!    accessor.
//! 3. [`reconstruct`] rebuilds the returned literal as a
//!    [`toolgate_domain::LiteralValue`], degrading unsupported node kinds
//!    to null rather than failing the walk.

pub mod extractor;
pub mod literal;
pub mod source_unit;

pub use extractor::DefinitionExtractor;
pub use literal::reconstruct;
pub use source_unit::SourceUnit;
