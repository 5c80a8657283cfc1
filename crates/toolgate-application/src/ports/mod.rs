//! Ports for external collaborators
//!
//! | Port | Description |
//! |------|-------------|
//! | [`SchemaOracle`] | Judges a definition against the structural rule set |
//! | [`SourceAccessor`] | Supplies file content for a given path |
//! | [`CommentSink`] | Accepts finished review comments |

/// Schema oracle port
pub mod oracle;
/// Comment sink port
pub mod sink;
/// Source accessor port
pub mod source;

pub use oracle::SchemaOracle;
pub use sink::CommentSink;
pub use source::SourceAccessor;
