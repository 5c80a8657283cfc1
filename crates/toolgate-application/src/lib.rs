//! Application layer for toolgate
//!
//! Owns the ports (interfaces the core depends on) and the review pipeline
//! use case that wires extraction, validation, and report assembly
//! together. Providers for the ports live in `toolgate-providers`;
//! this crate never touches the network or the filesystem itself.

pub mod pipeline;
pub mod ports;
pub mod report;

pub use pipeline::ReviewPipeline;
pub use ports::{CommentSink, SchemaOracle, SourceAccessor};
pub use report::ToolFinding;
