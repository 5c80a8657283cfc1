//! Port implementations for toolgate
//!
//! Everything that touches the outside world lives here: the schema
//! oracles (deterministic rules and a hosted chat model), the filesystem
//! source accessor, and the comment sinks. The application layer sees only
//! the ports these types implement.

pub mod oracle;
pub mod sink;
pub mod source;

pub use oracle::{OpenAiOracle, RulesOracle};
pub use sink::{ConsoleSink, JsonSink};
pub use source::FilesystemSource;
