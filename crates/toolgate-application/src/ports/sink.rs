//! Comment sink port

use async_trait::async_trait;

use toolgate_domain::{FileOutcome, Result};

/// Accepts finished review outcomes
///
/// Implementations render and deliver the comments — terminal output,
/// machine-readable streams, or a code-review host.
#[async_trait]
pub trait CommentSink: Send + Sync {
    /// Publish the outcomes of one review run
    async fn publish(&self, outcomes: &[FileOutcome]) -> Result<()>;
}
