//! Machine-readable JSON-lines sink

use async_trait::async_trait;

use toolgate_application::CommentSink;
use toolgate_domain::{FileOutcome, Result};

/// Emits one JSON object per file outcome, for CI plumbing
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSink;

impl JsonSink {
    /// Create a JSON sink
    pub fn new() -> Self {
        Self
    }

    /// Render outcomes as JSON lines
    pub fn render(outcomes: &[FileOutcome]) -> Result<Vec<String>> {
        outcomes
            .iter()
            .map(|outcome| Ok(serde_json::to_string(outcome)?))
            .collect()
    }
}

#[async_trait]
impl CommentSink for JsonSink {
    async fn publish(&self, outcomes: &[FileOutcome]) -> Result<()> {
        for line in Self::render(outcomes)? {
            println!("{line}");
        }
        Ok(())
    }
}
