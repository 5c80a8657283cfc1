//! Source accessor port

use async_trait::async_trait;

use toolgate_domain::Result;

/// Supplies source file content to the pipeline
///
/// The core never reads files itself: content is fetched at the boundary
/// and handed to the extractor already read. A fetch failure is recoverable
/// per file; it must never abort the batch.
#[async_trait]
pub trait SourceAccessor: Send + Sync {
    /// Fetch the UTF-8 content of one source file
    async fn fetch(&self, path: &str) -> Result<String>;
}
