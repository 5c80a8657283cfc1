//! Local filesystem source accessor

use async_trait::async_trait;

use toolgate_application::SourceAccessor;
use toolgate_domain::Result;

/// Reads source content from the local working tree
///
/// The simplest accessor: paths are used as given. A read failure is
/// returned to the caller, which treats it as recoverable for that file.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemSource;

impl FilesystemSource {
    /// Create a filesystem source accessor
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SourceAccessor for FilesystemSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        Ok(tokio::fs::read_to_string(path).await?)
    }
}
