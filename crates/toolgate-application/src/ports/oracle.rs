//! Schema oracle port

use async_trait::async_trait;

use toolgate_domain::{LiteralValue, Result, ValidationVerdict};

/// Judges one extracted definition against the structural rule set
///
/// Invoked exactly once per present definition. An error — transport
/// failure or an unusable verdict — is fatal for that one definition only;
/// the caller proceeds with the remaining definitions in the same file.
///
/// The oracle is an injected capability chosen at construction time, so the
/// pipeline's control flow stays testable with a deterministic
/// implementation and never hard-codes a remote service.
#[async_trait]
pub trait SchemaOracle: Send + Sync {
    /// Return a verdict for the given definition
    async fn judge(&self, definition: &LiteralValue) -> Result<ValidationVerdict>;

    /// Identifier for the oracle implementation (e.g. "rules", "openai")
    fn oracle_name(&self) -> &str;
}
