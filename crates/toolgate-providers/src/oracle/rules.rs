//! Deterministic rules oracle

use async_trait::async_trait;

use toolgate_application::SchemaOracle;
use toolgate_domain::{LiteralValue, Result, ValidationVerdict};
use toolgate_validate::validate_definition;

/// Judges definitions with the in-process structural rule set
///
/// The default oracle: pure, deterministic, and free of I/O, so it is also
/// the one pipeline tests inject.
#[derive(Debug, Default, Clone, Copy)]
pub struct RulesOracle;

impl RulesOracle {
    /// Create a rules oracle
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SchemaOracle for RulesOracle {
    async fn judge(&self, definition: &LiteralValue) -> Result<ValidationVerdict> {
        Ok(validate_definition(definition))
    }

    fn oracle_name(&self) -> &str {
        "rules"
    }
}
