//! Tool class records and qualification markers

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ACCESSOR_MARKER, DEFAULT_BASE_CLASS, DEFAULT_REGISTRATION_MARKER,
};
use crate::value_objects::literal::LiteralValue;

/// Syntactic markers that qualify a class as a tool class
///
/// Passed to the extractor at construction time as an explicit capability
/// descriptor; nothing in the analysis layer probes for these ambiently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolMarkers {
    /// Base class name a tool class must inherit from
    pub base_class: String,
    /// Final attribute name of the registration decorator
    /// (`@registry.register` or `@registry.register(...)`)
    pub registration: String,
    /// Bare decorator that guards the `definition` accessor
    pub accessor: String,
}

impl Default for ToolMarkers {
    fn default() -> Self {
        Self {
            base_class: DEFAULT_BASE_CLASS.to_string(),
            registration: DEFAULT_REGISTRATION_MARKER.to_string(),
            accessor: DEFAULT_ACCESSOR_MARKER.to_string(),
        }
    }
}

/// One extracted tool class
///
/// `definition` is absent when the class qualified as a tool class but no
/// usable schema could be reconstructed from its `definition` accessor.
/// Once set, a definition is never re-derived.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolRecord {
    /// Name of the class declaration
    pub class_name: String,
    /// Reconstructed schema literal, when present
    pub definition: Option<LiteralValue>,
}
