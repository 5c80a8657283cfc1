//! Shared domain constants

/// Base class name that marks a class as a tool implementation
pub const DEFAULT_BASE_CLASS: &str = "BaseTool";

/// Decorator identifier that marks a tool class as registered
pub const DEFAULT_REGISTRATION_MARKER: &str = "register";

/// Decorator that guards the schema accessor method
pub const DEFAULT_ACCESSOR_MARKER: &str = "property";

/// Name of the accessor method that returns a tool's schema
pub const DEFINITION_ACCESSOR_NAME: &str = "definition";

/// Expected value of the top-level `type` field in a definition
pub const DEFINITION_TYPE: &str = "function";

/// Expected value of `parameters.type` in a definition
pub const PARAMETERS_TYPE: &str = "object";
