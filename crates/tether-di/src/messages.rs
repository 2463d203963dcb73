//! Fixed message fragments
//!
//! Callers and existing tests assert on these byte for byte.

pub const CIRCULAR_DEPENDENCY: &str = "Circular dependency found:";

pub const NOT_REGISTERED: &str = "No matching bindings found for serviceIdentifier:";

pub const AMBIGUOUS_MATCH: &str = "Ambiguous match found for serviceIdentifier:";

pub const DEPENDENCY_CHAIN_SEPARATOR: &str = " --> ";

pub const REGISTERED_BINDINGS_HEADER: &str = "Registered bindings:";

/// Listed in place of an implementation name for constant-value bindings.
pub const CONSTANT_VALUE_BINDING_NAME: &str = "Object";
