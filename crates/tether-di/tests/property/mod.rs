//! Property-based tests for resolution plan diagnostics

mod plan_properties;
