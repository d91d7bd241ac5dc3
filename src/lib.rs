//! Covering array agent library
//!
//! A Rust library for generating t-way covering arrays using the IPOG
//! (In-Parameter-Order-General) strategy: greedily extend a set of test
//! rows, one parameter at a time, so that every combination of `t`
//! parameters has every tuple of their values appear in at least one row.

pub mod api;
pub mod covering_array;

// Re-export the main types
pub use covering_array::{check, dump, generate, Cell, CoveringArray, CoveringArrayError};

/// Convenience function to generate a covering array of the given
/// `strength` (clamped into `[1, N]`) for an ordered list of
/// `(parameter name, values)` pairs.
pub fn generate_covering_array<V: Clone + PartialEq>(
    parameters: &[(String, Vec<V>)],
    strength: i64,
) -> Result<CoveringArray<V>, CoveringArrayError> {
    generate(parameters, strength)
}
