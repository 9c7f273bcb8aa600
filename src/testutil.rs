//! Assertion helpers for dispatch results.

use crate::error::Error;

/// Compares two optional errors by rendered message rather than identity:
/// equal when both are absent, or both are present and display the same
/// text.
pub fn errors_eq(left: Option<&Error>, right: Option<&Error>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => left.to_string() == right.to_string(),
        _ => false,
    }
}
