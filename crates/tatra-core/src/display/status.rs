//! Status message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying a failed operation.
///
/// Confirmations come from the result wrappers in [`super::results`]; a
/// failure is always a single line prefixed with `Error:`.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self { message }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: {}", self.message)
    }
}
