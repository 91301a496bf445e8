//! Error types for port operations.

/// Storage infrastructure failures.
///
/// Confirmed absence is never an error: `get`/`update`/`delete` report it
/// through `None`/`false` so the caller decides the user-facing treatment.
/// A transport fault must therefore never be collapsed into absence.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Storage operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// A stored record had an unexpected shape.
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Corrupt error.
    pub fn corrupt(message: impl ToString) -> Self {
        Self::Corrupt(message.to_string())
    }
}
