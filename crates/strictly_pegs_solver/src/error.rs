//! Solver error types.

use derive_more::{Display, Error};

/// Error raised when a search cannot be trusted.
///
/// Both cases mean the enumerator and the engine disagree about the rules.
/// They are bugs, not bad input, and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// The enumerator and the engine disagree.
    #[display("Internal consistency failure: {}", message)]
    InternalConsistency {
        /// What disagreed.
        message: String,
    },
}

impl SolverError {
    /// Creates an internal consistency error.
    pub fn internal_consistency(message: impl Into<String>) -> Self {
        Self::InternalConsistency {
            message: message.into(),
        }
    }
}
