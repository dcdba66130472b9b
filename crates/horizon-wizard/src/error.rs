//! Error types for the wizard controller.
//!
//! Only structural misuse surfaces as an `Err`: registering a duplicate
//! step id, or removing a step the user has already seen. Everything else
//! a stale UI can produce (unknown address tokens, `back()` on the first
//! step, `finish()` off the last step) is a soft no-op, and a gating hook
//! returning `false` is ordinary control flow, not an error.

/// Result type alias for wizard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the wizard controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A step with the same identifier is already registered.
    #[error("a step with id '{id}' is already registered")]
    DuplicateStepId { id: String },

    /// The step is currently displayed or has already been passed, so it
    /// cannot vanish from under the user.
    #[error("step '{id}' is active or completed and cannot be removed")]
    StepInUse { id: String },
}

impl Error {
    /// Create a duplicate-id error.
    pub fn duplicate_step_id(id: impl Into<String>) -> Self {
        Self::DuplicateStepId { id: id.into() }
    }

    /// Create a step-in-use error.
    pub fn step_in_use(id: impl Into<String>) -> Self {
        Self::StepInUse { id: id.into() }
    }
}
