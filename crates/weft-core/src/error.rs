//! Unified error handling for the composition engine.
//!
//! There is exactly one failure class: an authority failure, meaning any
//! error raised by a custom formatter or a formattable capability while a
//! value is being rendered. The composer itself constructs none of these
//! variants — it only propagates them to the caller unmodified, so a single
//! shared error type keeps capability failures from passing through a
//! wrapping layer on their way out.

use thiserror::Error;

/// Root error type for composition operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// A format spec that the rendering capability could not interpret.
    #[error("invalid format spec '{spec}': {reason}")]
    InvalidSpec { spec: String, reason: String },

    /// A formatting authority (custom formatter or formattable capability)
    /// rejected the value or failed internally.
    #[error("formatting authority failed: {reason}")]
    Authority { reason: String },
}

impl ComposeError {
    /// Error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSpec { .. } => ErrorCategory::Validation,
            Self::Authority { .. } => ErrorCategory::Authority,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Authority,
}

/// Convenient result type alias.
pub type ComposeResult<T> = Result<T, ComposeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_spec_is_validation() {
        let err = ComposeError::InvalidSpec {
            spec: "q".into(),
            reason: "unknown specifier".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn authority_failure_is_authority() {
        let err = ComposeError::Authority {
            reason: "boom".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Authority);
        assert!(err.to_string().contains("boom"));
    }
}
