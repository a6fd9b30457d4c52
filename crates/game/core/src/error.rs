//! Common error infrastructure for monster-core.
//!
//! Domain-specific errors (e.g. `ActionError`, `NameError`) are defined next
//! to the rules they enforce. This module only provides the shared
//! classification used by callers for logging and presentation.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: game-rule rejection; the same request may succeed later
///   (tomorrow's quota, more energy)
/// - **Validation**: malformed input that will never succeed unchanged
/// - **Internal**: unexpected inconsistency between state and reference data
/// - **Fatal**: corrupted state, cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or bad reference data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all monster-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - The Display text is shown to players verbatim
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for metrics, logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
