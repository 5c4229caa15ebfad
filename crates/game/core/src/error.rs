//! Common error infrastructure for game-core.
//!
//! This module provides shared types and traits used across all error types in game-core.
//! Domain-specific errors (e.g., `CatalogError`, `SelectionError`) are defined in their
//! respective modules alongside the operations that produce them.
//!
//! The build and combat paths themselves never fail: a full inventory is a
//! `bool`, and attacking without a strategy is a logged no-op. Errors only
//! exist where a caller hands in configuration the game cannot interpret.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Temporary conditions that may succeed on retry or with alternative input
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted game state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown item category, unknown kit name
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - game state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised when a kit or strategy is requested by name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Unknown archetype kit: {0}")]
    UnknownKit(String),

    #[error("Unknown attack strategy: {0}")]
    UnknownStrategy(String),
}

impl GameError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownKit(_) => "SELECTION_UNKNOWN_KIT",
            Self::UnknownStrategy(_) => "SELECTION_UNKNOWN_STRATEGY",
        }
    }
}
