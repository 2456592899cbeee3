//! Error types for the zurvan-picker crate.

/// Returned when a daylight window specification cannot be parsed.
///
/// The absent spec and the literal `"null"` are the only recognized
/// "no rule" sentinels and never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DaylightError {
    /// Returned when the spec does not have exactly four comma-separated
    /// fields.
    #[error("daylight window must have 4 comma-separated fields, got {got}")]
    FieldCount {
        /// Number of fields found in the spec.
        got: usize,
    },

    /// Returned when a field is not a decimal integer.
    #[error("daylight window field {index} is not an integer: {token:?}")]
    BadField {
        /// Zero-based position of the offending field.
        index: usize,
        /// The offending token as written.
        token: String,
    },
}
