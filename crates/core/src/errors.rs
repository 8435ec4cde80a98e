use thiserror::Error;

/// Unified error type for the entire finance-widget-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// All variants are recoverable: the operation that raised one is a no-op.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    // ── Validation ──────────────────────────────────────────────────
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Goal name must not be empty")]
    InvalidName,

    #[error("Invalid goal target: {0}")]
    InvalidTarget(String),

    #[error("Goal not found: {0}")]
    GoalNotFound(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // ── Payload ─────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
