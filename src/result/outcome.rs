use std::fmt;

use serde::{Deserialize, Serialize};

use crate::status::StatusCode;

/// Common surface shared by every operation result shape: the stamped
/// status, the message, and the success/failure view derived from them.
pub trait Outcome {
    /// Status stamped on this result.
    fn status(&self) -> &StatusCode;

    /// Human-readable message; empty when the operation had nothing to say.
    fn message(&self) -> &str;

    fn is_success(&self) -> bool {
        self.status().is_success_code()
    }

    fn is_failure(&self) -> bool {
        !self.is_success()
    }
}

/// Result of an operation that produces no payload.
///
/// Pairs a [`StatusCode`] with a message. Return this (or one of the
/// payload-carrying shapes) instead of raising: callers branch on
/// [`is_success`] rather than catching anything.
///
/// [`is_success`]: OperationResult::is_success
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    /// Human-readable outcome message
    #[serde(default)]
    pub message: String,
    /// Status stamped on the result
    pub status: StatusCode,
}

impl OperationResult {
    /// Create a result with the given message and status.
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Create a successful result.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::SUCCESS)
    }

    /// Create a result carrying the warning status.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::WARNING)
    }

    /// Create a result for input that failed validation.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::INVALID)
    }

    /// Create a result for an unauthenticated caller.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::UNAUTHORIZED)
    }

    /// Create a result for a caller that is not allowed.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::FORBIDDEN)
    }

    /// Create a result for an entity that does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::NOT_FOUND)
    }

    /// Create a failed result.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::FAILED)
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success_code()
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }
}

impl Default for OperationResult {
    fn default() -> Self {
        Self::new(String::new(), StatusCode::FAILED)
    }
}

impl Outcome for OperationResult {
    fn status(&self) -> &StatusCode {
        &self.status
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for OperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

impl std::error::Error for OperationResult {}
