use std::fmt;

use serde::{Deserialize, Serialize};

use crate::result::empty::MaybeEmpty;
use crate::result::outcome::Outcome;
use crate::status::StatusCode;

/// Result of an operation that produces one payload.
///
/// The payload slot is independently typed and optional; a successful result
/// with an absent or zero-length payload is legal and detected through
/// [`is_item1_empty`]. The emptiness predicates are gated on success: a
/// failed result reports `false` for every one of them regardless of what
/// the slot holds.
///
/// [`is_item1_empty`]: OperationResult1::is_item1_empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult1<T1> {
    /// Human-readable outcome message
    #[serde(default)]
    pub message: String,
    /// Status stamped on the result
    pub status: StatusCode,
    /// Payload produced by the operation, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item1: Option<T1>,
}

impl<T1> OperationResult1<T1> {
    /// Create a result with the given payload, message, and status.
    ///
    /// Accepts either a bare payload or an `Option`; no validation is
    /// performed on the payload value.
    pub fn new(
        item1: impl Into<Option<T1>>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            message: message.into(),
            status,
            item1: item1.into(),
        }
    }

    /// Create a successful result from a payload, with an empty message.
    pub fn success(item1: impl Into<Option<T1>>) -> Self {
        Self::new(item1, String::new(), StatusCode::SUCCESS)
    }

    /// Replace the message on this result.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success_code()
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Whether this result succeeded and its payload is null or empty.
    pub fn is_item1_empty(&self) -> bool
    where
        T1: MaybeEmpty,
    {
        self.is_success() && self.item1.is_empty_value()
    }

    /// Whether this result succeeded and every payload slot is null or empty.
    pub fn is_null_or_empty(&self) -> bool
    where
        T1: MaybeEmpty,
    {
        self.is_item1_empty()
    }
}

impl<T1> Default for OperationResult1<T1> {
    fn default() -> Self {
        Self::new(None, String::new(), StatusCode::FAILED)
    }
}

impl<T1> Outcome for OperationResult1<T1> {
    fn status(&self) -> &StatusCode {
        &self.status
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl<T1> fmt::Display for OperationResult1<T1> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

/// Result of an operation that produces two payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult2<T1, T2> {
    #[serde(default)]
    pub message: String,
    pub status: StatusCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item1: Option<T1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item2: Option<T2>,
}

impl<T1, T2> OperationResult2<T1, T2> {
    /// Create a result with the given payloads, message, and status.
    pub fn new(
        item1: impl Into<Option<T1>>,
        item2: impl Into<Option<T2>>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            message: message.into(),
            status,
            item1: item1.into(),
            item2: item2.into(),
        }
    }

    /// Create a successful result from payloads, with an empty message.
    pub fn success(item1: impl Into<Option<T1>>, item2: impl Into<Option<T2>>) -> Self {
        Self::new(item1, item2, String::new(), StatusCode::SUCCESS)
    }

    /// Replace the message on this result.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success_code()
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn is_item1_empty(&self) -> bool
    where
        T1: MaybeEmpty,
    {
        self.is_success() && self.item1.is_empty_value()
    }

    pub fn is_item2_empty(&self) -> bool
    where
        T2: MaybeEmpty,
    {
        self.is_success() && self.item2.is_empty_value()
    }

    pub fn is_null_or_empty(&self) -> bool
    where
        T1: MaybeEmpty,
        T2: MaybeEmpty,
    {
        self.is_success() && self.item1.is_empty_value() && self.item2.is_empty_value()
    }
}

impl<T1, T2> Default for OperationResult2<T1, T2> {
    fn default() -> Self {
        Self::new(None, None, String::new(), StatusCode::FAILED)
    }
}

impl<T1, T2> Outcome for OperationResult2<T1, T2> {
    fn status(&self) -> &StatusCode {
        &self.status
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl<T1, T2> fmt::Display for OperationResult2<T1, T2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

/// Result of an operation that produces three payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult3<T1, T2, T3> {
    #[serde(default)]
    pub message: String,
    pub status: StatusCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item1: Option<T1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item2: Option<T2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item3: Option<T3>,
}

impl<T1, T2, T3> OperationResult3<T1, T2, T3> {
    /// Create a result with the given payloads, message, and status.
    pub fn new(
        item1: impl Into<Option<T1>>,
        item2: impl Into<Option<T2>>,
        item3: impl Into<Option<T3>>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            message: message.into(),
            status,
            item1: item1.into(),
            item2: item2.into(),
            item3: item3.into(),
        }
    }

    /// Create a successful result from payloads, with an empty message.
    pub fn success(
        item1: impl Into<Option<T1>>,
        item2: impl Into<Option<T2>>,
        item3: impl Into<Option<T3>>,
    ) -> Self {
        Self::new(item1, item2, item3, String::new(), StatusCode::SUCCESS)
    }

    /// Replace the message on this result.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success_code()
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn is_item1_empty(&self) -> bool
    where
        T1: MaybeEmpty,
    {
        self.is_success() && self.item1.is_empty_value()
    }

    pub fn is_item2_empty(&self) -> bool
    where
        T2: MaybeEmpty,
    {
        self.is_success() && self.item2.is_empty_value()
    }

    pub fn is_item3_empty(&self) -> bool
    where
        T3: MaybeEmpty,
    {
        self.is_success() && self.item3.is_empty_value()
    }

    pub fn is_null_or_empty(&self) -> bool
    where
        T1: MaybeEmpty,
        T2: MaybeEmpty,
        T3: MaybeEmpty,
    {
        self.is_success()
            && self.item1.is_empty_value()
            && self.item2.is_empty_value()
            && self.item3.is_empty_value()
    }
}

impl<T1, T2, T3> Default for OperationResult3<T1, T2, T3> {
    fn default() -> Self {
        Self::new(None, None, None, String::new(), StatusCode::FAILED)
    }
}

impl<T1, T2, T3> Outcome for OperationResult3<T1, T2, T3> {
    fn status(&self) -> &StatusCode {
        &self.status
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl<T1, T2, T3> fmt::Display for OperationResult3<T1, T2, T3> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}
