use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Status descriptor for an operation outcome.
///
/// Carries a numeric code, a display name, and an optional override of the
/// default success classification. Values are immutable once built; use the
/// well-known constants or [`StatusCode::custom`] to obtain one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCode {
    code: i32,
    name: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    success_override: Option<bool>,
}

impl StatusCode {
    /// Operation completed successfully.
    pub const SUCCESS: Self = Self::well_known(200, "Success");
    /// Operation completed but with a caveat the caller may care about.
    pub const WARNING: Self = Self::well_known(202, "Warning");
    /// Input failed validation.
    pub const INVALID: Self = Self::well_known(400, "Invalid");
    /// Caller is not authenticated.
    pub const UNAUTHORIZED: Self = Self::well_known(401, "Unauthorized");
    /// Caller is authenticated but not allowed.
    pub const FORBIDDEN: Self = Self::well_known(403, "Forbidden");
    /// Requested entity does not exist.
    pub const NOT_FOUND: Self = Self::well_known(404, "NotFound");
    /// Operation failed.
    pub const FAILED: Self = Self::well_known(500, "Failed");

    const fn well_known(code: i32, name: &'static str) -> Self {
        Self {
            code,
            name: Cow::Borrowed(name),
            success_override: None,
        }
    }

    /// Define a custom status with the given code and display name.
    ///
    /// No validation is performed on either value; the caller is responsible
    /// for sane codes. The success classification defaults to the HTTP
    /// convention (`200..=299`); use [`with_success_override`] for codes
    /// whose classification falls outside it.
    ///
    /// [`with_success_override`]: StatusCode::with_success_override
    pub fn custom(code: i32, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            name: name.into(),
            success_override: None,
        }
    }

    /// Pin the success classification instead of deriving it from the code.
    pub fn with_success_override(mut self, is_success: bool) -> Self {
        self.success_override = Some(is_success);
        self
    }

    /// Numeric code for this status.
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Display name for this status.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this status counts as a success.
    ///
    /// Returns the override when one was set, otherwise classifies codes in
    /// `200..=299` as success.
    pub const fn is_success_code(&self) -> bool {
        match self.success_override {
            Some(is_success) => is_success,
            None => self.code >= 200 && self.code <= 299,
        }
    }
}

// Identity is the numeric code alone: name and override never participate
// in equality or hashing.
impl PartialEq for StatusCode {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for StatusCode {}

impl Hash for StatusCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
