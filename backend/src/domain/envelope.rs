//! Uniform `{success, data, error?}` wrapper returned by retrieval calls.
//!
//! On failure `data` holds the type's empty value (an empty list or `None`)
//! so callers can destructure without checking `success` first.

use serde::Serialize;

use super::error::{DomainError as Error, ErrorCode};

/// Success/failure envelope around a retrieval result.
///
/// The failure's [`ErrorCode`] is kept alongside the envelope for adapters
/// that need a status code, but is not part of the serialised body.
///
/// # Examples
/// ```
/// use studio_backend::domain::{Envelope, Error, ErrorCode};
///
/// let envelope: Envelope<Vec<u8>> = Envelope::from_result(Err(Error::internal("boom")));
/// assert!(!envelope.success);
/// assert!(envelope.data.is_empty());
/// assert_eq!(envelope.error.as_deref(), Some("boom"));
/// assert_eq!(envelope.error_code(), Some(ErrorCode::InternalError));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    /// `true` when `error` is absent.
    pub success: bool,
    /// Payload, or its empty form on failure.
    pub data: T,
    /// Failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    code: Option<ErrorCode>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`.
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
            code: None,
        }
    }

    /// Failed envelope carrying `empty` as its data.
    pub fn failure(empty: T, error: &Error) -> Self {
        Self {
            success: false,
            data: empty,
            error: Some(error.message().to_owned()),
            code: Some(error.code()),
        }
    }

    /// Code of the failure, or `None` for a successful envelope.
    #[must_use]
    pub const fn error_code(&self) -> Option<ErrorCode> {
        self.code
    }
}

impl<T: Default> Envelope<T> {
    /// Wrap `result`, substituting `T::default()` for the data on failure.
    pub fn from_result(result: Result<T, Error>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(error) => Self::failure(T::default(), &error),
        }
    }
}
