//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting handlers turn
//! failures into envelope responses with consistent status codes.

use actix_web::http::StatusCode;

use crate::domain::{Envelope, ErrorCode};

/// Message returned in place of internal failure details.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// HTTP status for a domain error code.
#[must_use]
pub const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// HTTP status for an envelope: `200` on success, otherwise the status of
/// its error code.
#[must_use]
pub fn envelope_status<T>(envelope: &Envelope<T>) -> StatusCode {
    envelope.error_code().map_or(StatusCode::OK, status_for)
}

/// Replace the message of an internal failure so store details stay in logs.
#[must_use]
pub fn redact_if_internal<T>(mut envelope: Envelope<T>) -> Envelope<T> {
    if envelope.error_code() == Some(ErrorCode::InternalError) {
        envelope.error = Some(INTERNAL_ERROR_MESSAGE.to_owned());
    }
    envelope
}
