//! Status code classification.
//!
//! Only 400, 401 and 500 short-circuit into errors. Every other code,
//! including the rest of 4xx and 5xx, is passed through and its body handed
//! to the decoder, so a 404 or 429 with a non-matching body surfaces as
//! `ApiError::Decode` rather than a status error.

use tracing::debug;

use crate::codec::decode_error_record;
use crate::error::ApiError;
use crate::http::HttpResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    BadRequest,
    Unauthorized,
    ServerError,
    /// Not a valid HTTP status (outside 100..=599). Passed through like
    /// `Success`.
    Unknown,
}

impl Outcome {
    pub fn is_error(self) -> bool {
        matches!(self, Outcome::BadRequest | Outcome::Unauthorized | Outcome::ServerError)
    }
}

pub fn classify(status: u16) -> Outcome {
    match status {
        400 => Outcome::BadRequest,
        401 => Outcome::Unauthorized,
        500 => Outcome::ServerError,
        100..=599 => Outcome::Success,
        _ => Outcome::Unknown,
    }
}

/// Map error outcomes to the matching `ApiError`, attaching the structured
/// error body when there is one. Pass-through outcomes return `Ok`.
pub fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    let outcome = classify(response.status);
    debug!(status = response.status, ?outcome, "classified response");
    match outcome {
        Outcome::Success | Outcome::Unknown => Ok(()),
        Outcome::BadRequest => Err(ApiError::BadRequest(decode_error_record(&response.body))),
        Outcome::Unauthorized => Err(ApiError::Unauthorized(decode_error_record(&response.body))),
        Outcome::ServerError => Err(ApiError::ServerError(decode_error_record(&response.body))),
    }
}
