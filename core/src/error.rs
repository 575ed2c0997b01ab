//! Error types for the registry client.
//!
//! # Design
//! The three status codes the service documents (400, 401, 500) get their
//! own variants, each carrying the `{errorCode, error}` record when the body
//! has one. Every other status is passed through to decoding, so a body of
//! the wrong shape surfaces as `Decode` with the raw bytes kept for
//! diagnosis. Nothing here is retried or logged-and-dropped: every variant is
//! returned to the immediate caller.

use thiserror::Error;

use crate::types::ErrorRecord;

/// Errors returned by `CowinClient` and the pipeline stages beneath it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was obtained (DNS, connect, TLS, I/O).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The route name is not in the route table.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The server returned 400.
    #[error("bad request{}", detail(.0))]
    BadRequest(Option<ErrorRecord>),

    /// The server returned 401. A bearer token that triggers this must be
    /// discarded and the OTP flow restarted.
    #[error("unauthenticated access{}", detail(.0))]
    Unauthorized(Option<ErrorRecord>),

    /// The server returned 500.
    #[error("internal server error{}", detail(.0))]
    ServerError(Option<ErrorRecord>),

    /// The response body did not match the expected shape.
    #[error("failed to decode response body: {message}")]
    Decode { message: String, body: Vec<u8> },

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// OTP confirmation was attempted before any OTP was requested.
    #[error("no OTP transaction is pending on this session")]
    NoPendingOtp,
}

impl ApiError {
    /// The structured error body, when the server sent one.
    pub fn record(&self) -> Option<&ErrorRecord> {
        match self {
            ApiError::BadRequest(record)
            | ApiError::Unauthorized(record)
            | ApiError::ServerError(record) => record.as_ref(),
            _ => None,
        }
    }
}

fn detail(record: &Option<ErrorRecord>) -> String {
    match record {
        Some(record) => format!(": {record}"),
        None => String::new(),
    }
}
