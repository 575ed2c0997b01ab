//! JSON marshalling for request and response bodies.
//!
//! Decoding is all-or-nothing: a body that does not match the target shape
//! yields `ApiError::Decode` carrying the raw bytes, never a partly filled
//! record.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::types::ErrorRecord;

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(value).map_err(|e| ApiError::Encode(e.to_string()))
}

pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode {
        message: e.to_string(),
        body: body.to_vec(),
    })
}

/// Parse an `{errorCode, error}` body, if that is what `body` holds.
pub fn decode_error_record(body: &[u8]) -> Option<ErrorRecord> {
    serde_json::from_slice(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OtpRequest, StatesResponse};

    #[test]
    fn states_body_decodes() {
        let body = br#"{"states":[{"state_id":1,"state_name":"X","state_name_l":"X"}],"ttl":60}"#;
        let states: StatesResponse = decode(body).unwrap();
        assert_eq!(states.ttl, 60);
        assert_eq!(states.states.len(), 1);
        assert_eq!(states.states[0].state_id, 1);
        assert_eq!(states.states[0].state_name, "X");
        assert_eq!(states.states[0].state_name_l, "X");
    }

    #[test]
    fn decode_failure_keeps_raw_body() {
        let err = decode::<StatesResponse>(b"<html>Not Found</html>").unwrap_err();
        match err {
            ApiError::Decode { body, .. } => assert_eq!(body, b"<html>Not Found</html>"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn wrong_shape_is_a_decode_error() {
        let err = decode::<StatesResponse>(br#"{"errorCode":"X","error":"y"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn encode_request_payload() {
        let body = encode(&OtpRequest {
            mobile: "9999999999".to_string(),
        })
        .unwrap();
        assert_eq!(body, br#"{"mobile":"9999999999"}"#);
    }

    #[test]
    fn error_record_is_optional() {
        assert!(decode_error_record(b"").is_none());
        assert!(decode_error_record(b"plain text").is_none());
        let record = decode_error_record(br#"{"errorCode":"E1","error":"boom"}"#).unwrap();
        assert_eq!(record.code, "E1");
    }
}
