//! OTP authentication flow.
//!
//! # Design
//! The session moves `Anonymous -> OtpPending -> Authenticated`. It is owned
//! by the caller and passed by `&mut` into the two network steps; a step
//! that fails leaves the session exactly as it was, so a rejected
//! confirmation can be retried against the same transaction.
//!
//! Nothing expires a token. A protected call that comes back `Unauthorized`
//! means the caller should `reset` and start over with `request_otp`.
//!
//! Confirmation always transmits the SHA-256 of the code, never the code
//! itself. `confirm_raw_otp` signs and delegates to `confirm_signed_otp`.

use sha2::{Digest, Sha256};

use crate::client::CowinClient;
use crate::codec::{decode, encode};
use crate::compose::RequestSpec;
use crate::error::ApiError;
use crate::http::Transport;
use crate::routes::route;
use crate::types::{OtpConfirmRequest, OtpConfirmResponse, OtpRequest, OtpResponse};

/// Lowercase hex SHA-256 of `otp`.
pub fn sign_otp(otp: &str) -> String {
    hex::encode(Sha256::digest(otp.as_bytes()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Anonymous,
    OtpPending {
        txn_id: String,
    },
    Authenticated {
        txn_id: String,
        token: String,
    },
}

/// Caller-held authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    state: AuthState,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn transaction_id(&self) -> Option<&str> {
        match &self.state {
            AuthState::Anonymous => None,
            AuthState::OtpPending { txn_id } | AuthState::Authenticated { txn_id, .. } => {
                Some(txn_id.as_str())
            }
        }
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            AuthState::Authenticated { token, .. } => Some(token.as_str()),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated { .. })
    }

    /// Drop any transaction and token.
    pub fn reset(&mut self) {
        self.state = AuthState::Anonymous;
    }
}

impl<T: Transport> CowinClient<T> {
    /// Ask the service to send an OTP to `mobile`.
    ///
    /// On success the session holds the new transaction id; any previous
    /// transaction or token is discarded.
    pub fn request_otp(&self, session: &mut AuthSession, mobile: &str) -> Result<(), ApiError> {
        let body = encode(&OtpRequest {
            mobile: mobile.to_string(),
        })?;
        let response = self.execute(RequestSpec::new(route::REQUEST_OTP).body(body))?;
        let otp: OtpResponse = decode(&response.body)?;
        let txn_id = non_empty(otp.txn_id, "txnId", &response.body)?;
        session.state = AuthState::OtpPending { txn_id };
        Ok(())
    }

    /// Confirm the pending transaction with an already signed OTP.
    pub fn confirm_signed_otp(&self, session: &mut AuthSession, otp_hash: &str) -> Result<(), ApiError> {
        let txn_id = session.transaction_id().ok_or(ApiError::NoPendingOtp)?.to_string();
        let body = encode(&OtpConfirmRequest {
            otp: otp_hash.to_string(),
            txn_id: txn_id.clone(),
        })?;
        let response = self.execute(RequestSpec::new(route::CONFIRM_OTP).body(body))?;
        let confirmed: OtpConfirmResponse = decode(&response.body)?;
        let token = non_empty(confirmed.token, "token", &response.body)?;
        session.state = AuthState::Authenticated { txn_id, token };
        Ok(())
    }

    /// Confirm the pending transaction with the code as received by SMS.
    pub fn confirm_raw_otp(&self, session: &mut AuthSession, otp: &str) -> Result<(), ApiError> {
        self.confirm_signed_otp(session, &sign_otp(otp))
    }
}

fn non_empty(value: String, field: &str, body: &[u8]) -> Result<String, ApiError> {
    if value.is_empty() {
        return Err(ApiError::Decode {
            message: format!("empty `{field}` in response"),
            body: body.to_vec(),
        });
    }
    Ok(value)
}
