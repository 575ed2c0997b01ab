//! Typed client for the CoWIN vaccination-scheduling registry API.
//!
//! # Overview
//! Resolves named operations to endpoint paths, composes requests with the
//! shared headers, classifies status codes into typed errors and decodes
//! JSON bodies into domain records. The OTP handshake (request, sign,
//! confirm) produces a bearer token that the caller threads into protected
//! calls.
//!
//! # Design
//! - Pipeline: `routes` -> `compose` -> `http::Transport` -> `classify` ->
//!   `codec`. Every stage but the transport is pure data in, data out.
//! - `CowinClient` holds only immutable config and a shared route table; it
//!   can be cloned and used from several threads when its transport allows.
//! - `AuthSession` is owned by the caller; the client never stores tokens.
//! - Nothing is retried. Every failure is returned as an `ApiError`.
//! - `UreqTransport` (feature `ureq`, on by default) is the stock blocking
//!   transport; any other HTTP stack can plug in through `Transport`.

pub mod auth;
pub mod classify;
pub mod client;
pub mod codec;
pub mod compose;
pub mod config;
pub mod error;
pub mod http;
pub mod routes;
#[cfg(feature = "ureq")]
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use auth::{sign_otp, AuthSession, AuthState};
pub use classify::{classify, Outcome};
pub use client::CowinClient;
pub use compose::{RequestComposer, RequestSpec};
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{Headers, HttpMethod, HttpRequest, HttpResponse, QueryParams, Transport};
pub use routes::{route, Operation, RouteTable};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{
    CalendarResponse, CenterCalendar, CentersResponse, District, DistrictsResponse, ErrorRecord,
    SessionsResponse, State, StatesResponse, VaccinationCenter, VaccinationSession, VaccineFee,
};
