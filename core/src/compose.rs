//! Request composition.
//!
//! A `RequestSpec` names an operation and carries the per-call parts: path
//! suffix, query, headers and an optional JSON body. `RequestComposer` turns
//! it into an `HttpRequest`:
//!
//! - URL is `base_url + route path + suffix`, plus `?query` when non-empty.
//! - `User-Agent` and `Accept-Language` come from `ClientConfig`; caller
//!   headers are layered on top and win on collision.
//! - A request with a body always carries `Content-Type: application/json`,
//!   whatever the caller set.

use std::sync::Arc;

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{
    Headers, HttpRequest, QueryParams, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use crate::routes::RouteTable;

/// Per-call request parts. Built, composed and dropped within one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec<'a> {
    pub route: &'a str,
    pub suffix: String,
    pub query: QueryParams,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
}

impl<'a> RequestSpec<'a> {
    pub fn new(route: &'a str) -> Self {
        Self {
            route,
            suffix: String::new(),
            query: QueryParams::new(),
            headers: Headers::new(),
            body: None,
        }
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push(key, value);
        self
    }

    /// Optional filter; omitted from the URL when `value` is empty.
    pub fn optional_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push_optional(key, value);
        self
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    pub fn bearer(self, token: &str) -> Self {
        self.header(AUTHORIZATION, format!("Bearer {token}"))
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone)]
pub struct RequestComposer {
    config: ClientConfig,
    routes: Arc<RouteTable>,
}

impl RequestComposer {
    pub fn new(config: ClientConfig, routes: Arc<RouteTable>) -> Self {
        Self {
            config: config.normalized(),
            routes,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn compose(&self, spec: RequestSpec<'_>) -> Result<HttpRequest, ApiError> {
        let operation = self.routes.lookup(spec.route)?;

        let mut url = format!("{}{}{}", self.config.base_url(), operation.path, spec.suffix);
        if !spec.query.is_empty() {
            url.push('?');
            url.push_str(&spec.query.encode());
        }

        let mut headers = Headers::new()
            .with(USER_AGENT, self.config.user_agent())
            .with(ACCEPT_LANGUAGE, self.config.locale());
        headers.merge(spec.headers);
        if spec.body.is_some() {
            headers.set(CONTENT_TYPE, "application/json");
        }

        if operation.requires_auth && !headers.contains(AUTHORIZATION) {
            debug!(operation = operation.name, "composing protected request without a bearer token");
        }

        Ok(HttpRequest {
            method: operation.method,
            url,
            headers,
            body: spec.body,
        })
    }
}
