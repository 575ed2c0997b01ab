//! Client configuration shared by every call.
//!
//! `ClientConfig` is serde-deserializable with per-field defaults so it can
//! be embedded in a caller's own configuration file. An empty string means
//! "not set" and selects the default, matching how the builder methods treat
//! it. Once handed to a client the config is never mutated.

use serde::{Deserialize, Serialize};

/// Production service root. Route templates carry the version prefix.
pub const DEFAULT_BASE_URL: &str = "https://cdn-api.co-vin.in/api";

pub const DEFAULT_LOCALE: &str = "en_US";

/// The service rejects some non-browser user agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1; Win64; x64; rv:47.0) Gecko/20100101 Firefox/47.3 Mozilla/5.0 (Macintosh; Intel Mac OS X x.y; rv:42.0) Gecko/20100101 Firefox/43.4";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    base_url: String,
    locale: String,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self.normalized()
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self.normalized()
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self.normalized()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Substitute defaults for empty fields and trim trailing slashes from
    /// the base URL. Deserialized configs pass through this before use.
    pub(crate) fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        if self.locale.is_empty() {
            self.locale = DEFAULT_LOCALE.to_string();
        }
        if self.user_agent.is_empty() {
            self.user_agent = DEFAULT_USER_AGENT.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::new();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.locale(), "en_US");
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn empty_values_select_defaults() {
        let config = ClientConfig::new().with_locale("").with_user_agent("").with_base_url("");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new().with_base_url("http://localhost:3000/api/");
        assert_eq!(config.base_url(), "http://localhost:3000/api");
    }

    #[test]
    fn deserializes_partial_config() {
        let config: ClientConfig = serde_json::from_str(r#"{"locale":"hi_IN"}"#).unwrap();
        assert_eq!(config.locale(), "hi_IN");
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn deserialized_empty_fields_normalize_to_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"locale":"","user_agent":"","base_url":"http://h/"}"#).unwrap();
        let config = config.normalized();
        assert_eq!(config.locale(), DEFAULT_LOCALE);
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(config.base_url(), "http://h");
    }
}
