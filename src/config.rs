// src/config.rs
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const BASE_URL_ENV: &str = "CHATBOT_BASE_URL";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(15);
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root all requests are relative to, without a trailing slash.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    /// Used for both connect and read on the liveness probe.
    pub health_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            base_url: base.trim().trim_end_matches('/').to_string(),
            connect_timeout: CONNECT_TIMEOUT,
            read_timeout: READ_TIMEOUT,
            health_timeout: HEALTH_TIMEOUT,
        }
    }

    /// Reads `CHATBOT_BASE_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    pub fn with_timeouts(mut self, connect: Duration, read: Duration, health: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self.health_timeout = health;
        self
    }

    pub fn message_url(&self) -> String {
        format!("{}/api/message", self.base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("https://example.onrender.com/");
        assert_eq!(config.message_url(), "https://example.onrender.com/api/message");
        assert_eq!(config.health_url(), "https://example.onrender.com/");
    }

    #[test]
    fn default_timeouts() {
        let config = ClientConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.read_timeout, Duration::from_secs(15));
        assert_eq!(config.health_timeout, Duration::from_secs(5));
    }
}
