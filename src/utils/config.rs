use crate::splash::SplashConfig;
use crate::types::{AppError, Result};
use std::env;
use std::time::Duration;

/// Default backend the portals talk to during development.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Runtime settings for the portal client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Gateway base URL, without trailing slash.
    pub api_base: String,
    /// Per-request timeout (native builds only; the browser owns fetch timeouts).
    pub request_timeout: Duration,
    /// Delay before the chat widget's scripted acknowledgment appears.
    pub ack_delay: Duration,
    pub splash: SplashConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(30),
            ack_delay: Duration::from_millis(500),
            splash: SplashConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Load overrides from the process environment (and `.env`, if present).
    ///
    /// Recognised variables: `SMARTQUIZ_API_BASE`,
    /// `SMARTQUIZ_REQUEST_TIMEOUT_SECS`, `SMARTQUIZ_ACK_DELAY_MS`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base) = lookup("SMARTQUIZ_API_BASE") {
            config = config.with_api_base(base);
        }
        if let Some(secs) = lookup("SMARTQUIZ_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(parse_number(
                "SMARTQUIZ_REQUEST_TIMEOUT_SECS",
                &secs,
            )?);
        }
        if let Some(ms) = lookup("SMARTQUIZ_ACK_DELAY_MS") {
            config.ack_delay =
                Duration::from_millis(parse_number("SMARTQUIZ_ACK_DELAY_MS", &ms)?);
        }

        Ok(config)
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_ack_delay(mut self, delay: Duration) -> Self {
        self.ack_delay = delay;
        self
    }

    pub fn with_splash(mut self, splash: SplashConfig) -> Self {
        self.splash = splash;
        self
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("{} must be a whole number, got {:?}", key, raw)))
}
