//! Client configuration types.
//!
//! Everything a client needs is passed explicitly at construction time:
//! the base URL, the codec, transport timeouts and the optional logging
//! level. There is no global state.

use std::time::Duration;

use url::Url;

use crate::middleware::LogLevel;
use crate::{Error, JsonCodec, Result};

/// Timeouts applied by the hyper transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportConfig {
    /// Whole-request timeout, from sending to the last body byte.
    pub timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Configuration of a client binding.
#[derive(Debug, Clone)]
pub struct ClientConfig<C = JsonCodec> {
    /// URL every operation path is appended to.
    pub base_url: Url,
    /// Codec for request, success and error bodies.
    pub codec: C,
    /// Transport timeouts.
    pub transport: TransportConfig,
    /// Request/response logging, off when `None`.
    pub log_level: Option<LogLevel>,
}

impl ClientConfig {
    /// Create a new configuration builder using the JSON codec.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder<C = JsonCodec> {
    base_url: Option<String>,
    codec: C,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    log_level: Option<LogLevel>,
}

impl<C> ClientConfigBuilder<C> {
    /// Set the base URL (required).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Replace the codec.
    #[must_use]
    pub fn codec<C2>(self, codec: C2) -> ClientConfigBuilder<C2> {
        ClientConfigBuilder {
            base_url: self.base_url,
            codec,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            log_level: self.log_level,
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Log requests and responses at the given level.
    #[must_use]
    pub const fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if no base URL was set and
    /// [`Error::InvalidUrl`] if it does not parse.
    pub fn build(self) -> Result<ClientConfig<C>> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::invalid_request("missing base URL"))?;
        let defaults = TransportConfig::default();
        Ok(ClientConfig {
            base_url: Url::parse(&base_url)?,
            codec: self.codec,
            transport: TransportConfig {
                timeout: self.timeout.unwrap_or(defaults.timeout),
                connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            },
            log_level: self.log_level,
        })
    }
}
