//! Configuration types for the M2X API SDK.
//!
//! This module provides the configuration used to construct the HTTP
//! transport and the client.
//!
//! # Overview
//!
//! - [`M2xConfig`]: The main configuration struct holding all SDK settings
//! - [`M2xConfigBuilder`]: A builder for constructing [`M2xConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated API endpoint URL
//! - [`ApiVersion`]: The M2X API version to use
//!
//! # Example
//!
//! ```rust
//! use m2x::{M2xConfig, ApiKey, ApiVersion};
//!
//! let config = M2xConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, BaseUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the M2X API SDK.
///
/// # Thread Safety
///
/// `M2xConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use m2x::{M2xConfig, ApiKey, BaseUrl};
///
/// let config = M2xConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
///     .tries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.tries(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct M2xConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    api_version: ApiVersion,
    tries: u32,
    user_agent_prefix: Option<String>,
}

impl M2xConfig {
    /// Creates a new builder for constructing an `M2xConfig`.
    #[must_use]
    pub fn builder() -> M2xConfigBuilder {
        M2xConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns how many times a request is attempted on 429/5xx responses.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify M2xConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<M2xConfig>();
};

/// Builder for constructing [`M2xConfig`] instances.
///
/// The only required field is `api_key`.
///
/// # Defaults
///
/// - `base_url`: `https://api-m2x.att.com`
/// - `api_version`: `v2`
/// - `tries`: `1` (no retries)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct M2xConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    tries: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl M2xConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the number of attempts for retryable responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`M2xConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// or [`ConfigError::InvalidTries`] if `tries` is zero.
    pub fn build(self) -> Result<M2xConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries { tries });
        }

        let api_version = self.api_version.unwrap_or_else(ApiVersion::latest);
        if api_version != ApiVersion::latest() {
            tracing::debug!(
                "M2X config overriding default API version {} with {}",
                ApiVersion::latest(),
                api_version
            );
        }

        Ok(M2xConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            api_version,
            tries,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
