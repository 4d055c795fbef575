//! M2X API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the M2X API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// M2X API version.
///
/// The version becomes the leading path segment of every request
/// (e.g., `/v2/devices`).
///
/// # Example
///
/// ```rust
/// use m2x::ApiVersion;
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::latest());
/// assert_eq!(version.base_path(), "/v2");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2.
    #[default]
    V2,
}

impl ApiVersion {
    /// Returns the latest API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }

    /// Returns the version string as used in URLs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V2 => "v2",
        }
    }

    /// Returns the base path for requests against this version.
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/{}", self.as_str())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('/').to_lowercase().as_str() {
            "v2" | "2" => Ok(Self::V2),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
