//! The top-level M2X client.
//!
//! [`M2xClient`] owns one shared transport and hands out the resource
//! wrappers built on it. Collections and devices delegate key management to
//! the same [`Keys`] instance the client exposes.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpError, Transport};
use crate::config::M2xConfig;
use crate::rest::resources::{Collections, Devices, Keys, Utils};

/// Entry point to the M2X API.
///
/// # Example
///
/// ```rust,ignore
/// use m2x::{ApiKey, M2xClient, M2xConfig};
/// use m2x::rest::CrudResource;
///
/// let config = M2xConfig::builder()
///     .api_key(ApiKey::new("your-key").unwrap())
///     .tries(3)
///     .build()?;
/// let client = M2xClient::new(&config)?;
///
/// let devices = client.devices().list(None).await?;
/// let time = client.utils().time().await?;
/// ```
#[derive(Debug)]
pub struct M2xClient<T = HttpClient> {
    transport: Arc<T>,
    keys: Arc<Keys<T>>,
    collections: Collections<T>,
    devices: Devices<T>,
    utils: Utils<T>,
}

impl M2xClient<HttpClient> {
    /// Creates a client backed by [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the underlying HTTP client cannot be built.
    pub fn new(config: &M2xConfig) -> Result<Self, HttpError> {
        let transport = HttpClient::new(config)?;
        tracing::debug!(
            base_url = %config.base_url(),
            api_version = %config.api_version(),
            "Created M2X client"
        );
        Ok(Self::with_transport(Arc::new(transport)))
    }
}

impl<T: Transport> M2xClient<T> {
    /// Creates a client over an existing transport.
    #[must_use]
    pub fn with_transport(transport: Arc<T>) -> Self {
        let keys = Arc::new(Keys::new(Arc::clone(&transport)));

        Self {
            collections: Collections::new(Arc::clone(&transport), Arc::clone(&keys)),
            devices: Devices::new(Arc::clone(&transport), Arc::clone(&keys)),
            utils: Utils::new(Arc::clone(&transport)),
            keys,
            transport,
        }
    }

    /// Returns the shared transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the keys resource.
    #[must_use]
    pub fn keys(&self) -> &Keys<T> {
        &self.keys
    }

    /// Returns the collections resource.
    #[must_use]
    pub const fn collections(&self) -> &Collections<T> {
        &self.collections
    }

    /// Returns the devices resource.
    #[must_use]
    pub const fn devices(&self) -> &Devices<T> {
        &self.devices
    }

    /// Returns the utility endpoints.
    #[must_use]
    pub const fn utils(&self) -> &Utils<T> {
        &self.utils
    }
}

// Verify M2xClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<M2xClient>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use crate::config::ApiKey;
    use crate::rest::CrudResource;
    use crate::testing::{params, RecordingTransport};
    use serde_json::json;

    #[test]
    fn test_new_builds_http_client() {
        let config = M2xConfig::builder()
            .api_key(ApiKey::new("secret").unwrap())
            .build()
            .unwrap();

        let client = M2xClient::new(&config).unwrap();

        assert_eq!(client.transport().base_uri(), "https://api-m2x.att.com");
        assert_eq!(client.transport().base_path(), "/v2");
    }

    #[tokio::test]
    async fn test_resources_share_one_transport() {
        let client = M2xClient::with_transport(Arc::new(RecordingTransport::new()));

        client.collections().view("c1").await.unwrap();
        client.devices().view("d1").await.unwrap();
        client.keys().view("k1").await.unwrap();
        client.utils().time().await.unwrap();

        let paths: Vec<String> = client
            .transport()
            .requests()
            .into_iter()
            .map(|r| r.path)
            .collect();
        assert_eq!(paths, vec!["/collections/c1", "/devices/d1", "/keys/k1", "/time"]);
    }

    #[tokio::test]
    async fn test_delegated_key_creation_reaches_shared_keys() {
        let client = M2xClient::with_transport(Arc::new(RecordingTransport::new()));

        client
            .collections()
            .create_key("c1", Some(params(json!({"name": "k"}))))
            .await
            .unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].http_method, HttpMethod::Post);
        assert_eq!(requests[0].path, "/keys");
        assert_eq!(requests[0].body, Some(json!({"name": "k", "collection": "c1"})));
    }
}
