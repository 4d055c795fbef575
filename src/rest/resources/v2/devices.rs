//! Device resource.
//!
//! Devices are the data sources in M2X. On top of the common operations
//! and metadata, a device exposes its location, its data streams, bulk
//! updates across streams, and keys scoped to it.

use std::sync::Arc;

use crate::clients::{HttpMethod, HttpResponse, Transport};
use crate::rest::resource::{body_options, query_options};
use crate::rest::resources::v2::Keys;
use crate::rest::{
    require_id, CrudResource, DelegationContext, KeyDelegation, KeyOperations, MetadataResource,
    Params, ResourceError, ResourceOperation, ResourcePath, RestResource,
};

/// The `/devices` resource.
///
/// `K` is the key delegate; it defaults to [`Keys`] over the same transport.
#[derive(Debug)]
pub struct Devices<T, K = Keys<T>> {
    transport: Arc<T>,
    keys: KeyDelegation<K>,
}

impl<T, K> Clone for Devices<T, K> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            keys: self.keys.clone(),
        }
    }
}

impl<T: Transport, K: KeyOperations> Devices<T, K> {
    /// The parameter injected into delegated key calls.
    pub const FOREIGN_KEY: &'static str = "device";

    /// Creates the wrapper around a shared transport and key delegate.
    #[must_use]
    pub const fn new(transport: Arc<T>, keys: Arc<K>) -> Self {
        Self {
            transport,
            keys: KeyDelegation::new(keys, "Device", Self::FOREIGN_KEY),
        }
    }

    /// Searches the public device catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn catalog(&self, params: Option<Params>) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::Catalog, &[], Some(query_options(params)))
            .await
    }

    /// Lists the tags used across the account's devices.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn tags(&self) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::Tags, &[], None).await
    }

    /// Reads the current location.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn location(&self, id: &str) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::Location, &[id], None).await
    }

    /// Updates the current location.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update_location(
        &self,
        id: &str,
        params: Params,
    ) -> Result<HttpResponse, ResourceError> {
        self.dispatch(
            ResourceOperation::UpdateLocation,
            &[id],
            Some(body_options(params)),
        )
        .await
    }

    /// Lists the device's data streams.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn streams(&self, id: &str) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::Streams, &[id], None).await
    }

    /// Fetches one data stream.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn stream(&self, id: &str, name: &str) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::Stream, &[id, name], None)
            .await
    }

    /// Creates or updates a data stream.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update_stream(
        &self,
        id: &str,
        name: &str,
        params: Option<Params>,
    ) -> Result<HttpResponse, ResourceError> {
        self.dispatch(
            ResourceOperation::UpdateStream,
            &[id, name],
            Some(body_options(params.unwrap_or_default())),
        )
        .await
    }

    /// Deletes a data stream and its values.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete_stream(&self, id: &str, name: &str) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::DeleteStream, &[id, name], None)
            .await
    }

    /// Posts timestamped values to several streams at once.
    ///
    /// `params` is expected to carry a `values` object keyed by stream name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn post_updates(
        &self,
        id: &str,
        params: Params,
    ) -> Result<HttpResponse, ResourceError> {
        self.dispatch(
            ResourceOperation::PostUpdates,
            &[id],
            Some(body_options(params)),
        )
        .await
    }

    /// Lists the API keys scoped to the device.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if `id` is empty or the request fails.
    pub async fn keys(&self, id: &str) -> Result<HttpResponse, ResourceError> {
        require_id(Self::NAME, "id", id)?;
        let qs = DelegationContext::new(Self::FOREIGN_KEY, id).to_params();
        self.dispatch(ResourceOperation::ListKeys, &[], Some(query_options(Some(qs))))
            .await
    }

    /// Creates an API key scoped to the device.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if `id` is empty or the key delegate fails.
    pub async fn create_key(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<HttpResponse, ResourceError> {
        self.keys.create_key(id, params).await
    }

    /// Updates an API key, scoping it to the device.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if `id` is empty or the key delegate fails.
    pub async fn update_key(
        &self,
        id: &str,
        key: &str,
        params: Option<Params>,
    ) -> Result<HttpResponse, ResourceError> {
        self.keys.update_key(id, key, params).await
    }
}

impl<T: Transport, K: KeyOperations> RestResource for Devices<T, K> {
    type Transport = T;

    const NAME: &'static str = "Device";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/devices"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "/devices"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::View, &["id"], "/devices/%s"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &["id"], "/devices/%s"),
        ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["id"], "/devices/%s"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Catalog, &[], "/devices/catalog"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Tags, &[], "/devices/tags"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Metadata,
            &["id"],
            "/devices/%s/metadata",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateMetadata,
            &["id"],
            "/devices/%s/metadata",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::MetadataField,
            &["id", "field"],
            "/devices/%s/metadata/%s",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateMetadataField,
            &["id", "field"],
            "/devices/%s/metadata/%s",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Location,
            &["id"],
            "/devices/%s/location",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateLocation,
            &["id"],
            "/devices/%s/location",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Streams,
            &["id"],
            "/devices/%s/streams",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Stream,
            &["id", "name"],
            "/devices/%s/streams/%s",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateStream,
            &["id", "name"],
            "/devices/%s/streams/%s",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::DeleteStream,
            &["id", "name"],
            "/devices/%s/streams/%s",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::PostUpdates,
            &["id"],
            "/devices/%s/updates",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::ListKeys, &[], "/keys"),
    ];

    fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport, K: KeyOperations> CrudResource for Devices<T, K> {}

impl<T: Transport, K: KeyOperations> MetadataResource for Devices<T, K> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{params, RecordingTransport};
    use serde_json::json;

    fn devices() -> Devices<RecordingTransport> {
        let transport = Arc::new(RecordingTransport::new());
        let keys = Arc::new(Keys::new(Arc::clone(&transport)));
        Devices::new(transport, keys)
    }

    #[test]
    fn test_device_paths_are_consistent() {
        for path in Devices::<RecordingTransport>::PATHS {
            assert!(path.is_consistent(), "{path:?}");
            assert_eq!(path.http_method, path.operation.default_http_method());
        }
    }

    #[tokio::test]
    async fn test_catalog_and_tags() {
        let devices = devices();

        devices
            .catalog(Some(params(json!({"q": "thermo"}))))
            .await
            .unwrap();
        devices.tags().await.unwrap();

        let requests = devices.transport().requests();
        assert_eq!(requests[0].path, "/devices/catalog");
        assert_eq!(
            requests[0].query.as_ref().unwrap().get("q"),
            Some(&"thermo".to_string())
        );
        assert_eq!(requests[1].path, "/devices/tags");
        assert!(requests[1].query.is_none());
    }

    #[tokio::test]
    async fn test_location_round_trip_paths() {
        let devices = devices();

        devices.location("d1").await.unwrap();
        devices
            .update_location("d1", params(json!({"latitude": 1.0, "longitude": 2.0})))
            .await
            .unwrap();

        let requests = devices.transport().requests();
        assert_eq!(requests[0].http_method, HttpMethod::Get);
        assert_eq!(requests[1].http_method, HttpMethod::Put);
        assert_eq!(requests[0].path, "/devices/d1/location");
        assert_eq!(requests[1].path, "/devices/d1/location");
    }

    #[tokio::test]
    async fn test_stream_operations() {
        let devices = devices();

        devices.streams("d1").await.unwrap();
        devices.stream("d1", "temperature").await.unwrap();
        devices.update_stream("d1", "temperature", None).await.unwrap();
        devices.delete_stream("d1", "temperature").await.unwrap();

        let requests = devices.transport().requests();
        assert_eq!(requests[0].path, "/devices/d1/streams");
        assert_eq!(requests[1].path, "/devices/d1/streams/temperature");
        assert_eq!(requests[2].http_method, HttpMethod::Put);
        assert_eq!(requests[2].body, Some(json!({})));
        assert_eq!(requests[3].http_method, HttpMethod::Delete);
        assert_eq!(requests[3].path, "/devices/d1/streams/temperature");
    }

    #[tokio::test]
    async fn test_post_updates() {
        let devices = devices();
        let body = json!({
            "values": {
                "temperature": [{"timestamp": "2014-09-09T19:15:00.981Z", "value": 32}]
            }
        });

        devices.post_updates("d1", params(body.clone())).await.unwrap();

        let request = devices.transport().last();
        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.path, "/devices/d1/updates");
        assert_eq!(request.body, Some(body));
    }

    #[tokio::test]
    async fn test_metadata_field_update_wraps_value() {
        let devices = devices();

        devices
            .update_metadata_field("d1", "floor", json!("3"))
            .await
            .unwrap();

        let request = devices.transport().last();
        assert_eq!(request.path, "/devices/d1/metadata/floor");
        assert_eq!(request.body, Some(json!({"value": "3"})));
    }

    #[tokio::test]
    async fn test_keys_scoped_to_device() {
        let devices = devices();

        devices.keys("d1").await.unwrap();
        devices
            .create_key("d1", Some(params(json!({"name": "k", "device": "other"}))))
            .await
            .unwrap();

        let requests = devices.transport().requests();
        assert_eq!(requests[0].path, "/keys");
        assert_eq!(
            requests[0].query.as_ref().unwrap().get("device"),
            Some(&"d1".to_string())
        );
        assert_eq!(requests[1].http_method, HttpMethod::Post);
        assert_eq!(requests[1].body, Some(json!({"name": "k", "device": "d1"})));
    }

    #[tokio::test]
    async fn test_stream_name_is_required() {
        let devices = devices();

        let result = devices.stream("d1", "").await;

        assert!(matches!(
            result,
            Err(ResourceError::MissingIdentifier { resource: "Device", name: "name" })
        ));
        assert!(devices.transport().requests().is_empty());
    }
}
