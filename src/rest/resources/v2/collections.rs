//! Collection resource.
//!
//! Collections group devices. Besides the common operations and metadata
//! they can attach and detach devices, list the keys scoped to them, and
//! create or update such keys through the key delegate.
//!
//! # Example
//!
//! ```rust,ignore
//! use m2x::rest::{CrudResource, MetadataResource};
//! use serde_json::json;
//!
//! let collections = client.collections();
//! collections.add_device("c1", "d1").await?;
//! collections.update_metadata_field("c1", "owner", json!("ops")).await?;
//! collections.create_key("c1", None).await?;
//! ```

use std::sync::Arc;

use crate::clients::{HttpMethod, HttpResponse, Transport};
use crate::rest::resource::{body_options, query_options};
use crate::rest::resources::v2::Keys;
use crate::rest::{
    require_id, CrudResource, DelegationContext, KeyDelegation, KeyOperations, MetadataResource,
    Params, ResourceError, ResourceOperation, ResourcePath, RestResource,
};

/// The `/collections` resource.
///
/// `K` is the key delegate; it defaults to [`Keys`] over the same transport.
#[derive(Debug)]
pub struct Collections<T, K = Keys<T>> {
    transport: Arc<T>,
    keys: KeyDelegation<K>,
}

impl<T, K> Clone for Collections<T, K> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            keys: self.keys.clone(),
        }
    }
}

impl<T: Transport, K: KeyOperations> Collections<T, K> {
    /// The parameter injected into delegated key calls.
    pub const FOREIGN_KEY: &'static str = "collection";

    /// Creates the wrapper around a shared transport and key delegate.
    #[must_use]
    pub const fn new(transport: Arc<T>, keys: Arc<K>) -> Self {
        Self {
            transport,
            keys: KeyDelegation::new(keys, "Collection", Self::FOREIGN_KEY),
        }
    }

    /// Attaches a device to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if either id is empty or the request fails.
    pub async fn add_device(
        &self,
        id: &str,
        device_id: &str,
    ) -> Result<HttpResponse, ResourceError> {
        self.dispatch(
            ResourceOperation::AddAssociation,
            &[id, device_id],
            Some(body_options(Params::new())),
        )
        .await
    }

    /// Detaches a device from the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if either id is empty or the request fails.
    pub async fn remove_device(
        &self,
        id: &str,
        device_id: &str,
    ) -> Result<HttpResponse, ResourceError> {
        self.dispatch(
            ResourceOperation::RemoveAssociation,
            &[id, device_id],
            Some(body_options(Params::new())),
        )
        .await
    }

    /// Lists the API keys scoped to the collection.
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

    /// Creates an API key scoped to the collection.
    ///
    /// The `collection` parameter is always set to `id`, replacing any value
    /// supplied in `params`.
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

    /// Updates an API key, scoping it to the collection.
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

    /// Returns the key delegate.
    #[must_use]
    pub fn key_delegate(&self) -> &K {
        self.keys.keys()
    }
}

impl<T: Transport, K: KeyOperations> RestResource for Collections<T, K> {
    type Transport = T;

    const NAME: &'static str = "Collection";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/collections"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "/collections"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::View, &["id"], "/collections/%s"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &["id"], "/collections/%s"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "/collections/%s",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Metadata,
            &["id"],
            "/collections/%s/metadata",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateMetadata,
            &["id"],
            "/collections/%s/metadata",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::MetadataField,
            &["id", "field"],
            "/collections/%s/metadata/%s",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::UpdateMetadataField,
            &["id", "field"],
            "/collections/%s/metadata/%s",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::AddAssociation,
            &["id", "device_id"],
            "/collections/%s/devices/%s",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::RemoveAssociation,
            &["id", "device_id"],
            "/collections/%s/devices/%s",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::ListKeys, &[], "/keys"),
    ];

    fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport, K: KeyOperations> CrudResource for Collections<T, K> {}

impl<T: Transport, K: KeyOperations> MetadataResource for Collections<T, K> {}
