//! API key resource.
//!
//! Keys are the credentials used to talk to M2X. Besides the common
//! operations they can be regenerated, which invalidates the old token.
//!
//! Keys are also the delegate for scoped key management on collections and
//! devices, through [`KeyOperations`].
//!
//! # Example
//!
//! ```rust,ignore
//! use m2x::rest::{CrudResource, to_params};
//! use serde_json::json;
//!
//! let keys = client.keys();
//! keys.create(to_params(&json!({"name": "reader", "permissions": ["GET"]}))?).await?;
//! keys.regenerate("abc123").await?;
//! ```

use std::sync::Arc;

use crate::clients::{HttpMethod, HttpResponse, Transport};
use crate::rest::resource::body_options;
use crate::rest::{
    CrudResource, KeyOperations, Params, ResourceError, ResourceOperation, ResourcePath,
    RestResource,
};

/// The `/keys` resource.
#[derive(Debug)]
pub struct Keys<T> {
    transport: Arc<T>,
}

impl<T> Clone for Keys<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> Keys<T> {
    /// Creates the wrapper around a shared transport.
    #[must_use]
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Regenerates the key, returning the new token.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn regenerate(&self, key: &str) -> Result<HttpResponse, ResourceError> {
        self.dispatch(
            ResourceOperation::Regenerate,
            &[key],
            Some(body_options(Params::new())),
        )
        .await
    }
}

impl<T: Transport> RestResource for Keys<T> {
    type Transport = T;

    const NAME: &'static str = "Key";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/keys"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "/keys"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::View, &["key"], "/keys/%s"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &["key"], "/keys/%s"),
        ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["key"], "/keys/%s"),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Regenerate,
            &["key"],
            "/keys/%s/regenerate",
        ),
    ];

    fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> CrudResource for Keys<T> {}

impl<T: Transport> KeyOperations for Keys<T> {
    async fn create_key(&self, params: Params) -> Result<HttpResponse, ResourceError> {
        self.create(params).await
    }

    async fn update_key(&self, key: &str, params: Params) -> Result<HttpResponse, ResourceError> {
        self.update(key, params).await
    }
}
