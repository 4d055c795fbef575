//! Resource traits shared by every M2X resource wrapper.
//!
//! - [`RestResource`]: path table, transport access and request dispatch
//! - [`CrudResource`]: list, create, update, view and delete
//! - [`MetadataResource`]: the metadata endpoints
//!
//! Wrappers implement [`RestResource`] by declaring their path table and
//! then opt into the families they support. Every provided method resolves
//! exactly one path and issues exactly one transport call.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use m2x::rest::{CrudResource, ResourcePath, ResourceOperation, RestResource};
//! use m2x::{HttpMethod, Transport};
//!
//! pub struct Jobs<T> { transport: Arc<T> }
//!
//! impl<T: Transport> RestResource for Jobs<T> {
//!     type Transport = T;
//!     const NAME: &'static str = "Job";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/jobs"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::View, &["id"], "/jobs/%s"),
//!     ];
//!
//!     fn transport(&self) -> &T {
//!         &self.transport
//!     }
//! }
//!
//! impl<T: Transport> CrudResource for Jobs<T> {}
//!
//! let jobs = Jobs { transport };
//! let response = jobs.view("j1").await?;
//! ```

use serde_json::Value;

use crate::clients::{HttpMethod, HttpResponse, RequestOptions, Transport};
use crate::rest::{get_path, Params, ResourceError, ResourceOperation, ResourcePath};

/// A REST resource bound to a transport.
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name used in errors (e.g., "Collection")
/// - `PATHS`: One path per supported operation
#[allow(async_fn_in_trait)]
pub trait RestResource: Send + Sync {
    /// The transport requests are sent through.
    type Transport: Transport;

    /// The singular name of the resource (e.g., "Device").
    const NAME: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the shared transport.
    fn transport(&self) -> &Self::Transport;

    /// Resolves the path for `operation` and renders it with `ids`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the operation is not
    /// declared, or the template errors from [`ResourcePath::render`].
    fn resolve(
        operation: ResourceOperation,
        ids: &[&str],
    ) -> Result<(&'static ResourcePath, String), ResourceError> {
        let path = get_path(Self::PATHS, operation).ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation: operation.as_str(),
        })?;
        let url = path.render(Self::NAME, ids)?;
        Ok((path, url))
    }

    /// Resolves a path and sends one request through the transport.
    ///
    /// # Errors
    ///
    /// Returns path errors before anything is sent, and transport errors
    /// unchanged as [`ResourceError::Http`].
    async fn dispatch(
        &self,
        operation: ResourceOperation,
        ids: &[&str],
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, ResourceError> {
        let (path, url) = Self::resolve(operation, ids)?;

        tracing::debug!(
            resource = Self::NAME,
            operation = operation.as_str(),
            method = %path.http_method,
            path = %url,
            "Dispatching resource request"
        );

        let transport = self.transport();
        let response = match path.http_method {
            HttpMethod::Get => transport.get(&url, options).await?,
            HttpMethod::Post => transport.post(&url, options).await?,
            HttpMethod::Put => transport.put(&url, options).await?,
            HttpMethod::Delete => transport.delete(&url, options).await?,
        };

        Ok(response)
    }
}

/// Returns options carrying `params` as the query string.
///
/// A missing map becomes an empty one, so both forms send the same request.
#[must_use]
pub fn query_options(params: Option<Params>) -> RequestOptions {
    RequestOptions::new().qs(params.unwrap_or_default())
}

/// Returns options carrying `params` as the JSON body.
#[must_use]
pub fn body_options(params: Params) -> RequestOptions {
    RequestOptions::new().params(params)
}

/// The list/create/update/view/delete family.
#[allow(async_fn_in_trait)]
pub trait CrudResource: RestResource {
    /// Lists resources, optionally filtered by query parameters.
    ///
    /// `None` and an empty map produce identical requests.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    async fn list(&self, params: Option<Params>) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::List, &[], Some(query_options(params)))
            .await
    }

    /// Creates a resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    async fn create(&self, params: Params) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::Create, &[], Some(body_options(params)))
            .await
    }

    /// Updates the resource with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] for an empty id, or the
    /// transport error.
    async fn update(&self, id: &str, params: Params) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::Update, &[id], Some(body_options(params)))
            .await
    }

    /// Fetches the resource with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] for an empty id, or the
    /// transport error.
    async fn view(&self, id: &str) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::View, &[id], None).await
    }

    /// Deletes the resource with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] for an empty id, or the
    /// transport error.
    async fn delete(&self, id: &str) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::Delete, &[id], None).await
    }
}

/// The metadata endpoints.
#[allow(async_fn_in_trait)]
pub trait MetadataResource: RestResource {
    /// Reads all custom metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    async fn metadata(&self, id: &str) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::Metadata, &[id], None).await
    }

    /// Reads one metadata field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    async fn metadata_field(&self, id: &str, field: &str) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::MetadataField, &[id, field], None)
            .await
    }

    /// Replaces all custom metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    async fn update_metadata(
        &self,
        id: &str,
        params: Params,
    ) -> Result<HttpResponse, ResourceError> {
        self.dispatch(
            ResourceOperation::UpdateMetadata,
            &[id],
            Some(body_options(params)),
        )
        .await
    }

    /// Writes one metadata field. The body is exactly `{"value": value}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    async fn update_metadata_field(
        &self,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<HttpResponse, ResourceError> {
        let mut body = Params::new();
        body.insert("value".to_string(), value);

        self.dispatch(
            ResourceOperation::UpdateMetadataField,
            &[id, field],
            Some(body_options(body)),
        )
        .await
    }
}

