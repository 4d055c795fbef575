//! Utility endpoints that are not tied to a resource.

use std::sync::Arc;

use crate::clients::{HttpMethod, HttpResponse, Transport};
use crate::rest::resource::query_options;
use crate::rest::{ResourceError, ResourceOperation, ResourcePath, RestResource};

/// Server time and other account-independent endpoints.
#[derive(Debug)]
pub struct Utils<T> {
    transport: Arc<T>,
}

impl<T> Clone for Utils<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> Utils<T> {
    /// Creates the wrapper around a shared transport.
    #[must_use]
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Returns the server time in seconds, milliseconds and ISO 8601.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn time(&self) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::Time, &[], Some(query_options(None)))
            .await
    }

    /// Returns the server time as seconds since the epoch.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn time_seconds(&self) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::TimeSeconds, &[], None).await
    }

    /// Returns the server time as milliseconds since the epoch.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn time_millis(&self) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::TimeMillis, &[], None).await
    }

    /// Returns the server time as an ISO 8601 timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn time_iso8601(&self) -> Result<HttpResponse, ResourceError> {
        self.dispatch(ResourceOperation::TimeIso8601, &[], None).await
    }
}

impl<T: Transport> RestResource for Utils<T> {
    type Transport = T;

    const NAME: &'static str = "Utils";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Time, &[], "/time"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::TimeSeconds, &[], "/time/seconds"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::TimeMillis, &[], "/time/millis"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::TimeIso8601, &[], "/time/iso8601"),
    ];

    fn transport(&self) -> &T {
        &self.transport
    }
}
