//! Cross-resource delegation for API key operations.
//!
//! Collections and devices can create and update API keys scoped to
//! themselves. They do not talk to `/keys` directly: they hold a handle to
//! something implementing [`KeyOperations`] and forward the call with their
//! own identifier injected under a foreign-key field (`collection` or
//! `device`).
//!
//! Errors from the delegate are returned unchanged.

use std::sync::Arc;

use crate::clients::HttpResponse;
use crate::rest::{require_id, DelegationContext, Params, ResourceError};

/// The key-management capability delegated to by other resources.
///
/// Implemented by [`Keys`](crate::rest::resources::Keys); tests may supply
/// their own implementation to observe forwarded calls.
#[allow(async_fn_in_trait)]
pub trait KeyOperations: Send + Sync {
    /// Creates an API key from `params`.
    async fn create_key(&self, params: Params) -> Result<HttpResponse, ResourceError>;

    /// Updates the API key identified by `key` with `params`.
    async fn update_key(&self, key: &str, params: Params) -> Result<HttpResponse, ResourceError>;
}

/// Forwards key operations to a shared [`KeyOperations`] implementation.
#[derive(Debug)]
pub struct KeyDelegation<K> {
    keys: Arc<K>,
    resource: &'static str,
    foreign_key: &'static str,
}

impl<K> Clone for KeyDelegation<K> {
    fn clone(&self) -> Self {
        Self {
            keys: Arc::clone(&self.keys),
            resource: self.resource,
            foreign_key: self.foreign_key,
        }
    }
}

impl<K: KeyOperations> KeyDelegation<K> {
    /// Creates a delegation for `resource` injecting `foreign_key`.
    #[must_use]
    pub const fn new(keys: Arc<K>, resource: &'static str, foreign_key: &'static str) -> Self {
        Self {
            keys,
            resource,
            foreign_key,
        }
    }

    /// Returns the delegate.
    #[must_use]
    pub fn keys(&self) -> &K {
        &self.keys
    }

    /// Returns the injected field name.
    #[must_use]
    pub const fn foreign_key(&self) -> &'static str {
        self.foreign_key
    }

    /// Builds the context for `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] if `owner_id` is empty.
    pub fn context(&self, owner_id: &str) -> Result<DelegationContext, ResourceError> {
        require_id(self.resource, "id", owner_id)?;
        Ok(DelegationContext::new(self.foreign_key, owner_id))
    }

    /// Creates a key owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] before delegating if
    /// `owner_id` is empty, otherwise whatever the delegate returns.
    pub async fn create_key(
        &self,
        owner_id: &str,
        params: Option<Params>,
    ) -> Result<HttpResponse, ResourceError> {
        let context = self.context(owner_id)?;
        tracing::debug!(
            resource = self.resource,
            field = self.foreign_key,
            owner_id,
            "Delegating key creation"
        );
        self.keys.create_key(context.apply(params.as_ref())).await
    }

    /// Updates `key`, scoping it to `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] before delegating if
    /// `owner_id` is empty, otherwise whatever the delegate returns.
    pub async fn update_key(
        &self,
        owner_id: &str,
        key: &str,
        params: Option<Params>,
    ) -> Result<HttpResponse, ResourceError> {
        let context = self.context(owner_id)?;
        tracing::debug!(
            resource = self.resource,
            field = self.foreign_key,
            owner_id,
            key,
            "Delegating key update"
        );
        self.keys
            .update_key(key, context.apply(params.as_ref()))
            .await
    }
}
