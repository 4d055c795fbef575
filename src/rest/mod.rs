//! REST resource infrastructure for the M2X API.
//!
//! This module provides:
//!
//! - **Path templates**: [`ResourcePath`] tables and [`build_path`], which
//!   substitute positional identifiers into `%s` templates and fail fast on
//!   an identifier count mismatch
//! - **Parameter merging**: [`merge_params`] and [`DelegationContext`], which
//!   inject an owning resource's id into caller parameters without mutating
//!   them
//! - **Resource traits**: [`RestResource`], [`CrudResource`] and
//!   [`MetadataResource`], whose provided methods map one call to one request
//! - **Delegation**: [`KeyOperations`] and [`KeyDelegation`], used by
//!   collections and devices to manage keys through the keys resource
//! - **[`ResourceError`]**: errors raised while building or sending requests
//!
//! # Example
//!
//! ```rust,ignore
//! use m2x::{M2xClient, M2xConfig, ApiKey};
//! use m2x::rest::{CrudResource, MetadataResource};
//! use serde_json::json;
//!
//! let config = M2xConfig::builder()
//!     .api_key(ApiKey::new("your-key").unwrap())
//!     .build()?;
//! let client = M2xClient::new(&config)?;
//!
//! let collections = client.collections();
//! collections.list(None).await?;
//! collections.add_device("c1", "d1").await?;
//! collections.update_metadata_field("c1", "owner", json!("ops")).await?;
//! collections.create_key("c1", None).await?;
//! ```

mod delegation;
mod errors;
mod params;
mod path;
pub(crate) mod resource;

pub mod resources;

// Public exports
pub use delegation::{KeyDelegation, KeyOperations};
pub use errors::ResourceError;
pub use params::{merge_params, to_params, DelegationContext, Params};
pub use path::{
    build_encoded_path, build_path, get_path, require_id, ResourceOperation, ResourcePath,
    PLACEHOLDER,
};
pub use resource::{CrudResource, MetadataResource, RestResource};
