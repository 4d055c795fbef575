//! # M2X API Rust SDK
//!
//! A Rust client for the M2X IoT REST API, providing type-safe
//! configuration, an async HTTP transport with retry handling, and resource
//! wrappers for collections, devices, keys and utility endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`M2xConfig`] and [`M2xConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - Path templates with positional `%s` identifiers that fail fast on
//!   mismatched arity, via [`rest::build_path`]
//! - Non-mutating parameter merging for delegated calls, via
//!   [`rest::merge_params`]
//! - Resource wrappers that map each call to exactly one request
//! - Key management on collections and devices, delegated to [`rest::resources::Keys`]
//!
//! ## Quick Start
//!
//! ```rust
//! use m2x::{ApiKey, ApiVersion, M2xConfig};
//!
//! let config = M2xConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .tries(3)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.tries(), 3);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use m2x::{ApiKey, M2xClient, M2xConfig};
//! use m2x::rest::{CrudResource, MetadataResource, to_params};
//! use serde_json::json;
//!
//! let config = M2xConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()?;
//! let client = M2xClient::new(&config)?;
//!
//! // List collections
//! let response = client.collections().list(None).await?;
//! println!("{}", response.body);
//!
//! // Attach a device and tag the collection
//! client.collections().add_device("c1", "d1").await?;
//! client.collections().update_metadata_field("c1", "owner", json!("ops")).await?;
//!
//! // Create a key scoped to the collection
//! let params = to_params(&json!({"name": "reader", "permissions": ["GET"]}))?;
//! client.collections().create_key("c1", Some(params)).await?;
//! ```
//!
//! ## Custom Transports
//!
//! Every wrapper is generic over [`Transport`]. Supplying your own
//! implementation to [`M2xClient::with_transport`] lets you record, stub or
//! reroute requests without touching the wrappers.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and path templates validate before any I/O
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

#[cfg(test)]
mod testing;

// Re-export public types at crate root for convenience
pub use client::M2xClient;
pub use config::{ApiKey, ApiVersion, BaseUrl, M2xConfig, M2xConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, RequestOptions,
    Transport,
};

// Re-export REST resource types
pub use rest::{
    CrudResource, KeyOperations, MetadataResource, Params, ResourceError, RestResource,
};
