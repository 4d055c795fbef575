//! REST resources for M2X API version 2.
//!
//! # Available Resources
//!
//! - [`Collections`] - Groups of devices, with device membership and scoped keys
//! - [`Devices`] - Data sources, with location, streams and scoped keys
//! - [`Keys`] - API keys, also the delegate for scoped key management
//! - [`Utils`] - Server time
//!
//! All wrappers share one transport through an `Arc` and issue exactly one
//! request per call.

mod collections;
mod devices;
mod keys;
mod utils;

pub use collections::Collections;
pub use devices::Devices;
pub use keys::Keys;
pub use utils::Utils;
