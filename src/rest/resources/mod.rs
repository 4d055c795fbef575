//! Version-specific REST resource implementations.
//!
//! Resources are organized by API version:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports latest version)
//!   v2/
//!     mod.rs         <- Version-specific resources
//! ```
//!
//! The latest version is re-exported at this module level:
//!
//! ```rust,ignore
//! use m2x::rest::resources::Collections;  // Uses latest version
//!
//! // Or explicitly:
//! use m2x::rest::resources::v2::Collections;
//! ```

pub mod v2;

pub use v2::*;
