//! Insertion-ordered query string builder and parser.
//!
//! ```
//! use qparams::QueryParameterSet;
//!
//! let mut params = QueryParameterSet::new();
//! params.update([("page", "2"), ("sort", "name")]);
//! assert_eq!(params.to_string(), "?page=2&sort=name");
//!
//! params.update([("page", "")]);
//! assert_eq!(params.to_string(), "?sort=name");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod error;
mod helpers;
#[cfg(feature = "serde")]
mod json;
mod options;
mod percent_encode;
mod query_params;
mod update;
mod value;

// Public API
pub use error::{Error, ErrorKind, Result};
pub use options::Options;
pub use query_params::{Iter, QueryParameterSet};
pub use update::Update;
pub use value::ParamValue;
