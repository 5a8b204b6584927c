//! Single-shot HTTP GET of text documents with a bounded deadline.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and response types
//! - [`core`] - Pure status classification
//! - [`effects`] - I/O operations behind the [`HttpClient`] trait
//!
//! # Key Features
//!
//! - **All-or-nothing**: a body is returned only for a 2xx response
//! - **Bounded**: every request is cut off after [`FetchOptions::timeout`]
//! - **Mechanism-Only**: no retries; the caller decides what a failure means

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use crate::core::is_success;
pub use data::{FetchOptions, HttpResponse};
pub use effects::{Fetcher, HttpClient};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{BoxError, FetchError, Result};
