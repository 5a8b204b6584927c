//! Immutable data types for fetching.
//!
//! These types are passed by reference between the fetcher and the
//! client and are never mutated once built.

pub mod options;
pub mod response;

pub use options::FetchOptions;
pub use response::HttpResponse;
