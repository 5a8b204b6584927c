//! I/O operations for fetching.
//!
//! Everything that touches the network lives here, behind the
//! [`HttpClient`] trait so the rest of the pipeline can be driven by
//! in-memory clients in tests.

mod fetcher;
mod http;

pub use fetcher::Fetcher;
pub use http::HttpClient;
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
