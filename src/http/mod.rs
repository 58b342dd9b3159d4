//! HTTP client wrapper used by the release providers.

mod client;

pub use client::HttpClient;
