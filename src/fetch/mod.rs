//! HTTP fetch module
//!
//! Single-shot JSON fetching for the inference engine.
//!
//! # Features
//!
//! - **URL Normalization**: Blank rejection, default `https://` scheme
//! - **Header Merging**: Caller headers over a JSON content-type default
//! - **Response Validation**: 2xx status and JSON content type required

mod client;

pub use client::{normalize_url, Fetcher, FetcherConfig, FetcherConfigBuilder};
