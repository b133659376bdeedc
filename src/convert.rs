//! End-to-end conversion
//!
//! Wires the fetcher and the inference engine together: fetch one JSON
//! payload, infer its declarations, and report the request that
//! produced them.

use crate::error::Result;
use crate::fetch::{Fetcher, FetcherConfig};
use crate::infer::declarations_for;
use crate::types::{ApiRequest, ConversionResult, Method, RequestSummary};
use tracing::debug;

/// Converts API endpoints into TypeScript declarations
#[derive(Debug, Default)]
pub struct Converter {
    fetcher: Fetcher,
}

impl Converter {
    /// Create a converter with a default fetcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with a custom fetcher
    pub fn with_fetcher(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Create a converter with a custom fetcher configuration
    pub fn with_config(config: FetcherConfig) -> Self {
        Self::with_fetcher(Fetcher::with_config(config))
    }

    /// Fetch the endpoint described by `request` and infer declarations
    /// for its response body.
    pub async fn convert(&self, request: &ApiRequest) -> Result<ConversionResult> {
        let value = self.fetcher.fetch_json(request).await?;
        let types = declarations_for(&value);
        debug!("Inferred {} bytes of declarations", types.len());

        Ok(ConversionResult {
            types,
            request_config: RequestSummary {
                method: request.method,
                headers: request.header_map(),
            },
        })
    }
}

/// Convert an endpoint with a default fetcher (convenience function)
pub async fn convert_api_to_types(request: &ApiRequest) -> Result<ConversionResult> {
    Converter::new().convert(request).await
}

/// Public JSON endpoints useful for trying the tool out, per method
pub fn example_urls(method: Method) -> &'static [&'static str] {
    match method {
        Method::GET => &[
            "https://jsonplaceholder.typicode.com/users",
            "https://jsonplaceholder.typicode.com/posts",
            "https://api.github.com/users/octocat",
            "https://httpbin.org/get",
            "https://dummyjson.com/products",
            "https://reqres.in/api/users",
            "https://jsonplaceholder.typicode.com/comments",
        ],
        Method::POST => &[
            "https://jsonplaceholder.typicode.com/posts",
            "https://httpbin.org/post",
            "https://reqres.in/api/users",
            "https://dummyjson.com/products/add",
            "https://jsonplaceholder.typicode.com/users",
        ],
        Method::PUT => &[
            "https://jsonplaceholder.typicode.com/posts/1",
            "https://httpbin.org/put",
            "https://reqres.in/api/users/2",
            "https://dummyjson.com/products/1",
            "https://jsonplaceholder.typicode.com/users/1",
        ],
        Method::PATCH => &[
            "https://jsonplaceholder.typicode.com/posts/1",
            "https://httpbin.org/patch",
            "https://reqres.in/api/users/2",
            "https://dummyjson.com/products/1",
        ],
        Method::DELETE => &[
            "https://jsonplaceholder.typicode.com/posts/1",
            "https://httpbin.org/delete",
            "https://reqres.in/api/users/2",
            "https://dummyjson.com/products/1",
            "https://jsonplaceholder.typicode.com/users/1",
        ],
    }
}
