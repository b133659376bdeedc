//! # typequick
//!
//! Infer TypeScript type declarations from live JSON APIs.
//!
//! Point typequick at a JSON endpoint and it fetches the payload and
//! emits a minimal set of named, de-duplicated `interface` declarations
//! describing it, nested objects and homogeneous arrays-of-objects
//! included.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use typequick::{convert_api_to_types, ApiRequest, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let request = ApiRequest::get("jsonplaceholder.typicode.com/users");
//!     let result = convert_api_to_types(&request).await?;
//!     println!("{}", result.types);
//!     Ok(())
//! }
//! ```
//!
//! The engine is also usable without the network:
//!
//! ```rust,ignore
//! use typequick::infer::declarations_for;
//!
//! let value = serde_json::json!({"id": 1, "name": "a"});
//! println!("{}", declarations_for(&value));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐    JSON value    ┌──────────────────┐
//! │  Fetcher   │ ───────────────▶ │ Inference Engine │
//! │ (reqwest)  │                  │  (pure function) │
//! └────────────┘                  └──────────────────┘
//!       ▲                                  │
//!   url, method,                  declaration text +
//!     headers                      request summary
//! ```
//!
//! The fetcher performs one single-shot request (no retries, no auth
//! flows); the engine is a pure function of the decoded document and
//! never fails.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP fetching
pub mod fetch;

/// Type inference engine
pub mod infer;

/// End-to-end conversion
pub mod convert;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use convert::{convert_api_to_types, example_urls, Converter};
pub use fetch::{Fetcher, FetcherConfig};
pub use infer::declarations_for;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
