//! CLI module
//!
//! Command-line interface for typequick.
//!
//! # Commands
//!
//! - `convert` - Fetch an endpoint and print inferred declarations
//! - `infer` - Run the engine on a local JSON document
//! - `examples` - List example endpoints for a method

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
