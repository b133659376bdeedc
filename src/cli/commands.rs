//! CLI commands and argument parsing

use crate::types::Method;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// typequick - infer TypeScript type declarations from JSON APIs
#[derive(Parser, Debug)]
#[command(name = "typequick")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch an API endpoint and print the inferred declarations
    Convert {
        /// Endpoint URL (https:// is assumed when no scheme is given)
        url: String,

        /// HTTP method
        #[arg(short, long, default_value = "get")]
        method: Method,

        /// Request header as 'Key: Value' (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,

        /// Write the declarations to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the request configuration as JSON
        #[arg(long)]
        show_request: bool,
    },

    /// Infer declarations from a local JSON document
    Infer {
        /// Path to a JSON file, or '-' for stdin
        path: PathBuf,

        /// Write the declarations to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List example endpoints for a method
    Examples {
        /// HTTP method
        #[arg(short, long, default_value = "get")]
        method: Method,
    },
}
