//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::convert::{example_urls, Converter};
use crate::error::{Error, Result, ResultExt};
use crate::infer::declarations_for;
use crate::types::{ApiRequest, Header, Method};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Convert {
                url,
                method,
                headers,
                output,
                show_request,
            } => {
                self.convert(url, *method, headers, output.as_deref(), *show_request)
                    .await
            }
            Commands::Infer { path, output } => self.infer(path, output.as_deref()),
            Commands::Examples { method } => self.examples(*method),
        }
    }

    /// Fetch an endpoint and print or write its declarations
    async fn convert(
        &self,
        url: &str,
        method: Method,
        raw_headers: &[String],
        output: Option<&Path>,
        show_request: bool,
    ) -> Result<()> {
        let headers = raw_headers
            .iter()
            .map(|h| parse_header(h))
            .collect::<Result<Vec<_>>>()?;

        let request = ApiRequest {
            url: url.to_string(),
            method,
            headers,
        };

        let result = Converter::new().convert(&request).await?;
        write_output(output, &result.types)?;

        if show_request {
            let config = serde_json::to_string_pretty(&result.request_config)
                .context("Failed to serialize request configuration")?;
            println!("{config}");
        }

        Ok(())
    }

    /// Run the engine on a local JSON document
    fn infer(&self, path: &PathBuf, output: Option<&Path>) -> Result<()> {
        let content = if path == Path::new("-") {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        } else {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        };

        let value: Value = serde_json::from_str(&content)?;
        write_output(output, &declarations_for(&value))
    }

    /// Print the example endpoint list for a method
    fn examples(&self, method: Method) -> Result<()> {
        for url in example_urls(method) {
            println!("{url}");
        }
        Ok(())
    }
}

/// Parse a 'Key: Value' header argument
fn parse_header(raw: &str) -> Result<Header> {
    let (key, value) = raw
        .split_once(':')
        .ok_or_else(|| Error::other(format!("Invalid header '{raw}', expected 'Key: Value'")))?;
    Ok(Header::new(key.trim(), value.trim()))
}

/// Print to stdout or write to a file
fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{text}\n"))
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}
