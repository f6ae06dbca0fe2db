//! # CLI
//!
//! This module defines the command-line interface of `esbind` using `clap`.
//!
//! It is responsible for parsing user input and performing validation (e.g., ensuring headers
//! are `key:value` and parameters are `key=value`).
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "esbind", version, about = "Search-engine HTTP API client")]
pub struct Cli {
    /// The server URL to connect to
    #[arg(
        short,
        long,
        global = true,
        env = "ESBIND_URL",
        default_value = "http://localhost:9200"
    )]
    pub url: String,

    /// Drop unsupported parameters instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show basic information about the cluster
    Info,

    /// Call any supported action by name
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// esbind call search -p index=books -p size=5 --body '{"query": {"match_all": {}}}'
    /// esbind call ml.delete_data_frame_analytics -p id=my-job -p force=true
    /// ```
    Call {
        /// Action name (e.g. `search`, `cat.shards`)
        action: String,

        /// Parameters as key=value (values are parsed as JSON when possible)
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, serde_json::Value)>,

        /// JSON body
        #[arg(long, value_parser = parse_body)]
        body: Option<serde_json::Value>,

        #[arg(short = 'H', long = "header", value_parser = parse_header)]
        headers: Vec<(String, String)>,
    },

    /// Send a bulk request from a file
    ///
    /// The file is either a JSON array of bulk items or newline-delimited JSON.
    Bulk {
        /// Path to the bulk payload
        file: PathBuf,

        /// Parameters as key=value (e.g. index=books, refresh=true)
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, serde_json::Value)>,

        #[arg(short = 'H', long = "header", value_parser = parse_header)]
        headers: Vec<(String, String)>,
    },

    /// List every supported action
    Actions,

    /// Show the query parameters an action accepts
    Params {
        /// Action name (e.g. `bulk`)
        action: String,
    },
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    s.split_once(':')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| "Format must be 'key:value'".to_string())
}

fn parse_param(s: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| "Format must be 'key=value'".to_string())?;

    let key = key.trim();
    if key.is_empty() {
        return Err("Parameter name cannot be empty".to_string());
    }

    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));

    Ok((key.to_string(), value))
}

fn parse_body(value: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(value).map_err(|e| format!("Invalid JSON: {e}"))
}
