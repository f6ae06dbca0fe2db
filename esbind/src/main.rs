//! # Esbind CLI Entry Point
//!
//! The main executable for the esbind tool. This file drives the application lifecycle:
//!
//! 1. **Initialization**: Parses command-line arguments using [`cli::Cli`] and sets up logging.
//! 2. **Connection**: Builds an HTTP client for the target server via `esbind_core`.
//! 3. **Execution**: Assembles the action's arguments and dispatches them to the client.
//! 4. **Presentation**: Formats and prints the resulting data or error to standard output/error.

mod cli;
mod dispatch;
mod formatter;

use clap::Parser;
use cli::{Cli, Commands};
use esbind_core::{Arguments, Client, ParameterValidation, actions};
use formatter::{ActionList, FormattedString, GenericError, ParamList};
use serde_json::Value;
use std::{path::PathBuf, process};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    init_tracing(args.verbose);

    let validation = if args.lenient {
        ParameterValidation::Lenient
    } else {
        ParameterValidation::Strict
    };

    match args.command {
        Commands::Info => run_call(&args.url, validation, "info", Arguments::new()).await,
        Commands::Call {
            action,
            params,
            body,
            headers,
        } => {
            let arguments = build_arguments(params, body, headers);
            run_call(&args.url, validation, &action, arguments).await
        }
        Commands::Bulk {
            file,
            params,
            headers,
        } => run_bulk(&args.url, validation, file, params, headers).await,
        Commands::Actions => list_actions(),
        Commands::Params { action } => describe_params(&action),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!(
            "{}",
            FormattedString::from(GenericError("Failed to initialize logging", err))
        );
    }
}

fn build_arguments(
    params: Vec<(String, Value)>,
    body: Option<Value>,
    headers: Vec<(String, String)>,
) -> Arguments {
    let arguments = Arguments::from_iter(params).headers(headers);

    match body {
        Some(body) => arguments.body(body),
        None => arguments,
    }
}

fn connect_or_exit(url: &str, validation: ParameterValidation) -> Client {
    match Client::connect(url) {
        Ok(client) => client.with_parameter_validation(validation),
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

async fn run_call(url: &str, validation: ParameterValidation, action: &str, arguments: Arguments) {
    let client = connect_or_exit(url, validation);

    match dispatch::call(&client, action, &arguments).await {
        Ok(value) => println!("{}", FormattedString::from(value)),
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

async fn run_bulk(
    url: &str,
    validation: ParameterValidation,
    file: PathBuf,
    params: Vec<(String, Value)>,
    headers: Vec<(String, String)>,
) {
    let body = match dispatch::read_bulk_file(&file).await {
        Ok(body) => body,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    };

    let arguments = build_arguments(params, Some(body), headers);

    run_call(url, validation, "bulk", arguments).await
}

fn list_actions() {
    let names = actions::OPERATIONS
        .iter()
        .map(|op| op.name.to_string())
        .collect();

    println!("{}", FormattedString::from(ActionList(names)));
}

fn describe_params(action: &str) {
    match actions::operation(action) {
        Some(operation) => {
            let params = operation.allowed_params().into_iter().collect();
            println!(
                "{}",
                FormattedString::from(ParamList(operation.name.to_string(), params))
            );
        }
        None => {
            eprintln!(
                "{}",
                FormattedString::from(GenericError("Unknown action", action))
            );
            process::exit(1);
        }
    }
}
