use colored::*;
use esbind_core::{
    ActionError, ArgumentError,
    transport::http::{ClientConnectError, HttpTransportError},
};
use std::fmt::Display;

use crate::dispatch::DispatchError;

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

pub struct ActionList(pub Vec<String>);

/// An action name together with the query parameters it accepts.
pub struct ParamList(pub String, pub Vec<String>);

pub struct GenericError<T: Display>(pub &'static str, pub T);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl From<serde_json::Value> for FormattedString {
    fn from(value: serde_json::Value) -> Self {
        match value {
            // Plain-text responses (e.g. `_cat` without `format=json`) print as-is
            serde_json::Value::String(text) => FormattedString(text.trim_end().to_string()),
            value => FormattedString(
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()),
            ),
        }
    }
}

impl From<ArgumentError> for FormattedString {
    fn from(err: ArgumentError) -> Self {
        FormattedString(format!("{}\n\n'{}'", "Invalid Arguments:".red().bold(), err))
    }
}

impl From<HttpTransportError> for FormattedString {
    fn from(err: HttpTransportError) -> Self {
        match err {
            HttpTransportError::Status { status, body } => {
                let body = FormattedString::from(body);
                FormattedString(format!(
                    "{} status={}\n{}",
                    "Request Failed:".red().bold(),
                    status,
                    body.0
                ))
            }
            err => FormattedString(format!("{}\n\n'{}'", "Call Failed:".red().bold(), err)),
        }
    }
}

impl From<DispatchError<HttpTransportError>> for FormattedString {
    fn from(err: DispatchError<HttpTransportError>) -> Self {
        match err {
            DispatchError::Action(ActionError::Argument(err)) => FormattedString::from(err),
            DispatchError::Action(ActionError::Transport(err)) => FormattedString::from(err),
            err @ DispatchError::UnknownAction(_) => FormattedString(format!(
                "{}\n\n'{}'\n\nRun `esbind actions` to list the supported actions.",
                "Call Failed:".red().bold(),
                err
            )),
        }
    }
}

impl From<anyhow::Error> for FormattedString {
    fn from(err: anyhow::Error) -> Self {
        FormattedString(format!(
            "{}\n\n'{:#}'",
            "Failed to read file:".red().bold(),
            err
        ))
    }
}

impl<T: Display> From<GenericError<T>> for FormattedString {
    fn from(GenericError(msg, err): GenericError<T>) -> Self {
        FormattedString(format!("{}:\n\n'{}'", msg.red().bold(), err))
    }
}

impl From<ClientConnectError> for FormattedString {
    fn from(err: ClientConnectError) -> Self {
        FormattedString(format!("{}\n\n'{}'", "Connection Error:".red().bold(), err))
    }
}

impl From<ActionList> for FormattedString {
    fn from(ActionList(actions): ActionList) -> Self {
        if actions.is_empty() {
            return FormattedString("No actions found.".yellow().to_string());
        }

        let mut out = String::new();
        out.push_str("Available Actions:\n");
        for action in actions {
            out.push_str(&format!("  - {}\n", action.green()));
        }
        FormattedString(out.trim_end().to_string())
    }
}

impl From<ParamList> for FormattedString {
    fn from(ParamList(action, mut params): ParamList) -> Self {
        params.sort();

        let mut out = format!("{} {} {{\n", "action".cyan(), action.green());
        for param in params {
            out.push_str(&format!("  {}\n", param));
        }
        out.push('}');
        FormattedString(out)
    }
}
