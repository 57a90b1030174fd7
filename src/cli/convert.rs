//! Convert expressions, one at a time or in batches

use super::CliError;
use crate::output::{Dialect, to_json};

/// Options for the convert command
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// The filter expression
    pub query: String,
    /// Operator spelling of the output
    pub dialect: Dialect,
}

/// Options for the batch command
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// JSON array of inputs
    pub input: Option<String>,
    /// Operator spelling of the output
    pub dialect: Dialect,
}

/// Convert a single expression
pub fn execute_convert(options: &ConvertOptions) -> serde_json::Value {
    to_json(&crate::convert(&options.query), options.dialect)
}

/// Convert every element of a JSON array. Elements that are not strings
/// produce `null` in the same position.
pub fn execute_batch(options: &BatchOptions) -> Result<serde_json::Value, CliError> {
    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let inputs: serde_json::Value = serde_json::from_str(json_str)?;

    let items = match inputs {
        serde_json::Value::Array(items) => items,
        other => return Err(CliError::NotAnArray(json_type_name(&other))),
    };

    log::debug!("converting batch of {} inputs", items.len());
    Ok(serde_json::Value::Array(
        items
            .iter()
            .map(|item| crate::convert_json(item, options.dialect))
            .collect(),
    ))
}

/// Render command output as compact or indented JSON
pub fn render(value: &serde_json::Value, pretty: bool) -> String {
    if pretty {
        format!("{:#}", value)
    } else {
        value.to_string()
    }
}

fn json_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
