use serde::Serialize;
use serde_json::Value;

use crate::error::BindingsError;
use crate::value::VariableBindings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingsFormat {
    Json,
    Yaml,
    Auto,
}

#[derive(Debug, Clone)]
pub struct ParsedBindings {
    pub variables: VariableBindings,
    pub format: BindingsFormat,
}

/// Parses variable bindings from JSON or YAML text. The top-level document
/// must be a mapping.
pub fn parse_bindings_str(
    input: &str,
    format: BindingsFormat,
) -> Result<ParsedBindings, BindingsError> {
    match format {
        BindingsFormat::Json => into_bindings(serde_json::from_str(input)?, format),
        BindingsFormat::Yaml => into_bindings(serde_yaml::from_str(input)?, format),
        BindingsFormat::Auto => parse_bindings_auto(input),
    }
}

fn parse_bindings_auto(input: &str) -> Result<ParsedBindings, BindingsError> {
    // Heuristic: JSON documents start with `{` or `[` after trimming.
    let trimmed = input.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        match serde_json::from_str::<Value>(input) {
            Ok(value) => into_bindings(value, BindingsFormat::Json),
            Err(e) => match serde_yaml::from_str::<Value>(input) {
                Ok(value) => into_bindings(value, BindingsFormat::Yaml),
                Err(_) => Err(BindingsError::Json(e)),
            },
        }
    } else {
        match serde_yaml::from_str::<Value>(input) {
            Ok(value) => into_bindings(value, BindingsFormat::Yaml),
            Err(e) => match serde_json::from_str::<Value>(input) {
                Ok(value) => into_bindings(value, BindingsFormat::Json),
                Err(_) => Err(BindingsError::Yaml(e)),
            },
        }
    }
}

fn into_bindings(value: Value, format: BindingsFormat) -> Result<ParsedBindings, BindingsError> {
    match value {
        Value::Object(variables) => Ok(ParsedBindings { variables, format }),
        _ => Err(BindingsError::NotAMapping),
    }
}

/// Adapts any record-like value into variable bindings by enumerating its
/// own fields.
pub fn to_bindings<T: Serialize>(value: &T) -> Result<VariableBindings, BindingsError> {
    match serde_json::to_value(value)? {
        Value::Object(variables) => Ok(variables),
        _ => Err(BindingsError::NotAMapping),
    }
}
