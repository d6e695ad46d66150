//! Typed tool parameters.
//!
//! Each tool declares its arguments as a `Deserialize + JsonSchema` struct.
//! serde checks incoming arguments against it and schemars renders the schema
//! advertised in `tools/list`.

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ValidationError;

/// Parameters of a docs tool.
pub trait ToolParams: DeserializeOwned + JsonSchema + Send + 'static {
    /// String arguments that must not be empty, keyed by argument name.
    fn required_text(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }
}

/// Deserialize the call arguments into `P`.
///
/// Absent arguments count as an empty object and unknown fields are ignored.
pub fn parse_arguments<P: ToolParams>(
    arguments: Option<&JsonObject>,
) -> Result<P, ValidationError> {
    let value = Value::Object(arguments.cloned().unwrap_or_default());
    let params: P =
        serde_json::from_value(value).map_err(|e| ValidationError::new(e.to_string()))?;

    let empty: Vec<&'static str> = params
        .required_text()
        .into_iter()
        .filter(|(_, text)| text.is_empty())
        .map(|(name, _)| name)
        .collect();

    if empty.is_empty() {
        Ok(params)
    } else {
        Err(ValidationError::empty_fields(&empty))
    }
}
