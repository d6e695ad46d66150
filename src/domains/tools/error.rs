//! Tool-specific error types.

use thiserror::Error;

/// Message used when the API rejects a request without saying why.
pub const GENERIC_API_FAILURE: &str = "API request failed";

/// Errors that can occur while dispatching a tool call.
///
/// Every variant is turned into an error result for the caller; none of them
/// ends the session.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The requested tool is not in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments do not satisfy the tool's schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API answered with a non-success status.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(String),
}

impl DispatchError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new remote error from a status code and message.
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::Remote {
            status,
            message: message.into(),
        }
    }

    /// Create a new transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// The text reported to the caller for this error.
    pub fn to_message(&self) -> String {
        match self {
            Self::UnknownTool(_) => self.to_string(),
            _ => format!("Error: {}", self),
        }
    }
}

impl From<reqwest::Error> for DispatchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

/// Arguments that do not satisfy a tool's parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid arguments: {message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Required strings that were supplied empty.
    pub fn empty_fields(fields: &[&str]) -> Self {
        let issues: Vec<String> = fields
            .iter()
            .map(|field| format!("{} must not be empty", field))
            .collect();
        Self::new(issues.join("; "))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
