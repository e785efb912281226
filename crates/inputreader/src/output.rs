//! JSON output formatting

use inputreader_core::ReaderError;
use serde::{Deserialize, Serialize};

use crate::menu::MenuError;

const SCHEMA_VERSION: &str = "1";

/// JSON response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse<T> {
    /// Schema version for forward compatibility
    pub schema_version: String,
    /// Command that generated this response
    pub command: String,
    /// Status: "ok" or "error"
    pub status: String,
    /// Command-specific payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Failure details when status is "error"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl<T> JsonResponse<T> {
    /// Create a successful response
    pub fn ok(command: &str, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "ok".to_string(),
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(command: &str, error: JsonError) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "error".to_string(),
            data: None,
            error: Some(error),
        }
    }
}

/// Error object structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonError {
    /// Error code (e.g., "R001")
    pub code: String,
    /// Human-readable message
    pub message: String,
}

/// Data payload for ask command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskData {
    /// The line entered, without its terminator
    pub answer: String,
}

/// Data payload for select command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectData {
    /// The chosen label
    pub answer: String,
    /// 1-based number of the chosen option
    pub index: usize,
}

/// Error code and process exit code for a failed command
pub fn classify(err: &anyhow::Error) -> (&'static str, u8) {
    if let Some(e) = err.downcast_ref::<ReaderError>() {
        (e.code(), e.exit_code() as u8)
    } else if let Some(e) = err.downcast_ref::<MenuError>() {
        (e.code(), 1)
    } else {
        ("E001", 1)
    }
}

/// Render the JSON envelope for a failed command
pub fn error_json(command: &str, err: &anyhow::Error) -> String {
    let (code, _) = classify(err);
    let response: JsonResponse<()> = JsonResponse::error(
        command,
        JsonError {
            code: code.to_string(),
            message: format!("{:#}", err),
        },
    );
    // Only plain strings are serialized here
    serde_json::to_string(&response).unwrap_or_default()
}
