#![forbid(unsafe_code)]

//! Hook request parsing
//!
//! The host delivers one JSON object per invocation:
//!
//! ```json
//! {"tool_name": "Write", "tool_input": {"file_path": "src/app.ts", "content": "..."}}
//! ```
//!
//! Only `Write` and `Edit` operations carry content worth inspecting.

use crate::error::HookError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;

/// A single request from the host
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HookRequest {
    /// Operation kind, e.g. `Write`, `Edit`, `Bash`
    #[serde(default)]
    pub tool_name: String,

    /// Operation arguments; their shape depends on the operation kind
    #[serde(default)]
    pub tool_input: Map<String, Value>,
}

/// The operation a request describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    /// A whole file is being written
    Write { file_path: &'a str, content: &'a str },
    /// A fragment of a file is being replaced
    Edit {
        file_path: &'a str,
        new_string: &'a str,
    },
    /// Any other operation; never inspected
    Other(&'a str),
}

impl Operation<'_> {
    /// Path and text to inspect, for operations that carry content
    pub fn content(&self) -> Option<(&str, &str)> {
        match *self {
            Operation::Write { file_path, content } => Some((file_path, content)),
            Operation::Edit {
                file_path,
                new_string,
            } => Some((file_path, new_string)),
            Operation::Other(_) => None,
        }
    }
}

impl HookRequest {
    /// Parse a request from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `HookError::MalformedInput` if the JSON is invalid or does not
    /// have the request shape.
    pub fn from_json(payload: &str) -> Result<Self, HookError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Read the complete payload from a reader and parse it
    ///
    /// # Errors
    ///
    /// Returns `HookError::Read` on I/O failure, `HookError::InvalidEncoding`
    /// for non-UTF-8 input, and `HookError::MalformedInput` for invalid JSON.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, HookError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let payload = String::from_utf8(bytes)?;
        Self::from_json(&payload)
    }

    /// Convenience constructor for a `Write` request
    pub fn write(file_path: &str, content: &str) -> Self {
        Self::with_input("Write", [("file_path", file_path), ("content", content)])
    }

    /// Convenience constructor for an `Edit` request
    pub fn edit(file_path: &str, new_string: &str) -> Self {
        Self::with_input("Edit", [("file_path", file_path), ("new_string", new_string)])
    }

    fn with_input<const N: usize>(tool_name: &str, fields: [(&str, &str); N]) -> Self {
        let tool_input = fields
            .into_iter()
            .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
            .collect();
        Self {
            tool_name: tool_name.to_string(),
            tool_input,
        }
    }

    fn field(&self, key: &str) -> &str {
        self.tool_input
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Path of the file the operation targets, empty if absent
    pub fn file_path(&self) -> &str {
        self.field("file_path")
    }

    /// Classify the request by operation kind
    pub fn operation(&self) -> Operation<'_> {
        match self.tool_name.as_str() {
            "Write" => Operation::Write {
                file_path: self.file_path(),
                content: self.field("content"),
            },
            "Edit" => Operation::Edit {
                file_path: self.file_path(),
                new_string: self.field("new_string"),
            },
            other => Operation::Other(other),
        }
    }
}
