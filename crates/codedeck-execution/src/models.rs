//! Wire and result types for sandbox execution

use serde::{Deserialize, Serialize};

/// Captured output of one sandbox run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOutput {
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionOutput {
    /// Output representing a failure, with the reason captured as stderr.
    pub fn from_stderr(stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Piston execute request body.
#[derive(Debug, Serialize)]
pub(crate) struct ExecuteRequest<'a> {
    pub language: &'a str,
    pub version: &'a str,
    pub files: Vec<ExecuteFile<'a>>,
}

/// One source file in the request payload.
#[derive(Debug, Serialize)]
pub(crate) struct ExecuteFile<'a> {
    pub content: &'a str,
}

/// Piston execute response body. The API reports `run` for executed code
/// and `compile` when compilation failed before the run stage.
#[derive(Debug, Deserialize)]
pub(crate) struct ExecuteResponse {
    #[serde(default)]
    pub run: Option<StageOutput>,
    #[serde(default)]
    pub compile: Option<StageOutput>,
}

/// Captured output of one pipeline stage.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct StageOutput {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
}

/// Error payload the API may attach to non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: Option<String>,
}
