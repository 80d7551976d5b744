//! Piston API client

use std::sync::Arc;

use reqwest::Client;
use tracing::{debug, error};

use crate::error::ExecutionError;
use crate::models::{ApiErrorBody, ExecuteFile, ExecuteRequest, ExecuteResponse, ExecutionOutput};

const PISTON_API_URL: &str = "https://emkc.org/api/v2/piston/execute";

/// Client for a Piston-compatible execution sandbox.
pub struct PistonClient {
    client: Arc<Client>,
    base_url: String,
}

impl PistonClient {
    /// Create a client against the public Piston endpoint.
    pub fn new() -> Self {
        Self::with_client(Arc::new(Client::new()))
    }

    /// Create a client with a custom base URL (self-hosted sandboxes,
    /// tests).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url,
        }
    }

    /// Create a client with a custom HTTP client.
    pub fn with_client(client: Arc<Client>) -> Self {
        Self {
            client,
            base_url: PISTON_API_URL.to_string(),
        }
    }

    /// Execute code, converting every failure into captured stderr.
    ///
    /// This is the surface the editor shell calls: it cannot fail. API
    /// rejections come back as `stderr: "API Error: …"` and transport
    /// failures as `stderr: "Network Error: …"`.
    pub async fn execute(&self, code: &str, language: &str, version: &str) -> ExecutionOutput {
        match self.send(code, language, version).await {
            Ok(output) => output,
            Err(ExecutionError::Api(message)) => {
                ExecutionOutput::from_stderr(format!("API Error: {message}"))
            }
            Err(err) => ExecutionOutput::from_stderr(format!(
                "Network Error: Could not connect to the code execution service. {err}"
            )),
        }
    }

    /// Execute code, surfacing failures to callers that want them.
    pub async fn send(
        &self,
        code: &str,
        language: &str,
        version: &str,
    ) -> Result<ExecutionOutput, ExecutionError> {
        debug!(language, version, "executing code in sandbox");

        let request = ExecuteRequest {
            language,
            version,
            files: vec![ExecuteFile { content: code }],
        };

        let response = self
            .client
            .post(&self.base_url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("sandbox request failed: {}", e);
                ExecutionError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body
                    .message
                    .unwrap_or_else(|| format!("API request failed with status {status}")),
                Err(_) => "Failed to parse error response.".to_string(),
            };
            error!("sandbox API error: {}", message);
            return Err(ExecutionError::Api(message));
        }

        let body: ExecuteResponse = response.json().await?;

        // Prefer the run stage; fall back to compile output when the code
        // never reached it.
        let stage = body.run.or(body.compile).unwrap_or_default();
        Ok(ExecutionOutput {
            stdout: stage.stdout,
            stderr: stage.stderr,
        })
    }
}

impl Default for PistonClient {
    fn default() -> Self {
        Self::new()
    }
}
