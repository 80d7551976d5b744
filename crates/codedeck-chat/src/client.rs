//! Generative Language API client

use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::ChatError;
use crate::session::{ChatMessage, ChatRole};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Client for the Generative Language API.
pub struct GeminiClient {
    api_key: String,
    client: Arc<Client>,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new client. An empty key is a configuration error, not a
    /// deferred network failure.
    pub fn new(api_key: String) -> Result<Self, ChatError> {
        Self::with_client(Arc::new(Client::new()), api_key)
    }

    /// Create a client with a custom HTTP client.
    pub fn with_client(client: Arc<Client>, api_key: String) -> Result<Self, ChatError> {
        if api_key.is_empty() {
            return Err(ChatError::Config("API key is required".to_string()));
        }

        Ok(Self {
            api_key,
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Override the base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Send the running transcript and return the assistant's reply text.
    pub async fn reply(&self, transcript: &[ChatMessage]) -> Result<String, ChatError> {
        let request = GenerateRequest {
            contents: transcript
                .iter()
                .map(|message| Content {
                    role: match message.role {
                        ChatRole::User => "user".to_string(),
                        ChatRole::Model => "model".to_string(),
                    },
                    parts: vec![Part {
                        text: message.text.clone(),
                    }],
                })
                .collect(),
        };

        debug!(model = %self.model, turns = transcript.len(), "sending chat request");

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("chat request failed: {}", e);
                ChatError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("chat API error: {}", status);
            return match status.as_u16() {
                401 | 403 => Err(ChatError::Auth),
                _ => Err(ChatError::Api(format!("API error: {status}"))),
            };
        }

        let body: GenerateResponse = response.json().await?;
        body.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| ChatError::Api("No content in response".to_string()))
    }
}

/// API request format
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

/// API content format
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

/// API part format
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// API response format
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// API candidate format
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
