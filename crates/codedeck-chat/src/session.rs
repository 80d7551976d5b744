//! Chat session and transcript

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::GeminiClient;

/// Environment variable the session reads its credential from.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const GREETING: &str = "Hello! How can I help you with your code today?";
const DISABLED_NOTICE: &str = "API key is not configured. Chat is disabled.";
const APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// A running conversation with the assistant.
///
/// The session owns the transcript and never fails outward: without a
/// credential it opens with a disabled notice and answers every message
/// with it, and request failures become an apology message in the
/// transcript.
pub struct ChatSession {
    client: Option<GeminiClient>,
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    /// Start a session with a configured client, greeting the user.
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client: Some(client),
            transcript: vec![ChatMessage::model(GREETING)],
        }
    }

    /// Start a degraded session that only ever answers with the disabled
    /// notice.
    pub fn disabled() -> Self {
        Self {
            client: None,
            transcript: vec![ChatMessage::model(DISABLED_NOTICE)],
        }
    }

    /// Build a session from the conventional environment variable,
    /// degrading when it is absent or empty.
    pub fn from_env() -> Self {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => match GeminiClient::new(key) {
                Ok(client) => Self::new(client),
                Err(err) => {
                    warn!("chat disabled: {}", err);
                    Self::disabled()
                }
            },
            _ => Self::disabled(),
        }
    }

    /// Whether a credential is configured.
    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// The transcript so far, oldest first.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Send a user message and return the assistant's answer.
    ///
    /// Both the user message and the answer are appended to the transcript.
    /// The answer is the disabled notice when no credential is configured
    /// and the canned apology when the request fails.
    pub async fn send_message(&mut self, text: &str) -> &ChatMessage {
        self.transcript.push(ChatMessage::user(text));

        let reply = match &self.client {
            None => DISABLED_NOTICE.to_string(),
            Some(client) => match client.reply(&self.transcript).await {
                Ok(reply) => reply,
                Err(err) => {
                    warn!("chat turn failed: {}", err);
                    APOLOGY.to_string()
                }
            },
        };

        self.transcript.push(ChatMessage::model(reply));
        self.transcript
            .last()
            .expect("transcript cannot be empty after a push")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_session_opens_with_the_notice() {
        let session = ChatSession::disabled();
        assert!(!session.is_enabled());
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, ChatRole::Model);
        assert_eq!(session.transcript()[0].text, DISABLED_NOTICE);
    }

    #[tokio::test]
    async fn disabled_session_answers_every_message_with_the_notice() {
        let mut session = ChatSession::disabled();
        let answer = session.send_message("help me").await;
        assert_eq!(answer.text, DISABLED_NOTICE);
        // greeting + user + answer
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.transcript()[1], ChatMessage::user("help me"));
    }

    #[test]
    fn enabled_session_opens_with_the_greeting() {
        let client = GeminiClient::new("test-key".to_string()).expect("non-empty key");
        let session = ChatSession::new(client);
        assert!(session.is_enabled());
        assert_eq!(session.transcript()[0].text, GREETING);
    }
}
