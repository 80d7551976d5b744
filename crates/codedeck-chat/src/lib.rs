//! Conversational assistant for the editor shell
//!
//! A thin client for the Generative Language API plus a session type that
//! owns the running transcript. The session degrades instead of failing:
//! without a configured credential it answers with a static notice, and a
//! failed request becomes an apology message in the transcript rather than
//! an error at the presentation boundary.

mod client;
mod error;
mod session;

pub use client::GeminiClient;
pub use error::ChatError;
pub use session::{ChatMessage, ChatRole, ChatSession, API_KEY_ENV};
