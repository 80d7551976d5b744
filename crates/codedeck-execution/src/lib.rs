//! Remote code execution via a Piston-compatible sandbox API
//!
//! The editor shell treats execution as an opaque request/response service:
//! source plus a runtime identifier and version go out, captured
//! stdout/stderr come back. The one contract this crate enforces is that no
//! transport or protocol failure ever escapes [`PistonClient::execute`] as
//! an error: failures become text in the `stderr` field, so presentation
//! code only ever renders output.

mod client;
mod error;
mod models;

pub use client::PistonClient;
pub use error::ExecutionError;
pub use models::ExecutionOutput;
