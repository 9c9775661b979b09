//! nextwave-mentor: generation gateway for an entrepreneurship mentor.
//!
//! Translates typed generation requests (business opportunities, 90-day
//! plans, investor documents, training lessons, voice replies) into calls to
//! a hosted chat-completion API and enforces the JSON response contract on
//! the way back. Companion clients persist profiles and voice sessions to a
//! managed document store.

pub mod cli;
pub mod config;
pub mod contract;
pub mod error;
pub mod export;
pub mod extract;
pub mod gateway;
pub mod llm;
pub mod model;
pub mod prompts;
pub mod state;
pub mod store;

// Re-export commonly used error types
pub use error::{ConfigError, ExportError, GatewayError, LlmError, StoreError};
