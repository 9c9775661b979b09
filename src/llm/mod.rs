//! Generation-endpoint client for the mentor gateway.
//!
//! The gateway is a pure client of a hosted OpenAI-compatible chat-completion
//! API. [`LlmProvider`] is the seam screens and tests mock; [`ChatClient`] is
//! the reqwest-backed implementation.

pub mod client;

pub use client::{
    ChatClient, Choice, GenerationRequest, GenerationResponse, LlmProvider, Message, Usage,
};
