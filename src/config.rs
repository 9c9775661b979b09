//! Environment configuration.
//!
//! A `.env` file is honored when present; real environment variables win.

use std::env;

use crate::error::ConfigError;
use crate::llm::client::DEFAULT_MODEL;

/// Runtime configuration for the mentor services.
#[derive(Debug, Clone)]
pub struct MentorConfig {
    /// Base URL of the chat-completion API.
    pub api_base: String,
    /// API key for the generation endpoint, if the deployment needs one.
    pub api_key: Option<String>,
    /// Model identifier used for every generation call.
    pub model: String,
    /// Base URL of the document store; absent when persistence is disabled.
    pub store_base: Option<String>,
    /// Bearer token for the document store.
    pub store_token: Option<String>,
}

impl MentorConfig {
    /// Loads configuration from the environment.
    ///
    /// Reads:
    /// - `MENTOR_API_BASE` (required)
    /// - `MENTOR_API_KEY` (optional)
    /// - `MENTOR_MODEL` (defaults to the client default model)
    /// - `MENTOR_STORE_BASE` (optional)
    /// - `MENTOR_STORE_TOKEN` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is fine; only explicit files matter.
        let _ = dotenvy::dotenv();

        let api_base =
            env::var("MENTOR_API_BASE").map_err(|_| ConfigError::MissingVar("MENTOR_API_BASE"))?;

        Ok(Self {
            api_base,
            api_key: env::var("MENTOR_API_KEY").ok(),
            model: env::var("MENTOR_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            store_base: env::var("MENTOR_STORE_BASE").ok(),
            store_token: env::var("MENTOR_STORE_TOKEN").ok(),
        })
    }
}
