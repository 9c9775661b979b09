//! Voice-session persistence.
//!
//! Sessions are created as whole units on explicit save, listed per owner
//! newest-first, and deleted as whole units. The store assigns the id and
//! the creation timestamp.

use serde::{Deserialize, Serialize};

use super::StoreClient;
use crate::error::StoreError;
use crate::model::{VoiceSession, VoiceUtterance};

/// Client for the `voice-sessions` collection.
#[derive(Debug, Clone)]
pub struct SessionStore {
    client: StoreClient,
}

#[derive(Debug, Serialize)]
struct CreateSessionBody<'a> {
    #[serde(rename = "ownerId")]
    owner_id: &'a str,
    transcript: &'a [VoiceUtterance],
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct CreatedSession {
    id: String,
}

impl SessionStore {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Saves a transcript as a new session and returns the store-assigned id.
    pub async fn save(
        &self,
        owner_id: &str,
        transcript: &[VoiceUtterance],
        summary: Option<&str>,
    ) -> Result<String, StoreError> {
        if owner_id.is_empty() {
            return Err(StoreError::MissingUserId);
        }
        let body = CreateSessionBody {
            owner_id,
            transcript,
            summary,
        };
        let response = self
            .client
            .send(self.client.post("voice-sessions").json(&body))
            .await?;
        let created: CreatedSession = response
            .json()
            .await
            .map_err(|e| StoreError::DecodeError(e.to_string()))?;
        tracing::debug!(owner = %owner_id, session = %created.id, "Saved voice session");
        Ok(created.id)
    }

    /// Sessions for an owner, newest first. An empty owner id yields an
    /// empty list rather than a store round trip.
    pub async fn list(&self, owner_id: &str) -> Result<Vec<VoiceSession>, StoreError> {
        if owner_id.is_empty() {
            return Ok(vec![]);
        }
        let path = format!("voice-sessions?owner={}&order=desc", owner_id);
        let response = self.client.send(self.client.get(&path)).await?;
        response
            .json()
            .await
            .map_err(|e| StoreError::DecodeError(e.to_string()))
    }

    /// Deletes a session as a whole unit.
    pub async fn delete(&self, session_id: &str) -> Result<(), StoreError> {
        let path = format!("voice-sessions/{}", session_id);
        self.client.send(self.client.delete(&path)).await?;
        tracing::debug!(session = %session_id, "Deleted voice session");
        Ok(())
    }
}
