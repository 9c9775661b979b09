//! User-profile persistence.

use serde::Serialize;

use super::StoreClient;
use crate::error::StoreError;
use crate::model::UserProfile;

/// Client for the `users` collection.
#[derive(Debug, Clone)]
pub struct UserStore {
    client: StoreClient,
}

#[derive(Debug, Serialize)]
struct LessonCompletion<'a> {
    topic: &'a str,
}

impl UserStore {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Creates the profile document, or merges into it if it already exists.
    pub async fn upsert(&self, profile: &UserProfile) -> Result<(), StoreError> {
        if profile.uid.is_empty() {
            return Err(StoreError::MissingUserId);
        }
        let path = format!("users/{}?merge=true", profile.uid);
        self.client.send(self.client.put(&path).json(profile)).await?;
        tracing::debug!(uid = %profile.uid, "Upserted user profile");
        Ok(())
    }

    /// Appends a completed lesson topic to the profile, field-level, without
    /// rewriting the rest of the document.
    pub async fn mark_lesson_complete(&self, uid: &str, topic: &str) -> Result<(), StoreError> {
        if uid.is_empty() {
            return Err(StoreError::MissingUserId);
        }
        let path = format!("users/{}/completed-lessons", uid);
        self.client
            .send(self.client.post(&path).json(&LessonCompletion { topic }))
            .await?;
        tracing::debug!(uid = %uid, topic = %topic, "Marked lesson complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_uid_is_rejected_locally() {
        let store = UserStore::new(StoreClient::new("http://localhost:65535", None));
        let profile = UserProfile {
            uid: String::new(),
            name: "Amara".to_string(),
            location: "Lagos, Nigeria".to_string(),
            skills: vec![],
            interests: vec![],
            budget: "100-500".to_string(),
            completed_lessons: vec![],
        };
        assert!(matches!(
            store.upsert(&profile).await,
            Err(StoreError::MissingUserId)
        ));
        assert!(matches!(
            store.mark_lesson_complete("", "pricing").await,
            Err(StoreError::MissingUserId)
        ));
    }
}
