use async_trait::async_trait;
use uuid::Uuid;

use super::error::GenAiError;
use super::models::UserProfile;

/// Read access to stored user profiles.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// `Ok(None)` when the user does not exist.
    async fn profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, GenAiError>;
}

/// A text-generation model.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError>;
}
