use crate::{FeedError, User};

#[async_trait::async_trait]
pub trait UserSource: Send + Sync {
    async fn get_user(&self, user_id: &str) -> Result<User, FeedError>;
}

/// Answers every non-empty id with the same canned profile.
#[derive(Debug, Clone)]
pub struct MockUserSource {
    user: User,
}

impl MockUserSource {
    pub fn new() -> Self {
        Self { user: mock_user() }
    }
}

impl Default for MockUserSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserSource for MockUserSource {
    async fn get_user(&self, user_id: &str) -> Result<User, FeedError> {
        if user_id.trim().is_empty() {
            return Err(FeedError::InvalidUserId(user_id.to_string()));
        }
        // Arrives on a later poll, like a real lookup would.
        tokio::task::yield_now().await;
        Ok(self.user.clone())
    }
}

pub fn mock_user() -> User {
    User {
        id: "0".to_string(),
        name: "mock_user".to_string(),
    }
}
