use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedFilter {
    #[default]
    Date,
    Rating,
    Read,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: String,
    pub contents: String,
    pub read: bool,
    pub rating: u8,
    pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// Which provider call an event answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Initialize,
    User { user_id: String },
    Feed { user_id: String, filter: FeedFilter },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    UserLoaded(User),
    FeedLoaded {
        user_id: String,
        filter: FeedFilter,
        items: Vec<FeedItem>,
    },
    Failed {
        request: Request,
        error: FeedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("feed client not initialized")]
    NotInitialized,
    #[error("invalid user id {0:?}")]
    InvalidUserId(String),
    #[error("engine runtime unavailable: {0}")]
    Runtime(String),
}
