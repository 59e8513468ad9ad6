//! Feed engine: asynchronous providers for the user profile and feed items.
mod client;
mod engine;
mod types;
mod user;

pub use client::{mock_feed_items, sort_for_filter, DataFeedClient, MockDataFeedClient};
pub use engine::EngineHandle;
pub use types::{EngineEvent, FeedError, FeedFilter, FeedItem, Request, User};
pub use user::{mock_user, MockUserSource, UserSource};
