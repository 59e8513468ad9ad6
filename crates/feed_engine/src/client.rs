use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Duration, Utc};
use feed_logging::feed_debug;

use crate::{FeedError, FeedFilter, FeedItem};

/// Source of feed items for a user.
#[async_trait::async_trait]
pub trait DataFeedClient: Send + Sync {
    async fn initialize(&self) -> Result<(), FeedError>;

    async fn get_items(&self, user_id: &str, filter: FeedFilter)
        -> Result<Vec<FeedItem>, FeedError>;
}

/// In-memory client serving a fixed item list.
pub struct MockDataFeedClient {
    items: Vec<FeedItem>,
    initialized: AtomicBool,
}

impl MockDataFeedClient {
    pub fn new() -> Self {
        Self::with_items(mock_feed_items())
    }

    pub fn with_items(items: Vec<FeedItem>) -> Self {
        Self {
            items,
            initialized: AtomicBool::new(false),
        }
    }
}

impl Default for MockDataFeedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DataFeedClient for MockDataFeedClient {
    async fn initialize(&self) -> Result<(), FeedError> {
        self.initialized.store(true, Ordering::Release);
        Ok(())
    }

    async fn get_items(
        &self,
        user_id: &str,
        filter: FeedFilter,
    ) -> Result<Vec<FeedItem>, FeedError> {
        if !self.initialized.load(Ordering::Acquire) {
            return Err(FeedError::NotInitialized);
        }
        feed_debug!(
            "get_items user_id={} filter={:?} count={}",
            user_id,
            filter,
            self.items.len()
        );
        let mut items = self.items.clone();
        sort_for_filter(&mut items, filter);
        Ok(items)
    }
}

/// Orders items for display. Sorting is stable so ties keep their feed order.
pub fn sort_for_filter(items: &mut [FeedItem], filter: FeedFilter) {
    match filter {
        FeedFilter::Date => items.sort_by(|a, b| b.published.cmp(&a.published)),
        FeedFilter::Rating => items.sort_by(|a, b| b.rating.cmp(&a.rating)),
        FeedFilter::Read => items.sort_by_key(|item| item.read),
    }
}

/// Canned items: two unread entries, the second one newer.
pub fn mock_feed_items() -> Vec<FeedItem> {
    let base = DateTime::<Utc>::from_timestamp(1_600_000_000, 0).unwrap_or_default();
    (0..2)
        .map(|i| FeedItem {
            id: i.to_string(),
            contents: format!("feed_item_{i}"),
            read: false,
            rating: 3 - i as u8,
            published: base + Duration::hours(i),
        })
        .collect()
}
