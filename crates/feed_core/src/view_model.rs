use crate::seen::ItemCount;
use crate::FeedFilter;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserFeedViewModel {
    /// `None` until the user has loaded; nothing should be drawn then.
    pub heading: Option<String>,
    pub filter: FeedFilter,
    pub toggle_label: &'static str,
    pub all_items_seen: bool,
    pub num_items_seen: ItemCount,
    /// Items currently flagged read. This is what the feed displays as seen.
    pub read_count: ItemCount,
    pub rows: Vec<FeedItemRow>,
    pub last_error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItemRow {
    pub id: String,
    pub contents: String,
    pub read: bool,
    pub action_label: &'static str,
}
