use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::seen::{ItemCount, SeenListener, SeenTracker};
use crate::view_model::{FeedItemRow, UserFeedViewModel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: String,
    pub contents: String,
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedFilter {
    #[default]
    Date,
    Rating,
    Read,
}

impl FeedFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedFilter::Date => "date",
            FeedFilter::Rating => "rating",
            FeedFilter::Read => "read",
        }
    }
}

impl fmt::Display for FeedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown feed filter {0:?}")]
pub struct UnknownFilter(pub String);

impl FromStr for FeedFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(FeedFilter::Date),
            "rating" => Ok(FeedFilter::Rating),
            "read" => Ok(FeedFilter::Read),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}

/// Listener that queues mark-all requests until `update` applies them.
/// `true` marks every item read, `false` marks every item unread.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct MarkAllRequests(Vec<bool>);

impl MarkAllRequests {
    pub(crate) fn drain(&mut self) -> Vec<bool> {
        std::mem::take(&mut self.0)
    }
}

impl SeenListener for MarkAllRequests {
    fn on_all_seen(&mut self) {
        self.0.push(true);
    }

    fn on_all_unseen(&mut self) {
        self.0.push(false);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    user_id: String,
    filter: FeedFilter,
    started: bool,
    initialized: bool,
    user: Option<User>,
    items: Vec<FeedItem>,
    seen: SeenTracker<MarkAllRequests>,
    last_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new(user_id: impl Into<String>, filter: FeedFilter) -> Self {
        Self {
            user_id: user_id.into(),
            filter,
            ..Self::default()
        }
    }

    pub fn view(&self) -> UserFeedViewModel {
        let all_items_seen = self.seen.all_items_seen();
        UserFeedViewModel {
            heading: self.user.as_ref().map(|user| format!("{}'s feed", user.name)),
            filter: self.filter,
            toggle_label: if all_items_seen {
                "UNREAD ALL"
            } else {
                "MARK ALL READ"
            },
            all_items_seen,
            num_items_seen: self.seen.num_items_seen(),
            read_count: self.read_count(),
            rows: self
                .items
                .iter()
                .map(|item| FeedItemRow {
                    id: item.id.clone(),
                    contents: item.contents.clone(),
                    read: item.read,
                    action_label: if item.read { "UNREAD" } else { "MARK READ" },
                })
                .collect(),
            last_error: self.last_error.clone(),
            dirty: self.dirty,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn filter(&self) -> FeedFilter {
        self.filter
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    /// Returns whether state changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns `true` only the first time it is called.
    pub(crate) fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    pub(crate) fn set_user(&mut self, user: User) {
        self.user = Some(user);
        self.mark_dirty();
    }

    pub(crate) fn set_filter(&mut self, filter: FeedFilter) {
        self.filter = filter;
        self.mark_dirty();
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.last_error = Some(message);
        self.mark_dirty();
    }

    /// Replaces the items and re-configures the tracker's total. Only the
    /// first load seeds the seen count from the items' read flags.
    pub(crate) fn apply_items(&mut self, items: Vec<FeedItem>) {
        self.items = items;
        if self.initialized {
            self.seen.set_total_items(self.item_count());
        } else {
            self.initialized = true;
            self.seen = SeenTracker::with_listener(
                self.item_count(),
                self.read_count(),
                MarkAllRequests::default(),
            );
        }
        self.last_error = None;
        self.mark_dirty();
    }

    pub(crate) fn toggle_read(&mut self, item_id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(item) => {
                item.read = !item.read;
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_num_items_seen(&mut self, num: ItemCount) {
        self.seen.set_num_items_seen(num);
        for read in self.seen.listener_mut().drain() {
            self.mark_all(read);
        }
        self.mark_dirty();
    }

    pub(crate) fn all_items_seen(&self) -> bool {
        self.seen.all_items_seen()
    }

    pub(crate) fn item_count(&self) -> ItemCount {
        count(self.items.len())
    }

    fn mark_all(&mut self, read: bool) {
        for item in &mut self.items {
            item.read = read;
        }
    }

    fn read_count(&self) -> ItemCount {
        count(self.items.iter().filter(|item| item.read).count())
    }
}

fn count(len: usize) -> ItemCount {
    ItemCount::try_from(len).unwrap_or(ItemCount::MAX)
}
