//! Feed core: pure state machine, items-seen tracking and view-model helpers.
mod effect;
mod msg;
pub mod seen;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use seen::{ItemCount, SeenCallbacks, SeenListener, SeenTracker, SeenTrackerConfig};
pub use state::{AppState, FeedFilter, FeedItem, UnknownFilter, User};
pub use update::update;
pub use view_model::{FeedItemRow, UserFeedViewModel};
