use std::time::Duration;

use feed_core::{Effect, FeedFilter, FeedItem, Msg, User};
use feed_engine::{EngineEvent, EngineHandle, FeedError, Request};
use feed_logging::{feed_info, feed_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadUser { user_id } => {
                    feed_info!("LoadUser user_id={}", user_id);
                    self.engine.load_user(user_id);
                }
                Effect::LoadFeed { user_id, filter } => {
                    feed_info!("LoadFeed user_id={} filter={}", user_id, filter);
                    self.engine.load_feed(user_id, map_filter(filter));
                }
            }
        }
    }

    /// Drains every event that is already available.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }

    /// Waits up to `timeout` for the next event.
    pub fn wait(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::UserLoaded(user) => Msg::UserLoaded(User {
            id: user.id,
            name: user.name,
        }),
        EngineEvent::FeedLoaded { items, .. } => {
            Msg::FeedLoaded(items.into_iter().map(map_item).collect())
        }
        EngineEvent::Failed { request, error } => {
            feed_warn!("{:?} failed: {}", request, error);
            Msg::LoadFailed(describe_failure(&request, &error))
        }
    }
}

fn map_item(item: feed_engine::FeedItem) -> FeedItem {
    FeedItem {
        id: item.id,
        contents: item.contents,
        read: item.read,
    }
}

fn map_filter(filter: FeedFilter) -> feed_engine::FeedFilter {
    match filter {
        FeedFilter::Date => feed_engine::FeedFilter::Date,
        FeedFilter::Rating => feed_engine::FeedFilter::Rating,
        FeedFilter::Read => feed_engine::FeedFilter::Read,
    }
}

fn describe_failure(request: &Request, error: &FeedError) -> String {
    match request {
        Request::Initialize => format!("feed unavailable: {error}"),
        Request::User { .. } => format!("could not load user: {error}"),
        Request::Feed { .. } => format!("could not load feed: {error}"),
    }
}
