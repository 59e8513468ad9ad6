use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use feed_logging::{feed_info, feed_warn};

use crate::client::{DataFeedClient, MockDataFeedClient};
use crate::user::{MockUserSource, UserSource};
use crate::{EngineEvent, FeedError, FeedFilter, Request};

enum EngineCommand {
    LoadUser { user_id: String },
    LoadFeed { user_id: String, filter: FeedFilter },
}

/// Front door to the provider worker. Commands run on a tokio runtime owned
/// by a background thread; results come back as [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(
        client: Arc<dyn DataFeedClient>,
        users: Arc<dyn UserSource>,
    ) -> Result<Self, FeedError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("feed-engine")
            .enable_time()
            .build()
            .map_err(|err| FeedError::Runtime(err.to_string()))?;

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            if let Err(error) = runtime.block_on(client.initialize()) {
                feed_warn!("Feed client failed to initialize: {}", error);
                let _ = event_tx.send(EngineEvent::Failed {
                    request: Request::Initialize,
                    error,
                });
            }
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let users = users.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(client.as_ref(), users.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    /// Engine backed by the canned user and feed.
    pub fn with_mocks() -> Result<Self, FeedError> {
        Self::new(
            Arc::new(MockDataFeedClient::new()),
            Arc::new(MockUserSource::new()),
        )
    }

    pub fn load_user(&self, user_id: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::LoadUser {
            user_id: user_id.into(),
        });
    }

    pub fn load_feed(&self, user_id: impl Into<String>, filter: FeedFilter) {
        let _ = self.cmd_tx.send(EngineCommand::LoadFeed {
            user_id: user_id.into(),
            filter,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn DataFeedClient,
    users: &dyn UserSource,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::LoadUser { user_id } => {
            feed_info!("LoadUser user_id={}", user_id);
            match users.get_user(&user_id).await {
                Ok(user) => EngineEvent::UserLoaded(user),
                Err(error) => {
                    feed_warn!("LoadUser user_id={} failed: {}", user_id, error);
                    EngineEvent::Failed {
                        request: Request::User { user_id },
                        error,
                    }
                }
            }
        }
        EngineCommand::LoadFeed { user_id, filter } => {
            feed_info!("LoadFeed user_id={} filter={:?}", user_id, filter);
            match client.get_items(&user_id, filter).await {
                Ok(items) => EngineEvent::FeedLoaded {
                    user_id,
                    filter,
                    items,
                },
                Err(error) => {
                    feed_warn!("LoadFeed user_id={} failed: {}", user_id, error);
                    EngineEvent::Failed {
                        request: Request::Feed { user_id, filter },
                        error,
                    }
                }
            }
        }
    }
}
