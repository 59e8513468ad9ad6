//! Items-seen bookkeeping.
//!
//! A [`SeenTracker`] stores how many items a viewer has seen and notifies a
//! [`SeenListener`] whenever a write lands on the all-seen boundary (or on
//! zero). The "all seen" flag itself is never stored: it is recomputed from
//! the current count and total on every read, so changing the total alone can
//! flip it without any callback firing.

use std::fmt;

/// Item counts are plain signed integers. Negative values and values above
/// the total are accepted as-is.
pub type ItemCount = i64;

/// Receives edge notifications from a [`SeenTracker`].
pub trait SeenListener {
    /// Called after a write that leaves `seen >= total`.
    fn on_all_seen(&mut self);

    /// Called after a write of exactly zero that is not also an all-seen write.
    fn on_all_unseen(&mut self) {}
}

type Callback = Box<dyn FnMut()>;

/// Closure-backed listener. Only the all-seen callback is required.
pub struct SeenCallbacks {
    on_all_seen: Callback,
    on_all_unseen: Option<Callback>,
}

impl SeenCallbacks {
    pub fn new(on_all_seen: impl FnMut() + 'static) -> Self {
        Self {
            on_all_seen: Box::new(on_all_seen),
            on_all_unseen: None,
        }
    }

    pub fn with_on_all_unseen(mut self, on_all_unseen: impl FnMut() + 'static) -> Self {
        self.on_all_unseen = Some(Box::new(on_all_unseen));
        self
    }
}

impl SeenListener for SeenCallbacks {
    fn on_all_seen(&mut self) {
        (self.on_all_seen)();
    }

    fn on_all_unseen(&mut self) {
        if let Some(callback) = self.on_all_unseen.as_mut() {
            callback();
        }
    }
}

impl fmt::Debug for SeenCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeenCallbacks")
            .field("on_all_unseen", &self.on_all_unseen.is_some())
            .finish_non_exhaustive()
    }
}

/// Construction inputs for a callback-driven tracker.
///
/// `total_items` and `on_all_seen` are required; the initial count defaults
/// to zero and the unseen callback to a no-op.
#[derive(Debug)]
pub struct SeenTrackerConfig {
    pub total_items: ItemCount,
    pub initial_seen: ItemCount,
    pub callbacks: SeenCallbacks,
}

impl SeenTrackerConfig {
    pub fn new(total_items: ItemCount, on_all_seen: impl FnMut() + 'static) -> Self {
        Self {
            total_items,
            initial_seen: 0,
            callbacks: SeenCallbacks::new(on_all_seen),
        }
    }

    pub fn initial_seen(mut self, initial_seen: ItemCount) -> Self {
        self.initial_seen = initial_seen;
        self
    }

    pub fn on_all_unseen(mut self, on_all_unseen: impl FnMut() + 'static) -> Self {
        self.callbacks = self.callbacks.with_on_all_unseen(on_all_unseen);
        self
    }

    pub fn build(self) -> SeenTracker<SeenCallbacks> {
        SeenTracker::with_listener(self.total_items, self.initial_seen, self.callbacks)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeenTracker<L> {
    num_items_seen: ItemCount,
    total_items: ItemCount,
    listener: L,
}

impl<L: SeenListener> SeenTracker<L> {
    pub fn with_listener(total_items: ItemCount, initial_seen: ItemCount, listener: L) -> Self {
        Self {
            num_items_seen: initial_seen,
            total_items,
            listener,
        }
    }

    /// Overwrites the seen count, then notifies the listener if the new count
    /// reaches the current total or is exactly zero.
    pub fn set_num_items_seen(&mut self, num: ItemCount) {
        self.num_items_seen = num;
        if num >= self.total_items {
            self.listener.on_all_seen();
        } else if num == 0 {
            self.listener.on_all_unseen();
        }
    }

    pub fn num_items_seen(&self) -> ItemCount {
        self.num_items_seen
    }

    pub fn total_items(&self) -> ItemCount {
        self.total_items
    }

    /// Recomputed on every call; never cached.
    pub fn all_items_seen(&self) -> bool {
        self.num_items_seen >= self.total_items
    }

    /// Re-configures the item universe. Does not notify the listener even if
    /// [`all_items_seen`](Self::all_items_seen) changes as a result.
    pub fn set_total_items(&mut self, total_items: ItemCount) {
        self.total_items = total_items;
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}
