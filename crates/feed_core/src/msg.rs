use crate::seen::ItemCount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session started; gathers the user and the feed.
    Started,
    /// User profile arrived from the provider.
    UserLoaded(crate::User),
    /// Feed items arrived, either from the initial load or a refresh.
    FeedLoaded(Vec<crate::FeedItem>),
    /// A provider request failed.
    LoadFailed(String),
    /// User asked to refetch the feed.
    RefreshClicked,
    /// User picked a different feed ordering.
    FilterChanged(crate::FeedFilter),
    /// User toggled the read flag of a single item.
    MarkReadClicked { item_id: String },
    /// User clicked MARK ALL READ / UNREAD ALL.
    ToggleAllClicked,
    /// Direct write of the seen count.
    SetNumItemsSeen(ItemCount),
    /// Render tick.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
