#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadUser {
        user_id: String,
    },
    LoadFeed {
        user_id: String,
        filter: crate::FeedFilter,
    },
}
