use std::sync::Once;

use feed_core::{update, AppState, Effect, FeedFilter, FeedItem, Msg, User};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(feed_logging::initialize_for_tests);
}

fn item(id: &str, read: bool) -> FeedItem {
    FeedItem {
        id: id.to_string(),
        contents: format!("feed_item_{id}"),
        read,
    }
}

fn mock_user() -> User {
    User {
        id: "0".to_string(),
        name: "mock_user".to_string(),
    }
}

fn loaded(items: Vec<FeedItem>) -> AppState {
    let (state, _) = update(AppState::new("0", FeedFilter::Date), Msg::Started);
    let (state, _) = update(state, Msg::UserLoaded(mock_user()));
    let (mut state, _) = update(state, Msg::FeedLoaded(items));
    state.consume_dirty();
    state
}

#[test]
fn started_gathers_user_and_feed_once() {
    init_logging();
    let (state, effects) = update(AppState::new("7", FeedFilter::Rating), Msg::Started);

    assert_eq!(
        effects,
        vec![
            Effect::LoadUser {
                user_id: "7".to_string()
            },
            Effect::LoadFeed {
                user_id: "7".to_string(),
                filter: FeedFilter::Rating,
            },
        ]
    );

    let (_state, effects) = update(state, Msg::Started);
    assert!(effects.is_empty());
}

#[test]
fn nothing_to_draw_until_user_loads() {
    init_logging();
    let (state, _) = update(AppState::new("0", FeedFilter::Date), Msg::Started);
    let (state, _) = update(state, Msg::FeedLoaded(vec![item("0", false)]));
    assert_eq!(state.view().heading, None);

    let (state, _) = update(state, Msg::UserLoaded(mock_user()));
    assert_eq!(state.view().heading.as_deref(), Some("mock_user's feed"));
}

#[test]
fn first_load_seeds_seen_count_from_read_items() {
    init_logging();
    let state = loaded(vec![item("0", true), item("1", false), item("2", true)]);
    let view = state.view();

    assert_eq!(view.num_items_seen, 2);
    assert_eq!(view.read_count, 2);
    assert!(!view.all_items_seen);
    assert_eq!(view.toggle_label, "MARK ALL READ");
}

#[test]
fn toggle_all_marks_everything_read_then_unread() {
    init_logging();
    let state = loaded(vec![item("0", false), item("1", false)]);

    let (mut state, effects) = update(state, Msg::ToggleAllClicked);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert!(view.all_items_seen);
    assert_eq!(view.num_items_seen, 2);
    assert_eq!(view.read_count, 2);
    assert!(view.rows.iter().all(|row| row.read && row.action_label == "UNREAD"));
    assert_eq!(view.toggle_label, "UNREAD ALL");

    let (state, _) = update(state, Msg::ToggleAllClicked);
    let view = state.view();
    assert!(!view.all_items_seen);
    assert_eq!(view.num_items_seen, 0);
    assert_eq!(view.read_count, 0);
    assert!(view.rows.iter().all(|row| !row.read && row.action_label == "MARK READ"));
}

#[test]
fn partial_seen_count_leaves_items_alone() {
    init_logging();
    let state = loaded(vec![item("0", false), item("1", true), item("2", false)]);

    let (state, _) = update(state, Msg::SetNumItemsSeen(2));
    let view = state.view();

    assert_eq!(view.num_items_seen, 2);
    assert!(!view.all_items_seen);
    let flags: Vec<bool> = view.rows.iter().map(|row| row.read).collect();
    assert_eq!(flags, vec![false, true, false]);
}

#[test]
fn seen_count_past_total_marks_all_read() {
    init_logging();
    let state = loaded(vec![item("0", false), item("1", false)]);

    let (state, _) = update(state, Msg::SetNumItemsSeen(1000));
    let view = state.view();

    assert_eq!(view.num_items_seen, 1000);
    assert!(view.all_items_seen);
    assert_eq!(view.read_count, 2);
}

#[test]
fn mark_read_toggles_single_item() {
    init_logging();
    let state = loaded(vec![item("0", false), item("1", false)]);

    let (mut state, _) = update(
        state,
        Msg::MarkReadClicked {
            item_id: "1".to_string(),
        },
    );
    assert!(state.consume_dirty());
    assert_eq!(state.view().read_count, 1);
    assert!(state.items()[1].read);

    let (mut state, _) = update(
        state,
        Msg::MarkReadClicked {
            item_id: "1".to_string(),
        },
    );
    assert!(state.consume_dirty());
    assert!(!state.items()[1].read);

    let (mut state, _) = update(
        state,
        Msg::MarkReadClicked {
            item_id: "missing".to_string(),
        },
    );
    assert!(!state.consume_dirty());
}

#[test]
fn mark_read_does_not_move_seen_count() {
    init_logging();
    let state = loaded(vec![item("0", false)]);

    let (state, _) = update(
        state,
        Msg::MarkReadClicked {
            item_id: "0".to_string(),
        },
    );
    let view = state.view();

    assert_eq!(view.read_count, 1);
    assert_eq!(view.num_items_seen, 0);
    assert!(!view.all_items_seen);
}

#[test]
fn refresh_waits_for_initialization() {
    init_logging();
    let (state, _) = update(AppState::new("0", FeedFilter::Date), Msg::Started);
    let (state, effects) = update(state, Msg::RefreshClicked);
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::FeedLoaded(vec![item("0", false)]));
    let (_state, effects) = update(state, Msg::RefreshClicked);
    assert_eq!(
        effects,
        vec![Effect::LoadFeed {
            user_id: "0".to_string(),
            filter: FeedFilter::Date,
        }]
    );
}

#[test]
fn refresh_with_fewer_items_flips_all_seen_silently() {
    init_logging();
    let items: Vec<FeedItem> = (0..10).map(|i| item(&i.to_string(), false)).collect();
    let state = loaded(items);

    let (state, _) = update(state, Msg::SetNumItemsSeen(5));
    assert!(!state.view().all_items_seen);

    let (state, _) = update(state, Msg::FeedLoaded(vec![item("0", false)]));
    let view = state.view();

    assert_eq!(view.num_items_seen, 5);
    assert!(view.all_items_seen);
    // No mark-all ran: the surviving item keeps its unread flag.
    assert_eq!(view.read_count, 0);
    assert_eq!(view.toggle_label, "UNREAD ALL");
}

#[test]
fn filter_change_reloads_feed() {
    init_logging();
    let state = loaded(vec![item("0", false)]);

    let (mut state, effects) = update(state, Msg::FilterChanged(FeedFilter::Read));
    assert!(state.consume_dirty());
    assert_eq!(state.view().filter, FeedFilter::Read);
    assert_eq!(
        effects,
        vec![Effect::LoadFeed {
            user_id: "0".to_string(),
            filter: FeedFilter::Read,
        }]
    );

    let (mut state, effects) = update(state, Msg::FilterChanged(FeedFilter::Read));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn load_failure_is_shown_until_next_feed() {
    init_logging();
    let state = loaded(vec![item("0", false)]);

    let (state, _) = update(
        state,
        Msg::LoadFailed("feed client not initialized".to_string()),
    );
    assert_eq!(
        state.view().last_error.as_deref(),
        Some("feed client not initialized")
    );

    let (state, _) = update(state, Msg::FeedLoaded(vec![item("0", false)]));
    assert_eq!(state.view().last_error, None);
}

#[test]
fn filter_parses_case_insensitively() {
    assert_eq!("Date".parse::<FeedFilter>(), Ok(FeedFilter::Date));
    assert_eq!(" rating ".parse::<FeedFilter>(), Ok(FeedFilter::Rating));
    assert_eq!("READ".parse::<FeedFilter>(), Ok(FeedFilter::Read));
    assert!("popular".parse::<FeedFilter>().is_err());
}
