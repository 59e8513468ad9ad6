use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.start() {
                vec![
                    Effect::LoadUser {
                        user_id: state.user_id().to_string(),
                    },
                    load_feed(&state),
                ]
            } else {
                Vec::new()
            }
        }
        Msg::UserLoaded(user) => {
            state.set_user(user);
            Vec::new()
        }
        Msg::FeedLoaded(items) => {
            state.apply_items(items);
            Vec::new()
        }
        Msg::LoadFailed(message) => {
            state.set_error(message);
            Vec::new()
        }
        Msg::RefreshClicked => {
            if state.is_initialized() {
                vec![load_feed(&state)]
            } else {
                Vec::new()
            }
        }
        Msg::FilterChanged(filter) => {
            if filter == state.filter() {
                return (state, Vec::new());
            }
            state.set_filter(filter);
            if state.is_initialized() {
                vec![load_feed(&state)]
            } else {
                Vec::new()
            }
        }
        Msg::MarkReadClicked { item_id } => {
            if state.is_initialized() {
                state.toggle_read(&item_id);
            }
            Vec::new()
        }
        Msg::ToggleAllClicked => {
            if !state.is_initialized() {
                return (state, Vec::new());
            }
            let target = if state.all_items_seen() {
                0
            } else {
                state.item_count()
            };
            state.set_num_items_seen(target);
            Vec::new()
        }
        Msg::SetNumItemsSeen(num) => {
            state.set_num_items_seen(num);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn load_feed(state: &AppState) -> Effect {
    Effect::LoadFeed {
        user_id: state.user_id().to_string(),
        filter: state.filter(),
    }
}
