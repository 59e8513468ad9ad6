use std::fmt::Write;

use feed_core::UserFeedViewModel;

/// Renders the feed as text. Nothing but a pending error is drawn until the
/// user has loaded.
pub fn render(view: &UserFeedViewModel) -> String {
    let mut out = String::new();

    let Some(heading) = &view.heading else {
        if let Some(error) = &view.last_error {
            let _ = writeln!(out, "error: {error}");
        }
        return out;
    };

    let _ = writeln!(out, "== {heading} (by {}) ==", view.filter);
    let _ = writeln!(out, "[{}]", view.toggle_label);
    let _ = writeln!(out, "numItemsSeen:{}", view.read_count);
    for row in &view.rows {
        let status = if row.read { "READ" } else { "UNREAD" };
        let _ = writeln!(
            out,
            "#{} - {} - {} [{}]",
            row.id, row.contents, status, row.action_label
        );
    }
    if let Some(error) = &view.last_error {
        let _ = writeln!(out, "error: {error}");
    }
    out
}
