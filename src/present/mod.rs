//! Presenter: turns a [`FeedSnapshot`](crate::feed::FeedSnapshot) into the
//! strings and markup shown on the site.
//!
//! - `widget` - navigation version label and download button
//! - `changelog` - one card per release for the changelog page

mod changelog;
mod widget;

use chrono::DateTime;

pub use changelog::render_changelog;
pub use widget::{CallToAction, DISABLED_CLASSES, WidgetView};

/// Prefixes `v` to a tag unless it already starts with one.
pub fn display_version(tag: &str) -> String {
    if tag.starts_with('v') {
        tag.to_string()
    } else {
        format!("v{}", tag)
    }
}

/// Formats an ISO 8601 timestamp as month and year, e.g. "March 2024".
///
/// Unparseable input is returned unchanged; a missing timestamp renders empty.
pub fn format_release_date(published_at: Option<&str>) -> String {
    let Some(raw) = published_at else {
        return String::new();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%B %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
