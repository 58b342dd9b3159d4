//! Changelog page markup.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::asset::{asset_label, select_download};
use crate::feed::FeedSnapshot;
use crate::notes::{Section, parse_release_notes};
use crate::provider::Release;

use super::format_release_date;

const CHECK_ICON: &str = r#"<svg class="w-5 h-5 mr-3 text-deepmind-blue" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"></path></svg>"#;
const DOWNLOAD_ICON: &str = r#"<svg class="w-5 h-5 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 10v6m0 0l-3-3m3 3l3-3m2 8H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z"></path></svg>"#;
const ERROR_ICON: &str = r#"<svg class="w-5 h-5 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"></path></svg>"#;
const EMPTY_ICON: &str = r#"<svg class="w-5 h-5 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M20 13V6a2 2 0 00-2-2H6a2 2 0 00-2 2v7m16 0v5a2 2 0 01-2 2H6a2 2 0 01-2-2v-5m16 0h-2.586a1 1 0 00-.707.293l-2.414 2.414a1 1 0 01-.707.293h-3.172a1 1 0 01-.707-.293l-2.414-2.414A1 1 0 006.586 13H4"></path></svg>"#;

const ERROR_MESSAGE: &str = "Error loading releases. Please try again later.";
const EMPTY_MESSAGE: &str = "No releases yet. Check back soon for the first release!";
const MISSING_NOTES: &str = "Release notes not available.";

/// Renders the changelog listing for a snapshot.
///
/// The error panel takes precedence over the empty panel; otherwise one card
/// is rendered per release in snapshot order.
pub fn render_changelog(snapshot: &FeedSnapshot) -> String {
    if snapshot.error() {
        return status_panel(
            "bg-red-900/20 border border-red-500/30 text-red-400",
            ERROR_ICON,
            ERROR_MESSAGE,
        );
    }

    if snapshot.releases().is_empty() {
        return status_panel("bg-deepmind-gray text-gray-400", EMPTY_ICON, EMPTY_MESSAGE);
    }

    snapshot.releases().iter().map(render_card).collect()
}

fn status_panel(tone: &str, icon: &str, message: &str) -> String {
    format!(
        r#"<div class="text-center py-8"><div class="inline-flex items-center px-4 py-2 rounded-lg {}">{}{}</div></div>"#,
        tone, icon, message
    )
}

fn render_card(release: &Release) -> String {
    let sections = parse_release_notes(release.body.as_deref());

    let notes = if sections.is_empty() {
        let body = release.body.as_deref().filter(|b| !b.is_empty());
        format!(
            r#"<div><p class="text-gray-400 mb-4">{}</p></div>"#,
            encode_text(body.unwrap_or(MISSING_NOTES))
        )
    } else {
        sections.iter().map(render_section).collect()
    };

    let download = select_download(release)
        .map(|url| {
            format!(
                r#"<div class="mt-6"><a href="{}" target="_blank" class="inline-flex items-center px-4 py-2 bg-deepmind-blue text-deepmind-dark rounded-lg hover:bg-blue-400 transition-colors">{}Download {}</a></div>"#,
                encode_double_quoted_attribute(url),
                DOWNLOAD_ICON,
                encode_text(asset_label(release))
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="changelog-card rounded-xl p-8 mb-8"><div class="flex items-center justify-between mb-6"><h2 class="text-2xl font-bold version-tag">{}</h2><span class="text-gray-400">{}</span></div><div class="space-y-6">{}{}</div></div>"#,
        encode_text(&release.tag),
        encode_text(&format_release_date(release.published_at.as_deref())),
        notes,
        download
    )
}

fn render_section(section: &Section) -> String {
    let items = if section.items.is_empty() {
        String::new()
    } else {
        let list: String = section
            .items
            .iter()
            .map(|item| {
                format!(
                    r#"<li class="flex items-center">{}{}</li>"#,
                    CHECK_ICON,
                    encode_text(item)
                )
            })
            .collect();
        format!(r#"<ul class="space-y-2 text-gray-400">{}</ul>"#, list)
    };

    format!(
        r#"<div><h4 class="text-lg font-medium mb-2">{}</h4>{}</div>"#,
        encode_text(&section.title),
        items
    )
}
