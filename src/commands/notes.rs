use anyhow::Result;

use crate::{
    feed::{FeedSnapshot, ReleaseFeed},
    notes::parse_release_notes,
    present::display_version,
    provider::{Provider, Release},
};

use super::config::Config;

const MISSING_NOTES: &str = "Release notes not available.";

/// Print the parsed release notes of a release (latest by default)
#[tracing::instrument(skip(api_url))]
pub async fn notes(tag: Option<&str>, api_url: Option<String>) -> Result<()> {
    let feed = Config::new(api_url)?.into_feed();
    println!("{}", release_notes(&feed, tag).await?);
    Ok(())
}

pub(crate) async fn release_notes<P: Provider>(
    feed: &ReleaseFeed<P>,
    tag: Option<&str>,
) -> Result<String> {
    let snapshot = feed.fetch_releases().await;
    let release = find_release(&snapshot, tag)?;
    Ok(format_notes(release))
}

fn find_release<'a>(snapshot: &'a FeedSnapshot, tag: Option<&str>) -> Result<&'a Release> {
    match tag {
        None => snapshot
            .latest()
            .ok_or_else(|| anyhow::anyhow!("No releases published yet.")),
        Some(tag) => {
            let wanted = display_version(tag);
            snapshot
                .releases()
                .iter()
                .find(|r| r.tag == tag || display_version(&r.tag) == wanted)
                .ok_or_else(|| anyhow::anyhow!("Release {} not found.", tag))
        }
    }
}

fn format_notes(release: &Release) -> String {
    let mut out = display_version(&release.tag);
    let sections = parse_release_notes(release.body.as_deref());

    if sections.is_empty() {
        let body = release.body.as_deref().map(str::trim).filter(|b| !b.is_empty());
        out.push_str("\n\n");
        out.push_str(body.unwrap_or(MISSING_NOTES));
        return out;
    }

    for section in sections {
        out.push_str("\n\n");
        out.push_str(&section.title);
        for item in section.items {
            out.push_str("\n  - ");
            out.push_str(&item);
        }
    }
    out
}
