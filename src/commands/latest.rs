use anyhow::Result;
use log::debug;

use crate::{
    asset::select_download,
    feed::ReleaseFeed,
    present::{display_version, format_release_date},
    provider::{Provider, Release},
};

use super::config::Config;

/// Show the release the API designates as latest
#[tracing::instrument(skip(api_url))]
pub async fn latest(api_url: Option<String>) -> Result<()> {
    let feed = Config::new(api_url)?.into_feed();
    println!("{}", describe_latest(&feed).await);
    Ok(())
}

pub(crate) async fn describe_latest<P: Provider>(feed: &ReleaseFeed<P>) -> String {
    match feed.fetch_latest_release().await {
        Some(release) => describe(&release),
        None => {
            debug!("No latest release for {}", feed.repo());
            "No release available".to_string()
        }
    }
}

fn describe(release: &Release) -> String {
    let mut lines = vec![format!("Latest release: {}", display_version(&release.tag))];

    let published = format_release_date(release.published_at.as_deref());
    if !published.is_empty() {
        lines.push(format!("Published: {}", published));
    }

    match select_download(release) {
        Some(url) => lines.push(format!("Download: {}", url)),
        None => lines.push("Download: (none)".to_string()),
    }

    lines.join("\n")
}
