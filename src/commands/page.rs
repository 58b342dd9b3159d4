use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::{
    feed::{FeedSnapshot, ReleaseFeed},
    page::{TemplatePage, apply_changelog, apply_widget},
    present::{WidgetView, render_changelog},
    provider::Provider,
    runtime::Runtime,
};

use super::config::Config;

/// Options shared by the page-updating commands.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    pub api_url: Option<String>,
    /// Show the error state instead of fallback data when the API fails.
    pub strict: bool,
}

/// Update the version label and download button slots of a page
#[tracing::instrument(skip(runtime, options))]
pub async fn widget<R: Runtime>(
    runtime: R,
    page: &Path,
    output: Option<PathBuf>,
    options: PageOptions,
) -> Result<()> {
    let feed = Config::new(options.api_url)?.into_feed();
    let snapshot = fetch(&feed, options.strict).await;
    update_home(&runtime, &snapshot, page, output.as_deref())
}

/// Update the changelog slot of a page
#[tracing::instrument(skip(runtime, options))]
pub async fn changelog<R: Runtime>(
    runtime: R,
    page: &Path,
    output: Option<PathBuf>,
    options: PageOptions,
) -> Result<()> {
    let feed = Config::new(options.api_url)?.into_feed();
    let snapshot = fetch(&feed, options.strict).await;
    update_changelog(&runtime, &snapshot, page, output.as_deref())
}

/// Fetch once, then update the home page and optionally the changelog page.
///
/// The changelog page carries the same navigation widget as the home page,
/// so it gets both the widget and the changelog bound.
#[tracing::instrument(skip(runtime, options))]
pub async fn render<R: Runtime>(
    runtime: R,
    home: &Path,
    changelog_page: Option<&Path>,
    options: PageOptions,
) -> Result<()> {
    let feed = Config::new(options.api_url)?.into_feed();
    let snapshot = fetch(&feed, options.strict).await;

    update_home(&runtime, &snapshot, home, None)?;
    if let Some(changelog_page) = changelog_page {
        update_changelog_page(&runtime, &snapshot, changelog_page, None)?;
    }
    Ok(())
}

pub(crate) async fn fetch<P: Provider>(feed: &ReleaseFeed<P>, strict: bool) -> FeedSnapshot {
    let snapshot = feed.fetch_releases().await;
    if snapshot.used_fallback() {
        info!("Release API unavailable, rendering fallback data");
    }
    if strict {
        snapshot.into_strict()
    } else {
        snapshot
    }
}

pub(crate) fn update_home<R: Runtime>(
    runtime: &R,
    snapshot: &FeedSnapshot,
    page: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let view = WidgetView::from_snapshot(snapshot);
    debug!("Widget state: {:?}", view);
    bind_page(runtime, page, output, |template| {
        apply_widget(&view, template)
    })
}

pub(crate) fn update_changelog<R: Runtime>(
    runtime: &R,
    snapshot: &FeedSnapshot,
    page: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let html = render_changelog(snapshot);
    bind_page(runtime, page, output, |template| {
        apply_changelog(&html, template)
    })
}

pub(crate) fn update_changelog_page<R: Runtime>(
    runtime: &R,
    snapshot: &FeedSnapshot,
    page: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let view = WidgetView::from_snapshot(snapshot);
    let html = render_changelog(snapshot);
    bind_page(runtime, page, output, |template| {
        let widget = apply_widget(&view, template)?;
        let changelog = apply_changelog(&html, template)?;
        Ok(widget + changelog)
    })
}

/// Reads `page`, binds its slots, and writes the result to `output`
/// (or back to `page`).
fn bind_page<R, F>(runtime: &R, page: &Path, output: Option<&Path>, bind: F) -> Result<()>
where
    R: Runtime,
    F: FnOnce(&mut TemplatePage) -> Result<usize>,
{
    if !runtime.exists(page) {
        anyhow::bail!("Page {} does not exist.", page.display());
    }

    let html = runtime.read_to_string(page)?;
    let mut template = TemplatePage::new(html);
    let bound = bind(&mut template)
        .with_context(|| format!("Failed to bind release data into {}", page.display()))?;

    let target = output.unwrap_or(page);
    runtime.write(target, template.as_str().as_bytes())?;
    info!("Updated {} slot(s) in {}", bound, target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockProvider, Release, ReleaseAsset, RepoId};
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;

    const HOME: &str = "<span><!-- relfeed:version --><!-- /relfeed:version --></span>\
<!-- relfeed:download --><!-- /relfeed:download -->";
    const CHANGELOG: &str = "<main><!-- relfeed:changelog -->Loading...<!-- /relfeed:changelog --></main>";

    fn release(tag: &str) -> Release {
        Release {
            tag: tag.into(),
            published_at: Some("2024-06-01T00:00:00Z".into()),
            body: Some("## Fixes\n- Crash".into()),
            assets: vec![ReleaseAsset {
                name: "Reframer.dmg".into(),
                download_url: "https://dl.example.com/Reframer.dmg".into(),
            }],
        }
    }

    fn expect_page(runtime: &mut MockRuntime, path: &str, html: &'static str) {
        runtime
            .expect_exists()
            .with(eq(PathBuf::from(path)))
            .returning(|_| true);
        runtime
            .expect_read_to_string()
            .with(eq(PathBuf::from(path)))
            .returning(move |_| Ok(html.to_string()));
    }

    #[test]
    fn test_update_home_writes_in_place() {
        let mut runtime = MockRuntime::new();
        expect_page(&mut runtime, "/site/index.html", HOME);
        runtime
            .expect_write()
            .withf(|path, contents| {
                let html = std::str::from_utf8(contents).unwrap();
                path == Path::new("/site/index.html")
                    && html.contains("<!-- relfeed:version -->v2.0.0<!-- /relfeed:version -->")
                    && html.contains("Download v2.0.0</a>")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let snapshot = FeedSnapshot::live(vec![release("2.0.0")]);
        update_home(&runtime, &snapshot, Path::new("/site/index.html"), None).unwrap();
    }

    #[test]
    fn test_update_home_coming_soon_to_output() {
        let mut runtime = MockRuntime::new();
        expect_page(&mut runtime, "/site/index.html", HOME);
        runtime
            .expect_write()
            .withf(|path, contents| {
                let html = std::str::from_utf8(contents).unwrap();
                path == Path::new("/out/index.html")
                    && html.contains("<!-- relfeed:version -->Coming Soon<!-- /relfeed:version -->")
                    && html.contains("cursor-not-allowed")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let snapshot = FeedSnapshot::live(vec![]);
        update_home(
            &runtime,
            &snapshot,
            Path::new("/site/index.html"),
            Some(Path::new("/out/index.html")),
        )
        .unwrap();
    }

    #[test]
    fn test_update_changelog() {
        let mut runtime = MockRuntime::new();
        expect_page(&mut runtime, "/site/changelog.html", CHANGELOG);
        runtime
            .expect_write()
            .withf(|_, contents| {
                let html = std::str::from_utf8(contents).unwrap();
                html.contains("changelog-card")
                    && html.contains("June 2024")
                    && !html.contains("Loading...")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let snapshot = FeedSnapshot::live(vec![release("v1.0.0")]);
        update_changelog(&runtime, &snapshot, Path::new("/site/changelog.html"), None).unwrap();
    }

    #[test]
    fn test_update_changelog_page_binds_nav_widget() {
        const PAGE: &str = "<nav><!-- relfeed:version -->Loading...<!-- /relfeed:version -->\
<!-- relfeed:download -->Loading...<!-- /relfeed:download --></nav>\
<main><!-- relfeed:changelog -->Loading...<!-- /relfeed:changelog --></main>";

        let mut runtime = MockRuntime::new();
        expect_page(&mut runtime, "/site/changelog.html", PAGE);
        runtime
            .expect_write()
            .withf(|path, contents| {
                let html = std::str::from_utf8(contents).unwrap();
                path == Path::new("/site/changelog.html")
                    && html.contains("<!-- relfeed:version -->v1.0.0<!-- /relfeed:version -->")
                    && html.contains("Download v1.0.0</a>")
                    && html.contains("changelog-card")
                    && !html.contains("Loading...")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let snapshot = FeedSnapshot::live(vec![release("v1.0.0")]);
        update_changelog_page(&runtime, &snapshot, Path::new("/site/changelog.html"), None)
            .unwrap();
    }

    #[test]
    fn test_missing_page_fails_without_writing() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| false);
        runtime.expect_write().never();

        let result = update_home(
            &runtime,
            &FeedSnapshot::live(vec![]),
            Path::new("/nope.html"),
            None,
        );
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_unclosed_slot_fails_without_writing() {
        let mut runtime = MockRuntime::new();
        expect_page(&mut runtime, "/site/index.html", "<!-- relfeed:version -->");
        runtime.expect_write().never();

        let result = update_home(
            &runtime,
            &FeedSnapshot::live(vec![]),
            Path::new("/site/index.html"),
            None,
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_strict_turns_fallback_into_error() {
        let mut provider = MockProvider::new();
        provider
            .expect_get_releases()
            .returning(|_| Err(anyhow::anyhow!("offline")));
        let feed = ReleaseFeed::new(provider, RepoId::default());

        let snapshot = fetch(&feed, true).await;
        assert!(snapshot.error());
        assert!(snapshot.releases().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_lenient_keeps_fallback() {
        let mut provider = MockProvider::new();
        provider
            .expect_get_releases()
            .returning(|_| Err(anyhow::anyhow!("offline")));
        let feed = ReleaseFeed::new(provider, RepoId::default());

        let snapshot = fetch(&feed, false).await;
        assert!(!snapshot.error());
        assert!(snapshot.used_fallback());
        assert!(snapshot.latest().is_some());
    }
}
