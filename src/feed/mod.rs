//! Release feed: fetches the release list and decides what the pages show
//! when the network is unavailable.
//!
//! [`ReleaseFeed::fetch_releases`] never fails. Any HTTP or decoding error is
//! replaced by [`fallback_releases`] and recorded in the returned
//! [`FeedSnapshot`]. [`ReleaseFeed::fetch_latest_release`] has the opposite
//! policy and reports failure as `None`.

mod fallback;

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};

use crate::provider::{Provider, Release, RepoId};

pub use fallback::fallback_releases;

/// Where the releases of a snapshot came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedOrigin {
    /// Returned by the upstream API.
    Live,
    /// Substituted from the static table after a failed request.
    Fallback { reason: String },
    /// The request failed and nothing was substituted.
    Failed { reason: String },
}

/// Immutable result of a fetch, handed to the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSnapshot {
    releases: Vec<Release>,
    origin: FeedOrigin,
    error: bool,
}

impl FeedSnapshot {
    pub fn live(releases: Vec<Release>) -> Self {
        Self {
            releases,
            origin: FeedOrigin::Live,
            error: false,
        }
    }

    /// Snapshot backed by the static fallback table.
    ///
    /// The error flag stays clear: fallback data is meant to keep the page
    /// looking normal.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            releases: fallback_releases(),
            origin: FeedOrigin::Fallback {
                reason: reason.into(),
            },
            error: false,
        }
    }

    /// Snapshot with the explicit error flag raised and no releases.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            releases: Vec::new(),
            origin: FeedOrigin::Failed {
                reason: reason.into(),
            },
            error: true,
        }
    }

    /// Releases in upstream order (newest first).
    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    /// The first release; upstream order is trusted, no sorting happens.
    pub fn latest(&self) -> Option<&Release> {
        self.releases.first()
    }

    pub fn origin(&self) -> &FeedOrigin {
        &self.origin
    }

    pub fn used_fallback(&self) -> bool {
        matches!(self.origin, FeedOrigin::Fallback { .. })
    }

    /// Whether the explicit error flag is set.
    pub fn error(&self) -> bool {
        self.error
    }

    /// Treats a fallback snapshot as failed, for callers that would rather
    /// show the error state than stale data.
    pub fn into_strict(self) -> Self {
        match self.origin {
            FeedOrigin::Fallback { reason } if !self.error => Self::failed(reason),
            origin => Self { origin, ..self },
        }
    }
}

/// Fetches releases for one repository through a [`Provider`].
pub struct ReleaseFeed<P: Provider> {
    provider: P,
    repo: RepoId,
    loading: AtomicBool,
}

impl<P: Provider> ReleaseFeed<P> {
    pub fn new(provider: P, repo: RepoId) -> Self {
        Self {
            provider,
            repo,
            loading: AtomicBool::new(false),
        }
    }

    pub fn repo(&self) -> &RepoId {
        &self.repo
    }

    /// True while a [`fetch_releases`](Self::fetch_releases) call is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Fetches the release list, substituting fallback data on any failure.
    #[tracing::instrument(skip(self), fields(repo = %self.repo))]
    pub async fn fetch_releases(&self) -> FeedSnapshot {
        let _loading = LoadingGuard::start(&self.loading);

        match self.provider.get_releases(&self.repo).await {
            Ok(releases) => {
                debug!("Fetched {} release(s) for {}", releases.len(), self.repo);
                FeedSnapshot::live(releases)
            }
            Err(e) => {
                warn!(
                    "Fetching releases for {} failed ({:#}), using fallback data",
                    self.repo, e
                );
                FeedSnapshot::fallback(format!("{:#}", e))
            }
        }
    }

    /// Fetches the upstream "latest" release; `None` on any failure.
    #[tracing::instrument(skip(self), fields(repo = %self.repo))]
    pub async fn fetch_latest_release(&self) -> Option<Release> {
        match self.provider.get_latest_release(&self.repo).await {
            Ok(release) => Some(release),
            Err(e) => {
                warn!("Fetching latest release for {} failed: {:#}", self.repo, e);
                None
            }
        }
    }
}

/// Holds the loading flag up until dropped, on every exit path.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
