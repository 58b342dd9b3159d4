//! Navigation widget: version label and download call-to-action.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::asset::select_download;
use crate::feed::FeedSnapshot;
use crate::provider::Release;

use super::display_version;

/// Classes added to a call-to-action that cannot be followed.
pub const DISABLED_CLASSES: &str = "opacity-50 cursor-not-allowed";

const COMING_SOON: &str = "Coming Soon";
const ERROR_VERSION: &str = "v?.?.?";
const ERROR_LABEL: &str = "Error Loading";
const NO_DOWNLOAD_LABEL: &str = "No Download Available";
const INERT_HREF: &str = "#";

/// The download button as it should appear on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub href: String,
    pub label: String,
    pub disabled: bool,
}

impl CallToAction {
    fn link(href: &str, label: String) -> Self {
        Self {
            href: href.to_string(),
            label,
            disabled: false,
        }
    }

    fn disabled(label: &str) -> Self {
        Self {
            href: INERT_HREF.to_string(),
            label: label.to_string(),
            disabled: true,
        }
    }

    /// Renders the button as an anchor element.
    pub fn to_html(&self) -> String {
        let mut class = String::from("relfeed-download");
        if self.disabled {
            class.push(' ');
            class.push_str(DISABLED_CLASSES);
        }
        let aria = if self.disabled {
            r#" aria-disabled="true""#
        } else {
            ""
        };
        format!(
            r#"<a href="{}" class="{}"{}>{}</a>"#,
            encode_double_quoted_attribute(&self.href),
            class,
            aria,
            encode_text(&self.label)
        )
    }
}

/// Terminal state of the navigation widget. Exactly one applies per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetView {
    /// No release has been published.
    ComingSoon,
    /// The snapshot carries the explicit error flag.
    Error,
    /// A latest release exists; `download_url` is `None` when it has no assets.
    Ready {
        version: String,
        download_url: Option<String>,
    },
}

impl WidgetView {
    pub fn from_snapshot(snapshot: &FeedSnapshot) -> Self {
        if snapshot.error() {
            return WidgetView::Error;
        }
        Self::from_release(snapshot.latest())
    }

    pub fn from_release(latest: Option<&Release>) -> Self {
        match latest {
            None => WidgetView::ComingSoon,
            Some(release) => WidgetView::Ready {
                version: display_version(&release.tag),
                download_url: select_download(release).map(str::to_string),
            },
        }
    }

    /// Text for every version label element.
    pub fn version_label(&self) -> String {
        match self {
            WidgetView::ComingSoon => COMING_SOON.to_string(),
            WidgetView::Error => ERROR_VERSION.to_string(),
            WidgetView::Ready { version, .. } => version.clone(),
        }
    }

    /// Button for every call-to-action element.
    pub fn call_to_action(&self) -> CallToAction {
        match self {
            WidgetView::ComingSoon => CallToAction::disabled(COMING_SOON),
            WidgetView::Error => CallToAction::disabled(ERROR_LABEL),
            WidgetView::Ready {
                version,
                download_url: Some(url),
            } => CallToAction::link(url, format!("Download {}", version)),
            WidgetView::Ready {
                download_url: None, ..
            } => CallToAction::disabled(NO_DOWNLOAD_LABEL),
        }
    }
}
