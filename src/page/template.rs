//! HTML documents with comment-delimited slots.

use anyhow::{Result, bail};
use html_escape::encode_text;
use log::{debug, warn};

use crate::present::CallToAction;

use super::PageSurface;

pub const SLOT_VERSION: &str = "version";
pub const SLOT_DOWNLOAD: &str = "download";
pub const SLOT_CHANGELOG: &str = "changelog";

/// An HTML document held in memory while its slots are bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePage {
    html: String,
}

impl TemplatePage {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Replaces the contents of every occurrence of `slot` with `content`.
    ///
    /// Markers are kept so a page can be bound again on the next run.
    /// Returns the number of occurrences replaced.
    pub fn bind(&mut self, slot: &str, content: &str) -> Result<usize> {
        let open = format!("<!-- relfeed:{} -->", slot);
        let close = format!("<!-- /relfeed:{} -->", slot);

        let mut out = String::with_capacity(self.html.len() + content.len());
        let mut rest = self.html.as_str();
        let mut count = 0;

        while let Some(start) = rest.find(&open) {
            let inner = start + open.len();
            let Some(len) = rest[inner..].find(&close) else {
                bail!("Slot '{}' is opened but never closed", slot);
            };
            out.push_str(&rest[..inner]);
            out.push_str(content);
            out.push_str(&close);
            rest = &rest[inner + len + close.len()..];
            count += 1;
        }
        out.push_str(rest);
        self.html = out;

        if count == 0 {
            warn!("Page has no '{}' slot", slot);
        } else {
            debug!("Bound {} '{}' slot(s)", count, slot);
        }
        Ok(count)
    }
}

impl PageSurface for TemplatePage {
    fn set_version_label(&mut self, text: &str) -> Result<usize> {
        self.bind(SLOT_VERSION, &encode_text(text))
    }

    fn set_call_to_action(&mut self, cta: &CallToAction) -> Result<usize> {
        self.bind(SLOT_DOWNLOAD, &cta.to_html())
    }

    fn set_changelog(&mut self, html: &str) -> Result<usize> {
        self.bind(SLOT_CHANGELOG, html)
    }
}
