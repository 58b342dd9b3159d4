//! Page binding.
//!
//! Pages expose named slots instead of being searched with style selectors.
//! A [`PageSurface`] receives presenter output per slot; [`TemplatePage`]
//! implements it over an HTML document whose slots are comment-delimited:
//!
//! ```html
//! <span><!-- relfeed:version -->Loading...<!-- /relfeed:version --></span>
//! ```

mod template;

use anyhow::Result;
use log::debug;

use crate::present::{CallToAction, WidgetView};

pub use template::{SLOT_CHANGELOG, SLOT_DOWNLOAD, SLOT_VERSION, TemplatePage};

/// A page that can display release information.
///
/// Each setter returns how many elements it updated.
#[cfg_attr(test, mockall::automock)]
pub trait PageSurface {
    fn set_version_label(&mut self, text: &str) -> Result<usize>;
    fn set_call_to_action(&mut self, cta: &CallToAction) -> Result<usize>;
    fn set_changelog(&mut self, html: &str) -> Result<usize>;
}

/// Writes the widget state into every version label and call-to-action.
pub fn apply_widget<S: PageSurface + ?Sized>(view: &WidgetView, surface: &mut S) -> Result<usize> {
    let labels = surface.set_version_label(&view.version_label())?;
    let buttons = surface.set_call_to_action(&view.call_to_action())?;
    debug!(
        "Widget bound to {} version label(s) and {} button(s)",
        labels, buttons
    );
    Ok(labels + buttons)
}

/// Replaces the changelog container contents.
pub fn apply_changelog<S: PageSurface + ?Sized>(html: &str, surface: &mut S) -> Result<usize> {
    let containers = surface.set_changelog(html)?;
    debug!("Changelog bound to {} container(s)", containers);
    Ok(containers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_apply_widget_coming_soon() {
        let mut surface = MockPageSurface::new();
        surface
            .expect_set_version_label()
            .with(eq("Coming Soon"))
            .times(1)
            .returning(|_| Ok(2));
        surface
            .expect_set_call_to_action()
            .withf(|cta| cta.label == "Coming Soon" && cta.disabled && cta.href == "#")
            .times(1)
            .returning(|_| Ok(1));
        surface.expect_set_changelog().never();

        let bound = apply_widget(&WidgetView::ComingSoon, &mut surface).unwrap();
        assert_eq!(bound, 3);
    }

    #[test]
    fn test_apply_widget_propagates_errors() {
        let mut surface = MockPageSurface::new();
        surface
            .expect_set_version_label()
            .returning(|_| Err(anyhow::anyhow!("unclosed slot")));
        surface.expect_set_call_to_action().never();

        assert!(apply_widget(&WidgetView::Error, &mut surface).is_err());
    }

    #[test]
    fn test_apply_changelog() {
        let mut surface = MockPageSurface::new();
        surface
            .expect_set_changelog()
            .with(eq("<div>cards</div>"))
            .times(1)
            .returning(|_| Ok(1));

        assert_eq!(apply_changelog("<div>cards</div>", &mut surface).unwrap(), 1);
    }
}
