//! CLI entry points. Each command builds its own [`config::Config`] and
//! performs a single release fetch.

pub mod config;
mod latest;
mod notes;
mod page;

pub use latest::latest;
pub use notes::notes;
pub use page::{PageOptions, changelog, render, widget};
