pub mod asset;
pub mod commands;
pub mod feed;
pub mod http;
pub mod notes;
pub mod page;
pub mod present;
pub mod provider;
pub mod runtime;
