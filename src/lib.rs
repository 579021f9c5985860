pub mod commands;
pub mod completions;
pub mod config;
pub mod content;
pub mod inference;
pub mod logging;
pub mod materialize;
pub mod models;
pub mod names;
pub mod reconcile;
pub mod store;

/// Banner printed at the top of every report
pub const BANNER: &str = "S4A Dictionary";
