//! Contains compiled in static files.

pub const MAIN_CSS: &str = include_str!("statics/main.css");
pub const MAIN_JS: &str = include_str!("statics/main.js");

/// Relative paths of the built-in assets, included into every page.
pub const STYLESHEETS: &[&str] = &["static/main.css"];
pub const SCRIPTS: &[&str] = &["static/main.js"];
