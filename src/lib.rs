//! Shared page shell and navigation menu for server-rendered web pages.
//!
//! The navigation menu is configured once, validated into a [`Menu`](core/menu/struct.Menu.html)
//! and rendered for every page twice: as a sidebar for narrow screens and as a top bar
//! for the wide ones.

pub mod core;
pub mod logging;
pub mod opts;
pub mod prelude;
pub mod settings;
pub mod statics;
pub mod templates;
pub mod web;

pub use crate::prelude::Result;
