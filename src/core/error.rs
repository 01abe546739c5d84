//! Menu configuration errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MenuError {
    /// The item has neither a page to link to nor a submenu to open.
    #[error("menu item #{position} `{label}` has neither a page name nor submenus")]
    MalformedMenuItem { position: usize, label: String },
}
