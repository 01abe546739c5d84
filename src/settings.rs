//! # Settings
//!
//! The shell is configured with a single TOML file
//! which must contain exactly one [`Settings`](struct.Settings.html) object.
//!
//! ## Example
//!
//! ```toml
//! http_port = 8080
//! root_url = "/app"
//! index = "home"
//! title = "My site"
//! stylesheets = ["https://cdn.jsdelivr.net/npm/semantic-ui@2.4.2/dist/semantic.min.css"]
//!
//! [[menu]]
//! label = "Home"
//! icon = "home"
//! page_name = "home"
//!
//! [[pages]]
//! name = "home"
//! title = "Home"
//!
//! [[pages]]
//! name = "settings-general"
//! title = "General settings"
//! menu_entry = "Settings"
//! menu_icon = "cogs"
//! menu_sub_label = "General"
//! ```

use crate::core::menu::MenuItem;
use crate::prelude::*;
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

/// Read the settings file.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read the settings from {}", path.display()))?;
    parse(&contents).with_context(|| format!("failed to parse the settings from {}", path.display()))
}

pub fn parse(contents: &str) -> Result<Settings> {
    Ok(toml::from_str(contents)?)
}

/// Represents a root settings object.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Web server port.
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Web server address.
    #[serde(default = "default_http_address")]
    pub http_address: IpAddr,

    /// The base URL the users reach the server at. Prefixes all the links and assets.
    /// Only relevant behind a reverse proxy which serves the application in a sub path.
    #[serde(default)]
    pub root_url: String,

    /// Page `/` redirects to.
    pub index: Option<String>,

    /// Site title, appended to the page titles.
    pub title: Option<String>,

    /// Extra stylesheets included into every page after the built-in one.
    #[serde(default)]
    pub stylesheets: Vec<String>,

    /// Extra scripts included into every page after the built-in one.
    #[serde(default)]
    pub scripts: Vec<String>,

    /// Explicitly configured menu items. Page menu entries follow them.
    #[serde(default)]
    pub menu: Vec<MenuItem>,

    #[serde(default)]
    pub pages: Vec<PageSettings>,
}

/// A page configuration.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct PageSettings {
    /// Identifies the page in its URL.
    pub name: String,

    /// Defaults to the page name.
    pub title: Option<String>,

    pub description: Option<String>,

    /// Label of the menu entry linking to the page, or of the group when `menu_sub_label` is set.
    pub menu_entry: Option<String>,

    pub menu_icon: Option<String>,

    /// Puts the menu entry into the `menu_entry` group under this label.
    pub menu_sub_label: Option<String>,

    pub menu_sub_icon: Option<String>,
}

fn default_http_port() -> u16 {
    8080
}

fn default_http_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}
