//! Everything needed to serve the pages. Built once at startup and never changed afterwards.

use crate::core::error::MenuError;
use crate::core::menu::{Menu, MenuBuilder};
use crate::prelude::*;
use crate::settings::{PageSettings, Settings};
use crate::statics;
use crate::templates::base::Base;
use crate::templates::menu::{page_url, render as render_menu};
use crate::templates::page::PageBody;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
}

impl From<&PageSettings> for Page {
    fn from(settings: &PageSettings) -> Self {
        Self {
            name: settings.name.clone(),
            title: settings.title.clone().unwrap_or_else(|| settings.name.clone()),
            description: settings.description.clone(),
        }
    }
}

#[derive(Debug)]
pub struct Site {
    pub menu: Menu,

    /// Root URL without the trailing slash.
    pub root_url: String,

    pub index: Option<String>,

    /// Site title, appended to the page titles.
    pub title: Option<String>,

    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,

    /// Identifies this server run, so that the client scripts can notice a restart.
    pub server_token: String,

    pages: HashMap<String, Page>,
}

impl Site {
    pub fn new(settings: &Settings) -> Result<Self> {
        let menu = build_menu(settings).context("the menu is misconfigured")?;

        let mut pages = HashMap::new();
        for page_settings in settings.pages.iter() {
            if pages.contains_key(&page_settings.name) {
                warn!("Page `{}` is configured twice, using the first one.", page_settings.name);
                continue;
            }
            pages.insert(page_settings.name.clone(), Page::from(page_settings));
        }

        if let Some(index) = &settings.index {
            if !pages.contains_key(index) {
                warn!("Index page `{}` is not configured.", index);
            }
        }

        Ok(Self {
            menu,
            root_url: settings.root_url.trim_end_matches('/').to_string(),
            index: settings.index.clone(),
            title: settings.title.clone(),
            stylesheets: with_builtins(statics::STYLESHEETS, &settings.stylesheets),
            scripts: with_builtins(statics::SCRIPTS, &settings.scripts),
            server_token: Uuid::new_v4().to_string(),
            pages,
        })
    }

    pub fn page(&self, name: &str) -> Option<&Page> {
        self.pages.get(name)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the URL `/` redirects to.
    pub fn index_url(&self) -> Option<String> {
        self.index.as_ref().map(|index| page_url(&self.root_url, index))
    }

    /// Returns the document title of the page.
    pub fn page_title(&self, page: &Page) -> String {
        match &self.title {
            Some(title) => format!("{} | {}", page.title, title),
            None => page.title.clone(),
        }
    }

    /// Renders the page within the shell, highlighting the menu entries linking to it.
    pub fn render_page(&self, page: &Page) -> String {
        let active = self.menu.active_for_page(&page.name);
        let menu = render_menu(&self.menu, &active, &self.root_url);
        let title = self.page_title(page);
        Base {
            title: &title,
            root_url: &self.root_url,
            stylesheets: &self.stylesheets,
            scripts: &self.scripts,
            server_token: &self.server_token,
            menu: &menu,
            body: PageBody { page },
        }
        .to_string()
    }
}

/// Explicit menu items go first, then the page entries in the order of the pages.
fn build_menu(settings: &Settings) -> std::result::Result<Menu, MenuError> {
    let mut builder = MenuBuilder::new();
    for item in settings.menu.iter() {
        builder.add_item(item.clone());
    }
    for page in settings.pages.iter() {
        match (&page.menu_entry, &page.menu_sub_label) {
            (Some(entry), Some(sub_label)) => {
                builder.add_sub_entry(
                    &page.name,
                    entry,
                    page.menu_icon.clone(),
                    sub_label,
                    page.menu_sub_icon.clone(),
                );
            }
            (Some(entry), None) => {
                builder.add_entry(&page.name, entry, page.menu_icon.clone());
            }
            (None, Some(sub_label)) => {
                warn!("Page `{}` has submenu label `{}` but no menu entry.", page.name, sub_label);
            }
            (None, None) => {}
        }
    }
    builder.build()
}

fn with_builtins(builtins: &[&str], extra: &[String]) -> Vec<String> {
    builtins
        .iter()
        .map(|path| path.to_string())
        .chain(extra.iter().cloned())
        .collect()
}
