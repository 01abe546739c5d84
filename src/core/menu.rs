//! # Navigation menu
//!
//! The menu is configured as a list of [`MenuItem`]s. Each top-level item either links to a page
//! or groups a number of [`SubMenuItem`]s, which always link to a page.
//!
//! [`Menu::new`] validates the items and assigns every item an [`ItemId`]. The ids are unique
//! across all menus of the process, so an [`ActiveSet`] only ever matches items of the menu
//! its ids were taken from.
//!
//! ## Example
//!
//! ```toml
//! [[menu]]
//! label = "Home"
//! icon = "home"
//! page_name = "home"
//!
//! [[menu]]
//! label = "Settings"
//! icon = "cog"
//!
//! [[menu.submenus]]
//! label = "General"
//! page_name = "settings-general"
//! ```

use crate::core::error::MenuError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

pub mod active;
pub mod builder;

pub use self::active::ActiveSet;
pub use self::builder::MenuBuilder;

/// Source of the menu numbers baked into [`ItemId`]s.
static NEXT_MENU_ID: AtomicU64 = AtomicU64::new(1);

/// Top-level menu item as configured.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MenuItem {
    pub label: String,

    /// [Semantic UI icon](https://semantic-ui.com/elements/icon.html) name.
    pub icon: Option<String>,

    /// Page to link to. Ignored when `submenus` is not empty.
    pub page_name: Option<String>,

    #[serde(default)]
    pub submenus: Vec<SubMenuItem>,
}

impl MenuItem {
    /// Item linking to the page.
    pub fn link<L: Into<String>, P: Into<String>>(label: L, page_name: P) -> Self {
        Self {
            label: label.into(),
            icon: None,
            page_name: Some(page_name.into()),
            submenus: Vec::new(),
        }
    }

    /// Item grouping the submenus.
    pub fn group<L: Into<String>>(label: L, submenus: Vec<SubMenuItem>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            page_name: None,
            submenus,
        }
    }

    pub fn icon<I: Into<String>>(mut self, icon: I) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Tells whether the item renders as a group.
    pub fn is_group(&self) -> bool {
        !self.submenus.is_empty()
    }
}

/// Submenu item. Submenu items cannot be nested any further.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SubMenuItem {
    pub label: String,
    pub icon: Option<String>,
    pub page_name: String,
}

impl SubMenuItem {
    pub fn new<L: Into<String>, P: Into<String>>(label: L, page_name: P) -> Self {
        Self {
            label: label.into(),
            icon: None,
            page_name: page_name.into(),
        }
    }

    pub fn icon<I: Into<String>>(mut self, icon: I) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Identity of a single item within a validated [`Menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId {
    menu: u64,
    position: usize,
}

/// Validated and immutable menu.
#[derive(Debug)]
pub struct Menu {
    entries: Vec<Entry>,
}

/// Top-level entry of a validated menu.
#[derive(Debug)]
pub struct Entry {
    id: ItemId,
    label: String,
    icon: Option<String>,
    kind: EntryKind,
}

#[derive(Debug)]
pub enum EntryKind {
    Link { page_name: String },
    Group { children: Vec<Leaf> },
}

/// Submenu entry of a validated menu.
#[derive(Debug)]
pub struct Leaf {
    id: ItemId,
    label: String,
    icon: Option<String>,
    page_name: String,
}

impl Menu {
    /// Validates the items and assigns their identities.
    ///
    /// Fails on an item that has neither a page name nor submenus.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        let menu = NEXT_MENU_ID.fetch_add(1, Ordering::Relaxed);
        let mut position = 0;
        let mut next_id = move || {
            let id = ItemId { menu, position };
            position += 1;
            id
        };

        let mut entries = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let id = next_id();
            let kind = if item.is_group() {
                if let Some(page_name) = &item.page_name {
                    warn!(
                        "Menu item `{}` has both page `{}` and submenus, rendering it as a group.",
                        item.label, page_name,
                    );
                }
                EntryKind::Group {
                    children: item
                        .submenus
                        .into_iter()
                        .map(|sub_item| Leaf {
                            id: next_id(),
                            label: sub_item.label,
                            icon: sub_item.icon,
                            page_name: sub_item.page_name,
                        })
                        .collect(),
                }
            } else if let Some(page_name) = item.page_name {
                EntryKind::Link { page_name }
            } else {
                return Err(MenuError::MalformedMenuItem {
                    position: index,
                    label: item.label,
                });
            };
            entries.push(Entry {
                id,
                label: item.label,
                icon: item.icon,
                kind,
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns ids of the links, top-level or submenu, pointing to the page.
    pub fn ids_for_page<'a>(&'a self, page_name: &'a str) -> impl Iterator<Item = ItemId> + 'a {
        self.entries.iter().flat_map(move |entry| {
            let ids: Vec<ItemId> = match &entry.kind {
                EntryKind::Link { page_name: name } if name == page_name => vec![entry.id],
                EntryKind::Link { .. } => Vec::new(),
                EntryKind::Group { children } => children
                    .iter()
                    .filter(|leaf| leaf.page_name == page_name)
                    .map(|leaf| leaf.id)
                    .collect(),
            };
            ids
        })
    }

    /// Builds the active set for the page. Groups are never activated implicitly.
    pub fn active_for_page(&self, page_name: &str) -> ActiveSet {
        self.ids_for_page(page_name).collect()
    }
}

impl Entry {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }
}

impl Leaf {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn page_name(&self) -> &str {
        &self.page_name
    }
}
