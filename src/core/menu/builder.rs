//! Incremental menu construction.

use crate::core::error::MenuError;
use crate::core::menu::{Menu, MenuItem, SubMenuItem};

#[derive(Debug, Default)]
pub struct MenuBuilder {
    items: Vec<MenuItem>,
}

impl MenuBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: MenuItem) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Appends a top-level link to the page.
    pub fn add_entry<P, L>(&mut self, page_name: P, label: L, icon: Option<String>) -> &mut Self
    where
        P: Into<String>,
        L: Into<String>,
    {
        let mut item = MenuItem::link(label, page_name);
        item.icon = icon;
        self.add_item(item)
    }

    /// Appends a link to the page into the group labelled `group_label`.
    ///
    /// The group gets created at the end of the menu unless it already exists.
    pub fn add_sub_entry<P, G, L>(
        &mut self,
        page_name: P,
        group_label: G,
        group_icon: Option<String>,
        label: L,
        icon: Option<String>,
    ) -> &mut Self
    where
        P: Into<String>,
        G: Into<String>,
        L: Into<String>,
    {
        let group_label = group_label.into();
        let mut sub_item = SubMenuItem::new(label, page_name);
        sub_item.icon = icon;

        match self
            .items
            .iter_mut()
            .find(|item| item.is_group() && item.label == group_label)
        {
            Some(group) => group.submenus.push(sub_item),
            None => {
                let mut group = MenuItem::group(group_label, vec![sub_item]);
                group.icon = group_icon;
                self.items.push(group);
            }
        }
        self
    }

    pub fn build(&self) -> Result<Menu, MenuError> {
        Menu::new(self.items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::EntryKind;

    type Result = std::result::Result<(), MenuError>;

    #[test]
    fn sub_entries_share_group() -> Result {
        let menu = MenuBuilder::new()
            .add_entry("index", "Home", Some("home".into()))
            .add_sub_entry("another_page", "Foo", None, "Bar", Some("bars".into()))
            .add_sub_entry("third_page", "Foo", Some("ignored".into()), "Baz", None)
            .build()?;

        assert_eq!(menu.len(), 2);
        let group = &menu.entries()[1];
        assert_eq!(group.label(), "Foo");
        assert_eq!(group.icon(), None);
        match group.kind() {
            EntryKind::Group { children } => {
                let pages: Vec<&str> = children.iter().map(|leaf| leaf.page_name()).collect();
                assert_eq!(pages, vec!["another_page", "third_page"]);
                assert_eq!(children[0].icon(), Some("bars"));
            }
            kind => panic!("expected a group, got {:?}", kind),
        }
        Ok(())
    }

    #[test]
    fn link_with_same_label_is_not_a_group() -> Result {
        let menu = MenuBuilder::new()
            .add_entry("foo", "Foo", None)
            .add_sub_entry("bar", "Foo", Some("folder".into()), "Bar", None)
            .build()?;

        assert_eq!(menu.len(), 2);
        assert!(matches!(menu.entries()[0].kind(), EntryKind::Link { .. }));
        assert!(matches!(menu.entries()[1].kind(), EntryKind::Group { .. }));
        assert_eq!(menu.entries()[1].icon(), Some("folder"));
        Ok(())
    }

    #[test]
    fn malformed_item_fails_build() {
        let result = MenuBuilder::new().add_item(MenuItem::group("Empty", Vec::new())).build();
        assert!(matches!(result, Err(MenuError::MalformedMenuItem { position: 0, .. })));
    }
}
