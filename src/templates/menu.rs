//! Renders the navigation menu: the sidebar for narrow screens and the top bar for the wide ones.
//!
//! Both variants are rendered from the same [`ItemView`]s, so they always agree on links, order
//! and highlighting.

use crate::core::menu::{ActiveSet, EntryKind, Leaf, Menu};

/// Marks an active top-level item.
pub const ACTIVATED: &str = "activated";

/// Marks an active submenu item.
pub const SELECTED: &str = "selected";

/// Builds the link to the page.
pub fn page_url(root_url: &str, page_name: &str) -> String {
    format!("{}/page/{}/", root_url, page_name)
}

/// Menu item prepared for rendering.
#[derive(Debug, PartialEq)]
pub enum ItemView<'a> {
    Link(LinkView<'a>),
    Group(GroupView<'a>),
}

#[derive(Debug, PartialEq)]
pub struct LinkView<'a> {
    pub href: String,
    pub label: &'a str,
    pub icon: Option<&'a str>,
    pub marker: Option<&'static str>,
}

#[derive(Debug, PartialEq)]
pub struct GroupView<'a> {
    pub label: &'a str,
    pub icon: Option<&'a str>,
    pub marker: Option<&'static str>,
    pub children: Vec<LinkView<'a>>,
}

impl LinkView<'_> {
    pub fn class(&self) -> String {
        with_marker("item", self.marker)
    }
}

impl GroupView<'_> {
    pub fn class(&self, base: &str) -> String {
        with_marker(base, self.marker)
    }
}

/// Both menu variants.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderedMenu {
    pub sidebar: String,
    pub topbar: String,
}

impl RenderedMenu {
    pub fn is_empty(&self) -> bool {
        self.sidebar.is_empty() && self.topbar.is_empty()
    }
}

/// Renders the menu with the active items highlighted.
///
/// An empty menu renders to nothing at all.
pub fn render(menu: &Menu, active: &ActiveSet, root_url: &str) -> RenderedMenu {
    if menu.is_empty() {
        return RenderedMenu::default();
    }
    let items = project(menu, active, root_url);
    RenderedMenu {
        sidebar: Sidebar { items: &items }.to_string(),
        topbar: TopBar { items: &items }.to_string(),
    }
}

/// Decides what every menu item looks like, regardless of the variant.
pub fn project<'a>(menu: &'a Menu, active: &ActiveSet, root_url: &str) -> Vec<ItemView<'a>> {
    menu.entries()
        .iter()
        .map(|entry| match entry.kind() {
            EntryKind::Link { page_name } => ItemView::Link(LinkView {
                href: page_url(root_url, page_name),
                label: entry.label(),
                icon: entry.icon(),
                marker: marker(active.contains(entry.id()), ACTIVATED),
            }),
            EntryKind::Group { children } => ItemView::Group(GroupView {
                label: entry.label(),
                icon: entry.icon(),
                marker: marker(active.contains(entry.id()), ACTIVATED),
                children: children
                    .iter()
                    .map(|leaf| project_leaf(leaf, active, root_url))
                    .collect(),
            }),
        })
        .collect()
}

fn project_leaf<'a>(leaf: &'a Leaf, active: &ActiveSet, root_url: &str) -> LinkView<'a> {
    LinkView {
        href: page_url(root_url, leaf.page_name()),
        label: leaf.label(),
        icon: leaf.icon(),
        marker: marker(active.contains(leaf.id()), SELECTED),
    }
}

fn marker(is_active: bool, marker: &'static str) -> Option<&'static str> {
    if is_active {
        Some(marker)
    } else {
        None
    }
}

fn with_marker(base: &str, marker: Option<&str>) -> String {
    match marker {
        Some(marker) => format!("{} {}", base, marker),
        None => base.to_string(),
    }
}

markup::define! {
    Icon<'a>(name: &'a str) {
        i[class = {format!("{} icon", name)}] {}
    }

    MenuLink<'a>(link: &'a LinkView<'a>) {
        a[class = {link.class()}, href = {&link.href}] {
            @if let Some(icon) = link.icon {
                @Icon { name: icon }
            }
            @link.label
        }
    }

    Sidebar<'a>(items: &'a [ItemView<'a>]) {
        div.ui.vertical.inverted.sidebar.menu {
            @for item in items.iter() {
                @match item {
                    ItemView::Link(link) => {
                        @MenuLink { link }
                    }
                    ItemView::Group(group) => {
                        div[class = {group.class("item")}] {
                            div.header {
                                @if let Some(icon) = group.icon {
                                    @Icon { name: icon }
                                }
                                @group.label
                            }
                            div.menu {
                                @for link in group.children.iter() {
                                    @MenuLink { link }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    TopBar<'a>(items: &'a [ItemView<'a>]) {
        div.ui.large.top.fixed.menu {
            div.ui.container {
                @for item in items.iter() {
                    @match item {
                        ItemView::Link(link) => {
                            @MenuLink { link }
                        }
                        ItemView::Group(group) => {
                            div[class = {group.class("ui dropdown item")}] {
                                @if let Some(icon) = group.icon {
                                    @Icon { name: icon }
                                }
                                @group.label
                                i.dropdown.icon {}
                                div.menu {
                                    @for link in group.children.iter() {
                                        @MenuLink { link }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::MenuError;
    use crate::core::menu::{ItemId, MenuItem, SubMenuItem};

    type Result = std::result::Result<(), MenuError>;

    fn example_menu() -> std::result::Result<Menu, MenuError> {
        Menu::new(vec![
            MenuItem::link("Home", "home").icon("home"),
            MenuItem::group(
                "Settings",
                vec![
                    SubMenuItem::new("General", "settings-general"),
                    SubMenuItem::new("Advanced", "settings-advanced").icon("cogs"),
                ],
            ),
        ])
    }

    fn sub_item_id(menu: &Menu, index: usize, sub_index: usize) -> ItemId {
        match menu.entries()[index].kind() {
            EntryKind::Group { children } => children[sub_index].id(),
            kind => panic!("expected a group, got {:?}", kind),
        }
    }

    /// Collects `(class, href)` of every link in the rendered fragment, in order.
    fn links(fragment: &str) -> Vec<(String, String)> {
        fragment
            .split("<a class=\"")
            .skip(1)
            .map(|chunk| {
                let class_end = chunk.find('"').unwrap();
                let class = chunk[..class_end].to_string();
                let href_start = chunk.find("href=\"").unwrap() + "href=\"".len();
                let href_end = href_start + chunk[href_start..].find('"').unwrap();
                (class, chunk[href_start..href_end].to_string())
            })
            .collect()
    }

    #[test]
    fn page_url_has_trailing_slash() {
        assert_eq!(page_url("/app", "home"), "/app/page/home/");
        assert_eq!(page_url("", "home"), "/page/home/");
    }

    #[test]
    fn example_projection() -> Result {
        let menu = example_menu()?;
        let active = ActiveSet::new().with(sub_item_id(&menu, 1, 1));

        assert_eq!(
            project(&menu, &active, "/app"),
            vec![
                ItemView::Link(LinkView {
                    href: "/app/page/home/".into(),
                    label: "Home",
                    icon: Some("home"),
                    marker: None,
                }),
                ItemView::Group(GroupView {
                    label: "Settings",
                    icon: None,
                    marker: None,
                    children: vec![
                        LinkView {
                            href: "/app/page/settings-general/".into(),
                            label: "General",
                            icon: None,
                            marker: None,
                        },
                        LinkView {
                            href: "/app/page/settings-advanced/".into(),
                            label: "Advanced",
                            icon: Some("cogs"),
                            marker: Some(SELECTED),
                        },
                    ],
                }),
            ],
        );
        Ok(())
    }

    #[test]
    fn example_markup() -> Result {
        let menu = example_menu()?;
        let active = ActiveSet::new().with(sub_item_id(&menu, 1, 1));
        let rendered = render(&menu, &active, "/app");

        let expected = vec![
            ("item".to_string(), "/app/page/home/".to_string()),
            ("item".to_string(), "/app/page/settings-general/".to_string()),
            ("item selected".to_string(), "/app/page/settings-advanced/".to_string()),
        ];
        assert_eq!(links(&rendered.sidebar), expected);
        assert_eq!(links(&rendered.topbar), expected);

        assert!(rendered.sidebar.contains(r#"<div class="item"><div class="header">Settings</div>"#));
        assert!(rendered.topbar.contains(r#"<div class="ui dropdown item">Settings"#));
        assert!(!rendered.sidebar.contains(ACTIVATED));
        assert!(!rendered.topbar.contains(ACTIVATED));
        assert!(rendered.sidebar.contains(r#"<i class="home icon"></i>Home"#));
        assert!(rendered.topbar.contains(r#"<i class="cogs icon"></i>Advanced"#));
        Ok(())
    }

    #[test]
    fn group_is_activated_only_when_active_itself() -> Result {
        let menu = example_menu()?;
        let active = ActiveSet::new().with(menu.entries()[1].id());
        let rendered = render(&menu, &active, "");

        assert!(rendered.sidebar.contains(r#"<div class="item activated">"#));
        assert!(rendered.topbar.contains(r#"<div class="ui dropdown item activated">"#));
        assert!(links(&rendered.sidebar).iter().all(|(class, _)| class == "item"));
        assert!(links(&rendered.topbar).iter().all(|(class, _)| class == "item"));
        Ok(())
    }

    #[test]
    fn multiple_active_items() -> Result {
        let menu = example_menu()?;
        let active = ActiveSet::new()
            .with(menu.entries()[0].id())
            .with(sub_item_id(&menu, 1, 0))
            .with(sub_item_id(&menu, 1, 1));
        let rendered = render(&menu, &active, "/app");

        let expected = vec![
            ("item activated".to_string(), "/app/page/home/".to_string()),
            ("item selected".to_string(), "/app/page/settings-general/".to_string()),
            ("item selected".to_string(), "/app/page/settings-advanced/".to_string()),
        ];
        assert_eq!(links(&rendered.sidebar), expected);
        assert_eq!(links(&rendered.topbar), expected);
        Ok(())
    }

    #[test]
    fn foreign_active_items_are_ignored() -> Result {
        let menu = example_menu()?;
        let other = example_menu()?;
        let active: ActiveSet = other
            .entries()
            .iter()
            .map(|entry| entry.id())
            .chain(vec![sub_item_id(&other, 1, 0), sub_item_id(&other, 1, 1)])
            .collect();

        assert_eq!(render(&menu, &active, "/app"), render(&menu, &ActiveSet::new(), "/app"));
        Ok(())
    }

    #[test]
    fn rendering_is_deterministic() -> Result {
        let menu = example_menu()?;
        let active = ActiveSet::new().with(menu.entries()[0].id());
        assert_eq!(render(&menu, &active, "/app"), render(&menu, &active, "/app"));
        Ok(())
    }

    #[test]
    fn empty_menu_renders_nothing() -> Result {
        let rendered = render(&Menu::new(Vec::new())?, &ActiveSet::new(), "/app");
        assert!(rendered.is_empty());
        assert_eq!(rendered.sidebar, "");
        assert_eq!(rendered.topbar, "");
        Ok(())
    }

    #[test]
    fn labels_are_escaped() -> Result {
        let menu = Menu::new(vec![MenuItem::link("<b>Bold</b>", "bold")])?;
        let rendered = render(&menu, &ActiveSet::new(), "");
        assert!(rendered.sidebar.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(!rendered.topbar.contains("<b>"));
        Ok(())
    }

    #[test]
    fn empty_label_without_icon() -> Result {
        let menu = Menu::new(vec![MenuItem::link("", "blank")])?;
        let rendered = render(&menu, &ActiveSet::new(), "");
        assert!(rendered.sidebar.contains(r#"<a class="item" href="/page/blank/"></a>"#));
        assert!(!rendered.sidebar.contains("<i "));
        Ok(())
    }

    #[test]
    fn group_with_page_name_renders_no_link_to_it() -> Result {
        let mut settings = MenuItem::group("Settings", vec![SubMenuItem::new("General", "settings-general")]);
        settings.page_name = Some("settings".into());
        let menu = Menu::new(vec![settings])?;
        let active = ActiveSet::new().with(menu.entries()[0].id());
        let rendered = render(&menu, &active, "/app");

        for fragment in [&rendered.sidebar, &rendered.topbar].iter() {
            assert!(!fragment.contains(r#"href="/app/page/settings/""#));
            assert_eq!(
                links(fragment),
                vec![("item".to_string(), "/app/page/settings-general/".to_string())],
            );
        }
        assert!(rendered.sidebar.contains(r#"<div class="item activated"><div class="header">Settings</div>"#));
        assert!(rendered.topbar.contains(r#"<div class="ui dropdown item activated">Settings"#));
        Ok(())
    }
}
