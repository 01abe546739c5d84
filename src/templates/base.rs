//! Page shell: the document head, the navigation menu and the page body.

use crate::templates::menu::RenderedMenu;

/// Prefixes a relative asset path with the root URL. Absolute URLs are left as they are.
pub fn asset_url(root_url: &str, path: &str) -> String {
    if path.starts_with("//") || path.contains("://") {
        path.to_string()
    } else {
        format!("{}/{}", root_url, path.trim_start_matches('/'))
    }
}

markup::define! {
    Base<'a, Body: markup::Render>(
        title: &'a str,
        root_url: &'a str,
        stylesheets: &'a [String],
        scripts: &'a [String],
        server_token: &'a str,
        menu: &'a RenderedMenu,
        body: Body,
    ) {
        @markup::doctype()
        html[lang = "en"] {
            head {
                title { @title }
                meta[charset = "utf-8"];
                meta[name = "viewport", content = "width=device-width, initial-scale=1"];
                meta[name = "server-token", content = server_token];
                @for stylesheet in stylesheets.iter() {
                    link[rel = "stylesheet", href = {asset_url(root_url, stylesheet)}];
                }
                @for script in scripts.iter() {
                    script[src = {asset_url(root_url, script)}] {}
                }
            }
            body["data-root-url" = root_url] {
                @markup::raw(&menu.sidebar)
                div.pusher {
                    @if !menu.is_empty() {
                        button.ui.icon.button."mobile-toggle"[type = "button", "aria-label" = "menu"] {
                            i.bars.icon {}
                        }
                    }
                    @markup::raw(&menu.topbar)
                    div.ui.main.container {
                        @body
                    }
                }
            }
        }
    }
}
