//! Page body.

use crate::web::site::Page;

markup::define! {
    PageBody<'a>(page: &'a Page) {
        h1.ui.header {
            @page.title
        }
        @if let Some(description) = &page.description {
            div.ui.segment {
                p { @description }
            }
        }
    }
}
