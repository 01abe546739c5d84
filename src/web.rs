//! Web server: the pages within the shell and the built-in static files.

use crate::prelude::*;
use crate::settings::Settings;
use crate::statics;
use crate::web::cached_content::Cached;
use crate::web::site::Site;
use crate::web::to_html_string::ToHtmlString;
use rocket::http::ContentType;
use rocket::response::Redirect;
use rocket::{get, routes, Build, Rocket, State};

pub mod cached_content;
pub mod site;
pub mod to_html_string;

/// Built-in static files change only with a new version.
const STATIC_MAX_AGE: u32 = 86400;

/// Builds the web application.
///
/// Note: the root URL does not affect the routes. It only matters for the reverse proxy
/// that serves the application in a sub path.
pub fn rocket(settings: &Settings, site: Site) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("port", settings.http_port))
        .merge(("address", settings.http_address));
    rocket::custom(figment)
        .manage(site)
        .mount("/", routes![index, page, main_css, main_js])
}

pub async fn start_server(settings: &Settings, site: Site) -> Result {
    info!("Starting web server on {}:{}…", settings.http_address, settings.http_port);
    rocket(settings, site)
        .launch()
        .await
        .map_err(|error| anyhow!("Rocket launch error: {}", error))?;
    Ok(())
}

/// Redirects to the index page, if any.
#[get("/")]
fn index(site: &State<Site>) -> Option<Redirect> {
    site.index_url().map(Redirect::found)
}

#[get("/page/<name>")]
fn page(name: &str, site: &State<Site>) -> Option<ToHtmlString<String>> {
    let page = site.page(name)?;
    debug!("Rendering page `{}`…", name);
    Some(ToHtmlString(site.render_page(page)))
}

#[get("/static/main.css")]
fn main_css() -> Cached<(ContentType, &'static str)> {
    Cached(STATIC_MAX_AGE, (ContentType::CSS, statics::MAIN_CSS))
}

#[get("/static/main.js")]
fn main_js() -> Cached<(ContentType, &'static str)> {
    Cached(STATIC_MAX_AGE, (ContentType::JavaScript, statics::MAIN_JS))
}
