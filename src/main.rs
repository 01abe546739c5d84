//! Entry point.

use page_shell::logging::{self, Log};
use page_shell::opts::Opts;
use page_shell::prelude::*;
use page_shell::settings;
use page_shell::web::{self, site::Site};
use structopt::StructOpt;

#[rocket::main]
async fn main() -> Result {
    let opts = Opts::from_args();
    logging::init(&opts)?;

    info!("Reading settings from {}…", opts.settings.display());
    let settings = settings::read(&opts.settings)?;
    debug!("Settings: {:?}", &settings);

    info!("Building the menu…");
    let site = Site::new(&settings)?;
    info!("{} menu items, {} pages.", site.menu.len(), site.page_count());

    web::start_server(&settings, site).await.log(|| "Web server has failed")
}
