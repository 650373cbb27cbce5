use std::io::{Error, ErrorKind, Result};

use tracing::{error, info};

use crate::{
    auth::load_api_key,
    core::{content_service, settings::Settings},
    logging::{bootstrap_subscriber, init_logging},
    server::{start_server, SiteConfig},
};

mod auth;
mod core;
mod error;
mod logging;
mod pages;
mod server;
mod types;

#[actix_web::main]
async fn main() -> Result<()> {
    // The global subscriber depends on the settings, so loading logs through
    // a scoped one.
    let settings = tracing::subscriber::with_default(bootstrap_subscriber(), || {
        Settings::load().map_err(|err| {
            error!(%err, "could not load settings");
            Error::new(ErrorKind::InvalidData, err)
        })
    })?;
    init_logging(settings.log_format.value);
    info!(
        addr = %settings.socket_addr(),
        mode = ?settings.content_mode.value,
        "starting folio"
    );

    let service = content_service(&settings).map_err(|err| {
        error!(%err, "could not build content service");
        Error::new(ErrorKind::Other, err)
    })?;
    let api_key = load_api_key(&settings.key_path.value).map_err(|err| {
        error!(%err, "could not read key file");
        Error::new(ErrorKind::Other, err)
    })?;
    let site = SiteConfig::new(settings.page_prefix(), api_key);

    start_server(settings.socket_addr(), service, site).await
}
