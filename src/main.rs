#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use chrono::Local;

use opera_menu::{
    cache::WeekKey,
    config::Config,
    fetch::{week_iter, Portal},
    scrape_menus::{refresh_week, Outcome},
};

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Config::from_env()?;
    let store = config.store().await?;
    log::debug!("{store:?}");
    let portal = Portal::new(config.portal_url.clone(), config.fetch_timeout)?;

    for date in week_iter(Local::now().date_naive(), config.weeks) {
        let week = WeekKey::of(date);
        match refresh_week(&portal, &store, date).await {
            Ok(Outcome::Extracted) => log::info!("Menu for week {week}: success"),
            Ok(Outcome::AlreadyCached) => log::info!("Menu for week {week}: already cached"),
            Err(e) => log::error!("Menu for week {week}: failed: {}", e.chain()),
        }
    }
    Ok(())
}
