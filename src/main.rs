#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod fetch;
mod menu;
mod output;
mod parse;

use config::Config;
use parse::Parser;

pub use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Config::default();
    let client = fetch::make_client(&config);
    let html = fetch::menu_page(&client, &config).await?;
    let days = Parser::resilient().parse(&html);
    log::info!("parsed {} day blocks from the schedule page", days.len());

    let today = chrono::Local::now().date_naive();
    let today_menu = menu::select_day(days, today);
    for dish in today_menu.dishes() {
        log::debug!(
            "{} [{}] {}",
            dish.name(),
            dish.dish_type(),
            dish.labels().join(",")
        );
    }

    output::write_menu(&today_menu, &config.output_path)?;
    println!("JSON gespeichert: {}", config.output_path.display());
    Ok(())
}
