use log;
use pretty_env_logger;
use std::error::Error;
use teloxide::prelude::*;

use clicker_bot::{
    config::Config,
    handlers::{get_handler, new_async_bot_state},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting Clicker Bot");

    let config = Config::from_env()?;
    log::info!(
        "Worker cost {}, worker yield {}, win at {}",
        config.rules.worker_cost,
        config.rules.worker_yield,
        config.rules.win_balance
    );

    let bot_state = new_async_bot_state(config.rules);
    let bot = Bot::new(config.token);

    Dispatcher::builder(bot, get_handler())
        .dependencies(dptree::deps![bot_state])
        .default_handler(|upd| async move {
            log::debug!("Ignoring update {:?}", upd.id);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
