// Farm client library: inventory panel, mint action and the macroquad shell

pub mod config;
pub mod game;
pub mod ui;
pub mod network;
pub mod wallet;
pub mod input;
pub mod render;
pub mod app;

use std::path::PathBuf;

use app::App;
use config::ClientConfig;
use game::ItemCatalog;

pub use app::window_conf;

/// Load config and item data, then run the frame loop.
/// The first command line argument, if any, is the config file path.
pub async fn run() {
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    let config = match ClientConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            return;
        }
    };

    let catalog = match ItemCatalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load item catalog: {}", e);
            return;
        }
    };

    log::info!(
        "Starting farm {} with {} item kinds held",
        config.farm.farm_id,
        config.inventory.held().count()
    );

    App::from_config(config, catalog).run().await;
}
