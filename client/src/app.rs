// Application shell: window config, frame loop and mint trigger

use macroquad::prelude::*;

use crate::config::ClientConfig;
use crate::game::{GameState, ItemCatalog};
use crate::input::{InputCommand, InputHandler};
use crate::network::{HttpTransport, MintClient, MintError, UreqTransport};
use crate::render::Renderer;
use crate::ui::{InventoryPanel, UiLayout};
use crate::wallet::{LocalSessionManager, SessionManager, WalletSession};

pub fn window_conf() -> Conf {
    Conf {
        window_title: "Farm".to_string(),
        window_width: 960,
        window_height: 600,
        fullscreen: false,
        ..Default::default()
    }
}

/// Everything the client owns between frames
pub struct App<T: HttpTransport = UreqTransport, S: SessionManager = LocalSessionManager> {
    pub catalog: ItemCatalog,
    pub game_state: GameState,
    pub panel: InventoryPanel,
    pub mint_client: MintClient<T>,
    pub wallet: S,
}

impl App {
    pub fn from_config(config: ClientConfig, catalog: ItemCatalog) -> Self {
        let mint_client = MintClient::new(config.api_url.as_deref());
        if !mint_client.is_configured() {
            log::info!("No API URL configured, minting is disabled");
        }
        let wallet = LocalSessionManager::new(&config.farm.sender);

        Self {
            catalog,
            game_state: GameState::new(config.inventory, config.farm),
            panel: InventoryPanel::new(),
            mint_client,
            wallet,
        }
    }
}

impl<T: HttpTransport, S: SessionManager<Session = WalletSession>> App<T, S> {
    /// Apply one input command
    pub fn handle_command(&mut self, command: InputCommand, now: f64) {
        match command {
            InputCommand::Panel(action) => {
                self.panel.handle_action(action, &mut self.game_state);
            }
            InputCommand::ToggleInventory => {
                self.game_state.ui_state.inventory_open = !self.game_state.ui_state.inventory_open;
            }
            InputCommand::MintSelected => self.mint_selected(now),
        }
    }

    /// Mint the selected item if it is a limited one and record the outcome
    pub fn mint_selected(&mut self, now: f64) {
        if self.game_state.selected_item.is_none() {
            self.game_state.set_mint_status("Select an item to mint", false, now);
            return;
        }
        let Some(item) = self.game_state.selected_limited_item() else {
            self.game_state.set_mint_status("Only limited items can be minted", false, now);
            return;
        };

        let request = self.game_state.mint_request(item);
        match self.mint_client.mint(&request, &mut self.wallet) {
            Ok(Some(session)) => {
                self.game_state.set_mint_status(
                    format!("Minted {} ({} transactions in wallet)", item, session.transactions.len()),
                    true,
                    now,
                );
            }
            Ok(None) => {
                self.game_state.set_mint_status("Minting is disabled: no API configured", false, now);
            }
            Err(e @ MintError::RequestFailed) => {
                self.game_state.set_mint_status(e.to_string(), false, now);
            }
            Err(e) => {
                log::warn!("Mint of {} failed: {}", item, e);
                self.game_state.set_mint_status(e.to_string(), false, now);
            }
        }
    }

    /// Run the frame loop until the window closes
    pub async fn run(mut self) {
        let renderer = Renderer::new(&self.catalog).await;
        let mut input_handler = InputHandler::new();
        let mut layout = UiLayout::new();

        loop {
            let now = get_time();
            self.game_state.update(now);

            let view = if self.game_state.ui_state.inventory_open {
                Some(self.panel.view(
                    &self.game_state.inventory,
                    self.game_state.selected_item.as_deref(),
                    &self.catalog,
                ))
            } else {
                None
            };
            renderer.render(&self.game_state, view.as_ref(), &mut layout);

            for command in input_handler.process(&mut self.game_state, &layout) {
                self.handle_command(command, now);
            }

            next_frame().await;
        }
    }
}
