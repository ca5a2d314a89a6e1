use serde::Deserialize;

use super::item::{Inventory, LimitedItem};
use crate::network::MintRequest;
use crate::ui::{InventoryActions, UiElementId};

/// Maximum number of items kept in the shortcut bar
pub const MAX_SHORTCUTS: usize = 3;

/// How long a mint outcome stays on screen (seconds)
const MINT_STATUS_TTL: f64 = 5.0;

/// Farm and wallet identity used to sign mint requests
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FarmIdentity {
    #[serde(default)]
    pub farm_id: u64,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub signature: String,
}

/// Outcome of the last mint attempt, shown in the status line
#[derive(Debug, Clone)]
pub struct MintStatus {
    pub message: String,
    pub success: bool,
    pub time: f64, // When the outcome was recorded (game time)
}

pub struct UiState {
    pub inventory_open: bool,
    // Mouse hover state for UI elements
    pub hovered_element: Option<UiElementId>,
    pub mint_status: Option<MintStatus>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            inventory_open: true,
            hovered_element: None,
            mint_status: None,
        }
    }
}

pub struct GameState {
    pub inventory: Inventory,
    pub selected_item: Option<String>,
    /// Most recently used first
    pub shortcuts: Vec<String>,
    pub farm: FarmIdentity,
    pub ui_state: UiState,
}

impl GameState {
    pub fn new(inventory: Inventory, farm: FarmIdentity) -> Self {
        Self {
            inventory,
            selected_item: None,
            shortcuts: Vec::new(),
            farm,
            ui_state: UiState::default(),
        }
    }

    /// The selected item, if it is one that can be minted
    pub fn selected_limited_item(&self) -> Option<LimitedItem> {
        self.selected_item.as_deref().and_then(|name| name.parse().ok())
    }

    /// Build a mint request for `item` from the farm identity
    pub fn mint_request(&self, item: LimitedItem) -> MintRequest {
        MintRequest {
            farm_id: self.farm.farm_id,
            sender: self.farm.sender.clone(),
            session_id: self.farm.session_id.clone(),
            signature: self.farm.signature.clone(),
            item,
        }
    }

    pub fn set_mint_status(&mut self, message: impl Into<String>, success: bool, time: f64) {
        self.ui_state.mint_status = Some(MintStatus {
            message: message.into(),
            success,
            time,
        });
    }

    /// Expire stale notifications
    pub fn update(&mut self, current_time: f64) {
        if let Some(status) = &self.ui_state.mint_status {
            if current_time - status.time >= MINT_STATUS_TTL {
                self.ui_state.mint_status = None;
            }
        }
    }
}

impl InventoryActions for GameState {
    fn shortcut_item(&mut self, name: &str) {
        self.shortcuts.retain(|existing| existing != name);
        self.shortcuts.insert(0, name.to_string());
        self.shortcuts.truncate(MAX_SHORTCUTS);
        self.selected_item = Some(name.to_string());
    }

    fn close_inventory(&mut self) {
        self.ui_state.inventory_open = false;
    }
}
