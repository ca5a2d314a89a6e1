pub mod layout;
pub mod inventory_panel;

pub use layout::{UiElementId, UiElement, UiLayout};
pub use inventory_panel::{
    InventoryActions, InventoryPanel, InventoryView, ItemDetailView, ItemTile, PanelAction, PanelContent,
};
