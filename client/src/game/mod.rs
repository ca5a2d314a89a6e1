pub mod state;
pub mod item;
pub mod catalog;

pub use state::{GameState, UiState, FarmIdentity, MintStatus, MAX_SHORTCUTS};
pub use item::{Category, Inventory, LimitedItem};
pub use catalog::{CatalogError, ItemCatalog, ItemDetails};
