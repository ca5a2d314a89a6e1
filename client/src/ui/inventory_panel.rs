//! Inventory panel view-model
//!
//! The panel owns only the active tab. Inventory contents, the selected item
//! and the item catalog are passed in on every frame, and user actions are
//! delegated to an [`InventoryActions`] implementation.

use crate::game::{Category, Inventory, ItemCatalog};
use super::layout::UiElementId;

/// Callbacks the panel invokes on its owner
pub trait InventoryActions {
    /// Make `name` the selected item and pin it to the shortcut bar
    fn shortcut_item(&mut self, name: &str);
    fn close_inventory(&mut self);
}

/// User action on the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    PrevCategory,
    NextCategory,
    SelectItem(String),
    Close,
}

impl PanelAction {
    /// Map a clicked element to a panel action
    pub fn from_element(id: &UiElementId) -> Option<PanelAction> {
        match id {
            UiElementId::InventoryPrevTab => Some(PanelAction::PrevCategory),
            UiElementId::InventoryNextTab => Some(PanelAction::NextCategory),
            UiElementId::InventoryTile(name) => Some(PanelAction::SelectItem(name.clone())),
            UiElementId::InventoryClose => Some(PanelAction::Close),
        }
    }
}

/// A selectable tile in the item grid
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTile<'a> {
    pub name: &'a str,
    pub count: i32,
    pub image: &'a str,
    pub is_selected: bool,
}

/// Grid area contents
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent<'a> {
    Empty { message: String },
    Tiles(Vec<ItemTile<'a>>),
}

/// Detail pane for the selected item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetailView<'a> {
    pub name: &'a str,
    pub category: Category,
    pub image: &'a str,
    pub description: &'a str,
}

/// Everything the renderer needs to draw one frame of the panel
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryView<'a> {
    pub tab: Category,
    pub tab_label: &'static str,
    pub tab_icon: &'static str,
    pub content: PanelContent<'a>,
    pub detail: Option<ItemDetailView<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryPanel {
    current_tab: Category,
}

impl Default for InventoryPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryPanel {
    pub fn new() -> Self {
        Self {
            current_tab: Category::Seeds,
        }
    }

    pub fn current_tab(&self) -> Category {
        self.current_tab
    }

    pub fn next_category(&mut self) {
        self.current_tab = self.current_tab.next();
        log::debug!("Inventory tab -> {}", self.current_tab);
    }

    pub fn prev_category(&mut self) {
        self.current_tab = self.current_tab.prev();
        log::debug!("Inventory tab -> {}", self.current_tab);
    }

    /// Held items of the active tab, in catalog order
    pub fn visible_items<'a>(&self, inventory: &Inventory, catalog: &'a ItemCatalog) -> Vec<(&'a str, i32)> {
        catalog
            .items_in(self.current_tab)
            .iter()
            .map(|name| (name.as_str(), inventory.count(name)))
            .filter(|(_, count)| *count != 0)
            .collect()
    }

    pub fn view<'a>(
        &self,
        inventory: &Inventory,
        selected_item: Option<&'a str>,
        catalog: &'a ItemCatalog,
    ) -> InventoryView<'a> {
        let tiles: Vec<ItemTile<'a>> = self
            .visible_items(inventory, catalog)
            .into_iter()
            .filter_map(|(name, count)| {
                let details = catalog.get(name)?;
                Some(ItemTile {
                    name,
                    count,
                    image: &details.image,
                    is_selected: selected_item == Some(name),
                })
            })
            .collect();

        let content = if tiles.is_empty() {
            PanelContent::Empty {
                message: format!("You have no {} in your inventory.", self.current_tab),
            }
        } else {
            PanelContent::Tiles(tiles)
        };

        let detail = selected_item.and_then(|name| match catalog.get(name) {
            Some(details) => Some(ItemDetailView {
                name,
                category: details.category,
                image: &details.image,
                description: &details.description,
            }),
            None => {
                log::warn!("Selected item '{}' has no catalog entry", name);
                None
            }
        });

        InventoryView {
            tab: self.current_tab,
            tab_label: self.current_tab.label(),
            tab_icon: self.current_tab.icon(),
            content,
            detail,
        }
    }

    /// Apply a user action. Item selection and closing are delegated to `actions`.
    pub fn handle_action<A: InventoryActions + ?Sized>(&mut self, action: PanelAction, actions: &mut A) {
        match action {
            PanelAction::PrevCategory => self.prev_category(),
            PanelAction::NextCategory => self.next_category(),
            PanelAction::SelectItem(name) => actions.shortcut_item(&name),
            PanelAction::Close => actions.close_inventory(),
        }
    }
}
