use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use super::item::{Category, LimitedItem};

const BUILTIN_ITEMS: &str = include_str!("../../assets/data/items.toml");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse item data: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("limited item '{0}' is missing from the NFTs category")]
    MissingLimitedItem(LimitedItem),
}

/// Display metadata for a single item
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDetails {
    pub name: String,
    pub category: Category,
    pub image: String,
    pub description: String,
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    items: Vec<ItemDetails>,
}

/// Static item metadata plus the item set of every category tab.
///
/// Built once at startup. Category membership is held in a fixed array
/// indexed by [`Category::index`], so every tab always has a (possibly
/// empty) item set.
pub struct ItemCatalog {
    items: HashMap<String, ItemDetails>,
    category_items: [Vec<String>; Category::COUNT],
}

impl ItemCatalog {
    /// Catalog bundled with the client
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_ITEMS)
    }

    /// Build a catalog from an `[[items]]` TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(content)?;

        let mut catalog = Self {
            items: HashMap::new(),
            category_items: Default::default(),
        };

        for details in raw.items {
            if let Some(previous) = catalog.items.remove(&details.name) {
                log::warn!("Duplicate item '{}' in catalog, overwriting", details.name);
                catalog.category_items[previous.category.index()].retain(|n| *n != details.name);
            }
            catalog.category_items[details.category.index()].push(details.name.clone());
            catalog.items.insert(details.name.clone(), details);
        }

        for item in LimitedItem::ALL {
            if catalog.category_of(item.as_str()) != Some(Category::Nfts) {
                return Err(CatalogError::MissingLimitedItem(item));
            }
        }

        log::info!("Loaded {} item definitions", catalog.items.len());

        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&ItemDetails> {
        self.items.get(name)
    }

    pub fn category_of(&self, name: &str) -> Option<Category> {
        self.items.get(name).map(|details| details.category)
    }

    /// Item names of a tab, in catalog order
    pub fn items_in(&self, category: Category) -> &[String] {
        &self.category_items[category.index()]
    }

    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.category_of(name) == Some(category)
    }

    /// Every image path referenced by the catalog
    pub fn image_paths(&self) -> HashSet<&str> {
        self.items.values().map(|details| details.image.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
