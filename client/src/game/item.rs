use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Categories
// ============================================================================

/// One of the six fixed inventory tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Seeds,
    Crops,
    Tools,
    Nfts,
    Foods,
    Resources,
}

impl Category {
    pub const COUNT: usize = 6;

    /// Tab order as shown in the inventory strip
    pub const ALL: [Category; Category::COUNT] = [
        Category::Seeds,
        Category::Crops,
        Category::Tools,
        Category::Nfts,
        Category::Foods,
        Category::Resources,
    ];

    pub fn index(self) -> usize {
        match self {
            Category::Seeds => 0,
            Category::Crops => 1,
            Category::Tools => 2,
            Category::Nfts => 3,
            Category::Foods => 4,
            Category::Resources => 5,
        }
    }

    /// Next tab, wrapping from the last back to the first
    pub fn next(self) -> Category {
        Category::ALL[(self.index() + 1) % Category::COUNT]
    }

    /// Previous tab, wrapping from the first to the last
    pub fn prev(self) -> Category {
        Category::ALL[(self.index() + Category::COUNT - 1) % Category::COUNT]
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Seeds => "Seeds",
            Category::Crops => "Crops",
            Category::Tools => "Tools",
            Category::Nfts => "NFTs",
            Category::Foods => "Foods",
            Category::Resources => "Resources",
        }
    }

    /// Tab icon asset
    pub fn icon(self) -> &'static str {
        match self {
            Category::Seeds => "assets/crops/beetroot/seed.png",
            Category::Crops => "assets/crops/sunflower/crop.png",
            Category::Tools => "assets/tools/hammer.png",
            Category::Nfts => "assets/nfts/gnome.png",
            Category::Foods => "assets/crops/wheat/flour.png",
            Category::Resources => "assets/resources/wood.png",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Limited Items
// ============================================================================

/// Items that exist in finite supply and can be minted on-chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitedItem {
    #[serde(rename = "Sunflower Statue")]
    SunflowerStatue,
    #[serde(rename = "Potato Statue")]
    PotatoStatue,
    #[serde(rename = "Christmas Tree")]
    ChristmasTree,
    #[serde(rename = "Scarecrow")]
    Scarecrow,
    #[serde(rename = "Farm Cat")]
    FarmCat,
    #[serde(rename = "Farm Dog")]
    FarmDog,
    #[serde(rename = "Gnome")]
    Gnome,
    #[serde(rename = "Chicken Coop")]
    ChickenCoop,
    #[serde(rename = "Gold Egg")]
    GoldEgg,
    #[serde(rename = "Sunflower Rock")]
    SunflowerRock,
    #[serde(rename = "Goblin Crown")]
    GoblinCrown,
    #[serde(rename = "Fountain")]
    Fountain,
}

impl LimitedItem {
    pub const ALL: [LimitedItem; 12] = [
        LimitedItem::SunflowerStatue,
        LimitedItem::PotatoStatue,
        LimitedItem::ChristmasTree,
        LimitedItem::Scarecrow,
        LimitedItem::FarmCat,
        LimitedItem::FarmDog,
        LimitedItem::Gnome,
        LimitedItem::ChickenCoop,
        LimitedItem::GoldEgg,
        LimitedItem::SunflowerRock,
        LimitedItem::GoblinCrown,
        LimitedItem::Fountain,
    ];

    /// Display name, identical to the inventory key and the wire value
    pub fn as_str(self) -> &'static str {
        match self {
            LimitedItem::SunflowerStatue => "Sunflower Statue",
            LimitedItem::PotatoStatue => "Potato Statue",
            LimitedItem::ChristmasTree => "Christmas Tree",
            LimitedItem::Scarecrow => "Scarecrow",
            LimitedItem::FarmCat => "Farm Cat",
            LimitedItem::FarmDog => "Farm Dog",
            LimitedItem::Gnome => "Gnome",
            LimitedItem::ChickenCoop => "Chicken Coop",
            LimitedItem::GoldEgg => "Gold Egg",
            LimitedItem::SunflowerRock => "Sunflower Rock",
            LimitedItem::GoblinCrown => "Goblin Crown",
            LimitedItem::Fountain => "Fountain",
        }
    }
}

impl fmt::Display for LimitedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LimitedItem {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LimitedItem::ALL
            .iter()
            .copied()
            .find(|item| item.as_str() == s)
            .ok_or(())
    }
}

// ============================================================================
// Inventory
// ============================================================================

/// Item name to quantity. Zero quantities are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<String, i32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, quantity: i32) {
        self.items.insert(name.into(), quantity);
    }

    /// Quantity held, zero when the item is missing
    pub fn count(&self, name: &str) -> i32 {
        self.items.get(name).copied().unwrap_or(0)
    }

    pub fn has(&self, name: &str) -> bool {
        self.count(name) != 0
    }

    /// Entries with a non-zero quantity
    pub fn held(&self) -> impl Iterator<Item = (&str, i32)> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty != 0)
            .map(|(name, qty)| (name.as_str(), *qty))
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|(name, qty)| (name.into(), qty)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_after_full_cycle() {
        for start in Category::ALL {
            let mut tab = start;
            for _ in 0..Category::COUNT {
                tab = tab.next();
            }
            assert_eq!(tab, start);
        }
    }

    #[test]
    fn test_prev_wraps_at_first_tab() {
        assert_eq!(Category::Seeds.prev(), Category::Resources);
        assert_eq!(Category::Resources.next(), Category::Seeds);
        for tab in Category::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }

    #[test]
    fn test_limited_item_serializes_to_display_name() {
        let json = serde_json::to_string(&LimitedItem::SunflowerStatue).unwrap();
        assert_eq!(json, "\"Sunflower Statue\"");
        for item in LimitedItem::ALL {
            assert_eq!(item.as_str().parse::<LimitedItem>(), Ok(item));
            assert_eq!(serde_json::to_value(item).unwrap(), item.as_str());
        }
        assert!("Sunflower Seed".parse::<LimitedItem>().is_err());
    }

    #[test]
    fn test_zero_quantity_is_absent() {
        let inventory: Inventory = [("Wood", 3), ("Stone", 0)].into_iter().collect();
        assert!(inventory.has("Wood"));
        assert!(!inventory.has("Stone"));
        assert!(!inventory.has("Iron"));
        let held: Vec<_> = inventory.held().collect();
        assert_eq!(held, vec![("Wood", 3)]);
    }

    #[test]
    fn test_inventory_deserializes_from_table() {
        let inventory: Inventory = toml::from_str("\"Sunflower Seed\" = 5\nAxe = 1\n").unwrap();
        assert_eq!(inventory.count("Sunflower Seed"), 5);
        assert_eq!(inventory.count("Axe"), 1);
    }
}
