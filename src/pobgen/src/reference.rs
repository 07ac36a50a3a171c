//! Reference data for item conversion
//!
//! Hardcoded lookup tables: rarities, equipment slots, exclusion lists, and
//! the Traditional Chinese tokens found in the source's localized properties.

use phf::{phf_map, phf_set};

// ============================================================================
// Rarity
// ============================================================================

/// Item rarity as understood by the import grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
    Normal,
    Magic,
    Rare,
    Unique,
    Relic,
}

impl Rarity {
    /// Map the source's `frameType` to a rarity.
    ///
    /// Gems, currency, divination cards and the like use other frame types
    /// and have no rarity here.
    pub fn from_frame_type(frame_type: u32) -> Option<Self> {
        match frame_type {
            0 => Some(Rarity::Normal),
            1 => Some(Rarity::Magic),
            2 => Some(Rarity::Rare),
            3 => Some(Rarity::Unique),
            9 => Some(Rarity::Relic),
            _ => None,
        }
    }

    /// Name used on the `Rarity:` line
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Normal => "NORMAL",
            Rarity::Magic => "MAGIC",
            Rarity::Rare => "RARE",
            Rarity::Unique => "UNIQUE",
            Rarity::Relic => "RELIC",
        }
    }
}

// ============================================================================
// Slots
// ============================================================================

/// Inventory id of jewels socketed into the passive tree
pub const PASSIVE_JEWELS: &str = "PassiveJewels";

/// Inventory id of the flask belt; slot number comes from `x`
pub const FLASK: &str = "Flask";

/// Inventory id to equipment slot name
static SLOT_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "Amulet" => "Amulet",
    "Belt" => "Belt",
    "BodyArmour" => "Body Armour",
    "Boots" => "Boots",
    "Gloves" => "Gloves",
    "Helm" => "Helmet",
    "Offhand" => "Weapon 2",
    "Offhand2" => "Weapon 2 Swap",
    "Ring" => "Ring 1",
    "Ring2" => "Ring 2",
    "Weapon" => "Weapon 1",
    "Weapon2" => "Weapon 1 Swap",
};

/// Look up the equipment slot for an inventory id
pub fn slot_by_inventory_id(inventory_id: &str) -> Option<&'static str> {
    SLOT_NAMES.get(inventory_id).copied()
}

// ============================================================================
// Exclusions
// ============================================================================

/// Categories the import grammar cannot express
static EXCLUDED_CATEGORIES: phf::Set<&'static str> = phf_set! {
    "gems",
    "currency",
    "maps",
    "cards",
    "monsters",
    "leaguestones",
};

/// Inventories that do not hold equipped items
static EXCLUDED_INVENTORIES: phf::Set<&'static str> = phf_set! {
    "MainInventory",
    "Map",
    "Cursor",
};

/// Suffix shared by the crafting bench inventories
const MASTER_CRAFTING_SUFFIX: &str = "MasterCrafting";

pub fn is_excluded_category(category: &str) -> bool {
    EXCLUDED_CATEGORIES.contains(category)
}

pub fn is_excluded_inventory(inventory_id: &str) -> bool {
    EXCLUDED_INVENTORIES.contains(inventory_id) || inventory_id.ends_with(MASTER_CRAFTING_SUFFIX)
}

// ============================================================================
// Sockets
// ============================================================================

/// What a socket can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketKind {
    Gem,
    Abyss,
}

/// Colour marker of abyssal sockets
pub const ABYSS_COLOUR: &str = "A";

/// Colour markers of ordinary gem sockets
pub const GEM_COLOURS: &[&str] = &["R", "G", "B", "W"];

impl SocketKind {
    /// Classify a colour marker; `None` for markers outside the known set
    pub fn from_colour(colour: &str) -> Option<Self> {
        if colour == ABYSS_COLOUR {
            Some(SocketKind::Abyss)
        } else if GEM_COLOURS.contains(&colour) {
            Some(SocketKind::Gem)
        } else {
            None
        }
    }
}

// ============================================================================
// Localized tokens (Traditional Chinese)
// ============================================================================

/// Quality property name
pub const QUALITY_PROPERTY: &str = "品質";

/// Gem level property name
pub const LEVEL_PROPERTY: &str = "等級";

/// Jewel radius property name
pub const RADIUS_PROPERTY: &str = "範圍";

/// Qualifier appended to the level of a maxed gem
pub const MAX_LEVEL_TOKEN: &str = "（最高等級）";

/// Prefix the source puts on type lines of items with quality
pub const QUALITY_PREFIX: &str = "精良的 ";

/// Characters ending each affix particle of a magic item name
pub const POSSESSIVE_MARKERS: &[char] = &['的', '之'];

/// Localized jewel radius to canonical radius
static RADII: phf::Map<&'static str, &'static str> = phf_map! {
    "小" => "Small",
    "中" => "Medium",
    "大" => "Large",
};

pub fn radius_name(localized: &str) -> Option<&'static str> {
    RADII.get(localized).copied()
}

// ============================================================================
// Output tokens
// ============================================================================

/// Suffix removed from support gem names
pub const SUPPORT_SUFFIX: &str = " Support";

/// Marker prepended to crafted modifier lines
pub const CRAFTED_MARKER: &str = "{crafted}";

/// Gem level when the gem carries no level property
pub const DEFAULT_GEM_LEVEL: u32 = 20;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_lookup() {
        assert_eq!(Rarity::from_frame_type(0), Some(Rarity::Normal));
        assert_eq!(Rarity::from_frame_type(3).map(|r| r.name()), Some("UNIQUE"));
        assert_eq!(Rarity::from_frame_type(9), Some(Rarity::Relic));
        // gem, currency, divination card
        assert_eq!(Rarity::from_frame_type(4), None);
        assert_eq!(Rarity::from_frame_type(5), None);
        assert_eq!(Rarity::from_frame_type(6), None);
    }

    #[test]
    fn test_slot_lookup() {
        assert_eq!(slot_by_inventory_id("Helm"), Some("Helmet"));
        assert_eq!(slot_by_inventory_id("Weapon2"), Some("Weapon 1 Swap"));
        assert_eq!(slot_by_inventory_id("Offhand2"), Some("Weapon 2 Swap"));
        assert_eq!(slot_by_inventory_id("Flask"), None);
        assert_eq!(slot_by_inventory_id("MainInventory"), None);
    }

    #[test]
    fn test_exclusions() {
        assert!(is_excluded_category("gems"));
        assert!(is_excluded_category("leaguestones"));
        assert!(!is_excluded_category("armour"));
        assert!(!is_excluded_category("jewels"));

        assert!(is_excluded_inventory("MainInventory"));
        assert!(is_excluded_inventory("Cursor"));
        assert!(is_excluded_inventory("Map"));
        assert!(is_excluded_inventory("Weapon1MasterCrafting"));
        assert!(!is_excluded_inventory("Boots"));
        assert!(!is_excluded_inventory("PassiveJewels"));
    }

    #[test]
    fn test_socket_kind() {
        assert_eq!(SocketKind::from_colour("A"), Some(SocketKind::Abyss));
        assert_eq!(SocketKind::from_colour("R"), Some(SocketKind::Gem));
        assert_eq!(SocketKind::from_colour("W"), Some(SocketKind::Gem));
        assert_eq!(SocketKind::from_colour("DV"), None);
    }

    #[test]
    fn test_radius_lookup() {
        assert_eq!(radius_name("小"), Some("Small"));
        assert_eq!(radius_name("大"), Some("Large"));
        assert_eq!(radius_name("巨大"), None);
    }
}
