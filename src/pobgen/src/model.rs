//! Input records and output entities.
//!
//! The input side mirrors the JSON returned by the character-window endpoints
//! (`get-items` and `get-passive-skills`). Field names follow the source's
//! camelCase spelling; everything optional defaults to empty so partially
//! populated items still deserialize.

use indexmap::IndexMap;
use serde::Deserialize;

/// Number of trailing id characters used to disambiguate item names
const ID_SUFFIX_LEN: usize = 7;

/// Character/items record (`get-items` response)
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterRecord {
    pub character: Character,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl CharacterRecord {
    /// Parse a character record from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Character summary carried alongside the item list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub level: u32,
    pub class_id: u8,
    #[serde(default)]
    pub ascendancy_class: u8,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub league: String,
}

/// Passive tree record (`get-passive-skills` response)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TreeRecord {
    /// Allocated node hashes, in the order the source lists them
    #[serde(default)]
    pub hashes: Vec<u16>,
    /// Tree node hash for each jewel socket, indexed by the jewel's `x`
    #[serde(default)]
    pub jewel_slots: Vec<u16>,
    /// Jewels socketed into the tree
    #[serde(default)]
    pub items: Vec<Item>,
}

impl TreeRecord {
    /// Parse a tree record from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Item category.
///
/// The source sends either a bare string or a single-key map from the
/// category to its subcategories (`{"armour": ["boots"]}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawCategory")]
pub enum Category {
    Simple(String),
    Nested(String, Vec<String>),
}

impl Category {
    /// Top-level category name
    pub fn name(&self) -> &str {
        match self {
            Category::Simple(name) | Category::Nested(name, _) => name,
        }
    }

    /// Most specific name: the first subcategory when present
    pub fn specific_name(&self) -> &str {
        match self {
            Category::Nested(_, subtypes) if !subtypes.is_empty() => &subtypes[0],
            other => other.name(),
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Simple(String::new())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategory {
    Simple(String),
    Nested(IndexMap<String, Vec<String>>),
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        match raw {
            RawCategory::Simple(name) => Category::Simple(name),
            RawCategory::Nested(map) => match map.into_iter().next() {
                Some((name, subtypes)) => Category::Nested(name, subtypes),
                None => Category::default(),
            },
        }
    }
}

/// A localized item property such as quality or gem level
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Property {
    pub name: String,
    /// `[text, display mode]` pairs
    #[serde(default)]
    pub values: Vec<(String, i64)>,
}

impl Property {
    /// Text of the first value, if any
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(|(text, _)| text.as_str())
    }
}

/// One physical socket on an item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Socket {
    /// Link group; sockets sharing a group are linked
    pub group: u32,
    /// Colour marker (`R`, `G`, `B`, `W`, `A` for abyssal)
    #[serde(rename = "sColour")]
    pub colour: String,
}

/// An item as delivered by the source.
///
/// Socketed gems and abyss jewels reuse the same shape, with `socket`
/// pointing into the parent's socket list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub frame_type: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub ilvl: u32,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub implicit_mods: Vec<String>,
    #[serde(default)]
    pub enchant_mods: Vec<String>,
    #[serde(default)]
    pub explicit_mods: Vec<String>,
    #[serde(default)]
    pub crafted_mods: Vec<String>,
    #[serde(default)]
    pub sockets: Vec<Socket>,
    #[serde(default)]
    pub socketed_items: Vec<Item>,
    /// Index into the parent's sockets, for socketed children
    #[serde(default)]
    pub socket: Option<usize>,
    #[serde(default)]
    pub corrupted: bool,
    #[serde(default)]
    pub shaper: bool,
    #[serde(default)]
    pub elder: bool,
    #[serde(default)]
    pub inventory_id: String,
    #[serde(default)]
    pub x: u32,
    #[serde(default)]
    pub category: Category,
}

impl Item {
    /// Last seven characters of the item id
    pub fn id_suffix(&self) -> &str {
        let count = self.id.chars().count();
        match self.id.char_indices().nth(count.saturating_sub(ID_SUFFIX_LEN)) {
            Some((start, _)) => &self.id[start..],
            None => &self.id,
        }
    }

    /// Value of the last property with the given localized name
    pub fn property_value(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .rev()
            .find(|p| p.name == name)
            .and_then(Property::first_value)
    }
}

/// A skill gem inside a socket group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gem {
    pub level: u32,
    pub quality: u32,
    /// Canonical gem name without the support suffix
    pub name: String,
}

/// Gems sharing one link group on one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub slot: String,
    pub gems: Vec<Gem>,
}

/// A finished item text block with its document id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub id: u32,
    pub text: String,
}

/// Equipment slot binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub name: String,
    pub item_id: u32,
}

/// Passive tree jewel socket binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeSocket {
    pub node_id: u16,
    pub item_id: u32,
}
