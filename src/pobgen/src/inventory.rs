//! Inventory assembly
//!
//! Walks every item once, drops what the import grammar cannot express, and
//! hands out document ids. Ids are contiguous from 1: the main pass numbers
//! rendered items in input order, then a second pass numbers the abyss jewels
//! collected along the way, grouped by parent slot.

use crate::error::ConvertError;
use crate::model::{Item, RenderedItem, SkillGroup, Slot};
use crate::reference::{
    is_excluded_category, is_excluded_inventory, slot_by_inventory_id, Rarity, FLASK,
    PASSIVE_JEWELS,
};
use crate::render::item_text;
use crate::sockets::resolve_sockets;
use crate::translate::Translator;

/// Why an item was left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    Category,
    Inventory,
    FrameType,
}

/// Check whether an item is skipped before rendering
pub fn exclusion(item: &Item) -> Option<Exclusion> {
    if is_excluded_category(item.category.name()) {
        Some(Exclusion::Category)
    } else if is_excluded_inventory(&item.inventory_id) {
        Some(Exclusion::Inventory)
    } else if Rarity::from_frame_type(item.frame_type).is_none() {
        Some(Exclusion::FrameType)
    } else {
        None
    }
}

/// Equipment slot for an item; `None` for passive tree jewels
pub fn slot_name(item: &Item) -> Result<Option<String>, ConvertError> {
    match item.inventory_id.as_str() {
        PASSIVE_JEWELS => Ok(None),
        FLASK => Ok(Some(format!("Flask {}", item.x + 1))),
        other => slot_by_inventory_id(other)
            .map(|slot| Some(slot.to_string()))
            .ok_or_else(|| ConvertError::UnknownInventorySlot(other.to_string())),
    }
}

/// A jewel socketed into the passive tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeJewel {
    /// Grid position, indexes the tree's jewel slot list
    pub x: u32,
    pub item_id: u32,
}

/// Everything the document needs from the item list
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub items: Vec<RenderedItem>,
    pub slots: Vec<Slot>,
    pub skills: Vec<SkillGroup>,
    pub tree_jewels: Vec<TreeJewel>,
}

impl Inventory {
    fn push_item(&mut self, text: String) -> u32 {
        let id = self.items.len() as u32 + 1;
        self.items.push(RenderedItem { id, text });
        id
    }
}

/// Render, number, and slot every convertible item
pub fn assemble<'a, I>(items: I, translator: &dyn Translator) -> Result<Inventory, ConvertError>
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut inventory = Inventory::default();
    let mut deferred: Vec<(String, Vec<String>)> = Vec::new();

    for item in items {
        match exclusion(item) {
            Some(Exclusion::FrameType) => {
                tracing::warn!(
                    frame_type = item.frame_type,
                    inventory_id = %item.inventory_id,
                    "skipping item with unknown frame type"
                );
                continue;
            }
            Some(reason) => {
                tracing::debug!(id = %item.id, ?reason, "skipping item");
                continue;
            }
            None => {}
        }

        let text = item_text(item, translator)?;
        let id = inventory.push_item(text);
        tracing::debug!(id, item = %item.id, inventory_id = %item.inventory_id, "rendered item");

        let Some(slot) = slot_name(item)? else {
            inventory.tree_jewels.push(TreeJewel { x: item.x, item_id: id });
            continue;
        };

        inventory.slots.push(Slot {
            name: slot.clone(),
            item_id: id,
        });

        let resolved = resolve_sockets(item, &slot, translator)?;
        inventory.skills.extend(resolved.skills);
        if !resolved.jewels.is_empty() {
            deferred.push((slot, resolved.jewels));
        }
    }

    for (parent, jewels) in deferred {
        for (n, text) in jewels.into_iter().enumerate() {
            let id = inventory.push_item(text);
            inventory.slots.push(Slot {
                name: format!("{} Abyssal Socket {}", parent, n + 1),
                item_id: id,
            });
        }
    }

    Ok(inventory)
}
