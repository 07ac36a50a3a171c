//! Socketed content resolution
//!
//! Splits an item's socketed children into skill gems, grouped by the link
//! group of the socket they sit in, and abyss jewels, which become items of
//! their own.

use indexmap::IndexMap;

use crate::error::ConvertError;
use crate::model::{Gem, Item, SkillGroup};
use crate::reference::{
    SocketKind, DEFAULT_GEM_LEVEL, LEVEL_PROPERTY, MAX_LEVEL_TOKEN, QUALITY_PROPERTY,
    SUPPORT_SUFFIX,
};
use crate::render::{item_text, parse_quality};
use crate::translate::Translator;

/// Skill groups and abyss jewel texts found in one item's sockets
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolvedSockets {
    pub skills: Vec<SkillGroup>,
    /// Rendered abyss jewels, in socket order
    pub jewels: Vec<String>,
}

/// Resolve the socketed children of `item`, which occupies `slot`
pub fn resolve_sockets(
    item: &Item,
    slot: &str,
    translator: &dyn Translator,
) -> Result<ResolvedSockets, ConvertError> {
    let mut groups: IndexMap<u32, Vec<Gem>> = IndexMap::new();
    let mut jewels = Vec::new();

    for child in &item.socketed_items {
        let socket = child
            .socket
            .and_then(|index| item.sockets.get(index))
            .ok_or_else(|| ConvertError::MissingSocket {
                id: child.id.clone(),
                socket: child.socket,
            })?;

        let kind = SocketKind::from_colour(&socket.colour).unwrap_or_else(|| {
            tracing::warn!(
                colour = %socket.colour,
                item = %item.id,
                "unknown socket colour, treating as gem link"
            );
            SocketKind::Gem
        });

        match kind {
            SocketKind::Abyss => jewels.push(item_text(child, translator)?),
            SocketKind::Gem => groups
                .entry(socket.group)
                .or_default()
                .push(gem_from_item(child, translator)?),
        }
    }

    let skills = groups
        .into_values()
        .map(|gems| SkillGroup {
            slot: slot.to_string(),
            gems,
        })
        .collect();

    Ok(ResolvedSockets { skills, jewels })
}

/// Build a gem entry from a socketed gem item
pub fn gem_from_item(item: &Item, translator: &dyn Translator) -> Result<Gem, ConvertError> {
    let name = translator
        .translate(&item.type_line)?
        .replace(SUPPORT_SUFFIX, "");

    let level = match item.property_value(LEVEL_PROPERTY) {
        Some(value) => parse_level(value)?,
        None => DEFAULT_GEM_LEVEL,
    };
    let quality = match item.property_value(QUALITY_PROPERTY) {
        Some(value) => parse_quality(value)?,
        None => 0,
    };

    Ok(Gem {
        level,
        quality,
        name,
    })
}

/// Parse a gem level, which may carry the max-level qualifier
fn parse_level(value: &str) -> Result<u32, ConvertError> {
    value
        .replace(MAX_LEVEL_TOKEN, "")
        .trim()
        .parse()
        .map_err(|_| ConvertError::InvalidNumber {
            property: "level",
            value: value.to_string(),
        })
}
