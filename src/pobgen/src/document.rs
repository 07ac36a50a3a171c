//! Build document composition and transport encoding
//!
//! The import code is the build document serialized as XML, zlib-compressed,
//! and encoded with URL-safe Base64.

use std::io::{Read, Write};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::ConvertError;
use crate::inventory::{assemble, Inventory};
use crate::model::{Character, CharacterRecord, SkillGroup, TreeRecord};
use crate::translate::Translator;
use crate::tree::{socket_bindings, tree_url};
use crate::xml::Element;

/// Game version the document targets
pub const DEFAULT_TARGET_VERSION: &str = "3_0";

/// Prefix of shareable passive tree links
pub const DEFAULT_TREE_URL_PREFIX: &str = "https://www.pathofexile.com/passive-skill-tree/";

/// Main skill group value when there are no skill groups
const NO_SKILL_GROUP: &str = "nil";

/// Document-level settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub target_version: String,
    pub tree_url_prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            target_version: DEFAULT_TARGET_VERSION.to_string(),
            tree_url_prefix: DEFAULT_TREE_URL_PREFIX.to_string(),
        }
    }
}

/// 1-based index of the skill group with the most gems; earliest wins ties
pub fn main_socket_group(skills: &[SkillGroup]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, group) in skills.iter().enumerate() {
        if best.map_or(true, |(_, len)| group.gems.len() > len) {
            best = Some((index + 1, group.gems.len()));
        }
    }
    best.map(|(index, _)| index)
}

/// Serialize the build document to XML
pub fn document_xml(
    character: &Character,
    tree: &TreeRecord,
    inventory: &Inventory,
    options: &ExportOptions,
) -> String {
    let main_group = main_socket_group(&inventory.skills)
        .map_or_else(|| NO_SKILL_GROUP.to_string(), |index| index.to_string());

    let build = Element::new("Build")
        .attr("level", character.level)
        .attr("targetVersion", &options.target_version)
        .attr("mainSocketGroup", main_group);

    let skills = Element::new("Skills")
        .attr("sortGemsByDPS", "true")
        .children(inventory.skills.iter().map(skill_element));

    let url = tree_url(
        &options.tree_url_prefix,
        character.class_id,
        character.ascendancy_class,
        &tree.hashes,
    );
    let sockets = socket_bindings(&tree.jewel_slots, &inventory.tree_jewels)
        .into_iter()
        .map(|socket| {
            Element::new("Socket")
                .attr("nodeId", socket.node_id)
                .attr("itemId", socket.item_id)
        });
    let tree = Element::new("Tree").attr("activeSpec", "1").child(
        Element::new("Spec")
            .child(Element::new("URL").text(url))
            .child(Element::new("Sockets").children(sockets)),
    );

    let items = Element::new("Items")
        .children(inventory.items.iter().map(|item| {
            Element::new("Item")
                .attr("id", item.id)
                .text(item.text.as_str())
        }))
        .children(inventory.slots.iter().map(|slot| {
            Element::new("Slot")
                .attr("name", &slot.name)
                .attr("itemId", slot.item_id)
        }));

    Element::new("PathOfBuilding")
        .child(build)
        .child(skills)
        .child(tree)
        .child(items)
        .to_xml()
}

fn skill_element(group: &SkillGroup) -> Element {
    Element::new("Skill")
        .attr("enabled", "true")
        .attr("slot", &group.slot)
        .attr("mainActiveSkillCalcs", "nil")
        .attr("mainActiveSkill", "nil")
        .children(group.gems.iter().map(|gem| {
            Element::new("Gem")
                .attr("level", gem.level)
                .attr("quality", gem.quality)
                .attr("enabled", "true")
                .attr("nameSpec", &gem.name)
        }))
}

/// Compress and encode a serialized document
pub fn encode_document(xml: &str) -> Result<String, ConvertError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(xml.as_bytes())?;
    let compressed = encoder.finish()?;
    Ok(URL_SAFE.encode(compressed))
}

/// Reverse [`encode_document`]
pub fn decode_document(code: &str) -> Result<String, ConvertError> {
    let compressed = URL_SAFE
        .decode(code.trim())
        .map_err(|e| ConvertError::Decode(e.to_string()))?;
    let mut decoder = ZlibDecoder::new(&compressed[..]);
    let mut xml = String::new();
    decoder
        .read_to_string(&mut xml)
        .map_err(|e| ConvertError::Decode(e.to_string()))?;
    Ok(xml)
}

/// Compose the document for an assembled inventory and encode it
pub fn compose(
    character: &Character,
    tree: &TreeRecord,
    inventory: &Inventory,
    options: &ExportOptions,
) -> Result<String, ConvertError> {
    encode_document(&document_xml(character, tree, inventory, options))
}

/// Convert a character and its passive tree into an import code.
///
/// Tree jewels are processed before the character's items, so they take
/// the lowest item ids.
pub fn export(
    character: &CharacterRecord,
    tree: &TreeRecord,
    translator: &dyn Translator,
    options: &ExportOptions,
) -> Result<String, ConvertError> {
    let summary = &character.character;
    tracing::debug!(
        name = %summary.name,
        class = %summary.class,
        league = %summary.league,
        level = summary.level,
        "exporting character"
    );

    let inventory = assemble(tree.items.iter().chain(&character.items), translator)?;
    tracing::debug!(
        items = inventory.items.len(),
        skills = inventory.skills.len(),
        "assembled inventory"
    );
    compose(&character.character, tree, &inventory, options)
}
