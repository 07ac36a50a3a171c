//! Item text rendering
//!
//! Turns one source item into the line-oriented text block the import
//! grammar expects:
//!
//! ```text
//! Rarity: RARE
//! RARE boots 1234567
//! Iron Greaves
//! Unique ID: ...1234567
//! Item Level: 80
//! Quality: 5
//! Sockets: R-G B
//! Implicits: 0
//! +45 to maximum Life
//! ```
//!
//! Lines are produced eagerly in a fixed order; each is present or absent
//! according to the item's fields.

use std::borrow::Cow;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ConvertError;
use crate::model::{Item, Socket};
use crate::reference::{
    radius_name, Rarity, CRAFTED_MARKER, POSSESSIVE_MARKERS, QUALITY_PREFIX, QUALITY_PROPERTY,
    RADIUS_PROPERTY,
};
use crate::translate::Translator;

/// Colour markup such as `<<set:MS>>` embedded in names
static SET_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<<set:\w+>>").expect("markup pattern is valid"));

/// Render an item into its text lines
pub fn render_item(item: &Item, translator: &dyn Translator) -> Result<Vec<String>, ConvertError> {
    let rarity =
        Rarity::from_frame_type(item.frame_type).ok_or_else(|| ConvertError::UnknownFrameType {
            frame_type: item.frame_type,
            id: item.id.clone(),
        })?;

    let mut lines = Vec::with_capacity(12 + item_mod_count(item));
    lines.push(format!("Rarity: {}", rarity.name()));

    match rarity {
        Rarity::Rare => lines.push(format!(
            "{} {} {}",
            rarity.name(),
            item.category.specific_name(),
            item.id_suffix()
        )),
        Rarity::Unique | Rarity::Relic => {
            lines.push(translator.translate(&clean_name(&item.name))?);
        }
        Rarity::Normal | Rarity::Magic => {}
    }

    let base = clean_name(&item.type_line);
    let base = strip_quality_prefix(&base);
    if rarity == Rarity::Magic {
        lines.push(format!(
            "{} {} {}",
            rarity.name(),
            translate_magic_name(base, translator)?,
            item.id_suffix()
        ));
    } else {
        lines.push(translator.translate(base)?);
    }

    lines.push(format!("Unique ID: {}", item.id));
    lines.push(format!("Item Level: {}", item.ilvl));

    let quality = match item.property_value(QUALITY_PROPERTY) {
        Some(value) => parse_quality(value)?,
        None => 0,
    };
    lines.push(format!("Quality: {}", quality));

    if let Some(value) = item.property_value(RADIUS_PROPERTY) {
        let radius =
            radius_name(value).ok_or_else(|| ConvertError::UnknownRadius(value.to_string()))?;
        lines.push(format!("Radius: {}", radius));
    }

    if let Some(sockets) = socket_line(&item.sockets) {
        lines.push(format!("Sockets: {}", sockets));
    }

    if item.corrupted {
        lines.push("Corrupted".to_string());
    }

    lines.push(format!(
        "Implicits: {}",
        item.implicit_mods.len() + item.enchant_mods.len()
    ));

    for line in item
        .implicit_mods
        .iter()
        .chain(&item.enchant_mods)
        .chain(&item.explicit_mods)
    {
        lines.push(translator.translate_mod(line)?);
    }
    for line in &item.crafted_mods {
        lines.push(format!("{}{}", CRAFTED_MARKER, translator.translate_mod(line)?));
    }

    if item.shaper {
        lines.push("Shaper Item".to_string());
    }
    if item.elder {
        lines.push("Elder Item".to_string());
    }

    Ok(lines)
}

/// Render an item into a newline-joined text block
pub fn item_text(item: &Item, translator: &dyn Translator) -> Result<String, ConvertError> {
    Ok(render_item(item, translator)?.join("\n"))
}

fn item_mod_count(item: &Item) -> usize {
    item.implicit_mods.len()
        + item.enchant_mods.len()
        + item.explicit_mods.len()
        + item.crafted_mods.len()
}

/// Strip `<<set:..>>` markup
pub fn clean_name(name: &str) -> Cow<'_, str> {
    SET_MARKUP.replace_all(name, "")
}

/// Drop everything up to and including the last quality prefix
pub fn strip_quality_prefix(type_line: &str) -> &str {
    type_line
        .rsplit_once(QUALITY_PREFIX)
        .map_or(type_line, |(_, rest)| rest)
}

/// Parse `+20%` style quality text
pub(crate) fn parse_quality(value: &str) -> Result<u32, ConvertError> {
    value
        .trim_start_matches('+')
        .trim_end_matches('%')
        .trim()
        .parse()
        .map_err(|_| ConvertError::InvalidNumber {
            property: "quality",
            value: value.to_string(),
        })
}

/// Group socket colours by link group, in first-seen order
fn socket_line(sockets: &[Socket]) -> Option<String> {
    if sockets.is_empty() {
        return None;
    }

    let mut groups: IndexMap<u32, Vec<&str>> = IndexMap::new();
    for socket in sockets {
        groups
            .entry(socket.group)
            .or_default()
            .push(socket.colour.as_str());
    }

    Some(
        groups
            .values()
            .map(|colours| colours.join("-"))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Split a magic name into affix particles, each ending in a possessive marker.
///
/// The final particle (the base type) usually has no marker. Markers with
/// nothing before them are dropped.
fn name_particles(name: &str) -> Vec<&str> {
    let mut particles = Vec::new();
    let mut start = None;

    for (idx, ch) in name.char_indices() {
        if POSSESSIVE_MARKERS.contains(&ch) {
            if let Some(begin) = start.take() {
                particles.push(&name[begin..idx + ch.len_utf8()]);
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(begin) = start {
        particles.push(&name[begin..]);
    }

    particles
}

/// Find the base type inside a magic item name.
///
/// Magic names are `affix的 affix之 base`; the base alone is tried first,
/// then progressively longer suffixes until one translates.
fn translate_magic_name(name: &str, translator: &dyn Translator) -> Result<String, ConvertError> {
    let mut accumulated = String::with_capacity(name.len());

    for particle in name_particles(name).into_iter().rev() {
        accumulated.insert_str(0, particle);
        if let Ok(translated) = translator.translate(accumulated.trim()) {
            return Ok(translated);
        }
    }

    Err(ConvertError::MagicName(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::Dictionary;
    use serde_json::json;

    fn dictionary() -> Dictionary {
        let mut dict = Dictionary::new();
        dict.insert_name("鐵製長靴", "Iron Greaves");
        dict.insert_name("金光戒指", "Gold Ring");
        dict.insert_name("苦難之戒", "Tormented Ring");
        dict.insert_name("暗影之刺", "Shadow Sting");
        dict.insert_name("紅玉戒指", "Ruby Ring");
        dict.insert_name("殺意之珠寶", "Murderous Eye Jewel");
        dict.insert_mod("+# 最大生命", "+# to maximum Life");
        dict.insert_mod("+#% 火焰抗性", "+#% to Fire Resistance");
        dict.insert_mod("+# 力量", "+# to Strength");
        dict
    }

    fn item(value: serde_json::Value) -> Item {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_normal_item() {
        let boots = item(json!({
            "id": "aaaaaaaaaaaa1234567",
            "frameType": 0,
            "typeLine": "精良的 鐵製長靴",
            "ilvl": 80,
            "properties": [{"name": "品質", "values": [["+5%", 1]]}],
            "inventoryId": "Boots",
            "category": {"armour": ["boots"]}
        }));
        let lines = render_item(&boots, &dictionary()).unwrap();
        assert_eq!(
            lines,
            vec![
                "Rarity: NORMAL",
                "Iron Greaves",
                "Unique ID: aaaaaaaaaaaa1234567",
                "Item Level: 80",
                "Quality: 5",
                "Implicits: 0",
            ]
        );
    }

    #[test]
    fn test_rare_item() {
        let ring = item(json!({
            "id": "ffffffffffff7654321",
            "frameType": 2,
            "name": "<<set:MS>><<set:M>><<set:S>>Doom Loop",
            "typeLine": "紅玉戒指",
            "ilvl": 84,
            "implicitMods": ["+25% 火焰抗性"],
            "explicitMods": ["+40 最大生命"],
            "craftedMods": ["+10 力量"],
            "category": {"accessories": ["ring"]}
        }));
        let lines = render_item(&ring, &dictionary()).unwrap();
        assert_eq!(
            lines,
            vec![
                "Rarity: RARE",
                "RARE ring 7654321",
                "Ruby Ring",
                "Unique ID: ffffffffffff7654321",
                "Item Level: 84",
                "Quality: 0",
                "Implicits: 1",
                "+25% to Fire Resistance",
                "+40 to maximum Life",
                "{crafted}+10 to Strength",
            ]
        );
    }

    #[test]
    fn test_rare_simple_category() {
        let jewel = item(json!({
            "id": "0000000abcdefg",
            "frameType": 2,
            "typeLine": "殺意之珠寶",
            "category": "jewels"
        }));
        let lines = render_item(&jewel, &dictionary()).unwrap();
        assert_eq!(lines[1], "RARE jewels abcdefg");
    }

    #[test]
    fn test_unique_item() {
        let ring = item(json!({
            "id": "1111111111111111",
            "frameType": 3,
            "name": "<<set:MS>><<set:M>><<set:S>>苦難之戒",
            "typeLine": "金光戒指",
            "ilvl": 70,
            "corrupted": true,
            "shaper": true,
            "elder": true,
            "category": {"accessories": ["ring"]}
        }));
        let lines = render_item(&ring, &dictionary()).unwrap();
        assert_eq!(
            lines,
            vec![
                "Rarity: UNIQUE",
                "Tormented Ring",
                "Gold Ring",
                "Unique ID: 1111111111111111",
                "Item Level: 70",
                "Quality: 0",
                "Corrupted",
                "Implicits: 0",
                "Shaper Item",
                "Elder Item",
            ]
        );
    }

    #[test]
    fn test_relic_item() {
        let ring = item(json!({
            "id": "4444444444444444",
            "frameType": 9,
            "name": "<<set:MS>><<set:M>><<set:S>>苦難之戒",
            "typeLine": "金光戒指",
            "category": {"accessories": ["ring"]}
        }));
        let lines = render_item(&ring, &dictionary()).unwrap();
        assert_eq!(
            &lines[..3],
            &["Rarity: RELIC", "Tormented Ring", "Gold Ring"]
        );
    }

    #[test]
    fn test_magic_item() {
        let ring = item(json!({
            "id": "2222222222abcdefg",
            "frameType": 1,
            "typeLine": "<<set:MS>>勇士的 火焰之紅玉戒指",
            "ilvl": 60,
            "category": {"accessories": ["ring"]}
        }));
        let lines = render_item(&ring, &dictionary()).unwrap();
        assert_eq!(lines[0], "Rarity: MAGIC");
        assert_eq!(lines[1], "MAGIC Ruby Ring abcdefg");
        assert_eq!(lines[2], "Unique ID: 2222222222abcdefg");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_magic_item_marker_in_base_name() {
        // "戒" alone is not a base type; "苦難之戒" is
        let ring = item(json!({
            "id": "3333333333abcdefg",
            "frameType": 1,
            "typeLine": "精良的 勇士的苦難之戒",
            "category": {"accessories": ["ring"]}
        }));
        let lines = render_item(&ring, &dictionary()).unwrap();
        assert_eq!(lines[1], "MAGIC Tormented Ring abcdefg");
    }

    #[test]
    fn test_magic_item_untranslatable() {
        let ring = item(json!({
            "id": "2222222222abcdefg",
            "frameType": 1,
            "typeLine": "勇士的 神秘之物",
            "category": {"accessories": ["ring"]}
        }));
        let err = render_item(&ring, &dictionary()).unwrap_err();
        assert!(matches!(err, ConvertError::MagicName(name) if name == "勇士的 神秘之物"));
    }

    #[test]
    fn test_unknown_frame_type() {
        let gem = item(json!({"id": "x", "frameType": 4, "typeLine": "火球"}));
        assert!(matches!(
            render_item(&gem, &dictionary()),
            Err(ConvertError::UnknownFrameType { frame_type: 4, .. })
        ));
    }

    #[test]
    fn test_untranslatable_mod_is_fatal() {
        let boots = item(json!({
            "id": "x",
            "frameType": 0,
            "typeLine": "鐵製長靴",
            "explicitMods": ["未知詞綴"]
        }));
        assert!(matches!(
            render_item(&boots, &dictionary()),
            Err(ConvertError::Untranslatable(_))
        ));
    }

    #[test]
    fn test_radius_and_sockets() {
        let jewel = item(json!({
            "id": "x",
            "frameType": 0,
            "typeLine": "鐵製長靴",
            "properties": [{"name": "範圍", "values": [["中", 0]]}],
            "sockets": [
                {"group": 0, "sColour": "R"},
                {"group": 0, "sColour": "G"},
                {"group": 1, "sColour": "B"},
                {"group": 0, "sColour": "W"},
                {"group": 2, "sColour": "A"}
            ]
        }));
        let lines = render_item(&jewel, &dictionary()).unwrap();
        assert!(lines.contains(&"Radius: Medium".to_string()));
        assert!(lines.contains(&"Sockets: R-G-W B A".to_string()));
    }

    #[test]
    fn test_unknown_radius() {
        let jewel = item(json!({
            "id": "x",
            "frameType": 0,
            "typeLine": "鐵製長靴",
            "properties": [{"name": "範圍", "values": [["巨大", 0]]}]
        }));
        assert!(matches!(
            render_item(&jewel, &dictionary()),
            Err(ConvertError::UnknownRadius(_))
        ));
    }

    #[test]
    fn test_invalid_quality() {
        let boots = item(json!({
            "id": "x",
            "frameType": 0,
            "typeLine": "鐵製長靴",
            "properties": [{"name": "品質", "values": [["很高", 1]]}]
        }));
        assert!(matches!(
            render_item(&boots, &dictionary()),
            Err(ConvertError::InvalidNumber { property: "quality", .. })
        ));
    }

    #[test]
    fn test_parse_quality() {
        assert_eq!(parse_quality("+20%").unwrap(), 20);
        assert_eq!(parse_quality("7").unwrap(), 7);
        assert!(parse_quality("+%").is_err());
    }

    #[test]
    fn test_name_particles() {
        assert_eq!(
            name_particles("勇士的 紅玉戒指之火焰"),
            vec!["勇士的", " 紅玉戒指之", "火焰"]
        );
        assert_eq!(name_particles("紅玉戒指"), vec!["紅玉戒指"]);
        assert_eq!(name_particles("的的甲"), vec!["甲"]);
        assert!(name_particles("").is_empty());
    }

    #[test]
    fn test_strip_quality_prefix() {
        assert_eq!(strip_quality_prefix("精良的 鐵製長靴"), "鐵製長靴");
        assert_eq!(strip_quality_prefix("鐵製長靴"), "鐵製長靴");
    }

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("<<set:MS>><<set:M>><<set:S>>Doom Loop"), "Doom Loop");
        assert_eq!(clean_name("Plain"), "Plain");
    }

    #[test]
    fn test_item_text_joins_lines() {
        let boots = item(json!({"id": "x", "frameType": 0, "typeLine": "鐵製長靴"}));
        let text = item_text(&boots, &dictionary()).unwrap();
        assert!(text.starts_with("Rarity: NORMAL\nIron Greaves\nUnique ID: x\n"));
        assert!(text.ends_with("Implicits: 0"));
    }
}
