//! Tree command handler

use anyhow::Result;
use pobgen::{tree_url, ExportOptions};
use std::path::Path;

use super::export::read_records;

/// Build the passive tree URL for a character
pub fn character_tree_url(items: &Path, tree: &Path) -> Result<String> {
    let (record, tree) = read_records(items, tree)?;
    let character = &record.character;

    Ok(tree_url(
        &ExportOptions::default().tree_url_prefix,
        character.class_id,
        character.ascendancy_class,
        &tree.hashes,
    ))
}

/// Handle the tree command
pub fn handle(items: &Path, tree: &Path) -> Result<()> {
    println!("{}", character_tree_url(items, tree)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_character_tree_url() {
        let dir = tempfile::tempdir().unwrap();
        let items = dir.path().join("items.json");
        let tree = dir.path().join("tree.json");
        fs::write(
            &items,
            r#"{"character": {"level": 1, "classId": 3, "ascendancyClass": 1}, "items": []}"#,
        )
        .unwrap();
        fs::write(&tree, r#"{"hashes": [26725], "jewel_slots": []}"#).unwrap();

        let url = character_tree_url(&items, &tree).unwrap();
        assert_eq!(
            url,
            "https://www.pathofexile.com/passive-skill-tree/AAAABAMBAGhl"
        );

        let spec = pobgen::decode_tree(url.rsplit('/').next().unwrap()).unwrap();
        assert_eq!(spec.nodes, vec![26725]);
    }
}
