//! Passive tree encoding
//!
//! The tree is shared as a URL whose last path segment is a URL-safe Base64
//! blob. The blob has a fixed seven byte header followed by the allocated
//! node hashes, all big-endian:
//!
//! ```text
//! 00 00 00 04 CC AA 00 [NN NN]...
//!          |  |  |     `- node hashes (u16 each)
//!          |  |  `- ascendancy id
//!          |  `- class id
//!          `- version
//! ```

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use byteorder::{BigEndian, ByteOrder};
use thiserror::Error;

use crate::inventory::TreeJewel;
use crate::model::TreeSocket;

/// Layout version understood by the tree viewer
pub const TREE_VERSION: u8 = 4;

/// Header bytes before the node list
const HEADER_LEN: usize = 7;

/// Errors that can occur while decoding a tree identifier
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Invalid Base64 encoding: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("Tree data too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("Unsupported tree version: {0}")]
    UnsupportedVersion(u8),

    #[error("Node list has a dangling byte")]
    OddNodeBytes,
}

/// Decoded passive tree selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSpec {
    pub class_id: u8,
    pub ascendancy_id: u8,
    pub nodes: Vec<u16>,
}

/// Pack a tree selection into its shareable identifier
pub fn encode_tree(class_id: u8, ascendancy_id: u8, nodes: &[u16]) -> String {
    let mut bytes = vec![0u8; HEADER_LEN + nodes.len() * 2];
    bytes[..HEADER_LEN].copy_from_slice(&[0, 0, 0, TREE_VERSION, class_id, ascendancy_id, 0]);
    BigEndian::write_u16_into(nodes, &mut bytes[HEADER_LEN..]);
    URL_SAFE.encode(bytes)
}

/// Unpack a tree identifier produced by [`encode_tree`]
pub fn decode_tree(identifier: &str) -> Result<TreeSpec, TreeError> {
    let bytes = URL_SAFE.decode(identifier)?;
    if bytes.len() < HEADER_LEN {
        return Err(TreeError::TooShort {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }
    if bytes[3] != TREE_VERSION {
        return Err(TreeError::UnsupportedVersion(bytes[3]));
    }

    let body = &bytes[HEADER_LEN..];
    if body.len() % 2 != 0 {
        return Err(TreeError::OddNodeBytes);
    }
    let mut nodes = vec![0u16; body.len() / 2];
    BigEndian::read_u16_into(body, &mut nodes);

    Ok(TreeSpec {
        class_id: bytes[4],
        ascendancy_id: bytes[5],
        nodes,
    })
}

/// Full shareable URL for a tree selection
pub fn tree_url(prefix: &str, class_id: u8, ascendancy_id: u8, nodes: &[u16]) -> String {
    format!("{}{}", prefix, encode_tree(class_id, ascendancy_id, nodes))
}

/// Bind each tree jewel to the node of the socket it occupies.
///
/// `jewel_slots` maps a jewel's `x` to the socket node. Jewels whose `x`
/// has no slot are skipped with a warning.
pub fn socket_bindings(jewel_slots: &[u16], jewels: &[TreeJewel]) -> Vec<TreeSocket> {
    jewels
        .iter()
        .filter_map(|jewel| match jewel_slots.get(jewel.x as usize) {
            Some(&node_id) => Some(TreeSocket {
                node_id,
                item_id: jewel.item_id,
            }),
            None => {
                tracing::warn!(x = jewel.x, item_id = jewel.item_id, "tree jewel has no socket node");
                None
            }
        })
        .collect()
}
