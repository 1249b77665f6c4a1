// ── Territory domain type ──

use serde::{Deserialize, Serialize};

use super::empire::Empire;

/// A region on the map, optionally ruled by an empire.
///
/// Passive structure for the map renderer; nothing is checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Territory {
    pub id: u32,
    pub name: String,
    /// SVG path data outlining the region.
    pub path: String,
    pub color: String,
    /// Ids of adjacent territories.
    #[serde(default)]
    pub neighbors: Vec<u32>,
    /// Ruling empire, attached by the caller after validation.
    ///
    /// Never read from input: an `empire` key in territory data is ignored,
    /// since an `Empire` only comes out of [`crate::validate()`].
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub empire: Option<Empire>,
}

impl Territory {
    pub fn borders(&self, other: u32) -> bool {
        self.neighbors.contains(&other)
    }

    pub fn is_claimed(&self) -> bool {
        self.empire.is_some()
    }
}
