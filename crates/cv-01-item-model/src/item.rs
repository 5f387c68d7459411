//! Item tree model with lossless unknown-field handling.
//!
//! Known fields are typed; everything else lands in the flattened `extra`
//! map and is merged back on serialization (Invariant 1). Container
//! contents stay as raw slots so a malformed nested item never poisons the
//! parse of its parent (Invariant 3).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::origin::parse_origin_line;

/// A game item, possibly a container holding further nullable slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item type identifier, e.g. `minecraft:diamond_sword`.
    #[serde(rename = "typeId", default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,

    /// Stack size. Required to be >= 1 by the validator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    /// Player-assigned display name.
    #[serde(rename = "nameTag", default, skip_serializing_if = "Option::is_none")]
    pub name_tag: Option<String>,

    /// Ordered descriptive lines. One of them may carry the origin tag.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,

    /// Applied enchantments, unique by type per the game rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enchantments: Vec<Enchantment>,

    /// Durability block for damageable items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durability: Option<Durability>,

    /// Nested container slots (the recursion point). Raw values so that a
    /// malformed nested slot stays opaque instead of failing the parent.
    #[serde(
        rename = "shulker_contents",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub container_contents: Option<Vec<Value>>,

    /// Every field this codec does not model, preserved round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single enchantment: `{type, level}` plus whatever else the server sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enchantment {
    /// Enchantment identifier, e.g. `minecraft:sharpness`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Enchantment level, 1-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Durability block: accumulated damage against a maximum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Durability {
    /// Damage taken so far. Must be >= 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i64>,

    /// Maximum durability the item claims for itself.
    #[serde(
        rename = "maxDurability",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_durability: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Parse a raw slot value as an item.
    ///
    /// Returns `None` for empty (`null`) slots and for slots that do not
    /// conform to the item shape; callers treat the latter as opaque.
    pub fn from_slot(slot: &Value) -> Option<Item> {
        if slot.is_null() || !slot.is_object() {
            return None;
        }
        serde_json::from_value(slot.clone()).ok()
    }

    /// Serialize back to a raw slot value, extras merged in.
    pub fn to_slot(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// The server named by this item's origin tag, if any lore line carries
    /// one. Only the first matching line counts.
    pub fn origin(&self) -> Option<&str> {
        self.lore.iter().find_map(|line| parse_origin_line(line))
    }

    /// Whether this item's origin tag names `server`.
    pub fn has_origin_from(&self, server: &str) -> bool {
        self.origin() == Some(server)
    }
}
