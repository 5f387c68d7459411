//! Validation error kinds and slot paths.
//!
//! Validation errors are data, not control flow (Invariant 1): the
//! validator returns a possibly-empty list and never raises. Each error
//! pinpoints the offending slot through a [`SlotPath`] so violations inside
//! nested containers remain attributable.

use serde::Serialize;
use shared_types::{PlayerId, ServerId};
use std::fmt;
use thiserror::Error;

/// Path to a slot: the top-level index followed by one index per nesting
/// level of container contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlotPath(Vec<usize>);

impl SlotPath {
    /// Path to a top-level inventory slot.
    pub fn slot(index: usize) -> Self {
        SlotPath(vec![index])
    }

    /// Path to `index` within this slot's container contents.
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        SlotPath(path)
    }

    /// Nesting depth (1 for a top-level slot).
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The indices, outermost first.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for SlotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "-");
        }
        let mut first = true;
        for index in &self.0 {
            if !first {
                write!(f, "/")?;
            }
            write!(f, "{}", index)?;
            first = false;
        }
        Ok(())
    }
}

/// One specific rule violation. Every variant is independent: an item can
/// accumulate several of them in a single pass (Invariant 2).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationIssue {
    /// The inventory payload is not a slot array at all.
    #[error("inventory payload is not a slot array")]
    InvalidInventory,

    /// The slot holds data that cannot be parsed as an item.
    #[error("slot contains data that cannot be parsed as an item")]
    UnparseableItem,

    /// Missing `typeId`. Terminal: no further checks run for the item.
    #[error("item is missing typeId")]
    MissingType,

    /// Non-positive stack size.
    #[error("item amount {amount} must be positive")]
    InvalidAmount { amount: i64 },

    /// Stack size beyond the type's known maximum.
    #[error("stack size {amount} exceeds maximum {max} for {type_id}")]
    StackTooLarge {
        amount: i64,
        max: i64,
        type_id: String,
    },

    /// Enchantment entry without a usable type or level.
    #[error("enchantment entry is missing its type or level")]
    InvalidEnchantment,

    /// Enchantment id not in the registry.
    #[error("unknown enchantment: {kind}")]
    UnknownEnchantment { kind: String },

    /// Enchantment level out of the legal range for its id.
    #[error("enchantment {kind} level {level} is invalid (max {max})")]
    InvalidLevel { kind: String, level: i64, max: i64 },

    /// The same enchantment id appears twice on one item.
    #[error("duplicate enchantment: {kind}")]
    DuplicateEnchantment { kind: String },

    /// Two mutually-exclusive enchantments are both present.
    #[error("incompatible enchantments: {first} and {second}")]
    IncompatibleEnchantments { first: String, second: String },

    /// Negative damage value.
    #[error("durability damage {damage} cannot be negative")]
    NegativeDurability { damage: i64 },

    /// Damage beyond the claimed maximum.
    #[error("durability damage {damage} exceeds max durability {max}")]
    DurabilityExceedsMax { damage: i64, max: i64 },

    /// Claimed maximum differs from the canonical value for the type.
    #[error("invalid max durability {claimed} for {type_id} (expected {expected})")]
    InvalidMaxDurability {
        claimed: i64,
        expected: i64,
        type_id: String,
    },

    /// No lore line carries an origin tag.
    #[error("item is missing its origin tag")]
    MissingOrigin,

    /// The origin tag names a different server.
    #[error("item origin '{origin}' does not match server '{server}'")]
    WrongOrigin { origin: String, server: String },
}

/// A rule violation located within a specific player/server/slot context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The player whose inventory was being validated, when known.
    pub player: Option<PlayerId>,
    /// The server that claimed to produce the inventory.
    pub server: ServerId,
    /// Where in the slot tree the violation sits.
    pub slot: SlotPath,
    /// The violation itself.
    pub issue: ValidationIssue,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}: {}", self.slot, self.issue)
    }
}
