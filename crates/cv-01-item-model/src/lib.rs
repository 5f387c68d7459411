//! # Item Model & Codec (cv-01)
//!
//! The item tree model shared by the provenance validator, the cascade
//! cleaner, and the origin-stamping pass.
//!
//! ## Codec Contract
//!
//! Inventories are self-describing JSON: a fixed-length array of nullable
//! slots, each slot an item object that may nest further slots through its
//! container contents. Game servers attach fields this crate has never heard
//! of, so the codec models known fields explicitly and folds everything else
//! into an opaque extras bag that is merged back in on serialization.
//! **Unknown fields must round-trip byte-compatibly** (key order aside).
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Lossless Extras | Unrecognized item fields survive decode/encode |
//! | 2 | Nullable Slots | `null` is a valid, empty slot |
//! | 3 | Opaque Fallback | A slot that fails to parse is passed through |
//! | 4 | Single Origin | At most one origin lore line is ever added |
//!
//! ## Origin Tags
//!
//! A lore line of the form `Origin: <server-id>` asserts which server
//! produced an item. It is the network's sole provenance mechanism; see
//! [`origin`] for the grammar.

pub mod item;
pub mod origin;
pub mod stamp;

pub use item::{Durability, Enchantment, Item};
pub use origin::{origin_line, parse_origin_line, slot_origin};
pub use stamp::{stamp_inventory, stamp_slots};
