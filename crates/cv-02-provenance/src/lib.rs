//! # Provenance Validator & Origin Cascade Cleaner (cv-02)
//!
//! Enforces and repairs item authenticity across arbitrarily nested
//! container structures. Inventories received from an untrusted game
//! process pass through the validator before they are trusted into the
//! ledger; the cascade cleaner unwinds a banned server's contributions,
//! including copies buried inside containers carried by other players.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Errors Are Data | Validation returns a list; it never raises |
//! | 2 | Independent Rules | Every applicable violation is reported |
//! | 3 | Permissive Parse | One malformed slot never blocks the other 44 |
//! | 4 | Cascade Depth | Cleaning recurses to arbitrary nesting depth |
//! | 5 | Minimal Writes | Cleaning reports `changed` so callers skip I/O |
//!
//! ## Crate Structure
//!
//! - `registry` - Known game rules (stack sizes, enchantments, durability)
//! - `validation` - Error kinds and slot paths
//! - `validator` - The recursive item/inventory validator
//! - `cascade` - The origin cascade cleaner

pub mod cascade;
pub mod registry;
pub mod validation;
pub mod validator;

pub use cascade::{clean_inventory, clean_slot, clean_slots, SlotOutcome};
pub use validation::{SlotPath, ValidationError, ValidationIssue};
pub use validator::ItemValidator;
