//! The origin cascade cleaner.
//!
//! Given a slot list and a target server, nulls out every item whose
//! origin tag names that server, recursing through container contents at
//! arbitrary depth (Invariant 4). Slot values are trees, so the recursion
//! terminates even on adversarial input; a slot that fails to parse is
//! passed through unchanged rather than treated as an error (Invariant 3).

use cv_01_item_model::Item;
use serde_json::Value;

/// Per-slot cleaning verdict. Explicit so the behavior is testable instead
/// of being silent pass-through.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotOutcome {
    /// Empty, opaque, or untainted slot: kept as-is.
    Unchanged,
    /// The item's origin names the target server: slot becomes `null`.
    Removed,
    /// The item survives but its container contents were cleaned.
    Replaced(Value),
}

/// Classify one slot against `server`.
pub fn clean_slot(slot: &Value, server: &str) -> SlotOutcome {
    let Some(item) = Item::from_slot(slot) else {
        // Empty slot, or data the codec cannot read. Best-effort cleaning
        // passes it through; the validator reports it separately.
        return SlotOutcome::Unchanged;
    };

    if item.has_origin_from(server) {
        return SlotOutcome::Removed;
    }

    if let Some(contents) = &item.container_contents {
        let (cleaned, changed) = clean_slots(contents, server);
        if changed {
            let mut item = item;
            item.container_contents = Some(cleaned);
            return match item.to_slot() {
                Ok(value) => SlotOutcome::Replaced(value),
                Err(_) => SlotOutcome::Unchanged,
            };
        }
    }

    SlotOutcome::Unchanged
}

/// Clean a slot list, returning the (possibly identical) list and whether
/// anything changed so callers can avoid unnecessary writes (Invariant 5).
pub fn clean_slots(slots: &[Value], server: &str) -> (Vec<Value>, bool) {
    let mut cleaned = Vec::with_capacity(slots.len());
    let mut changed = false;

    for slot in slots {
        match clean_slot(slot, server) {
            SlotOutcome::Unchanged => cleaned.push(slot.clone()),
            SlotOutcome::Removed => {
                cleaned.push(Value::Null);
                changed = true;
            }
            SlotOutcome::Replaced(value) => {
                cleaned.push(value);
                changed = true;
            }
        }
    }

    (cleaned, changed)
}

/// Clean a serialized inventory.
///
/// Returns the rewritten bytes and `true` when something was removed, or
/// the original bytes and `false` otherwise. Payloads that do not parse as
/// a slot array are returned unchanged.
pub fn clean_inventory(inventory: &[u8], server: &str) -> (Vec<u8>, bool) {
    let slots: Vec<Value> = match serde_json::from_slice(inventory) {
        Ok(slots) => slots,
        Err(_) => return (inventory.to_vec(), false),
    };

    let (cleaned, changed) = clean_slots(&slots, server);
    if !changed {
        return (inventory.to_vec(), false);
    }

    match serde_json::to_vec(&cleaned) {
        Ok(bytes) => (bytes, true),
        Err(_) => (inventory.to_vec(), false),
    }
}
