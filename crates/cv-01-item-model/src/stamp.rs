//! Origin stamping: the write-side half of the provenance mechanism.
//!
//! Before an inventory received from the local game process is validated
//! and stored, every item that carries no origin tag at all gets one naming
//! the local server. Items that already carry *any* origin line are left
//! alone (Invariant 4: at most one origin line is ever added), so items
//! traded in from other servers keep their original provenance.
//!
//! Operates on raw slot values rather than the typed codec: an item with a
//! malformed `amount` still deserves its origin tag.

use serde_json::Value;

use crate::origin::{origin_line, slot_origin};

/// Stamp every untagged item in a serialized inventory.
///
/// Returns the (possibly rewritten) bytes and whether anything changed.
/// Payloads that do not parse as a slot array are returned unchanged; the
/// caller's validator will reject them separately.
pub fn stamp_inventory(inventory: &[u8], server: &str) -> (Vec<u8>, bool) {
    let mut slots: Vec<Value> = match serde_json::from_slice(inventory) {
        Ok(slots) => slots,
        Err(_) => return (inventory.to_vec(), false),
    };

    if !stamp_slots(&mut slots, server) {
        return (inventory.to_vec(), false);
    }

    match serde_json::to_vec(&slots) {
        Ok(bytes) => (bytes, true),
        Err(_) => (inventory.to_vec(), false),
    }
}

/// Stamp a slot list in place, recursing through container contents.
///
/// Returns whether any slot was modified. Empty and non-object slots are
/// skipped.
pub fn stamp_slots(slots: &mut [Value], server: &str) -> bool {
    let mut changed = false;

    for slot in slots.iter_mut() {
        if slot_origin(slot).is_none() {
            if let Value::Object(obj) = slot {
                let line = Value::String(origin_line(server));
                match obj.get_mut("lore") {
                    Some(Value::Array(lore)) => lore.push(line),
                    // Missing or malformed lore: start a fresh list.
                    _ => {
                        obj.insert("lore".to_string(), Value::Array(vec![line]));
                    }
                }
                changed = true;
            }
        }

        // Containers are stamped regardless of the parent's own tag.
        if let Some(Value::Array(contents)) = slot.get_mut("shulker_contents") {
            if stamp_slots(contents, server) {
                changed = true;
            }
        }
    }

    changed
}
