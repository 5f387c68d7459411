//! The recursive provenance validator.
//!
//! Checks structural and game-rule validity of an item tree and verifies
//! the origin tag matches the claimed producing server. All rules are
//! independent: one pass reports every applicable violation (Invariant 2),
//! and a malformed slot yields a single `UnparseableItem` without touching
//! the rest of the inventory (Invariant 3).

use std::collections::HashSet;

use cv_01_item_model::{Durability, Enchantment, Item};
use serde_json::Value;
use shared_types::{PlayerId, ServerId};

use crate::registry;
use crate::validation::{SlotPath, ValidationError, ValidationIssue};

/// Stateless validator over the game-rule registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItemValidator;

impl ItemValidator {
    pub fn new() -> Self {
        ItemValidator
    }

    /// Validate a serialized inventory claimed by `server` for `player`.
    ///
    /// A payload that is not a slot array yields a single
    /// [`ValidationIssue::InvalidInventory`]; otherwise every non-empty
    /// slot is validated independently.
    pub fn validate_inventory(
        &self,
        inventory: &[u8],
        server: &ServerId,
        player: &PlayerId,
    ) -> Vec<ValidationError> {
        let slots: Vec<Value> = match serde_json::from_slice(inventory) {
            Ok(slots) => slots,
            Err(_) => {
                return vec![ValidationError {
                    player: Some(player.clone()),
                    server: server.clone(),
                    slot: SlotPath::default(),
                    issue: ValidationIssue::InvalidInventory,
                }];
            }
        };

        let mut errors = Vec::new();
        for (index, slot) in slots.iter().enumerate() {
            self.validate_slot(slot, server, SlotPath::slot(index), &mut errors);
        }
        for error in &mut errors {
            error.player = Some(player.clone());
        }
        errors
    }

    /// Validate a single parsed item at `slot`, recursing into container
    /// contents. Always returns; never raises (Invariant 1).
    pub fn validate_item(
        &self,
        item: &Item,
        server: &ServerId,
        slot: SlotPath,
    ) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        self.validate_item_into(item, server, slot, &mut errors);
        errors
    }

    fn validate_slot(
        &self,
        slot: &Value,
        server: &ServerId,
        path: SlotPath,
        errors: &mut Vec<ValidationError>,
    ) {
        if slot.is_null() {
            return;
        }
        match Item::from_slot(slot) {
            Some(item) => self.validate_item_into(&item, server, path, errors),
            None => errors.push(ValidationError {
                player: None,
                server: server.clone(),
                slot: path,
                issue: ValidationIssue::UnparseableItem,
            }),
        }
    }

    fn validate_item_into(
        &self,
        item: &Item,
        server: &ServerId,
        path: SlotPath,
        errors: &mut Vec<ValidationError>,
    ) {
        let push = |errors: &mut Vec<ValidationError>, issue: ValidationIssue| {
            errors.push(ValidationError {
                player: None,
                server: server.clone(),
                slot: path.clone(),
                issue,
            });
        };

        let type_id = match item.type_id.as_deref() {
            Some(type_id) if !type_id.is_empty() => type_id,
            _ => {
                // Terminal: nothing else can be checked without a type.
                push(errors, ValidationIssue::MissingType);
                return;
            }
        };

        let amount = item.amount.unwrap_or(0);
        if amount <= 0 {
            push(errors, ValidationIssue::InvalidAmount { amount });
        } else {
            let max = registry::max_stack_size(type_id);
            if amount > max {
                push(
                    errors,
                    ValidationIssue::StackTooLarge {
                        amount,
                        max,
                        type_id: type_id.to_string(),
                    },
                );
            }
        }

        if !item.enchantments.is_empty() {
            self.validate_enchantments(&item.enchantments, server, &path, errors);
        }

        if let Some(durability) = &item.durability {
            self.validate_durability(durability, type_id, server, &path, errors);
        }

        self.validate_origin(item, server, &path, errors);

        if let Some(contents) = &item.container_contents {
            for (index, nested) in contents.iter().enumerate() {
                self.validate_slot(nested, server, path.child(index), errors);
            }
        }
    }

    fn validate_enchantments(
        &self,
        enchantments: &[Enchantment],
        server: &ServerId,
        path: &SlotPath,
        errors: &mut Vec<ValidationError>,
    ) {
        let push = |errors: &mut Vec<ValidationError>, issue: ValidationIssue| {
            errors.push(ValidationError {
                player: None,
                server: server.clone(),
                slot: path.clone(),
                issue,
            });
        };

        let mut seen: HashSet<&str> = HashSet::new();

        for enchantment in enchantments {
            let (kind, level) = match (enchantment.kind.as_deref(), enchantment.level) {
                (Some(kind), Some(level)) => (kind, level),
                _ => {
                    push(errors, ValidationIssue::InvalidEnchantment);
                    continue;
                }
            };

            let max = match registry::max_enchantment_level(kind) {
                Some(max) => max,
                None => {
                    push(
                        errors,
                        ValidationIssue::UnknownEnchantment {
                            kind: kind.to_string(),
                        },
                    );
                    continue;
                }
            };

            if level <= 0 || level > max {
                push(
                    errors,
                    ValidationIssue::InvalidLevel {
                        kind: kind.to_string(),
                        level,
                        max,
                    },
                );
            }

            if seen.contains(kind) {
                push(
                    errors,
                    ValidationIssue::DuplicateEnchantment {
                        kind: kind.to_string(),
                    },
                );
            }
            seen.insert(kind);

            for other in registry::incompatible_with(kind) {
                if seen.contains(other) {
                    push(
                        errors,
                        ValidationIssue::IncompatibleEnchantments {
                            first: kind.to_string(),
                            second: (*other).to_string(),
                        },
                    );
                }
            }
        }
    }

    fn validate_durability(
        &self,
        durability: &Durability,
        type_id: &str,
        server: &ServerId,
        path: &SlotPath,
        errors: &mut Vec<ValidationError>,
    ) {
        let push = |errors: &mut Vec<ValidationError>, issue: ValidationIssue| {
            errors.push(ValidationError {
                player: None,
                server: server.clone(),
                slot: path.clone(),
                issue,
            });
        };

        let (damage, max_durability) = (durability.damage, durability.max_durability);
        if damage.is_none() && max_durability.is_none() {
            return;
        }

        let damage = damage.unwrap_or(0);
        if damage < 0 {
            push(errors, ValidationIssue::NegativeDurability { damage });
        }

        if let Some(claimed) = max_durability {
            if let Some(expected) = registry::canonical_max_durability(type_id) {
                if claimed != expected {
                    push(
                        errors,
                        ValidationIssue::InvalidMaxDurability {
                            claimed,
                            expected,
                            type_id: type_id.to_string(),
                        },
                    );
                }
            }

            if damage > claimed {
                push(
                    errors,
                    ValidationIssue::DurabilityExceedsMax {
                        damage,
                        max: claimed,
                    },
                );
            }
        }
    }

    fn validate_origin(
        &self,
        item: &Item,
        server: &ServerId,
        path: &SlotPath,
        errors: &mut Vec<ValidationError>,
    ) {
        let issue = match item.origin() {
            None => Some(ValidationIssue::MissingOrigin),
            Some(origin) if origin != server.as_str() => Some(ValidationIssue::WrongOrigin {
                origin: origin.to_string(),
                server: server.clone(),
            }),
            Some(_) => None,
        };

        if let Some(issue) = issue {
            errors.push(ValidationError {
                player: None,
                server: server.clone(),
                slot: path.clone(),
                issue,
            });
        }
    }
}
