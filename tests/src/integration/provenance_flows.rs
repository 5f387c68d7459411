//! # Provenance Integration Flows
//!
//! cv-01-item-model and cv-02-provenance working together: stamping an
//! unmarked save, validating the result, and cascading a ban through the
//! same payload.

#[cfg(test)]
mod tests {
    use cv_01_item_model::stamp::stamp_inventory;
    use cv_02_provenance::cascade::clean_inventory;
    use cv_02_provenance::validation::ValidationIssue;
    use cv_02_provenance::validator::ItemValidator;
    use serde_json::{json, Value};

    fn unmarked_save() -> Vec<u8> {
        serde_json::to_vec(&json!([
            {"typeId": "minecraft:diamond_sword", "amount": 1},
            null,
            {
                "typeId": "minecraft:shulker_box",
                "amount": 1,
                "shulker_contents": [
                    {"typeId": "minecraft:ender_pearl", "amount": 16}
                ]
            }
        ]))
        .unwrap()
    }

    #[test]
    fn stamped_save_passes_origin_validation() {
        let server = "srv1".to_string();
        let player = "alice".to_string();
        let validator = ItemValidator::new();

        // Fresh from the game server: no origin tags yet.
        let errors = validator.validate_inventory(&unmarked_save(), &server, &player);
        assert!(errors
            .iter()
            .any(|e| e.issue == ValidationIssue::MissingOrigin));

        let (stamped, changed) = stamp_inventory(&unmarked_save(), &server);
        assert!(changed);

        let errors = validator.validate_inventory(&stamped, &server, &player);
        assert!(errors.is_empty(), "unexpected: {:?}", errors);
    }

    #[test]
    fn stamping_is_idempotent() {
        let (once, _) = stamp_inventory(&unmarked_save(), "srv1");
        let (twice, changed) = stamp_inventory(&once, "srv1");
        assert!(!changed);
        assert_eq!(once, twice);
    }

    #[test]
    fn stamping_respects_existing_origins() {
        let save = serde_json::to_vec(&json!([
            {"typeId": "minecraft:diamond", "amount": 1, "lore": ["Origin: srv2"]}
        ]))
        .unwrap();

        let (stamped, changed) = stamp_inventory(&save, "srv1");
        assert!(!changed);
        assert_eq!(stamped, save);
    }

    #[test]
    fn validation_flags_exactly_what_the_cascade_removes() {
        let server = "srv2".to_string();
        let player = "bob".to_string();
        let mixed = serde_json::to_vec(&json!([
            {"typeId": "minecraft:diamond", "amount": 1, "lore": ["Origin: srv1"]},
            {"typeId": "minecraft:bread", "amount": 1, "lore": ["Origin: srv2"]}
        ]))
        .unwrap();

        // srv2 presenting srv1's diamond is a provenance violation.
        let errors = ItemValidator::new().validate_inventory(&mixed, &server, &player);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].slot.to_string(), "0");
        assert!(matches!(errors[0].issue, ValidationIssue::WrongOrigin { .. }));

        // Banning srv1 removes that same slot and nothing else.
        let (cleaned, changed) = clean_inventory(&mixed, "srv1");
        assert!(changed);
        let slots: Vec<Value> = serde_json::from_slice(&cleaned).unwrap();
        assert!(slots[0].is_null());
        assert_eq!(slots[1]["typeId"], "minecraft:bread");
    }

    #[test]
    fn modded_fields_survive_stamp_and_cascade() {
        let save = serde_json::to_vec(&json!([
            {
                "typeId": "modpack:backpack",
                "amount": 1,
                "customPaint": "crimson",
                "shulker_contents": [
                    {"typeId": "minecraft:diamond", "amount": 1, "lore": ["Origin: srv1"]}
                ]
            }
        ]))
        .unwrap();

        let (stamped, _) = stamp_inventory(&save, "srv2");
        let (cleaned, changed) = clean_inventory(&stamped, "srv1");
        assert!(changed);

        let slots: Vec<Value> = serde_json::from_slice(&cleaned).unwrap();
        assert_eq!(slots[0]["customPaint"], json!("crimson"));
        assert!(slots[0]["shulker_contents"][0].is_null());
    }
}
