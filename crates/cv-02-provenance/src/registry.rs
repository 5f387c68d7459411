//! Known game rules: stack limits, enchantment levels and exclusions,
//! canonical durability.
//!
//! The tables are deliberately closed over the vanilla item set. Unknown
//! item types fall back to the default stack limit and skip the canonical
//! durability check, so modded content stays forward-compatible; unknown
//! enchantments are rejected outright because they are the cheapest thing
//! for a cheating server to fabricate.

use shared_types::DEFAULT_MAX_STACK;

/// Maximum legal stack size for an item type.
///
/// Unknown types default to [`DEFAULT_MAX_STACK`].
pub fn max_stack_size(type_id: &str) -> i64 {
    match type_id {
        // Tools, weapons, and armor never stack.
        "minecraft:diamond_sword"
        | "minecraft:iron_sword"
        | "minecraft:golden_sword"
        | "minecraft:wooden_sword"
        | "minecraft:stone_sword"
        | "minecraft:netherite_sword"
        | "minecraft:diamond_pickaxe"
        | "minecraft:iron_pickaxe"
        | "minecraft:golden_pickaxe"
        | "minecraft:wooden_pickaxe"
        | "minecraft:stone_pickaxe"
        | "minecraft:netherite_pickaxe"
        | "minecraft:diamond_axe"
        | "minecraft:iron_axe"
        | "minecraft:golden_axe"
        | "minecraft:wooden_axe"
        | "minecraft:stone_axe"
        | "minecraft:netherite_axe"
        | "minecraft:diamond_shovel"
        | "minecraft:iron_shovel"
        | "minecraft:golden_shovel"
        | "minecraft:wooden_shovel"
        | "minecraft:stone_shovel"
        | "minecraft:netherite_shovel"
        | "minecraft:diamond_hoe"
        | "minecraft:iron_hoe"
        | "minecraft:golden_hoe"
        | "minecraft:wooden_hoe"
        | "minecraft:stone_hoe"
        | "minecraft:netherite_hoe"
        | "minecraft:netherite_helmet"
        | "minecraft:netherite_chestplate"
        | "minecraft:netherite_leggings"
        | "minecraft:netherite_boots"
        | "minecraft:bow"
        | "minecraft:crossbow"
        | "minecraft:shield"
        | "minecraft:water_bucket"
        | "minecraft:lava_bucket"
        | "minecraft:milk_bucket"
        | "minecraft:potion"
        | "minecraft:splash_potion"
        | "minecraft:lingering_potion" => 1,

        // Small stacks.
        "minecraft:bucket"
        | "minecraft:ender_pearl"
        | "minecraft:snowball"
        | "minecraft:egg" => 16,

        // Full stacks, listed for documentation value.
        "minecraft:diamond"
        | "minecraft:iron_ingot"
        | "minecraft:gold_ingot"
        | "minecraft:netherite_ingot"
        | "minecraft:netherite_scrap"
        | "minecraft:coal"
        | "minecraft:bread"
        | "minecraft:apple" => 64,

        _ => DEFAULT_MAX_STACK,
    }
}

/// Maximum level for a known enchantment, or `None` if unrecognized.
pub fn max_enchantment_level(kind: &str) -> Option<i64> {
    let max = match kind {
        "minecraft:sharpness"
        | "minecraft:smite"
        | "minecraft:bane_of_arthropods"
        | "minecraft:efficiency"
        | "minecraft:power"
        | "minecraft:impaling" => 5,

        "minecraft:knockback"
        | "minecraft:fire_aspect"
        | "minecraft:punch"
        | "minecraft:frost_walker" => 2,

        "minecraft:looting"
        | "minecraft:sweeping"
        | "minecraft:unbreaking"
        | "minecraft:fortune"
        | "minecraft:luck_of_the_sea"
        | "minecraft:lure"
        | "minecraft:loyalty"
        | "minecraft:riptide"
        | "minecraft:quick_charge"
        | "minecraft:respiration"
        | "minecraft:thorns"
        | "minecraft:depth_strider"
        | "minecraft:soul_speed"
        | "minecraft:swift_sneak" => 3,

        "minecraft:protection"
        | "minecraft:fire_protection"
        | "minecraft:feather_falling"
        | "minecraft:blast_protection"
        | "minecraft:projectile_protection"
        | "minecraft:piercing" => 4,

        "minecraft:silk_touch"
        | "minecraft:flame"
        | "minecraft:infinity"
        | "minecraft:channeling"
        | "minecraft:multishot"
        | "minecraft:mending"
        | "minecraft:aqua_affinity" => 1,

        _ => return None,
    };
    Some(max)
}

/// Enchantments that may not coexist with `kind` on the same item.
pub fn incompatible_with(kind: &str) -> &'static [&'static str] {
    match kind {
        "minecraft:sharpness" => &["minecraft:smite", "minecraft:bane_of_arthropods"],
        "minecraft:smite" => &["minecraft:sharpness", "minecraft:bane_of_arthropods"],
        "minecraft:bane_of_arthropods" => &["minecraft:sharpness", "minecraft:smite"],
        "minecraft:silk_touch" => &["minecraft:fortune"],
        "minecraft:fortune" => &["minecraft:silk_touch"],
        "minecraft:infinity" => &["minecraft:mending"],
        "minecraft:mending" => &["minecraft:infinity"],
        "minecraft:loyalty" => &["minecraft:riptide"],
        "minecraft:riptide" => &["minecraft:loyalty"],
        "minecraft:multishot" => &["minecraft:piercing"],
        "minecraft:piercing" => &["minecraft:multishot"],
        "minecraft:protection" => &[
            "minecraft:fire_protection",
            "minecraft:blast_protection",
            "minecraft:projectile_protection",
        ],
        "minecraft:fire_protection" => &[
            "minecraft:protection",
            "minecraft:blast_protection",
            "minecraft:projectile_protection",
        ],
        "minecraft:blast_protection" => &[
            "minecraft:protection",
            "minecraft:fire_protection",
            "minecraft:projectile_protection",
        ],
        "minecraft:projectile_protection" => &[
            "minecraft:protection",
            "minecraft:fire_protection",
            "minecraft:blast_protection",
        ],
        "minecraft:depth_strider" => &["minecraft:frost_walker"],
        "minecraft:frost_walker" => &["minecraft:depth_strider"],
        _ => &[],
    }
}

/// Canonical maximum durability for a known damageable type.
///
/// `None` means the type is unrecognized and the canonical check is
/// skipped (forward compatibility with modded content).
pub fn canonical_max_durability(type_id: &str) -> Option<i64> {
    let max = match type_id {
        "minecraft:diamond_sword"
        | "minecraft:diamond_pickaxe"
        | "minecraft:diamond_axe"
        | "minecraft:diamond_shovel"
        | "minecraft:diamond_hoe" => 1561,

        "minecraft:iron_sword"
        | "minecraft:iron_pickaxe"
        | "minecraft:iron_axe"
        | "minecraft:iron_shovel"
        | "minecraft:iron_hoe" => 250,

        "minecraft:golden_sword"
        | "minecraft:golden_pickaxe"
        | "minecraft:golden_axe"
        | "minecraft:golden_shovel"
        | "minecraft:golden_hoe" => 32,

        "minecraft:wooden_sword"
        | "minecraft:wooden_pickaxe"
        | "minecraft:wooden_axe"
        | "minecraft:wooden_shovel"
        | "minecraft:wooden_hoe" => 59,

        "minecraft:stone_sword"
        | "minecraft:stone_pickaxe"
        | "minecraft:stone_axe"
        | "minecraft:stone_shovel"
        | "minecraft:stone_hoe" => 131,

        "minecraft:netherite_sword"
        | "minecraft:netherite_pickaxe"
        | "minecraft:netherite_axe"
        | "minecraft:netherite_shovel"
        | "minecraft:netherite_hoe" => 2031,

        "minecraft:diamond_helmet" => 363,
        "minecraft:diamond_chestplate" => 528,
        "minecraft:diamond_leggings" => 495,
        "minecraft:diamond_boots" => 429,

        "minecraft:iron_helmet" => 165,
        "minecraft:iron_chestplate" => 240,
        "minecraft:iron_leggings" => 225,
        "minecraft:iron_boots" => 195,

        "minecraft:netherite_helmet" => 407,
        "minecraft:netherite_chestplate" => 592,
        "minecraft:netherite_leggings" => 555,
        "minecraft:netherite_boots" => 481,

        "minecraft:bow" => 384,
        "minecraft:crossbow" => 326,
        "minecraft:shield" => 336,

        _ => return None,
    };
    Some(max)
}
