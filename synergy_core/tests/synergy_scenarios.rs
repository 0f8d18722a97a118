//! Scenario tests: register content -> fill inventories -> evaluate and query

use proptest::prelude::*;
use synergy_core::{
    evaluate, explain, normalize_name, Activation, ItemCategory, ItemId, ItemTable,
    InventoryTable, ParticipantId, Roster, SynergyQueries, SynergyRegistry, SynergySpec,
    SynergyTracker, SynergyTransition, Unmet,
};

const P0: ParticipantId = ParticipantId(0);
const P1: ParticipantId = ParticipantId(1);
const GHOST: ParticipantId = ParticipantId(9);

/// Four tools (1-4) and four auxiliary items (11-14)
fn catalog() -> ItemTable {
    ItemTable::new()
        .with_item(1, "elephant_gun", ItemCategory::Tool)
        .with_item(2, "makarov", ItemCategory::Tool)
        .with_item(3, "hegemony_rifle", ItemCategory::Tool)
        .with_item(4, "void_shotgun", ItemCategory::Tool)
        .with_item(11, "bullet_time", ItemCategory::Auxiliary)
        .with_item(12, "bomb", ItemCategory::Auxiliary)
        .with_item(13, "scope", ItemCategory::Auxiliary)
        .with_item(14, "honeycomb", ItemCategory::Auxiliary)
}

fn inventory(participant: ParticipantId, items: &[u32], wildcard: bool) -> InventoryTable {
    let mut table = InventoryTable::new();
    let inv = table.entry(participant);
    for id in items {
        inv.add(ItemId(*id));
    }
    inv.wildcard_tokens = u32::from(wildcard);
    table
}

#[test]
fn test_two_tools_with_equip_gate() {
    let mut registry = SynergyRegistry::new();
    let index = registry.register(
        &catalog(),
        SynergySpec::new("Double Barrel", ["elephant_gun", "makarov"])
            .active_when_tools_unequipped(false)
            .allow_wildcard(false),
    );
    let def = registry.get(index).unwrap();

    let mut inv = inventory(P0, &[1, 2], false);
    inv.entry(P0).wield_only(ItemId(1));
    assert_eq!(evaluate(def, &inv, P0), Activation::SatisfiedInactive);

    inv.entry(P0).equip(ItemId(2));
    assert_eq!(evaluate(def, &inv, P0), Activation::Active);
}

#[test]
fn test_pick_two_of_four() {
    let mut registry = SynergyRegistry::new();
    let index = registry.register(
        &catalog(),
        SynergySpec::new("Any Two", Vec::<u32>::new()).with_optional([1u32, 2, 11, 12]),
    );
    let def = registry.get(index).unwrap();

    assert!(evaluate(def, &inventory(P0, &[2, 12], false), P0).is_satisfied());
    assert!(evaluate(def, &inventory(P0, &[1, 11], false), P0).is_satisfied());
    assert_eq!(
        evaluate(def, &inventory(P0, &[2], false), P0),
        Activation::Inactive
    );
}

#[test]
fn test_four_of_eight_needs_both_categories() {
    let mut registry = SynergyRegistry::new();
    let index = registry.register(
        &catalog(),
        SynergySpec::new("Test Synergy 3", Vec::<u32>::new())
            .with_optional([1u32, 2, 3, 4, 11, 12, 13, 14])
            .with_quota(4)
            .require_one_from_each_category(true)
            .allow_wildcard(true)
            .suppress_presentation(true),
    );
    let def = registry.get(index).unwrap();

    // 3 tools + wildcard: quota reached, but no auxiliary item
    let report = explain(def, &inventory(P0, &[1, 2, 3], true), P0);
    assert_eq!(report.counted, 4);
    assert_eq!(report.activation, Activation::Inactive);
    assert_eq!(
        report.unmet,
        Some(Unmet::MissingCategory(ItemCategory::Auxiliary))
    );

    // 3 tools + 1 auxiliary: satisfied without substitution
    let report = explain(def, &inventory(P0, &[1, 2, 3, 13], false), P0);
    assert!(report.activation.is_satisfied());
    assert_eq!(report.substitution, None);

    // 2 tools + 1 auxiliary + wildcard also works
    assert!(evaluate(def, &inventory(P0, &[1, 2, 13], true), P0).is_satisfied());
}

#[test]
fn test_wildcard_forgives_one_of_two_missing_never() {
    let mut registry = SynergyRegistry::new();
    let index = registry.register(
        &catalog(),
        SynergySpec::new("Quad", [1u32, 2, 11, 12]).with_quota(4),
    );
    let def = registry.get(index).unwrap();

    assert!(evaluate(def, &inventory(P0, &[1, 2, 11], true), P0).is_satisfied());
    assert_eq!(
        evaluate(def, &inventory(P0, &[1, 2], true), P0),
        Activation::Inactive
    );
}

#[test]
fn test_wildcard_stand_in_satisfies_category_mix() {
    let mut registry = SynergyRegistry::new();
    let index = registry.register(
        &catalog(),
        SynergySpec::new("Field Kit", [1u32, 11])
            .with_optional([2u32])
            .with_quota(3)
            .require_one_from_each_category(true),
    );
    let def = registry.get(index).unwrap();

    // Auxiliary item 11 is covered by the token and keeps its category
    let report = explain(def, &inventory(P0, &[1, 2], true), P0);
    assert_eq!(report.counted, 3);
    assert_eq!(report.activation, Activation::Active);
    assert_eq!(
        evaluate(def, &inventory(P0, &[1, 2], false), P0),
        Activation::Inactive
    );
}

#[test]
fn test_unresolvable_mandatory_items_fall_back_to_optional_pool() {
    let mut registry = SynergyRegistry::new();
    let index = registry.register(
        &catalog(),
        SynergySpec::new("Ghost Gear", ["ghost_gun", "ghost_trinket"]).with_optional([1u32, 11]),
    );
    let def = registry.get(index).unwrap();
    assert!(def.pools().mandatory().next().is_none());
    assert!(evaluate(def, &inventory(P0, &[1, 11], false), P0).is_satisfied());
    assert!(!evaluate(def, &inventory(P0, &[1], false), P0).is_satisfied());
}

#[test]
fn test_count_active_sums_non_spectators() {
    let mut registry = SynergyRegistry::new();
    let catalog = catalog();
    let candidates = vec![
        registry.register(&catalog, SynergySpec::new("Blast", [1u32, 12])),
        registry.register(&catalog, SynergySpec::new("Focus", [3u32, 13])),
    ];

    let mut roster = Roster::new();
    let mut inv = InventoryTable::new();
    for (p, items) in [(P0, [1u32, 12]), (P1, [1, 12]), (GHOST, [1, 12])] {
        roster.join(p, p == GHOST);
        roster.set_candidates(p, candidates.clone());
        for id in items {
            inv.entry(p).add(ItemId(id));
        }
    }

    let queries = SynergyQueries::new(&registry, &inv, &roster);
    let per_participant: usize = [P0, P1]
        .iter()
        .map(|p| queries.count_active_for(*p, "Blast"))
        .sum();
    assert_eq!(queries.count_active("Blast"), per_participant);
    assert_eq!(queries.count_active("Blast"), 2);
    assert_eq!(queries.count_active("Focus"), 0);
    assert!(queries.is_active(GHOST, "Blast"));
}

#[test]
fn test_tracker_follows_pickups_and_reinitialization() {
    let catalog = catalog();
    let mut registry = SynergyRegistry::new();
    let index = registry.register(&catalog, SynergySpec::new("Blast", [1u32, 12]));

    let mut roster = Roster::new();
    roster.join(P0, false);
    roster.set_candidates(P0, vec![index]);

    let mut inv = InventoryTable::new();
    let mut tracker = SynergyTracker::new();
    let mut seen: Vec<SynergyTransition> = Vec::new();

    inv.entry(P0).add(ItemId(1));
    tracker.on_inventory_changed(&registry, &inv, &roster, P0, &mut seen);
    assert!(seen.is_empty());

    inv.entry(P0).add(ItemId(12));
    tracker.on_inventory_changed(&registry, &inv, &roster, P0, &mut seen);
    assert_eq!(seen.len(), 1);
    assert!(tracker.is_active(&registry, P0, "#BLAST"));

    // Stale candidates after a reset are ignored rather than failing
    registry.initialize();
    tracker.on_inventory_changed(&registry, &inv, &roster, P0, &mut seen);
    assert!(!tracker.is_active(&registry, P0, "Blast"));
    let queries = SynergyQueries::new(&registry, &inv, &roster);
    assert!(!queries.is_active(P0, "Blast"));
}

proptest! {
    #[test]
    fn test_normalize_name_is_idempotent(raw in "[ -~]{0,32}") {
        let key = normalize_name(&raw);
        prop_assert_eq!(normalize_name(key.as_str()), key);
    }

    #[test]
    fn test_non_positive_quota_never_satisfied(
        quota in -5i32..=0,
        owned in proptest::collection::vec(prop_oneof![1u32..=4, 11u32..=14], 0..8),
        wildcard in any::<bool>(),
    ) {
        let mut registry = SynergyRegistry::new();
        let index = registry.register(
            &catalog(),
            SynergySpec::new("Broken", Vec::<u32>::new())
                .with_optional([1u32, 2, 3, 4, 11, 12, 13, 14])
                .with_quota(quota),
        );
        let def = registry.get(index).unwrap();
        prop_assert_eq!(evaluate(def, &inventory(P0, &owned, wildcard), P0), Activation::Inactive);
    }

    #[test]
    fn test_unequipped_flag_makes_satisfied_active(
        owned in proptest::collection::vec(prop_oneof![1u32..=4, 11u32..=14], 0..8),
        wildcard in any::<bool>(),
    ) {
        let mut registry = SynergyRegistry::new();
        let index = registry.register(
            &catalog(),
            SynergySpec::new("Loose", [1u32])
                .with_optional([2u32, 3, 11, 12])
                .with_quota(3),
        );
        let def = registry.get(index).unwrap();
        let activation = evaluate(def, &inventory(P0, &owned, wildcard), P0);
        prop_assert_eq!(activation.is_satisfied(), activation.is_active());
    }

    #[test]
    fn test_wildcard_never_covers_two_missing_mandatory(
        extra in proptest::collection::vec(11u32..=14, 0..4),
    ) {
        let mut registry = SynergyRegistry::new();
        let index = registry.register(
            &catalog(),
            SynergySpec::new("Heavy", [1u32, 2, 3])
                .with_optional([11u32, 12, 13, 14])
                .with_quota(3),
        );
        let def = registry.get(index).unwrap();
        // Owns tool 1 only: tools 2 and 3 are both missing
        let mut owned = vec![1u32];
        owned.extend(extra);
        prop_assert_eq!(evaluate(def, &inventory(P0, &owned, true), P0), Activation::Inactive);
    }
}
