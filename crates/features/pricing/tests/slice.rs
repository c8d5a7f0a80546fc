use dh_pricing::{Pricing, PricingError, TIERS, TierDefinition, init, init_with};
use std::any::TypeId;

fn table(picks: &[usize]) -> &'static [TierDefinition] {
    picks.iter().map(|&i| TIERS[i]).collect::<Vec<_>>().leak()
}

#[test]
fn init_creates_slice() {
    let slice = init().expect("init should succeed");
    assert_eq!(slice.id, TypeId::of::<Pricing>());

    let pricing = slice.downcast_ref::<Pricing>().expect("pricing slice");
    assert_eq!(pricing.tiers.len(), 3);
}

#[test]
fn slice_resolves_its_own_table() {
    let slice = init_with(table(&[2, 0, 1])).expect("valid table");
    let pricing = slice.downcast_ref::<Pricing>().expect("pricing slice");

    let catalog = pricing.resolve(None);
    let ids: Vec<&str> = catalog.tiers.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["enterprise", "starter", "professional"]);
    assert!(catalog.tiers[2].highlighted);
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = init_with(table(&[1, 1])).expect_err("duplicate ids");
    assert!(matches!(err, PricingError::InvalidTiers { .. }));
    assert!(err.to_string().contains("professional"));
    assert!(err.to_string().contains("(Validating tier table)"));
}

#[test]
fn missing_recommended_tier_is_rejected() {
    let err = init_with(table(&[0, 2])).expect_err("no professional tier");
    assert!(matches!(err, PricingError::InvalidTiers { .. }));
}
