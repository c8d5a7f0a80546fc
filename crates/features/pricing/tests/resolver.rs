use dh_pricing::{CURRENCY, DISCLAIMER, PricingCatalog, TIERS, resolve};
use proptest::prelude::*;

const ORDER: [&str; 3] = ["starter", "professional", "enterprise"];

fn ids(catalog: &PricingCatalog) -> Vec<&str> {
    catalog.tiers.iter().map(|tier| tier.id.as_str()).collect()
}

fn highlighted_ids(catalog: &PricingCatalog) -> Vec<&str> {
    catalog.highlighted().map(|tier| tier.id.as_str()).collect()
}

#[test]
fn default_catalog_highlights_professional_only() {
    let catalog = resolve(None);

    assert_eq!(highlighted_ids(&catalog), ["professional"]);
    assert!(!catalog.tier("starter").expect("starter").highlighted);
    assert!(!catalog.tier("enterprise").expect("enterprise").highlighted);
}

#[test]
fn purple_keeps_static_defaults() {
    let catalog = resolve(Some("purple"));

    for (tier, def) in catalog.tiers.iter().zip(TIERS.iter()) {
        assert_eq!(tier.highlighted, def.highlighted, "tier {}", tier.id);
    }
    assert!(catalog.tier("professional").expect("professional").highlighted);
    assert_eq!(highlighted_ids(&catalog), ["professional"]);
}

#[test]
fn catalog_shape_is_fixed() {
    for theme in [None, Some("purple"), Some("dark"), Some("")] {
        let catalog = resolve(theme);
        assert_eq!(ids(&catalog), ORDER);
        assert_eq!(catalog.currency, "USD");
        assert_eq!(catalog.currency, CURRENCY);
        assert_eq!(catalog.disclaimer, DISCLAIMER);
    }
}

#[test]
fn tiers_carry_static_content() {
    let catalog = resolve(None);
    let starter = catalog.tier("starter").expect("starter");
    assert_eq!(starter.name, "Web Design");
    assert_eq!(starter.price, 1999);
    assert_eq!(starter.period, "one-time");
    assert_eq!(starter.cta, "Get Started");
    assert_eq!(starter.features.len(), 5);

    let enterprise = catalog.tier("enterprise").expect("enterprise");
    assert_eq!(enterprise.price, 997);
    assert_eq!(enterprise.period, "month");
    assert_eq!(enterprise.features.first().map(String::as_str), Some("24/7 AI Sales Agent"));
}

#[test]
fn results_are_independent_copies() {
    let mut first = resolve(None);
    let second = resolve(None);

    first.tiers.clear();
    first.currency.push_str("-mutated");

    let third = resolve(None);
    assert_eq!(second.tiers.len(), 3);
    assert_eq!(second, third);
    assert_eq!(third.currency, "USD");
}

#[test]
fn serializes_to_the_public_shape() {
    let value = serde_json::to_value(resolve(None)).expect("serialize");

    assert_eq!(value["currency"], "USD");
    let tiers = value["tiers"].as_array().expect("tiers array");
    assert_eq!(tiers.len(), 3);

    let professional = &tiers[1];
    assert_eq!(professional["id"], "professional");
    assert_eq!(professional["price"], 3999);
    assert_eq!(professional["highlighted"], true);
    assert_eq!(tiers[0]["highlighted"], false);

    let keys: Vec<&str> =
        professional.as_object().expect("object").keys().map(String::as_str).collect();
    for key in ["id", "name", "price", "period", "features", "cta", "highlighted"] {
        assert!(keys.contains(&key), "missing {key}");
    }
}

proptest! {
    #[test]
    fn any_non_purple_theme_highlights_professional_only(theme in ".*") {
        prop_assume!(theme != "purple");
        let catalog = resolve(Some(&theme));
        prop_assert_eq!(highlighted_ids(&catalog), vec!["professional"]);
        prop_assert_eq!(ids(&catalog), ORDER.to_vec());
    }
}
