//! Catalog loading and filtering tests.
//!
//! These tests load the fixture catalog the way the external card source
//! serves it and check:
//! - Record normalization (aliases, sentinels, missing text)
//! - Free-text search with `++` terms
//! - Facet filtering and facet options

use optcg_deck::cards::{Catalog, Cost, Power, NO_EFFECT_TEXT};
use optcg_deck::filter::{Facet, FacetSelection};

const CATALOG: &str = include_str!("fixtures/catalog.json");
const SETS: &str = include_str!("fixtures/sets.json");

fn catalog() -> Catalog {
    Catalog::from_json(CATALOG)
        .and_then(|c| c.with_sets_json(SETS))
        .expect("fixture catalog should load")
}

fn ids(cards: &[&std::sync::Arc<optcg_deck::Card>]) -> Vec<String> {
    cards.iter().map(|c| c.id.clone()).collect()
}

/// Records without an identifier are dropped, the rest keep source order.
#[test]
fn test_load_fixture() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog.cards()[0].id, "OP01-001");
    assert_eq!(catalog.cards()[6].id, "OP02-004");
    assert_eq!(catalog.sets().len(), 2);
}

/// Upstream quirks are normalized on load.
#[test]
fn test_normalization() {
    let catalog = catalog();

    let zoro = catalog.get("OP01-001").unwrap();
    assert_eq!(zoro.cost, Some(Cost::NoCost));

    let newgate = catalog.get("OP02-004").unwrap();
    assert_eq!(newgate.cost, Some(Cost::NoCost));

    let beam = catalog.get("OP01-029").unwrap();
    assert_eq!(beam.power, Some(Power::NoPower));
    assert!(beam.text.as_deref().unwrap().starts_with("[Counter]"));

    let mihawk = catalog.get("OP01-070").unwrap();
    assert_eq!(mihawk.text.as_deref(), Some(NO_EFFECT_TEXT));

    let ship = catalog.get("OP02-022").unwrap();
    assert_eq!(ship.cost, Some(Cost::Value(1)));
    assert_eq!(ship.power, Some(Power::NoPower));
    assert_eq!(ship.image.as_deref(), Some("https://img.example/OP02-022.png"));
}

/// No query and no facets returns the catalog unchanged.
#[test]
fn test_empty_filter_is_identity() {
    let catalog = catalog();
    let visible = catalog.filter("", &FacetSelection::new());
    let all: Vec<String> = catalog.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids(&visible), all);
}

/// Whitespace-only queries behave like empty ones.
#[test]
fn test_whitespace_query() {
    let catalog = catalog();
    assert_eq!(catalog.filter("   ", &FacetSelection::new()).len(), 7);
}

#[test]
fn test_single_term_is_case_insensitive() {
    let catalog = catalog();
    let visible = catalog.filter("ZORO", &FacetSelection::new());
    assert_eq!(ids(&visible), vec!["OP01-001", "OP01-025"]);
}

/// Both `++` terms must match.
#[test]
fn test_two_term_query() {
    let catalog = catalog();
    let visible = catalog.filter("zoro ++ rush", &FacetSelection::new());
    assert_eq!(ids(&visible), vec!["OP01-025"]);

    let visible = catalog.filter("zoro++green", &FacetSelection::new());
    assert!(visible.is_empty());
}

/// Rules text and numbers are part of the searchable text.
#[test]
fn test_search_text_and_numbers() {
    let catalog = catalog();
    assert_eq!(
        ids(&catalog.filter("[counter]", &FacetSelection::new())),
        vec!["OP01-029"]
    );
    assert_eq!(
        ids(&catalog.filter("9000", &FacetSelection::new())),
        vec!["OP01-070"]
    );
}

/// Facets AND together; values in one facet OR together.
#[test]
fn test_facets() {
    let catalog = catalog();

    let characters = FacetSelection::new()
        .with(Facet::Type, "Character")
        .with(Facet::Type, "Event");
    assert_eq!(catalog.filter("", &characters).len(), 4);

    let cheap_red = characters
        .clone()
        .with(Facet::Color, "Red")
        .with(Facet::Cost, "1");
    assert_eq!(
        ids(&catalog.filter("", &cheap_red)),
        vec!["OP01-016", "OP01-029"]
    );

    let leaders = FacetSelection::new().with(Facet::Cost, "-2");
    assert_eq!(
        ids(&catalog.filter("", &leaders)),
        vec!["OP01-001", "OP02-004"]
    );

    let no_power = FacetSelection::new().with(Facet::Power, "-1");
    assert_eq!(
        ids(&catalog.filter("", &no_power)),
        vec!["OP01-029", "OP02-022"]
    );
}

/// Cards without a counter never match a counter facet.
#[test]
fn test_counter_facet_excludes_missing() {
    let catalog = catalog();
    let selection = FacetSelection::new().with(Facet::Counter, "1000");
    assert_eq!(ids(&catalog.filter("", &selection)), vec!["OP01-016"]);
}

#[test]
fn test_query_and_facets_together() {
    let catalog = catalog();
    let selection = FacetSelection::new().with(Facet::Set, "OP01");
    assert_eq!(
        ids(&catalog.filter("straw hat", &selection)),
        Vec::<String>::new()
    );
    assert_eq!(
        ids(&catalog.filter("on play", &selection)),
        vec!["OP01-016"]
    );
}

#[test]
fn test_facet_options() {
    let catalog = catalog();

    let costs: Vec<(String, String)> = catalog
        .facet_options(Facet::Cost)
        .into_iter()
        .map(|o| (o.value, o.label))
        .collect();
    assert_eq!(
        costs,
        vec![
            ("-2".to_string(), "No Cost".to_string()),
            ("1".to_string(), "1".to_string()),
            ("3".to_string(), "3".to_string()),
            ("9".to_string(), "9".to_string()),
        ]
    );

    let sets: Vec<String> = catalog
        .facet_options(Facet::Set)
        .into_iter()
        .map(|o| o.label)
        .collect();
    assert_eq!(sets, vec!["Romance Dawn", "Paramount War"]);

    let colors: Vec<String> = catalog
        .facet_options(Facet::Color)
        .into_iter()
        .map(|o| o.value)
        .collect();
    assert_eq!(colors, vec!["Green", "Red"]);
}
