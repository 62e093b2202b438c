//! Card catalog.
//!
//! The `Catalog` holds every card served by the external card source,
//! in source order, plus the list of known sets. Cards are stored behind
//! `Arc` so decks can share them without copying.
//!
//! Loading is the only fallible operation in the crate; everything after
//! that works on the in-memory list.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::definition::Card;
use super::ingest::RawCardRecord;
use crate::filter::{facet_options, filter_cards, Facet, FacetOption, FacetSelection};

/// Errors raised while loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// A card set (expansion).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    pub set_id: String,
    pub set_name: Option<String>,
}

/// Ordered, read-only collection of catalog cards.
///
/// ## Example
///
/// ```
/// use optcg_deck::cards::Catalog;
///
/// let catalog = Catalog::from_json(r#"[
///     {"card_set_id": "OP01-001", "card_name": "Roronoa Zoro", "card_type": "Leader"},
///     {"card_set_id": "OP01-016", "card_name": "Nami", "card_type": "Character"}
/// ]"#).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get("OP01-016").unwrap().name.as_deref(), Some("Nami"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Arc<Card>>,
    index: FxHashMap<String, usize>,
    sets: Vec<CardSet>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-typed cards.
    ///
    /// A card whose identifier was seen before replaces the earlier one
    /// in place.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut catalog = Self::new();
        for card in cards {
            catalog.insert(card);
        }
        catalog
    }

    /// Build from raw upstream records, normalizing each one.
    ///
    /// Records without an identifier are skipped.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = RawCardRecord>) -> Self {
        let mut catalog = Self::new();
        for (position, record) in records.into_iter().enumerate() {
            match record.normalize() {
                Some(card) => catalog.insert(card),
                None => tracing::warn!(position, "catalog.record_skipped_missing_id"),
            }
        }
        tracing::info!(cards = catalog.len(), "catalog.loaded");
        catalog
    }

    /// Decode a JSON array of upstream records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<RawCardRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Decode a JSON array of upstream records from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let records: Vec<RawCardRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    /// Load a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Attach the set list.
    #[must_use]
    pub fn with_sets(mut self, sets: Vec<CardSet>) -> Self {
        tracing::info!(sets = sets.len(), "catalog.sets_loaded");
        self.sets = sets;
        self
    }

    /// Decode a JSON array of sets and attach it.
    pub fn with_sets_json(self, json: &str) -> Result<Self, CatalogError> {
        let sets: Vec<CardSet> = serde_json::from_str(json)?;
        Ok(self.with_sets(sets))
    }

    fn insert(&mut self, card: Card) {
        match self.index.get(&card.id) {
            Some(&slot) => {
                tracing::warn!(card_id = %card.id, "catalog.record_replaced");
                self.cards[slot] = Arc::new(card);
            }
            None => {
                self.index.insert(card.id.clone(), self.cards.len());
                self.cards.push(Arc::new(card));
            }
        }
    }

    /// Look up a card by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<Card>> {
        self.index.get(id).map(|&slot| &self.cards[slot])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in source order.
    #[must_use]
    pub fn cards(&self) -> &[Arc<Card>] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.iter()
    }

    #[must_use]
    pub fn sets(&self) -> &[CardSet] {
        &self.sets
    }

    /// Display name of a set, if known.
    #[must_use]
    pub fn set_name(&self, set_id: &str) -> Option<&str> {
        self.sets
            .iter()
            .find(|s| s.set_id == set_id)
            .and_then(|s| s.set_name.as_deref())
    }

    /// Cards matching a search query and facet selection, in source order.
    #[must_use]
    pub fn filter(&self, query: &str, facets: &FacetSelection) -> Vec<&Arc<Card>> {
        filter_cards(&self.cards, query, facets)
    }

    /// Selectable options for a facet. Set options are labelled with the
    /// set name when one is known.
    #[must_use]
    pub fn facet_options(&self, facet: Facet) -> Vec<FacetOption> {
        let mut options = facet_options(&self.cards, facet);
        if facet == Facet::Set {
            for option in &mut options {
                if let Some(name) = self.set_name(&option.value) {
                    option.label = name.to_string();
                }
            }
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    #[test]
    fn test_from_cards_and_lookup() {
        let catalog = Catalog::from_cards(vec![
            Card::new("OP01-001", "Zoro", CardType::Leader),
            Card::new("OP01-016", "Nami", CardType::Character),
        ]);

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("OP01-001"));
        assert!(!catalog.contains("OP99-999"));
        assert!(catalog.get("OP99-999").is_none());
        assert_eq!(catalog.cards()[1].id, "OP01-016");
    }

    #[test]
    fn test_duplicate_id_replaces_in_place() {
        let catalog = Catalog::from_cards(vec![
            Card::new("A", "First", CardType::Character),
            Card::new("B", "Other", CardType::Character),
            Card::new("A", "Second", CardType::Character),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.cards()[0].name.as_deref(), Some("Second"));
        assert_eq!(catalog.cards()[1].id, "B");
    }

    #[test]
    fn test_from_json_skips_records_without_id() {
        let catalog = Catalog::from_json(
            r#"[{"card_set_id": "A", "card_type": "Event"}, {"card_name": "ghost"}]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = Catalog::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_set_names() {
        let catalog = Catalog::from_cards(vec![
            Card::new("OP01-001", "Zoro", CardType::Leader).with_set("OP01"),
            Card::new("ST01-001", "Luffy", CardType::Leader).with_set("ST01"),
        ])
        .with_sets_json(r#"[{"set_id": "OP01", "set_name": "Romance Dawn"}]"#)
        .unwrap();

        assert_eq!(catalog.set_name("OP01"), Some("Romance Dawn"));
        assert_eq!(catalog.set_name("ST01"), None);

        let options = catalog.facet_options(Facet::Set);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "OP01");
        assert_eq!(options[0].label, "Romance Dawn");
        assert_eq!(options[1].label, "ST01");
    }
}
