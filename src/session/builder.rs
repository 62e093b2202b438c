//! Deck builder session.
//!
//! A session ties one catalog to one deck, one facet selection and one
//! search query. It owns all of them exclusively: there is nothing to lock
//! and nothing outlives the session.

use std::sync::Arc;

use crate::cards::{Card, Catalog};
use crate::core::DeckRules;
use crate::deck::{AddOutcome, Deck, DeckEntry, DeckGroup, DeckSummary, Rejection};
use crate::filter::{Facet, FacetOption, FacetSelection};
use crate::stats::{aggregate, DeckStats};

/// State of one deck-building session.
///
/// ## Example
///
/// ```
/// use optcg_deck::cards::Catalog;
/// use optcg_deck::session::DeckBuilderSession;
///
/// let catalog = Catalog::from_json(r#"[
///     {"card_set_id": "OP01-001", "card_name": "Roronoa Zoro", "card_type": "Leader"},
///     {"card_set_id": "OP01-016", "card_name": "Nami", "card_type": "Character", "card_cost": 1}
/// ]"#).unwrap();
///
/// let mut session = DeckBuilderSession::new(catalog);
/// session.set_query("nami");
/// assert_eq!(session.visible_cards().len(), 1);
///
/// assert!(session.add_card("OP01-016").is_accepted());
/// assert_eq!(session.summary().main_deck, 1);
/// ```
#[derive(Clone, Debug)]
pub struct DeckBuilderSession {
    catalog: Catalog,
    deck: Deck,
    facets: FacetSelection,
    query: String,
}

impl DeckBuilderSession {
    /// Start a session with an empty deck under the standard rules.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rules(catalog, DeckRules::default())
    }

    #[must_use]
    pub fn with_rules(catalog: Catalog, rules: DeckRules) -> Self {
        Self {
            catalog,
            deck: Deck::with_rules(rules),
            facets: FacetSelection::new(),
            query: String::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[must_use]
    pub fn facets(&self) -> &FacetSelection {
        &self.facets
    }

    pub fn facets_mut(&mut self) -> &mut FacetSelection {
        &mut self.facets
    }

    /// Options to offer for a facet.
    #[must_use]
    pub fn facet_options(&self, facet: Facet) -> Vec<FacetOption> {
        self.catalog.facet_options(facet)
    }

    /// Catalog cards passing the current query and facets.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<&Arc<Card>> {
        self.catalog.filter(&self.query, &self.facets)
    }

    /// Add a catalog card to the deck by identifier.
    pub fn add_card(&mut self, card_id: &str) -> AddOutcome {
        match self.catalog.get(card_id) {
            Some(card) => self.deck.try_add(Arc::clone(card)),
            None => {
                tracing::debug!(card_id, "session.unknown_card");
                AddOutcome::Rejected(Rejection::UnknownCard(card_id.to_string()))
            }
        }
    }

    /// Remove the earliest copy of a card from the deck.
    pub fn remove_card(&mut self, card_id: &str) -> Option<DeckEntry> {
        self.deck.remove_one(card_id)
    }

    pub fn clear_deck(&mut self) {
        self.deck.clear();
    }

    #[must_use]
    pub fn grouped_deck(&self) -> Vec<DeckGroup> {
        self.deck.groups()
    }

    #[must_use]
    pub fn stats(&self) -> DeckStats {
        aggregate(&self.deck)
    }

    #[must_use]
    pub fn summary(&self) -> DeckSummary {
        self.deck.summary()
    }
}
