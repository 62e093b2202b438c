//! Deck statistics.
//!
//! Four frequency tables over the non-Leader part of a deck: counter
//! value, cost, color and type. Every physical copy counts once. A card
//! missing a value is left out of that one table only.
//!
//! Tables are `BTreeMap`s so iteration order is display order: counters
//! and costs ascend (with "No Cost" first), colors and types are
//! alphabetical.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Cost};
use crate::deck::Deck;

/// Frequency tables for a deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStats {
    /// Copies per counter amount.
    pub counter: BTreeMap<i64, usize>,
    /// Copies per cost. `Cost::NoCost` displays as "No Cost".
    pub cost: BTreeMap<Cost, usize>,
    /// Copies per color.
    pub color: BTreeMap<String, usize>,
    /// Copies per card type.
    pub card_type: BTreeMap<String, usize>,
    /// Non-Leader cards seen.
    pub main_deck: usize,
}

impl DeckStats {
    /// Aggregate over any sequence of cards. Leaders are skipped.
    #[must_use]
    pub fn from_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        let mut stats = Self::default();
        for card in cards.into_iter().filter(|c| !c.is_leader()) {
            stats.main_deck += 1;

            if let Some(counter) = card.counter {
                *stats.counter.entry(counter).or_default() += 1;
            }
            if let Some(cost) = card.cost {
                *stats.cost.entry(cost).or_default() += 1;
            }
            if let Some(color) = card.color.as_deref().filter(|c| !c.is_empty()) {
                *stats.color.entry(color.to_string()).or_default() += 1;
            }
            if let Some(card_type) = card.type_name().filter(|t| !t.is_empty()) {
                *stats.card_type.entry(card_type.to_string()).or_default() += 1;
            }
        }
        stats
    }

    /// No non-Leader card contributed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main_deck == 0
    }

    /// Cost table with display labels, in display order.
    #[must_use]
    pub fn cost_labels(&self) -> Vec<(String, usize)> {
        self.cost
            .iter()
            .map(|(cost, count)| (cost.to_string(), *count))
            .collect()
    }
}

/// Statistics for the current deck.
#[must_use]
pub fn aggregate(deck: &Deck) -> DeckStats {
    DeckStats::from_cards(deck.cards())
}
