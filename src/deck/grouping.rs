//! Grouped deck view.
//!
//! The deck list shows one tile per distinct card with a copy count.
//! Groups appear in first-appearance order, except that the Leader group
//! always comes first.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

use super::composition::Deck;

/// All copies of one card in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckGroup {
    pub card: Arc<Card>,
    pub count: usize,
}

/// Group deck entries by card identifier, Leader group first.
#[must_use]
pub fn group_and_order(deck: &Deck) -> Vec<DeckGroup> {
    let mut groups: Vec<DeckGroup> = Vec::new();
    let mut slots: FxHashMap<&str, usize> = FxHashMap::default();

    for entry in deck.iter() {
        match slots.get(entry.card.id.as_str()) {
            Some(&slot) => groups[slot].count += 1,
            None => {
                slots.insert(entry.card.id.as_str(), groups.len());
                groups.push(DeckGroup {
                    card: Arc::clone(&entry.card),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-appearance order within each partition.
    groups.sort_by_key(|g| !g.card.is_leader());
    groups
}
