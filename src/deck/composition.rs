//! Deck composition.
//!
//! A `Deck` is an ordered list of card copies. Insertion order is kept for
//! display but plays no part in legality. Every change goes through
//! `try_add`, `remove_one`, `remove_instance` or `clear`, so the counting
//! rules hold after any sequence of calls:
//!
//! - at most `max_leaders` Leader cards (one by default)
//! - at most `max_copies` copies of any non-Leader card (four by default)
//! - at most `max_main_deck` non-Leader cards (fifty by default)
//!
//! Rejection is a normal outcome, not an error: `try_add` reports it in
//! its return value and leaves the deck untouched.
//!
//! The entry list is an `im::Vector`, so cloning a deck is O(1). The
//! functional forms (`with_card`, `without_card`) lean on that.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;
use crate::core::{DeckRules, InstanceTag};

use super::grouping::{group_and_order, DeckGroup};

/// One copy of a card in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    /// Distinguishes this copy from other copies of the same card.
    pub tag: InstanceTag,
    pub card: Arc<Card>,
}

/// Why a card could not be added.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    #[error("deck already has a Leader")]
    LeaderSlotTaken,
    #[error("this Leader is already in the deck")]
    LeaderAlreadyInDeck,
    #[error("copy limit reached for this card")]
    CopyLimitReached,
    #[error("deck already holds the maximum number of non-Leader cards")]
    MainDeckFull,
    #[error("unknown card: {0}")]
    UnknownCard(String),
}

/// Result of an add attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddOutcome {
    Added(InstanceTag),
    Rejected(Rejection),
}

impl AddOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }

    /// Tag of the new entry, if accepted.
    #[must_use]
    pub fn tag(&self) -> Option<InstanceTag> {
        match self {
            AddOutcome::Added(tag) => Some(*tag),
            AddOutcome::Rejected(_) => None,
        }
    }

    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            AddOutcome::Added(_) => None,
            AddOutcome::Rejected(reason) => Some(reason),
        }
    }
}

/// Leader/main-deck counts for a status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSummary {
    pub leaders: usize,
    pub main_deck: usize,
    pub total: usize,
    /// Leader slot filled and main deck at its full size.
    pub is_complete: bool,
}

/// A deck under construction.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use optcg_deck::cards::{Card, CardType};
/// use optcg_deck::deck::{Deck, Rejection};
///
/// let mut deck = Deck::new();
/// let zoro = Arc::new(Card::new("OP01-001", "Roronoa Zoro", CardType::Leader));
/// let luffy = Arc::new(Card::new("ST01-001", "Monkey.D.Luffy", CardType::Leader));
///
/// assert!(deck.try_add(zoro).is_accepted());
///
/// let outcome = deck.try_add(luffy);
/// assert_eq!(outcome.rejection(), Some(&Rejection::LeaderSlotTaken));
/// assert_eq!(deck.len(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize)]
pub struct Deck {
    entries: Vector<DeckEntry>,
    rules: DeckRules,
}

impl Deck {
    /// Create an empty deck with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty deck with custom rules.
    #[must_use]
    pub fn with_rules(rules: DeckRules) -> Self {
        Self {
            entries: Vector::new(),
            rules,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &DeckRules {
        &self.rules
    }

    /// Check whether a card could be added, without adding it.
    ///
    /// Rules are checked in a fixed order, so the reported reason is
    /// stable: Leader slot, Leader copy, copy limit, main deck size.
    pub fn check(&self, card: &Card) -> Result<(), Rejection> {
        let copies = self.copies_of(&card.id);

        if card.is_leader() {
            if self.leader_count() >= self.rules.max_leaders {
                return Err(Rejection::LeaderSlotTaken);
            }
            if copies >= self.rules.max_leader_copies {
                return Err(Rejection::LeaderAlreadyInDeck);
            }
        } else {
            if copies >= self.rules.max_copies {
                return Err(Rejection::CopyLimitReached);
            }
            if self.main_deck_count() >= self.rules.max_main_deck {
                return Err(Rejection::MainDeckFull);
            }
        }
        Ok(())
    }

    /// Add a copy of `card` if the rules allow it.
    pub fn try_add(&mut self, card: Arc<Card>) -> AddOutcome {
        if let Err(reason) = self.check(&card) {
            tracing::debug!(card_id = %card.id, %reason, "deck.add_rejected");
            return AddOutcome::Rejected(reason);
        }

        let tag = InstanceTag::next();
        tracing::debug!(card_id = %card.id, %tag, "deck.card_added");
        self.entries.push_back(DeckEntry { tag, card });
        AddOutcome::Added(tag)
    }

    /// Functional add: a new deck plus whether the card was accepted.
    /// `self` is left as it was.
    #[must_use]
    pub fn with_card(&self, card: Arc<Card>) -> (Deck, bool) {
        let mut next = self.clone();
        let accepted = next.try_add(card).is_accepted();
        (next, accepted)
    }

    /// Remove the earliest-added copy of a card.
    ///
    /// Returns the removed entry, or `None` (deck unchanged) when the card
    /// is not in the deck.
    pub fn remove_one(&mut self, card_id: &str) -> Option<DeckEntry> {
        let index = self.entries.iter().position(|e| e.card.id == card_id)?;
        let removed = self.entries.remove(index);
        tracing::debug!(card_id, tag = %removed.tag, "deck.card_removed");
        Some(removed)
    }

    /// Functional remove: a new deck without the earliest copy of a card.
    #[must_use]
    pub fn without_card(&self, card_id: &str) -> Deck {
        let mut next = self.clone();
        next.remove_one(card_id);
        next
    }

    /// Remove one specific copy.
    pub fn remove_instance(&mut self, tag: InstanceTag) -> Option<DeckEntry> {
        let index = self.entries.iter().position(|e| e.tag == tag)?;
        Some(self.entries.remove(index))
    }

    /// Empty the deck.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Copies of a card, by identifier.
    #[must_use]
    pub fn copies_of(&self, card_id: &str) -> usize {
        self.entries.iter().filter(|e| e.card.id == card_id).count()
    }

    #[must_use]
    pub fn leader_count(&self) -> usize {
        self.entries.iter().filter(|e| e.card.is_leader()).count()
    }

    /// Number of non-Leader cards.
    #[must_use]
    pub fn main_deck_count(&self) -> usize {
        self.entries.len() - self.leader_count()
    }

    /// The first Leader in the deck.
    #[must_use]
    pub fn leader(&self) -> Option<&Arc<Card>> {
        self.entries.iter().map(|e| &e.card).find(|c| c.is_leader())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DeckEntry> {
        self.entries.iter()
    }

    /// Cards in insertion order, one per copy.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.entries.iter().map(|e| &*e.card)
    }

    /// Copies grouped by card, Leader group first.
    #[must_use]
    pub fn groups(&self) -> Vec<DeckGroup> {
        group_and_order(self)
    }

    #[must_use]
    pub fn summary(&self) -> DeckSummary {
        let leaders = self.leader_count();
        let main_deck = self.entries.len() - leaders;
        DeckSummary {
            leaders,
            main_deck,
            total: self.entries.len(),
            is_complete: leaders == self.rules.max_leaders
                && main_deck == self.rules.max_main_deck,
        }
    }
}
