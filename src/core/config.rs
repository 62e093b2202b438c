//! Deck construction rules.
//!
//! The builder enforces a small set of counting rules:
//! - `max_leaders`: Leader cards allowed in a deck
//! - `max_leader_copies`: copies of one Leader card allowed
//! - `max_copies`: copies of one non-Leader card allowed
//! - `max_main_deck`: non-Leader cards allowed
//!
//! `DeckRules::default()` is the standard constructed format.

use serde::{Deserialize, Serialize};

/// Standard number of Leader cards in a deck.
pub const STANDARD_LEADERS: usize = 1;

/// Standard copy limit for a single non-Leader card.
pub const STANDARD_COPY_LIMIT: usize = 4;

/// Standard number of non-Leader cards in a complete deck.
pub const STANDARD_MAIN_DECK: usize = 50;

/// Counting rules applied when cards are added to a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRules {
    /// Leader cards allowed in the deck.
    pub max_leaders: usize,

    /// Copies of a single Leader card allowed.
    pub max_leader_copies: usize,

    /// Copies of a single non-Leader card allowed.
    pub max_copies: usize,

    /// Non-Leader cards allowed. A deck with exactly this many
    /// (and a full Leader slot) is complete.
    pub max_main_deck: usize,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            max_leaders: STANDARD_LEADERS,
            max_leader_copies: 1,
            max_copies: STANDARD_COPY_LIMIT,
            max_main_deck: STANDARD_MAIN_DECK,
        }
    }
}

impl DeckRules {
    /// Set the per-card copy limit for non-Leader cards.
    #[must_use]
    pub fn with_max_copies(mut self, copies: usize) -> Self {
        self.max_copies = copies;
        self
    }

    /// Set the non-Leader card cap.
    #[must_use]
    pub fn with_max_main_deck(mut self, cards: usize) -> Self {
        self.max_main_deck = cards;
        self
    }

    /// Set the copy limit for a single Leader card.
    #[must_use]
    pub fn with_max_leader_copies(mut self, copies: usize) -> Self {
        self.max_leader_copies = copies;
        self
    }

    /// Set the number of Leader slots.
    #[must_use]
    pub fn with_max_leaders(mut self, leaders: usize) -> Self {
        self.max_leaders = leaders;
        self
    }
}
