//! Deck composition engine: adding and removing copies under the deck
//! rules, and the grouped deck view.
//!
//! ## Key Types
//!
//! - `Deck`: Ordered card copies, persistent (`im`) for cheap clones
//! - `DeckEntry`: One tagged copy
//! - `AddOutcome`, `Rejection`: Result of an add attempt
//! - `DeckGroup`: Copies of one card with their count
//! - `DeckSummary`: Leader/main-deck status counts

pub mod composition;
pub mod grouping;

pub use composition::{AddOutcome, Deck, DeckEntry, DeckSummary, Rejection};
pub use grouping::{group_and_order, DeckGroup};
