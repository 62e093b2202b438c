//! # optcg-deck
//!
//! Card catalog filtering, deck composition rules and deck statistics for
//! a trading card game deck builder.
//!
//! ## Design Principles
//!
//! 1. **Read-only catalog**: Cards come from an external source and are
//!    never mutated. Decks share them through `Arc`.
//!
//! 2. **Rejection is not an error**: Breaking a deck rule is an expected
//!    outcome reported in a return value. Only catalog loading can fail.
//!
//! 3. **Sentinels at the edge**: The catalog's `-2` "no cost" and `-1`
//!    "no power" numbers are decoded into `Cost::NoCost` / `Power::NoPower`
//!    on the way in and encoded back on the way out.
//!
//! ## Modules
//!
//! - `core`: Deck rules and instance tags
//! - `cards`: Card records, ingestion, catalog, rules-text keywords
//! - `filter`: Search queries, facet selections, catalog filtering
//! - `deck`: Deck composition engine and grouped deck view
//! - `stats`: Deck statistics aggregator
//! - `session`: One user's catalog, deck and filter state

pub mod core;
pub mod cards;
pub mod filter;
pub mod deck;
pub mod stats;
pub mod session;

// Re-export commonly used types
pub use crate::core::{DeckRules, InstanceTag};

pub use crate::cards::{
    Card, CardSet, CardType, Catalog, CatalogError, Cost, Power, RawCardRecord,
};

pub use crate::filter::{
    facet_options, filter_cards, Facet, FacetOption, FacetSelection, SearchQuery,
};

pub use crate::deck::{AddOutcome, Deck, DeckEntry, DeckGroup, DeckSummary, Rejection};

pub use crate::stats::{aggregate, DeckStats};

pub use crate::session::DeckBuilderSession;
