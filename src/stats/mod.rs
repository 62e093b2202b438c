//! Statistics aggregator for the deck statistics panel.

pub mod aggregate;

pub use aggregate::{aggregate, DeckStats};
