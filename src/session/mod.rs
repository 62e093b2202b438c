//! Per-user deck builder session.

pub mod builder;

pub use builder::DeckBuilderSession;
