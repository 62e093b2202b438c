//! Core types shared by the deck and catalog modules: deck rules and
//! instance tags.

pub mod config;
pub mod tag;

pub use config::{DeckRules, STANDARD_COPY_LIMIT, STANDARD_LEADERS, STANDARD_MAIN_DECK};
pub use tag::InstanceTag;
