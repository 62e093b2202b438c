//! Card catalog filter: free-text search plus facet selection.
//!
//! ## Key Types
//!
//! - `SearchQuery`: `++`-separated required terms
//! - `Facet`, `FacetSelection`: Per-field value selections
//! - `FacetOption`: A selectable value with its display label
//! - `filter_cards`: The visible subset of a card list

pub mod catalog_filter;
pub mod facets;
pub mod query;

pub use catalog_filter::filter_cards;
pub use facets::{facet_options, Facet, FacetOption, FacetSelection};
pub use query::{haystack, SearchQuery, TERM_DELIMITER};
