//! Card system: catalog records, ingestion, and the catalog itself.
//!
//! ## Key Types
//!
//! - `Card`: One read-only catalog record
//! - `CardType`, `Cost`, `Power`: Typed card fields (sentinels decoded)
//! - `RawCardRecord`: Upstream record shape, normalized into a `Card`
//! - `Catalog`: Ordered card list with id lookup and set names
//! - `keywords`: Rules-text keyword spans

pub mod catalog;
pub mod definition;
pub mod ingest;
pub mod keywords;

pub use catalog::{CardSet, Catalog, CatalogError};
pub use definition::{Card, CardType, Cost, Power, NO_COST_SENTINEL, NO_POWER_SENTINEL};
pub use ingest::{RawCardRecord, RawValue, NO_EFFECT_TEXT};
pub use keywords::{highlight, Keyword, KeywordCategory, TextSpan};
