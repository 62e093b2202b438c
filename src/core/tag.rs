//! Instance tags for deck entries.
//!
//! A deck may hold several copies of the same card. Each accepted add is
//! stamped with an `InstanceTag` so a presentation layer can key list items
//! and a caller can remove one specific copy.
//!
//! Tags come from a single process-wide counter, so no two entries ever
//! share a tag, even across decks.
//!
//! ```
//! use optcg_deck::core::InstanceTag;
//!
//! let a = InstanceTag::next();
//! let b = InstanceTag::next();
//! assert!(b > a);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_TAG: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier for one copy of a card in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceTag(pub u64);

impl InstanceTag {
    /// Allocate a fresh tag.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_TAG.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw tag value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for InstanceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}
