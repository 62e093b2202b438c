//! Facet selections and facet options.
//!
//! A facet is a card field the catalog can be narrowed by. For each facet
//! the user selects any number of values; an empty selection means the
//! facet is unrestricted. Values are strings in the same encoding the
//! options are offered in, so cost and power use their raw catalog numbers
//! (`"-2"` for no cost, `"-1"` for no power).

use std::borrow::Cow;
use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Cost, Power};

/// A filterable card field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Set,
    Type,
    Color,
    Cost,
    Power,
    Counter,
}

impl Facet {
    /// Every facet, in display order.
    pub const ALL: [Facet; 6] = [
        Facet::Set,
        Facet::Type,
        Facet::Color,
        Facet::Cost,
        Facet::Power,
        Facet::Counter,
    ];

    /// The card's value for this facet in option encoding, or `None`
    /// when the card has no value for it.
    #[must_use]
    pub fn value_of(self, card: &Card) -> Option<Cow<'_, str>> {
        match self {
            Facet::Set => card.set_id.as_deref().map(Cow::Borrowed),
            Facet::Type => card.type_name().map(Cow::Borrowed),
            Facet::Color => card.color.as_deref().map(Cow::Borrowed),
            Facet::Cost => card.cost.map(|c| Cow::Owned(c.raw().to_string())),
            Facet::Power => card.power.map(|p| Cow::Owned(p.raw().to_string())),
            Facet::Counter => card.counter.map(|c| Cow::Owned(c.to_string())),
        }
    }
}

/// Selected values per facet.
///
/// Facets combine with AND; values within one facet combine with OR.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    selections: FxHashMap<Facet, FxHashSet<String>>,
}

impl FacetSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value to a facet's selection (builder form).
    #[must_use]
    pub fn with(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.select(facet, value);
        self
    }

    pub fn select(&mut self, facet: Facet, value: impl Into<String>) {
        self.selections.entry(facet).or_default().insert(value.into());
    }

    pub fn deselect(&mut self, facet: Facet, value: &str) {
        if let Some(values) = self.selections.get_mut(&facet) {
            values.remove(value);
            if values.is_empty() {
                self.selections.remove(&facet);
            }
        }
    }

    /// Select the value if unselected, otherwise deselect it.
    ///
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, facet: Facet, value: &str) -> bool {
        if self.is_selected(facet, value) {
            self.deselect(facet, value);
            false
        } else {
            self.select(facet, value);
            true
        }
    }

    pub fn clear_facet(&mut self, facet: Facet) {
        self.selections.remove(&facet);
    }

    pub fn clear_all(&mut self) {
        self.selections.clear();
    }

    #[must_use]
    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selections
            .get(&facet)
            .is_some_and(|values| values.contains(value))
    }

    /// Selected values for a facet, sorted.
    #[must_use]
    pub fn selected(&self, facet: Facet) -> Vec<&str> {
        let mut values: Vec<&str> = self
            .selections
            .get(&facet)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default();
        values.sort_unstable();
        values
    }

    /// Number of selected values for a facet.
    #[must_use]
    pub fn count(&self, facet: Facet) -> usize {
        self.selections.get(&facet).map_or(0, |values| values.len())
    }

    /// No facet is restricted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.values().all(|values| values.is_empty())
    }

    /// Does the card pass every restricted facet?
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        self.selections.iter().all(|(facet, values)| {
            values.is_empty()
                || facet
                    .value_of(card)
                    .is_some_and(|value| values.contains(value.as_ref()))
        })
    }
}

/// One selectable facet value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    /// Value stored in a `FacetSelection`.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

impl FacetOption {
    fn plain(value: String) -> Self {
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Distinct values present for a facet across `cards`, in display order.
///
/// Cost and power list their "no value" option first, then numbers
/// ascending; counters are ascending; text facets are sorted
/// lexicographically. Missing and empty values are never offered.
#[must_use]
pub fn facet_options<C: AsRef<Card>>(cards: &[C], facet: Facet) -> Vec<FacetOption> {
    let cards = cards.iter().map(<C as AsRef<Card>>::as_ref);
    match facet {
        Facet::Cost => cards
            .filter_map(|c| c.cost)
            .collect::<BTreeSet<Cost>>()
            .into_iter()
            .map(|cost| FacetOption {
                value: cost.raw().to_string(),
                label: cost.to_string(),
            })
            .collect(),
        Facet::Power => cards
            .filter_map(|c| c.power)
            .collect::<BTreeSet<Power>>()
            .into_iter()
            .map(|power| FacetOption {
                value: power.raw().to_string(),
                label: power.to_string(),
            })
            .collect(),
        Facet::Counter => cards
            .filter_map(|c| c.counter)
            .collect::<BTreeSet<i64>>()
            .into_iter()
            .map(|counter| FacetOption::plain(counter.to_string()))
            .collect(),
        Facet::Set | Facet::Type | Facet::Color => cards
            .filter_map(|c| facet.value_of(c))
            .filter(|v| !v.is_empty())
            .map(Cow::into_owned)
            .collect::<BTreeSet<String>>()
            .into_iter()
            .map(FacetOption::plain)
            .collect(),
    }
}
