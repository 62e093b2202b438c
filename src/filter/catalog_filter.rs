//! Catalog filtering.
//!
//! Filtering is a pure pass over the card list: the source list is never
//! touched, the result keeps source order, and the same inputs always give
//! the same output.

use crate::cards::Card;

use super::facets::FacetSelection;
use super::query::SearchQuery;

/// Cards matching both the search query and the facet selection.
///
/// Works over any card handle (`Card`, `Arc<Card>`, ...) and returns
/// references into `cards`, in their original relative order.
///
/// ```
/// use optcg_deck::cards::{Card, CardType};
/// use optcg_deck::filter::{filter_cards, Facet, FacetSelection};
///
/// let cards = vec![
///     Card::new("OP01-016", "Nami", CardType::Character).with_color("Red"),
///     Card::new("OP01-060", "Donquixote Doflamingo", CardType::Leader).with_color("Blue"),
/// ];
///
/// let red = FacetSelection::new().with(Facet::Color, "Red");
/// let hits = filter_cards(&cards, "", &red);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, "OP01-016");
/// ```
#[must_use]
pub fn filter_cards<'a, C: AsRef<Card>>(
    cards: &'a [C],
    query: &str,
    facets: &FacetSelection,
) -> Vec<&'a C> {
    let query = SearchQuery::parse(query);
    let visible: Vec<&C> = cards
        .iter()
        .filter(|card| {
            let card: &Card = (*card).as_ref();
            facets.matches(card) && query.matches(card)
        })
        .collect();
    tracing::trace!(
        total = cards.len(),
        visible = visible.len(),
        terms = query.terms().len(),
        "catalog.filtered"
    );
    visible
}
