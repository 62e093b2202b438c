//! Free-text search queries.
//!
//! A query is one or more terms joined by `++`. Every term must occur,
//! case-insensitively, somewhere in the card's searchable text. A blank
//! query matches every card.

use smallvec::SmallVec;

use crate::cards::Card;

/// Separator between required search terms.
pub const TERM_DELIMITER: &str = "++";

/// A parsed search query.
///
/// ```
/// use optcg_deck::cards::{Card, CardType};
/// use optcg_deck::filter::SearchQuery;
///
/// let card = Card::new("OP01-016", "Nami", CardType::Character).with_color("Red");
///
/// assert!(SearchQuery::parse("nami ++ RED").matches(&card));
/// assert!(!SearchQuery::parse("nami++blue").matches(&card));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    terms: SmallVec<[String; 4]>,
}

impl SearchQuery {
    /// Parse raw user input. Whitespace-only input yields an empty query.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input.trim().is_empty() {
            return Self::default();
        }
        let terms = input
            .to_lowercase()
            .split(TERM_DELIMITER)
            .map(|t| t.trim().to_string())
            .collect();
        Self { terms }
    }

    /// Lowercased, trimmed terms. Empty for a blank query.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Does this query place no restriction on cards?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Does every term occur in the card's searchable text?
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        if self.is_empty() {
            return true;
        }
        let haystack = haystack(card);
        self.terms.iter().all(|term| haystack.contains(term.as_str()))
    }
}

/// The lowercased searchable text of a card: identifier, set, name, type,
/// color, rules text, cost, power and counter, one per line. Missing
/// fields contribute an empty line; cost and power use their raw catalog
/// numbers.
#[must_use]
pub fn haystack(card: &Card) -> String {
    let fields: [String; 9] = [
        card.id.clone(),
        card.set_id.clone().unwrap_or_default(),
        card.name.clone().unwrap_or_default(),
        card.type_name().unwrap_or_default().to_string(),
        card.color.clone().unwrap_or_default(),
        card.text.clone().unwrap_or_default(),
        card.cost.map(|c| c.raw().to_string()).unwrap_or_default(),
        card.power.map(|p| p.raw().to_string()).unwrap_or_default(),
        card.counter.map(|c| c.to_string()).unwrap_or_default(),
    ];
    fields.join("\n").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    fn zoro() -> Card {
        Card::new("OP01-025", "Roronoa Zoro", CardType::Character)
            .with_color("Red")
            .with_cost(3)
            .with_power(5000)
            .with_counter(1000)
            .with_set("OP01")
            .with_text("[Rush]")
    }

    #[test]
    fn test_blank_queries_are_empty() {
        assert!(SearchQuery::parse("").is_empty());
        assert!(SearchQuery::parse("   \t ").is_empty());
        assert!(SearchQuery::parse("  ").matches(&zoro()));
    }

    #[test]
    fn test_terms_are_trimmed_and_lowercased() {
        let query = SearchQuery::parse(" Zoro ++ RUSH ");
        assert_eq!(query.terms(), &["zoro".to_string(), "rush".to_string()]);
    }

    #[test]
    fn test_single_term_substring_match() {
        assert!(SearchQuery::parse("roron").matches(&zoro()));
        assert!(SearchQuery::parse("op01-025").matches(&zoro()));
        assert!(!SearchQuery::parse("luffy").matches(&zoro()));
    }

    #[test]
    fn test_numeric_fields_are_searchable() {
        assert!(SearchQuery::parse("5000").matches(&zoro()));
        assert!(SearchQuery::parse("1000").matches(&zoro()));
    }

    #[test]
    fn test_all_terms_required() {
        assert!(SearchQuery::parse("zoro++red").matches(&zoro()));
        assert!(!SearchQuery::parse("zoro++green").matches(&zoro()));
    }

    #[test]
    fn test_trailing_delimiter_adds_empty_term() {
        let query = SearchQuery::parse("zoro++");
        assert_eq!(query.terms().len(), 2);
        assert!(query.matches(&zoro()));
    }

    #[test]
    fn test_missing_fields_do_not_panic() {
        let bare = Card {
            name: None,
            card_type: None,
            ..Card::new("X-1", "", CardType::Event)
        };
        assert!(SearchQuery::parse("x-1").matches(&bare));
        assert!(!SearchQuery::parse("event").matches(&bare));
    }

    #[test]
    fn test_sentinels_in_haystack() {
        let leader = Card::new("OP01-001", "Zoro", CardType::Leader).with_cost(-2);
        assert!(haystack(&leader).contains("-2"));
    }
}
