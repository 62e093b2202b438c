//! Card records - static catalog data.
//!
//! A `Card` is one entry of the external catalog. Cards are read-only:
//! filtering, deck building and statistics only ever borrow or share them.
//!
//! Field names on the wire follow the catalog API (`card_set_id`,
//! `card_cost`, ...). Every field except the identifier may be missing.
//!
//! ## Sentinels
//!
//! The catalog encodes "no cost" as `-2` and "no power" as `-1`. These are
//! decoded into `Cost::NoCost` and `Power::NoPower` and encoded back the same
//! way, so a round trip through JSON is lossless.

use serde::{Deserialize, Serialize};

/// Raw catalog value meaning "this card has no cost".
pub const NO_COST_SENTINEL: i64 = -2;

/// Raw catalog value meaning "this card has no power".
pub const NO_POWER_SENTINEL: i64 = -1;

/// Card type tag.
///
/// The catalog uses a small open set of types. Unknown tags are kept
/// verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardType {
    Leader,
    Character,
    Event,
    Stage,
    Other(String),
}

impl CardType {
    /// The tag as it appears in the catalog.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            CardType::Leader => "Leader",
            CardType::Character => "Character",
            CardType::Event => "Event",
            CardType::Stage => "Stage",
            CardType::Other(s) => s,
        }
    }

    #[must_use]
    pub fn is_leader(&self) -> bool {
        matches!(self, CardType::Leader)
    }
}

impl From<String> for CardType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Leader" => CardType::Leader,
            "Character" => CardType::Character,
            "Event" => CardType::Event,
            "Stage" => CardType::Stage,
            _ => CardType::Other(s),
        }
    }
}

impl From<&str> for CardType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<CardType> for String {
    fn from(t: CardType) -> Self {
        match t {
            CardType::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Play cost of a card.
///
/// `NoCost` orders before every numeric cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Cost {
    NoCost,
    Value(i64),
}

impl Cost {
    /// The raw catalog number (`-2` for `NoCost`).
    #[must_use]
    pub const fn raw(self) -> i64 {
        match self {
            Cost::NoCost => NO_COST_SENTINEL,
            Cost::Value(v) => v,
        }
    }
}

impl From<i64> for Cost {
    fn from(v: i64) -> Self {
        if v == NO_COST_SENTINEL {
            Cost::NoCost
        } else {
            Cost::Value(v)
        }
    }
}

impl From<Cost> for i64 {
    fn from(c: Cost) -> Self {
        c.raw()
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::NoCost => f.write_str("No Cost"),
            Cost::Value(v) => write!(f, "{}", v),
        }
    }
}

/// Battle power of a card.
///
/// `NoPower` orders before every numeric power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Power {
    NoPower,
    Value(i64),
}

impl Power {
    /// The raw catalog number (`-1` for `NoPower`).
    #[must_use]
    pub const fn raw(self) -> i64 {
        match self {
            Power::NoPower => NO_POWER_SENTINEL,
            Power::Value(v) => v,
        }
    }
}

impl From<i64> for Power {
    fn from(v: i64) -> Self {
        if v == NO_POWER_SENTINEL {
            Power::NoPower
        } else {
            Power::Value(v)
        }
    }
}

impl From<Power> for i64 {
    fn from(p: Power) -> Self {
        p.raw()
    }
}

impl std::fmt::Display for Power {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Power::NoPower => f.write_str("No Power"),
            Power::Value(v) => write!(f, "{}", v),
        }
    }
}

/// A catalog card.
///
/// ## Example
///
/// ```
/// use optcg_deck::cards::{Card, CardType, Cost};
///
/// let luffy = Card::new("OP01-003", "Monkey.D.Luffy", CardType::Leader)
///     .with_color("Red")
///     .with_cost(-2);
///
/// assert!(luffy.is_leader());
/// assert_eq!(luffy.cost, Some(Cost::NoCost));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier, e.g. `OP01-001`.
    #[serde(rename = "card_set_id")]
    pub id: String,

    #[serde(rename = "card_name")]
    pub name: Option<String>,

    pub card_type: Option<CardType>,

    #[serde(rename = "card_color")]
    pub color: Option<String>,

    #[serde(rename = "card_cost")]
    pub cost: Option<Cost>,

    #[serde(rename = "card_power")]
    pub power: Option<Power>,

    #[serde(rename = "counter_amount")]
    pub counter: Option<i64>,

    /// Rules text.
    #[serde(rename = "card_text")]
    pub text: Option<String>,

    pub sub_types: Option<String>,

    #[serde(rename = "card_image")]
    pub image: Option<String>,

    /// Set the card was printed in, e.g. `OP01`.
    pub set_id: Option<String>,

    pub attribute: Option<String>,

    pub rarity: Option<String>,
}

impl Card {
    /// Create a card with an identifier, name and type. Every other field
    /// starts out missing.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            card_type: Some(card_type),
            color: None,
            cost: None,
            power: None,
            counter: None,
            text: None,
            sub_types: None,
            image: None,
            set_id: None,
            attribute: None,
            rarity: None,
        }
    }

    /// Set the cost from its raw catalog value.
    #[must_use]
    pub fn with_cost(mut self, raw: i64) -> Self {
        self.cost = Some(Cost::from(raw));
        self
    }

    /// Set the power from its raw catalog value.
    #[must_use]
    pub fn with_power(mut self, raw: i64) -> Self {
        self.power = Some(Power::from(raw));
        self
    }

    #[must_use]
    pub fn with_counter(mut self, counter: i64) -> Self {
        self.counter = Some(counter);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_sub_types(mut self, sub_types: impl Into<String>) -> Self {
        self.sub_types = Some(sub_types.into());
        self
    }

    #[must_use]
    pub fn with_set(mut self, set_id: impl Into<String>) -> Self {
        self.set_id = Some(set_id.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Is this a Leader card?
    #[must_use]
    pub fn is_leader(&self) -> bool {
        self.card_type.as_ref().is_some_and(CardType::is_leader)
    }

    /// The type tag, if present.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        self.card_type.as_ref().map(CardType::as_str)
    }
}

impl AsRef<Card> for Card {
    fn as_ref(&self) -> &Card {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_type_from_str() {
        assert_eq!(CardType::from("Leader"), CardType::Leader);
        assert_eq!(CardType::from("Stage"), CardType::Stage);
        assert_eq!(
            CardType::from("DON!!"),
            CardType::Other("DON!!".to_string())
        );
        assert_eq!(CardType::from("DON!!").as_str(), "DON!!");
    }

    #[test]
    fn test_cost_sentinel() {
        assert_eq!(Cost::from(-2), Cost::NoCost);
        assert_eq!(Cost::from(3), Cost::Value(3));
        assert_eq!(Cost::NoCost.raw(), -2);
        assert_eq!(Cost::NoCost.to_string(), "No Cost");
        assert_eq!(Cost::Value(0).to_string(), "0");
        assert!(Cost::NoCost < Cost::Value(0));
    }

    #[test]
    fn test_power_sentinel() {
        assert_eq!(Power::from(-1), Power::NoPower);
        assert_eq!(Power::from(5000), Power::Value(5000));
        assert_eq!(Power::NoPower.raw(), -1);
        assert_eq!(Power::NoPower.to_string(), "No Power");
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new("OP01-016", "Nami", CardType::Character)
            .with_cost(1)
            .with_power(-1)
            .with_counter(2000)
            .with_color("Red")
            .with_set("OP01");

        assert_eq!(card.cost, Some(Cost::Value(1)));
        assert_eq!(card.power, Some(Power::NoPower));
        assert_eq!(card.counter, Some(2000));
        assert_eq!(card.type_name(), Some("Character"));
        assert!(!card.is_leader());
    }

    #[test]
    fn test_deserialize_catalog_record() {
        let json = r#"{
            "card_set_id": "OP01-001",
            "card_name": "Roronoa Zoro",
            "card_type": "Leader",
            "card_color": "Red",
            "card_cost": -2,
            "card_power": 5000,
            "counter_amount": null,
            "set_id": "OP01"
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, "OP01-001");
        assert!(card.is_leader());
        assert_eq!(card.cost, Some(Cost::NoCost));
        assert_eq!(card.power, Some(Power::Value(5000)));
        assert_eq!(card.counter, None);
        assert_eq!(card.text, None);
    }

    #[test]
    fn test_serialization_keeps_sentinels() {
        let card = Card::new("ST01-014", "Guard Point", CardType::Event)
            .with_cost(1)
            .with_power(-1);

        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["card_power"], -1);
        assert_eq!(value["card_type"], "Event");

        let back: Card = serde_json::from_value(value).unwrap();
        assert_eq!(back, card);
    }
}
