//! Catalog record ingestion.
//!
//! Upstream card records are loosely shaped: identifiers, rules text and
//! images arrive under several field names, numbers sometimes arrive as
//! strings, and a few printed cards carry wrong values. `RawCardRecord`
//! accepts all of these and `RawCardRecord::normalize` turns one into a
//! clean `Card`.
//!
//! ## Normalization
//!
//! Applied in order:
//! 1. Missing rules text (or the literal `"NULL"`) becomes `"No Effect"`.
//! 2. Event and Stage cards have no power.
//! 3. Leader cards have no cost.
//! 4. A cost holding a known misfiled subtype label moves to `sub_types`
//!    and the cost becomes 0. Any other cost that is not an integer
//!    (`"NULL"`, blank, fractional) is treated as missing.
//! 5. Known errata are patched by identifier.

use serde::Deserialize;

use super::definition::{Card, CardType, Cost, Power};

/// Rules text used when a record has none.
pub const NO_EFFECT_TEXT: &str = "No Effect";

/// Field corrections for specific printed cards.
#[derive(Clone, Copy, Debug)]
struct Erratum {
    id: &'static str,
    cost: Option<i64>,
    power: Option<i64>,
    counter: Option<i64>,
}

const ERRATA: &[Erratum] = &[
    Erratum { id: "OP01-108", cost: None, power: None, counter: Some(1000) },
    Erratum { id: "OP06-051", cost: None, power: None, counter: Some(2000) },
    Erratum { id: "OP09-093", cost: Some(10), power: Some(12000), counter: None },
];

/// Subtype labels that some records carry in the cost field.
const MISFILED_SUB_TYPES: &[&str] = &["Former Roger Pirates"];

/// A number field that may arrive as an integer, a float or a string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    /// Interpret as an integer, if it is one.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RawValue::Int(v) => Some(*v),
            RawValue::Float(v) if v.fract() == 0.0 => Some(*v as i64),
            RawValue::Float(_) => None,
            RawValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One card record as served by the upstream catalog.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawCardRecord {
    pub card_set_id: Option<String>,
    pub id: Option<String>,
    pub card_name: Option<String>,
    pub card_type: Option<String>,
    pub card_color: Option<String>,
    pub card_cost: Option<RawValue>,
    pub card_power: Option<RawValue>,
    pub counter_amount: Option<RawValue>,
    pub effect: Option<String>,
    pub text: Option<String>,
    pub card_text: Option<String>,
    pub sub_types: Option<String>,
    pub image_url: Option<String>,
    pub card_image: Option<String>,
    pub set_id: Option<String>,
    pub attribute: Option<String>,
    pub rarity: Option<String>,
}

fn first_present(candidates: [Option<String>; 3]) -> Option<String> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

impl RawCardRecord {
    /// The identifier, preferring `card_set_id` over `id`.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        [self.card_set_id.as_deref(), self.id.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }

    /// Convert into a `Card`, applying the normalization rules.
    ///
    /// Returns `None` when the record has no identifier.
    #[must_use]
    pub fn normalize(self) -> Option<Card> {
        let id = self.identifier()?.to_string();

        let card_type = self.card_type.filter(|t| !t.is_empty()).map(CardType::from);

        let text = match first_present([self.effect, self.text, self.card_text]) {
            Some(t) if t != "NULL" => t,
            _ => NO_EFFECT_TEXT.to_string(),
        };

        let mut power = self.card_power.as_ref().and_then(RawValue::as_int).map(Power::from);
        if matches!(card_type, Some(CardType::Event | CardType::Stage)) {
            power = Some(Power::NoPower);
        }

        let mut sub_types = self.sub_types;
        let mut cost = match &self.card_cost {
            Some(RawValue::Text(label)) if MISFILED_SUB_TYPES.contains(&label.trim()) => {
                sub_types = Some(label.trim().to_string());
                Some(Cost::Value(0))
            }
            raw => raw.as_ref().and_then(RawValue::as_int).map(Cost::from),
        };
        if matches!(card_type, Some(CardType::Leader)) {
            cost = Some(Cost::NoCost);
        }

        let mut counter = self.counter_amount.as_ref().and_then(RawValue::as_int);

        if let Some(erratum) = ERRATA.iter().find(|e| e.id == id) {
            if let Some(c) = erratum.cost {
                cost = Some(Cost::from(c));
            }
            if let Some(p) = erratum.power {
                power = Some(Power::from(p));
            }
            if let Some(c) = erratum.counter {
                counter = Some(c);
            }
        }

        Some(Card {
            id,
            name: self.card_name,
            card_type,
            color: self.card_color,
            cost,
            power,
            counter,
            text: Some(text),
            sub_types,
            image: first_present([self.image_url, self.card_image, None]),
            set_id: self.set_id,
            attribute: self.attribute,
            rarity: self.rarity,
        })
    }
}
