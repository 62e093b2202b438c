//! Bracketed keywords in rules text.
//!
//! Rules text marks abilities and timings with bracketed keywords such as
//! `[On Play]` or `[Blocker]`. `highlight` splits a text into plain and
//! keyword spans so a presentation layer can style each keyword by its
//! category. Matching is ASCII case-insensitive and the matched text is
//! kept verbatim, so joining the spans gives back the input.

use serde::{Deserialize, Serialize};

/// Placeholder used when a card has no rules text at all.
pub const NO_TEXT_PLACEHOLDER: &str = "No card text available.";

/// Styling group of a keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeywordCategory {
    /// `[Trigger]`
    Trigger,
    /// Static abilities: `[Rush]`, `[Blocker]`, `[Banish]`, `[Double Attack]`.
    Ability,
    /// `[Counter]`
    Counter,
    /// `[Once Per Turn]`
    Restriction,
    /// When an effect happens: `[On Play]`, `[Main]`, ...
    Timing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Trigger,
    Rush,
    Blocker,
    Banish,
    DoubleAttack,
    Counter,
    OncePerTurn,
    OnPlay,
    WhenAttacking,
    ActivateMain,
    YourTurn,
    OnOpponentsAttack,
    EndOfYourTurn,
    Main,
}

/// Every spelling recognized, with the keyword it denotes.
const PATTERNS: &[(&str, Keyword)] = &[
    ("[Trigger]", Keyword::Trigger),
    ("[Rush]", Keyword::Rush),
    ("[Blocker]", Keyword::Blocker),
    ("[Banish]", Keyword::Banish),
    ("[Double Attack]", Keyword::DoubleAttack),
    ("[Counter]", Keyword::Counter),
    ("[Once Per Turn]", Keyword::OncePerTurn),
    ("[On Play]", Keyword::OnPlay),
    ("[When Attacking]", Keyword::WhenAttacking),
    ("[Activate:Main]", Keyword::ActivateMain),
    ("[Activate: Main]", Keyword::ActivateMain),
    ("[Your Turn]", Keyword::YourTurn),
    ("[On Your Opponent's Attack]", Keyword::OnOpponentsAttack),
    ("[End of Your Turn]", Keyword::EndOfYourTurn),
    ("[Main]", Keyword::Main),
];

impl Keyword {
    #[must_use]
    pub const fn category(self) -> KeywordCategory {
        match self {
            Keyword::Trigger => KeywordCategory::Trigger,
            Keyword::Rush | Keyword::Blocker | Keyword::Banish | Keyword::DoubleAttack => {
                KeywordCategory::Ability
            }
            Keyword::Counter => KeywordCategory::Counter,
            Keyword::OncePerTurn => KeywordCategory::Restriction,
            Keyword::OnPlay
            | Keyword::WhenAttacking
            | Keyword::ActivateMain
            | Keyword::YourTurn
            | Keyword::OnOpponentsAttack
            | Keyword::EndOfYourTurn
            | Keyword::Main => KeywordCategory::Timing,
        }
    }

    /// Canonical spelling.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Keyword::Trigger => "[Trigger]",
            Keyword::Rush => "[Rush]",
            Keyword::Blocker => "[Blocker]",
            Keyword::Banish => "[Banish]",
            Keyword::DoubleAttack => "[Double Attack]",
            Keyword::Counter => "[Counter]",
            Keyword::OncePerTurn => "[Once Per Turn]",
            Keyword::OnPlay => "[On Play]",
            Keyword::WhenAttacking => "[When Attacking]",
            Keyword::ActivateMain => "[Activate:Main]",
            Keyword::YourTurn => "[Your Turn]",
            Keyword::OnOpponentsAttack => "[On Your Opponent's Attack]",
            Keyword::EndOfYourTurn => "[End of Your Turn]",
            Keyword::Main => "[Main]",
        }
    }

    /// Match a keyword at the start of `text`, returning it and the
    /// matched byte length.
    fn match_prefix(text: &str) -> Option<(Keyword, usize)> {
        let bytes = text.as_bytes();
        PATTERNS.iter().find_map(|(pattern, keyword)| {
            let len = pattern.len();
            let candidate = bytes.get(..len)?;
            candidate
                .eq_ignore_ascii_case(pattern.as_bytes())
                .then_some((*keyword, len))
        })
    }
}

/// A piece of rules text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextSpan {
    Plain { text: String },
    Keyword { keyword: Keyword, text: String },
}

impl TextSpan {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            TextSpan::Plain { text } | TextSpan::Keyword { text, .. } => text,
        }
    }
}

/// Split rules text into plain and keyword spans.
///
/// ```
/// use optcg_deck::cards::keywords::{highlight, Keyword, TextSpan};
///
/// let spans = highlight(Some("[On Play] Draw 1 card."));
/// assert_eq!(spans.len(), 2);
/// assert!(matches!(spans[0], TextSpan::Keyword { keyword: Keyword::OnPlay, .. }));
/// ```
#[must_use]
pub fn highlight(text: Option<&str>) -> Vec<TextSpan> {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return vec![TextSpan::Plain {
            text: NO_TEXT_PLACEHOLDER.to_string(),
        }];
    };

    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        if text.as_bytes()[pos] == b'[' {
            if let Some((keyword, len)) = Keyword::match_prefix(&text[pos..]) {
                if plain_start < pos {
                    spans.push(TextSpan::Plain {
                        text: text[plain_start..pos].to_string(),
                    });
                }
                spans.push(TextSpan::Keyword {
                    keyword,
                    text: text[pos..pos + len].to_string(),
                });
                pos += len;
                plain_start = pos;
                continue;
            }
        }
        pos += 1;
    }

    if plain_start < text.len() {
        spans.push(TextSpan::Plain {
            text: text[plain_start..].to_string(),
        });
    }
    spans
}
