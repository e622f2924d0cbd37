//! Keyword-based intent detection.
//!
//! Classification is a pure function of the normalized utterance: no turn
//! history or cross-turn state is consulted. Categories are tested in a
//! fixed priority order and the first hit wins, so the order of
//! [`KEYWORD_SETS`] is the tuning knob, not any nested conditionals.

use std::fmt;

/// Classified purpose of a user utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    AskHistory,
    AskTiming,
    AskTicket,
    AskLocation,
    AskHotels,
    AskNearby,
    Unknown,
}

impl Intent {
    /// Whether this is one of the recognized question categories.
    pub fn is_known(&self) -> bool {
        !matches!(self, Intent::Unknown)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Intent::AskHistory => "ask_history",
            Intent::AskTiming => "ask_timing",
            Intent::AskTicket => "ask_ticket",
            Intent::AskLocation => "ask_location",
            Intent::AskHotels => "ask_hotels",
            Intent::AskNearby => "ask_nearby",
            Intent::Unknown => "unknown",
        };
        write!(f, "{tag}")
    }
}

/// Phrase substitutions applied during normalization so ticket-related
/// wording collapses onto the "ticket" keyword.
const PHRASE_SUBSTITUTIONS: &[(&str, &str)] = &[("entry fee", "ticket"), ("price", "ticket")];

/// Per-intent keyword sets, in priority order. Earlier entries win when an
/// utterance matches several categories.
static KEYWORD_SETS: &[(Intent, &[&str])] = &[
    (
        Intent::AskHistory,
        &["history", "origin", "built", "built by", "construction", "established"],
    ),
    (
        Intent::AskTiming,
        &["timing", "open", "close", "opening hours", "time to visit", "best time", "when open"],
    ),
    (
        Intent::AskTicket,
        &["ticket", "entry", "entry ticket", "entry cost", "entry price", "cost to visit"],
    ),
    (
        Intent::AskLocation,
        &["location", "where is", "where located", "which place"],
    ),
    (
        Intent::AskHotels,
        &["hotel", "stay", "lodging", "accommodation", "rooms nearby", "places to stay"],
    ),
    (
        Intent::AskNearby,
        &["nearby", "around", "near", "places around", "attractions near", "what to see near"],
    ),
];

/// Lower-case the utterance and apply the fixed phrase substitutions.
pub fn normalize(utterance: &str) -> String {
    let mut text = utterance.to_lowercase();
    for (from, to) in PHRASE_SUBSTITUTIONS {
        text = text.replace(from, to);
    }
    text
}

/// Classify an utterance into an [`Intent`].
///
/// Always returns a valid intent; anything unmatched is [`Intent::Unknown`].
pub fn classify(utterance: &str) -> Intent {
    let normalized = normalize(utterance);
    for (intent, keywords) in KEYWORD_SETS {
        if keywords.iter().any(|k| normalized.contains(k)) {
            return *intent;
        }
    }
    Intent::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Single-category utterances ----

    #[test]
    fn test_history_keywords() {
        assert_eq!(classify("Tell me the history of the fort"), Intent::AskHistory);
        assert_eq!(classify("who built this temple"), Intent::AskHistory);
        assert_eq!(classify("when was it established"), Intent::AskHistory);
        assert_eq!(classify("what is its origin"), Intent::AskHistory);
    }

    #[test]
    fn test_timing_keywords() {
        assert_eq!(classify("What are the opening hours?"), Intent::AskTiming);
        assert_eq!(classify("what time does it close"), Intent::AskTiming);
        assert_eq!(classify("best time to go"), Intent::AskTiming);
    }

    #[test]
    fn test_ticket_keywords() {
        assert_eq!(classify("is there a ticket"), Intent::AskTicket);
        assert_eq!(classify("what is the cost to visit"), Intent::AskTicket);
    }

    #[test]
    fn test_location_keywords() {
        assert_eq!(classify("where is it located"), Intent::AskLocation);
        assert_eq!(classify("give me the location"), Intent::AskLocation);
    }

    #[test]
    fn test_hotel_keywords() {
        assert_eq!(classify("any good hotel there"), Intent::AskHotels);
        assert_eq!(classify("lodging options"), Intent::AskHotels);
        assert_eq!(classify("accommodation please"), Intent::AskHotels);
    }

    #[test]
    fn test_nearby_keywords() {
        assert_eq!(classify("nearby attractions"), Intent::AskNearby);
        assert_eq!(classify("what to see near the site"), Intent::AskNearby);
    }

    // ---- Normalization ----

    #[test]
    fn test_entry_fee_normalizes_to_ticket() {
        assert_eq!(classify("is there an entry fee"), Intent::AskTicket);
    }

    #[test]
    fn test_price_normalizes_to_ticket() {
        assert_eq!(classify("what is the price"), Intent::AskTicket);
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("ENTRY FEE"), "ticket");
        assert_eq!(normalize("The PRICE"), "the ticket");
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(classify("TELL ME THE HISTORY"), Intent::AskHistory);
        assert_eq!(classify("Opening Hours?"), Intent::AskTiming);
    }

    // ---- Priority order ----

    #[test]
    fn test_history_beats_nearby() {
        assert_eq!(
            classify("history of places nearby"),
            Intent::AskHistory
        );
    }

    #[test]
    fn test_timing_beats_ticket() {
        assert_eq!(
            classify("opening hours and ticket cost"),
            Intent::AskTiming
        );
    }

    #[test]
    fn test_ticket_beats_location() {
        assert_eq!(
            classify("ticket counter location"),
            Intent::AskTicket
        );
    }

    #[test]
    fn test_location_beats_hotels() {
        assert_eq!(
            classify("location of the hotel"),
            Intent::AskLocation
        );
    }

    #[test]
    fn test_hotels_beat_nearby() {
        assert_eq!(classify("hotels nearby"), Intent::AskHotels);
    }

    #[test]
    fn test_history_beats_everything() {
        assert_eq!(
            classify("history timing ticket location hotel nearby"),
            Intent::AskHistory
        );
    }

    // ---- Unknown ----

    #[test]
    fn test_empty_is_unknown() {
        assert_eq!(classify(""), Intent::Unknown);
    }

    #[test]
    fn test_unmatched_is_unknown() {
        assert_eq!(classify("tell me a story about kings"), Intent::Unknown);
        assert_eq!(classify("hello"), Intent::Unknown);
    }

    // ---- Purity ----

    #[test]
    fn test_classification_is_deterministic() {
        let utterance = "what are the timings";
        let first = classify(utterance);
        let second = classify(utterance);
        assert_eq!(first, second);
        assert_eq!(first, Intent::AskTiming);
    }

    #[test]
    fn test_display_tags() {
        assert_eq!(Intent::AskHistory.to_string(), "ask_history");
        assert_eq!(Intent::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_is_known() {
        assert!(Intent::AskTicket.is_known());
        assert!(!Intent::Unknown.is_known());
    }
}
