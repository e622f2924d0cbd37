//! Per-turn routing between the canned-template path and open-ended chat.
//!
//! A matched keyword inside a long question is weak evidence, so the
//! static route is only taken for short inputs. The word-count threshold
//! is a tunable constant, not a principled contract.

use crate::intent::Intent;
use crate::templates;

/// Inputs with this many words or more go to open-ended chat even when an
/// intent matched. Tunable; the value is empirical, not a contract.
pub const STATIC_ROUTE_MAX_WORDS: usize = 7;

/// Which answer path a turn takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Answer the intent's canned question about the subject.
    Static,
    /// Fall back to open-ended language-model chat.
    Llm,
}

/// Decide the route for one turn.
///
/// `english_input` is the pivot-language text the classifier saw; its
/// word count gates the static route. The template itself is not built
/// here, so a long input costs nothing extra.
pub fn route(intent: Intent, english_input: &str) -> RouteDecision {
    if !intent.is_known() || !templates::has_template(intent) {
        return RouteDecision::Llm;
    }
    if word_count(english_input) < STATIC_ROUTE_MAX_WORDS {
        RouteDecision::Static
    } else {
        RouteDecision::Llm
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
