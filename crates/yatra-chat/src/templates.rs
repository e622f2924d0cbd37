//! Canned question templates per intent.
//!
//! Each recognized intent maps to exactly one English question about the
//! current subject. The filled template is what gets asked of the language
//! model on the static route, instead of the user's raw phrasing.

use crate::intent::Intent;

/// Whether a template exists for the given intent.
pub fn has_template(intent: Intent) -> bool {
    intent.is_known()
}

/// Fill the intent's question template with the subject name.
///
/// Returns `None` for [`Intent::Unknown`]. Pure and deterministic.
pub fn question_for(intent: Intent, subject: &str) -> Option<String> {
    let question = match intent {
        Intent::AskHistory => {
            format!("Tell me the detailed history and origin of {subject}.")
        }
        Intent::AskTiming => {
            format!("What are the visiting hours or timings for {subject}?")
        }
        Intent::AskTicket => {
            format!("Is there any ticket or entry fee for visiting {subject}?")
        }
        Intent::AskLocation => format!("Where exactly is {subject} located?"),
        Intent::AskHotels => {
            format!("Suggest good hotels or accommodations near {subject}.")
        }
        Intent::AskNearby => {
            format!("What are some nearby attractions around {subject}?")
        }
        Intent::Unknown => return None,
    };
    Some(question)
}
