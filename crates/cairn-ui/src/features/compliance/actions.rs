//! Suggestion actions and display helpers.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

use crate::i18n::TranslationBundle;
use cairn_api_models::SuggestionFeedback;

/// Responses to a pending classification suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuggestionAction {
    /// Apply the suggested fields and record acceptance.
    Accept,
    /// Dismiss the suggestion and record the discard.
    Discard,
}

impl SuggestionAction {
    /// The wire feedback value recorded for this action.
    #[must_use]
    pub const fn feedback(self) -> SuggestionFeedback {
        match self {
            Self::Accept => SuggestionFeedback::Accepted,
            Self::Discard => SuggestionFeedback::Discarded,
        }
    }
}

/// Format a toast message for recorded suggestion feedback.
#[must_use]
pub fn feedback_message(bundle: &TranslationBundle, action: SuggestionAction) -> String {
    match action {
        SuggestionAction::Accept => bundle.text("toast.feedback_accepted", ""),
        SuggestionAction::Discard => bundle.text("toast.feedback_discarded", ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn actions_map_to_wire_feedback() {
        assert_eq!(
            SuggestionAction::Accept.feedback(),
            SuggestionFeedback::Accepted
        );
        assert_eq!(
            SuggestionAction::Discard.feedback(),
            SuggestionFeedback::Discarded
        );
    }

    #[test]
    fn feedback_messages_differ_by_action() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_ne!(
            feedback_message(&bundle, SuggestionAction::Accept),
            feedback_message(&bundle, SuggestionAction::Discard)
        );
    }
}
