//! Link list actions and display helpers.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

use crate::features::links::logic::LinkDraft;
use crate::features::links::state::LinkRow;
use crate::i18n::TranslationBundle;

/// High-level link list actions from the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkAction {
    /// Open the edit dialog for a link.
    RequestEdit(LinkRow),
    /// Close the edit dialog without saving.
    CancelEdit,
    /// Remove a link from its resource.
    Delete(LinkRow),
    /// Replace a link with validated fields.
    SubmitEdit {
        /// Link being replaced.
        row: LinkRow,
        /// Validated replacement fields.
        draft: LinkDraft,
    },
}

/// Format a toast message for a successfully completed action.
///
/// Dialog-state actions complete locally and produce no toast.
#[must_use]
pub fn success_message(bundle: &TranslationBundle, action: &LinkAction) -> Option<String> {
    match action {
        LinkAction::Delete(row) => Some(format!(
            "{} {}",
            bundle.text("toast.link_deleted", ""),
            row.description
        )),
        LinkAction::SubmitEdit { draft, .. } => Some(format!(
            "{} {}",
            bundle.text("toast.link_edited", ""),
            draft.description
        )),
        LinkAction::RequestEdit(_) | LinkAction::CancelEdit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleCode, TranslationBundle};

    fn row() -> LinkRow {
        LinkRow {
            url: "https://wiki.example/runbook".to_string(),
            description: "Runbook".to_string(),
            author_urn: "urn:li:corpuser:jdoe".to_string(),
            created_label: "2026-01-05".to_string(),
            resource_urn: None,
        }
    }

    #[test]
    fn completed_actions_produce_distinct_messages() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let deleted = success_message(&bundle, &LinkAction::Delete(row())).expect("delete toast");
        let edited = success_message(
            &bundle,
            &LinkAction::SubmitEdit {
                row: row(),
                draft: LinkDraft {
                    url: "https://wiki.example/new".to_string(),
                    description: "New runbook".to_string(),
                },
            },
        )
        .expect("edit toast");
        assert!(deleted.contains("Runbook"));
        assert!(edited.contains("New runbook"));
        assert_ne!(deleted, edited);
    }

    #[test]
    fn dialog_actions_are_silent() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert!(success_message(&bundle, &LinkAction::RequestEdit(row())).is_none());
        assert!(success_message(&bundle, &LinkAction::CancelEdit).is_none());
    }
}
