#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Typed activity events for the Cairn platform.
//!
//! The UI posts these to the activity sink so usage of the catalog surfaces
//! can be tracked with a stable vocabulary. Consumers filter on the `kind`
//! discriminator rather than matching payload shapes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Typed activity events surfaced by the catalog UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// An institutional-memory link was attached to a dataset.
    LinkAdded {
        /// Urn of the dataset the link was attached to.
        dataset_urn: String,
        /// Target URL of the link.
        url: String,
    },
    /// An institutional-memory link was replaced with updated fields.
    LinkEdited {
        /// Urn of the dataset the link belongs to.
        dataset_urn: String,
        /// Target URL of the replacement link.
        url: String,
    },
    /// An institutional-memory link was removed from a dataset.
    LinkRemoved {
        /// Urn of the dataset the link was removed from.
        dataset_urn: String,
        /// Target URL of the removed link.
        url: String,
    },
    /// A compliance policy was persisted for a dataset.
    ComplianceSaved {
        /// Urn of the dataset whose policy was saved.
        dataset_urn: String,
    },
    /// Feedback was recorded against a classification suggestion.
    SuggestionFeedback {
        /// Urn of the dataset the suggestion belongs to.
        dataset_urn: String,
        /// Identifier of the suggestion, when one was supplied.
        uid: Option<Uuid>,
        /// Whether the suggestion was accepted.
        accepted: bool,
    },
}

impl Event {
    /// Machine-friendly discriminator for activity consumers.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LinkAdded { .. } => "link_added",
            Self::LinkEdited { .. } => "link_edited",
            Self::LinkRemoved { .. } => "link_removed",
            Self::ComplianceSaved { .. } => "compliance_saved",
            Self::SuggestionFeedback { .. } => "suggestion_feedback",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_serde_tag() {
        let event = Event::LinkEdited {
            dataset_urn: "urn:li:dataset:1".to_string(),
            url: "https://wiki.example/runbook".to_string(),
        };
        let encoded = serde_json::to_value(&event).expect("event should encode");
        assert_eq!(encoded["type"], event.kind());
    }

    #[test]
    fn kinds_are_distinct() {
        let urn = "urn:li:dataset:1".to_string();
        let events = [
            Event::LinkAdded {
                dataset_urn: urn.clone(),
                url: String::new(),
            },
            Event::LinkEdited {
                dataset_urn: urn.clone(),
                url: String::new(),
            },
            Event::LinkRemoved {
                dataset_urn: urn.clone(),
                url: String::new(),
            },
            Event::ComplianceSaved {
                dataset_urn: urn.clone(),
            },
            Event::SuggestionFeedback {
                dataset_urn: urn,
                uid: Some(Uuid::nil()),
                accepted: true,
            },
        ];
        for (index, left) in events.iter().enumerate() {
            for right in events.iter().skip(index + 1) {
                assert_ne!(left.kind(), right.kind());
            }
        }
    }
}
