//! Compliance feature state.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Convert to shared API types only on save.
//! - The new-vs-existing tag is the only state beyond the fetched payloads.

use cairn_api_models::{
    CompliancePolicy, ComplianceSuggestion, DataClassification, PurgePolicy,
};

/// Outcome of a compliance read: the policy plus which case produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplianceRead {
    /// True when the policy was synthesized locally after a not-found.
    pub is_new: bool,
    /// The fetched or synthesized policy.
    pub policy: CompliancePolicy,
}

/// Compliance slice stored in the app state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ComplianceState {
    /// Latest read outcome, when one completed.
    pub read: Option<ComplianceRead>,
    /// Pending suggestion, when a non-empty one exists.
    pub suggestion: Option<ComplianceSuggestion>,
    /// Whether a save is in flight.
    pub saving: bool,
}

/// Store a completed read outcome.
pub fn set_read(state: &mut ComplianceState, read: ComplianceRead) {
    state.read = Some(read);
}

/// Store a fetched suggestion, discarding empty ones.
pub fn set_suggestion(state: &mut ComplianceState, suggestion: ComplianceSuggestion) {
    state.suggestion = if suggestion.is_empty() {
        None
    } else {
        Some(suggestion)
    };
}

/// Drop the pending suggestion after feedback was recorded.
pub fn clear_suggestion(state: &mut ComplianceState) {
    state.suggestion = None;
}

/// Mark the current policy as persisted after a successful save.
pub fn mark_saved(state: &mut ComplianceState, policy: CompliancePolicy) {
    state.read = Some(ComplianceRead {
        is_new: false,
        policy,
    });
}

/// Tri-state selector for the personal-data flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PersonalDataChoice {
    /// Flag has not been assessed.
    #[default]
    Unknown,
    /// Dataset contains personal data.
    Yes,
    /// Dataset contains no personal data.
    No,
}

impl PersonalDataChoice {
    /// Map the optional wire flag into a selector value.
    #[must_use]
    pub const fn from_option(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Unknown,
        }
    }

    /// Convert the selector back into the optional wire flag.
    #[must_use]
    pub const fn as_option(self) -> Option<bool> {
        match self {
            Self::Unknown => None,
            Self::Yes => Some(true),
            Self::No => Some(false),
        }
    }

    /// String value used by the select control.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// Parse a select control value into a selector choice.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "yes" => Self::Yes,
            "no" => Self::No,
            _ => Self::Unknown,
        }
    }
}

/// Mutable compliance policy form state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ComplianceFormState {
    /// Selected classification value, empty when unset.
    pub classification: String,
    /// Personal-data selector choice.
    pub personal_data: PersonalDataChoice,
    /// Selected purge policy value, empty when unset.
    pub purge_policy: String,
    /// Free-form retention note.
    pub purge_note: String,
}

impl ComplianceFormState {
    /// Build form state from a fetched or synthesized policy.
    #[must_use]
    pub fn from_policy(policy: &CompliancePolicy) -> Self {
        Self {
            classification: policy
                .classification
                .map(|level| level.as_value().to_string())
                .unwrap_or_default(),
            personal_data: PersonalDataChoice::from_option(policy.contains_personal_data),
            purge_policy: policy
                .purge_policy
                .map(|purge| purge.as_value().to_string())
                .unwrap_or_default(),
            purge_note: policy.purge_note.clone().unwrap_or_default(),
        }
    }

    /// Apply the form onto a base policy, preserving fields the form does not
    /// edit (urn, field annotations, modification stamp).
    #[must_use]
    pub fn to_policy(&self, base: &CompliancePolicy) -> CompliancePolicy {
        let note = self.purge_note.trim();
        let mut policy = base.clone();
        policy.classification = DataClassification::from_value(&self.classification);
        policy.contains_personal_data = self.personal_data.as_option();
        policy.purge_policy = PurgePolicy::from_value(&self.purge_policy);
        policy.purge_note = if note.is_empty() {
            None
        } else {
            Some(note.to_string())
        };
        policy
    }

    /// Copy the suggested fields into the form, leaving absent ones untouched.
    pub fn apply_suggestion(&mut self, suggestion: &ComplianceSuggestion) {
        if let Some(level) = suggestion.classification {
            self.classification = level.as_value().to_string();
        }
        if let Some(flag) = suggestion.contains_personal_data {
            self.personal_data = PersonalDataChoice::from_option(Some(flag));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URN: &str = "urn:li:dataset:1";

    fn saved_policy() -> CompliancePolicy {
        let mut policy = CompliancePolicy::default_for(URN);
        policy.classification = Some(DataClassification::Confidential);
        policy.contains_personal_data = Some(false);
        policy.purge_policy = Some(PurgePolicy::ManualPurge);
        policy.purge_note = Some("quarterly sweep".to_string());
        policy
    }

    #[test]
    fn form_round_trips_a_saved_policy() {
        let policy = saved_policy();
        let form = ComplianceFormState::from_policy(&policy);
        assert_eq!(form.classification, "confidential");
        assert_eq!(form.personal_data, PersonalDataChoice::No);
        assert_eq!(form.purge_policy, "manual_purge");
        assert_eq!(form.purge_note, "quarterly sweep");
        assert_eq!(form.to_policy(&policy), policy);
    }

    #[test]
    fn to_policy_unsets_cleared_fields_and_keeps_the_urn() {
        let policy = saved_policy();
        let form = ComplianceFormState::default();
        let next = form.to_policy(&policy);
        assert_eq!(next.dataset_urn, URN);
        assert!(next.classification.is_none());
        assert!(next.contains_personal_data.is_none());
        assert!(next.purge_policy.is_none());
        assert!(next.purge_note.is_none());
    }

    #[test]
    fn apply_suggestion_overrides_only_present_fields() {
        let mut form = ComplianceFormState::from_policy(&saved_policy());
        form.apply_suggestion(&ComplianceSuggestion {
            classification: Some(DataClassification::HighlyConfidential),
            ..ComplianceSuggestion::default()
        });
        assert_eq!(form.classification, "highly_confidential");
        // Absent suggestion fields leave the form untouched.
        assert_eq!(form.personal_data, PersonalDataChoice::No);
    }

    #[test]
    fn empty_suggestions_are_not_stored() {
        let mut state = ComplianceState::default();
        set_suggestion(&mut state, ComplianceSuggestion::default());
        assert!(state.suggestion.is_none());

        set_suggestion(
            &mut state,
            ComplianceSuggestion {
                contains_personal_data: Some(true),
                ..ComplianceSuggestion::default()
            },
        );
        assert!(state.suggestion.is_some());
        clear_suggestion(&mut state);
        assert!(state.suggestion.is_none());
    }

    #[test]
    fn mark_saved_flips_the_new_flag() {
        let mut state = ComplianceState::default();
        set_read(
            &mut state,
            ComplianceRead {
                is_new: true,
                policy: CompliancePolicy::default_for(URN),
            },
        );
        mark_saved(&mut state, saved_policy());
        let read = state.read.expect("read present");
        assert!(!read.is_new);
        assert_eq!(read.policy, saved_policy());
    }

    #[test]
    fn personal_data_choice_round_trips_select_values() {
        for choice in [
            PersonalDataChoice::Unknown,
            PersonalDataChoice::Yes,
            PersonalDataChoice::No,
        ] {
            assert_eq!(PersonalDataChoice::from_value(choice.as_value()), choice);
            assert_eq!(
                PersonalDataChoice::from_option(choice.as_option()),
                choice
            );
        }
    }
}
