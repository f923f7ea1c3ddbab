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
//! Shared HTTP DTOs for the Cairn catalog API.
//!
//! These types are re-used by the web UI for request/response encoding so the
//! wire contract stays deterministic. Payload transforms (default-policy
//! synthesis, retention extraction) live next to the types they shape so the
//! mapping stays a single source of truth.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// RFC9457-compatible problem document surfaced on validation/runtime errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// Best human-readable message for toasts and logs.
    #[must_use]
    pub fn message(&self) -> &str {
        self.detail.as_deref().unwrap_or(&self.title)
    }
}

/// Data-classification levels applied to a dataset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DataClassification {
    /// Safe for public consumption.
    Public,
    /// Internal use only.
    Internal,
    /// Restricted to approved consumers.
    Confidential,
    /// Subject to the strictest access controls.
    HighlyConfidential,
}

impl DataClassification {
    /// All classification levels in ascending sensitivity order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Public,
            Self::Internal,
            Self::Confidential,
            Self::HighlyConfidential,
        ]
    }

    /// Stable string value used by select controls and the wire format.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Confidential => "confidential",
            Self::HighlyConfidential => "highly_confidential",
        }
    }

    /// Parse a select-control value back into a classification level.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|level| level.as_value() == value)
    }
}

/// Retention purge strategies applied to a dataset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PurgePolicy {
    /// Records are purged automatically on a schedule.
    AutoPurge,
    /// Records are purged through a manual workflow.
    ManualPurge,
    /// Records age out after a bounded retention window.
    LimitedRetention,
    /// Purging does not apply to this dataset.
    NotApplicable,
}

impl PurgePolicy {
    /// All purge strategies in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::AutoPurge,
            Self::ManualPurge,
            Self::LimitedRetention,
            Self::NotApplicable,
        ]
    }

    /// Stable string value used by select controls and the wire format.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::AutoPurge => "auto_purge",
            Self::ManualPurge => "manual_purge",
            Self::LimitedRetention => "limited_retention",
            Self::NotApplicable => "not_applicable",
        }
    }

    /// Parse a select-control value back into a purge strategy.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|policy| policy.as_value() == value)
    }
}

/// Per-field classification annotation carried inside a compliance policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldClassification {
    /// Dotted path of the annotated field within the dataset schema.
    pub field_path: String,
    /// Classification level applied to the field.
    pub classification: DataClassification,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Whether the field carries personal data, when known.
    pub contains_personal_data: Option<bool>,
}

/// Compliance policy attached to a dataset, keyed by its urn.
///
/// The retention fields (`purge_policy`, `purge_note`) are embedded here for
/// editing but persist through a separate endpoint; [`Self::split_retention`]
/// produces the two write payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompliancePolicy {
    /// Urn of the dataset this policy describes.
    pub dataset_urn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Dataset-level classification, when set.
    pub classification: Option<DataClassification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Whether the dataset contains personal data, when known.
    pub contains_personal_data: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Per-field classification annotations.
    pub field_classifications: Vec<FieldClassification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Retention purge strategy (persisted via the retention endpoint).
    pub purge_policy: Option<PurgePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Free-form retention note (persisted via the retention endpoint).
    pub purge_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Timestamp of the last persisted change, absent on unsaved policies.
    pub modified_at: Option<DateTime<Utc>>,
}

impl CompliancePolicy {
    /// Synthesize the default policy for a dataset that has none persisted.
    #[must_use]
    pub fn default_for(dataset_urn: impl Into<String>) -> Self {
        Self {
            dataset_urn: dataset_urn.into(),
            classification: None,
            contains_personal_data: None,
            field_classifications: Vec::new(),
            purge_policy: None,
            purge_note: None,
            modified_at: None,
        }
    }

    /// Split the policy into the two write payloads: the policy body with
    /// retention fields stripped, and the extracted retention fields.
    #[must_use]
    pub fn split_retention(&self) -> (Self, RetentionPolicy) {
        let retention = RetentionPolicy {
            dataset_urn: self.dataset_urn.clone(),
            purge_policy: self.purge_policy,
            purge_note: self.purge_note.clone(),
        };
        let mut stripped = self.clone();
        stripped.purge_policy = None;
        stripped.purge_note = None;
        (stripped, retention)
    }
}

/// Retention payload persisted separately from the compliance policy body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetentionPolicy {
    /// Urn of the dataset this retention entry describes.
    pub dataset_urn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Retention purge strategy, when set.
    pub purge_policy: Option<PurgePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Free-form retention note, when set.
    pub purge_note: Option<String>,
}

/// Machine-produced classification suggestion for a dataset.
///
/// Deserializes from an empty object, which is also the shape the client
/// falls back to when a suggestion read fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ComplianceSuggestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Identifier used when posting feedback for this suggestion.
    pub uid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Suggested dataset-level classification.
    pub classification: Option<DataClassification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Suggested personal-data flag.
    pub contains_personal_data: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Model confidence in the range 0.0-1.0, when reported.
    pub confidence: Option<f64>,
}

impl ComplianceSuggestion {
    /// Whether the suggestion carries anything worth surfacing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.classification.is_none() && self.contains_personal_data.is_none()
    }
}

/// Accept/discard signal recorded against a suggestion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionFeedback {
    /// The suggestion was applied to the working policy.
    Accepted,
    /// The suggestion was dismissed without being applied.
    Discarded,
}

/// Body accepted by `POST {dataset}/compliance/suggestion/feedback`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionFeedbackRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Identifier of the suggestion the feedback refers to.
    pub uid: Option<Uuid>,
    /// Whether the suggestion was accepted or discarded.
    pub feedback: SuggestionFeedback,
}

/// User-curated URL annotation attached to a catalog entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstitutionalLink {
    /// Target URL of the annotation.
    pub url: String,
    /// Human-readable description shown in the link list.
    pub description: String,
    /// Urn of the user who recorded the link.
    pub author_urn: String,
    /// Timestamp the link was recorded.
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Resource the link is associated with when it differs from the owning
    /// entity.
    pub resource_urn: Option<String>,
}

/// Body accepted by `POST {dataset}/links`.
///
/// Authorship and the creation timestamp are attributed by the backend from
/// the caller's session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkCreateRequest {
    /// Target URL of the new link.
    pub url: String,
    /// Human-readable description for the new link.
    pub description: String,
}

/// Dataset view returned by `GET /v1/datasets/{id-or-urn}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetView {
    /// Urn of the dataset.
    pub urn: String,
    /// Display name of the dataset.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional free-form description.
    pub description: Option<String>,
    #[serde(default)]
    /// Institutional-memory links attached to the dataset.
    pub links: Vec<InstitutionalLink>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const URN: &str = "urn:li:dataset:1";

    fn policy_with_retention() -> CompliancePolicy {
        CompliancePolicy {
            dataset_urn: URN.to_string(),
            classification: Some(DataClassification::Confidential),
            contains_personal_data: Some(true),
            field_classifications: vec![FieldClassification {
                field_path: "user.email".to_string(),
                classification: DataClassification::HighlyConfidential,
                contains_personal_data: Some(true),
            }],
            purge_policy: Some(PurgePolicy::LimitedRetention),
            purge_note: Some("90 days".to_string()),
            modified_at: Some(Utc.timestamp_millis_opt(1_000).unwrap()),
        }
    }

    #[test]
    fn default_policy_carries_only_the_urn() {
        let policy = CompliancePolicy::default_for(URN);
        assert_eq!(policy.dataset_urn, URN);
        assert!(policy.classification.is_none());
        assert!(policy.contains_personal_data.is_none());
        assert!(policy.field_classifications.is_empty());
        assert!(policy.purge_policy.is_none());
        assert!(policy.purge_note.is_none());
        assert!(policy.modified_at.is_none());
    }

    #[test]
    fn split_retention_strips_and_extracts() {
        let policy = policy_with_retention();
        let (stripped, retention) = policy.split_retention();

        assert!(stripped.purge_policy.is_none());
        assert!(stripped.purge_note.is_none());
        assert_eq!(stripped.classification, policy.classification);
        assert_eq!(stripped.field_classifications.len(), 1);

        assert_eq!(retention.dataset_urn, URN);
        assert_eq!(retention.purge_policy, Some(PurgePolicy::LimitedRetention));
        assert_eq!(retention.purge_note.as_deref(), Some("90 days"));
    }

    #[test]
    fn split_retention_on_default_yields_empty_retention() {
        let (stripped, retention) = CompliancePolicy::default_for(URN).split_retention();
        assert_eq!(stripped, CompliancePolicy::default_for(URN));
        assert!(retention.purge_policy.is_none());
        assert!(retention.purge_note.is_none());
    }

    #[test]
    fn suggestion_deserializes_from_empty_object() {
        let suggestion: ComplianceSuggestion =
            serde_json::from_str("{}").expect("empty object should parse");
        assert!(suggestion.is_empty());
        assert!(suggestion.uid.is_none());
        assert!(suggestion.confidence.is_none());
    }

    #[test]
    fn link_without_association_deserializes_to_none() {
        let link: InstitutionalLink = serde_json::from_str(
            r#"{
                "url": "https://wiki.example/runbook",
                "description": "Runbook",
                "author_urn": "urn:li:corpuser:jdoe",
                "created_at": "2026-01-05T09:00:00Z"
            }"#,
        )
        .expect("link should parse");
        assert!(link.resource_urn.is_none());
        assert_eq!(link.description, "Runbook");
    }

    #[test]
    fn classification_values_round_trip_select_controls() {
        for level in DataClassification::all() {
            assert_eq!(DataClassification::from_value(level.as_value()), Some(level));
        }
        assert!(DataClassification::from_value("unknown").is_none());
    }

    #[test]
    fn purge_values_round_trip_select_controls() {
        for policy in PurgePolicy::all() {
            assert_eq!(PurgePolicy::from_value(policy.as_value()), Some(policy));
        }
        assert!(PurgePolicy::from_value("").is_none());
    }

    #[test]
    fn problem_details_prefers_detail_over_title() {
        let problem = ProblemDetails {
            kind: "about:blank".to_string(),
            title: "Bad Request".to_string(),
            status: 400,
            detail: Some("url is required".to_string()),
        };
        assert_eq!(problem.message(), "url is required");

        let bare = ProblemDetails {
            detail: None,
            ..problem
        };
        assert_eq!(bare.message(), "Bad Request");
    }
}
