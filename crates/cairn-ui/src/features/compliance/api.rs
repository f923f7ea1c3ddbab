//! API helpers for compliance reads and writes.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Compose the shared ApiClient with the pure folds from `logic`.
//! - The save sequence is policy-then-retention with no rollback; a retention
//!   failure leaves the policy persisted.

use crate::features::compliance::logic::{SaveError, fold_policy_read, fold_suggestion_read};
use crate::features::compliance::state::ComplianceRead;
use crate::services::api::ApiClient;
use crate::services::error::{ApiError, ApiResult};
use cairn_api_models::{
    CompliancePolicy, ComplianceSuggestion, SuggestionFeedback, SuggestionFeedbackRequest,
};
use uuid::Uuid;

/// Read the compliance policy for a dataset, synthesizing a default on 404.
///
/// # Errors
/// Propagates every [`ApiError`] except not-found.
pub async fn read_by_urn(client: &ApiClient, urn: &str) -> Result<ComplianceRead, ApiError> {
    fold_policy_read(urn, client.fetch_compliance(urn).await)
}

/// Persist a policy: the stripped body first, then the extracted retention.
///
/// # Errors
/// Returns [`SaveError::Policy`] when nothing was persisted, or
/// [`SaveError::Retention`] when the policy body was saved but retention was not.
pub async fn save(
    client: &ApiClient,
    urn: &str,
    policy: &CompliancePolicy,
) -> Result<(), SaveError> {
    let (stripped, retention) = policy.split_retention();
    client
        .save_compliance(urn, &stripped)
        .await
        .map_err(SaveError::Policy)?;
    client
        .save_retention(urn, &retention)
        .await
        .map_err(SaveError::Retention)
}

/// Read suggestions for a dataset addressed by numeric id; errors propagate.
///
/// # Errors
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn read_suggestion(
    client: &ApiClient,
    dataset_id: u64,
) -> ApiResult<ComplianceSuggestion> {
    client.fetch_suggestions(dataset_id).await
}

/// Read the suggestion for a dataset by urn; every failure folds to empty.
pub async fn read_suggestion_by_urn(client: &ApiClient, urn: &str) -> ComplianceSuggestion {
    fold_suggestion_read(client.fetch_suggestion(urn).await)
}

/// Record accept/discard feedback for a suggestion.
///
/// # Errors
/// Returns an [`ApiError`] when the request fails.
pub async fn save_suggestion_feedback(
    client: &ApiClient,
    urn: &str,
    uid: Option<Uuid>,
    feedback: SuggestionFeedback,
) -> ApiResult<()> {
    client
        .save_suggestion_feedback(urn, &SuggestionFeedbackRequest { uid, feedback })
        .await
}
