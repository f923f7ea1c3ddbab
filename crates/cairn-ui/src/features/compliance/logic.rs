//! Pure compliance read/save folds.
//!
//! # Design
//! - Not-found is the only error the read fold absorbs; everything else
//!   propagates untouched.
//! - The suggestion-by-urn fold absorbs every error into the empty suggestion.
//! - Save failures distinguish which of the two sequential writes broke.

use crate::features::compliance::state::ComplianceRead;
use crate::services::error::ApiError;
use cairn_api_models::{CompliancePolicy, ComplianceSuggestion};

/// Which of the two sequential writes of a save failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveError {
    /// The policy body write failed; nothing was persisted.
    Policy(ApiError),
    /// The retention write failed; the policy body was already persisted.
    Retention(ApiError),
}

/// Fold a policy fetch result into the read outcome.
///
/// # Errors
/// Propagates every [`ApiError`] except not-found, which synthesizes the
/// default policy for the urn and flags it as new.
pub fn fold_policy_read(
    urn: &str,
    result: Result<CompliancePolicy, ApiError>,
) -> Result<ComplianceRead, ApiError> {
    match result {
        Ok(policy) => Ok(ComplianceRead {
            is_new: false,
            policy,
        }),
        Err(err) if err.is_not_found() => Ok(ComplianceRead {
            is_new: true,
            policy: CompliancePolicy::default_for(urn),
        }),
        Err(err) => Err(err),
    }
}

/// Fold a suggestion fetch result, treating every failure as "no suggestion".
#[must_use]
pub fn fold_suggestion_read(
    result: Result<ComplianceSuggestion, ApiError>,
) -> ComplianceSuggestion {
    result.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_api_models::DataClassification;

    const URN: &str = "urn:li:dataset:1";

    #[test]
    fn not_found_folds_to_the_default_policy_flagged_new() {
        let read = fold_policy_read(
            URN,
            Err(ApiError::NotFound {
                path: "/v1/datasets/urn%3Ali%3Adataset%3A1/compliance".to_string(),
            }),
        )
        .expect("not-found folds to a default policy");
        assert!(read.is_new);
        assert_eq!(read.policy, CompliancePolicy::default_for(URN));
    }

    #[test]
    fn success_passes_the_payload_through_unmodified() {
        let mut policy = CompliancePolicy::default_for(URN);
        policy.classification = Some(DataClassification::Internal);
        let read = fold_policy_read(URN, Ok(policy.clone())).expect("success folds");
        assert!(!read.is_new);
        assert_eq!(read.policy, policy);
    }

    #[test]
    fn other_errors_propagate() {
        let err = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(fold_policy_read(URN, Err(err.clone())), Err(err));
    }

    #[test]
    fn suggestion_fold_never_propagates() {
        for err in [
            ApiError::NotFound {
                path: "/v1/x".to_string(),
            },
            ApiError::Status {
                status: 503,
                message: "unavailable".to_string(),
            },
            ApiError::Network {
                message: "offline".to_string(),
            },
            ApiError::Decode {
                message: "bad json".to_string(),
            },
        ] {
            let suggestion = fold_suggestion_read(Err(err));
            assert_eq!(suggestion, ComplianceSuggestion::default());
            assert!(suggestion.is_empty());
        }
    }

    #[test]
    fn suggestion_fold_passes_payloads_through() {
        let suggestion = ComplianceSuggestion {
            classification: Some(DataClassification::Confidential),
            ..ComplianceSuggestion::default()
        };
        assert_eq!(fold_suggestion_read(Ok(suggestion.clone())), suggestion);
    }
}
