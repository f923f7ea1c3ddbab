//! Link validation and edit planning helpers.
//!
//! # Design
//! - Validation returns data so the dialog decides how to render it.
//! - A bad URL format is a warning, not a failure; only missing fields block.
//! - Edit planning resolves the target urn and the precondition before any
//!   remote call is attempted.

use crate::core::auth::SessionUser;
use crate::core::logic::looks_like_http_url;
use crate::features::links::state::LinkRow;
use cairn_api_models::LinkCreateRequest;

/// Validation failures that block an edit submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkDraftError {
    /// The URL field is empty.
    UrlRequired,
    /// The description field is empty.
    DescriptionRequired,
}

/// Conditions that abort an edit before any remote call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditBlocked {
    /// No signed-in user to attribute the replacement link to.
    MissingUser,
}

/// Trimmed, validated link fields from the edit dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkDraft {
    /// Target URL for the link.
    pub url: String,
    /// Description for the link.
    pub description: String,
}

/// The two remote calls an edit performs, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkEditPlan {
    /// Resource urn both calls target.
    pub target_urn: String,
    /// URL of the link to remove first.
    pub remove_url: String,
    /// Payload for the replacement link.
    pub create: LinkCreateRequest,
}

/// Resource urn a link mutation targets, falling back to the owning dataset.
#[must_use]
pub fn removal_target<'a>(row: &'a LinkRow, dataset_urn: &'a str) -> &'a str {
    row.resource_urn.as_deref().unwrap_or(dataset_urn)
}

/// Validate raw dialog fields into a draft.
///
/// # Errors
/// Returns [`LinkDraftError`] when a required field is empty. URL format is
/// deliberately not checked here; see [`url_format_warning`].
pub fn validate_draft(url: &str, description: &str) -> Result<LinkDraft, LinkDraftError> {
    let url = url.trim();
    let description = description.trim();
    if url.is_empty() {
        return Err(LinkDraftError::UrlRequired);
    }
    if description.is_empty() {
        return Err(LinkDraftError::DescriptionRequired);
    }
    Ok(LinkDraft {
        url: url.to_string(),
        description: description.to_string(),
    })
}

/// Whether the URL deserves a non-fatal format warning.
#[must_use]
pub fn url_format_warning(url: &str) -> bool {
    let trimmed = url.trim();
    !trimmed.is_empty() && !looks_like_http_url(trimmed)
}

/// Plan the remove/create sequence for an edit.
///
/// # Errors
/// Returns [`EditBlocked::MissingUser`] when no signed-in user is present;
/// in that case no remote call may be made.
pub fn plan_edit(
    user: Option<&SessionUser>,
    dataset_urn: &str,
    row: &LinkRow,
    draft: &LinkDraft,
) -> Result<LinkEditPlan, EditBlocked> {
    match user {
        Some(user) if user.is_valid() => {}
        _ => return Err(EditBlocked::MissingUser),
    }
    Ok(LinkEditPlan {
        target_urn: removal_target(row, dataset_urn).to_string(),
        remove_url: row.url.clone(),
        create: LinkCreateRequest {
            url: draft.url.clone(),
            description: draft.description.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = "urn:li:dataset:1";

    fn user() -> SessionUser {
        SessionUser {
            urn: "urn:li:corpuser:jdoe".to_string(),
            display_name: "J. Doe".to_string(),
        }
    }

    fn row(resource_urn: Option<&str>) -> LinkRow {
        LinkRow {
            url: "https://wiki.example/old".to_string(),
            description: "Old".to_string(),
            author_urn: "urn:li:corpuser:prior".to_string(),
            created_label: "2025-11-02".to_string(),
            resource_urn: resource_urn.map(ToString::to_string),
        }
    }

    #[test]
    fn removal_target_prefers_the_explicit_association() {
        assert_eq!(removal_target(&row(Some("urn:li:dataset:2")), DATASET), "urn:li:dataset:2");
        assert_eq!(removal_target(&row(None), DATASET), DATASET);
    }

    #[test]
    fn validate_draft_requires_both_fields() {
        assert_eq!(validate_draft("  ", "Runbook"), Err(LinkDraftError::UrlRequired));
        assert_eq!(
            validate_draft("https://wiki.example", "  "),
            Err(LinkDraftError::DescriptionRequired)
        );
        let draft = validate_draft(" https://wiki.example ", " Runbook ").expect("draft");
        assert_eq!(draft.url, "https://wiki.example");
        assert_eq!(draft.description, "Runbook");
    }

    #[test]
    fn url_warning_is_non_fatal_and_format_only() {
        assert!(url_format_warning("wiki.example/runbook"));
        assert!(!url_format_warning("https://wiki.example/runbook"));
        assert!(!url_format_warning("   "));
        // A warned URL still validates.
        assert!(validate_draft("wiki.example/runbook", "Runbook").is_ok());
    }

    #[test]
    fn plan_edit_requires_a_signed_in_user() {
        let draft = LinkDraft {
            url: "https://wiki.example/new".to_string(),
            description: "New".to_string(),
        };
        assert_eq!(
            plan_edit(None, DATASET, &row(None), &draft),
            Err(EditBlocked::MissingUser)
        );
        let blank = SessionUser {
            urn: String::new(),
            display_name: "Ghost".to_string(),
        };
        assert_eq!(
            plan_edit(Some(&blank), DATASET, &row(None), &draft),
            Err(EditBlocked::MissingUser)
        );
    }

    #[test]
    fn plan_edit_targets_the_resolved_urn_with_new_fields() {
        let draft = LinkDraft {
            url: "https://wiki.example/new".to_string(),
            description: "New".to_string(),
        };
        let plan = plan_edit(Some(&user()), DATASET, &row(Some("urn:li:dataset:2")), &draft)
            .expect("plan");
        assert_eq!(plan.target_urn, "urn:li:dataset:2");
        assert_eq!(plan.remove_url, "https://wiki.example/old");
        assert_eq!(plan.create.url, "https://wiki.example/new");
        assert_eq!(plan.create.description, "New");
    }
}
