//! API helpers for link mutations.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared ApiClient for session headers and error handling.
//! - The edit sequence is remove-then-create with no rollback; a failure
//!   after the remove leaves the link deleted.

use crate::features::links::logic::{LinkEditPlan, removal_target};
use crate::features::links::state::LinkRow;
use crate::services::api::ApiClient;
use crate::services::error::ApiResult;

/// Remove a link, resolving its target resource from the owning dataset.
///
/// # Errors
/// Returns an [`ApiError`](crate::services::error::ApiError) when the remove
/// request fails.
pub async fn delete_link(
    client: &ApiClient,
    dataset_urn: &str,
    row: &LinkRow,
) -> ApiResult<()> {
    client
        .remove_link(removal_target(row, dataset_urn), &row.url)
        .await
}

/// Execute a planned edit: remove the old link, then create the replacement.
///
/// # Errors
/// Returns the first failing call's [`ApiError`](crate::services::error::ApiError);
/// a failure on the create leaves the old link already removed.
pub async fn apply_edit(client: &ApiClient, plan: &LinkEditPlan) -> ApiResult<()> {
    client.remove_link(&plan.target_urn, &plan.remove_url).await?;
    client.add_link(&plan.target_urn, &plan.create).await
}
