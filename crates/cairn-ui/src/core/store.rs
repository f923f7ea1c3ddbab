//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - Reducer helpers are plain functions over slices, testable off-wasm.

use crate::core::auth::SessionState;
use crate::features::compliance::state::ComplianceState;
use crate::features::links::state::{LinksState, set_rows};
use cairn_api_models::DatasetView;
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Session state for the signed-in user.
    pub session: SessionState,
    /// Identity of the dataset currently on screen.
    pub dataset: DatasetMeta,
    /// Link list state.
    pub links: LinksState,
    /// Compliance policy state.
    pub compliance: ComplianceState,
}

/// Identity of the dataset the detail page is showing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DatasetMeta {
    /// Urn of the dataset, absent until a view loads.
    pub urn: Option<String>,
    /// Display name of the dataset.
    pub name: Option<String>,
}

/// Shared dispatcher for the app store.
#[must_use]
pub fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::<AppStore>::new()
}

/// Apply a fetched dataset view: identity plus the refreshed link rows.
pub fn apply_dataset_view(store: &mut AppStore, view: DatasetView) {
    store.dataset.urn = Some(view.urn);
    store.dataset.name = Some(view.name);
    set_rows(
        &mut store.links,
        view.links.into_iter().map(Into::into).collect(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_api_models::InstitutionalLink;
    use chrono::{TimeZone, Utc};

    #[test]
    fn dataset_view_updates_identity_and_rows() {
        let mut store = AppStore::default();
        let view = DatasetView {
            urn: "urn:li:dataset:1".to_string(),
            name: "events.page_views".to_string(),
            description: None,
            links: vec![InstitutionalLink {
                url: "https://wiki.example/runbook".to_string(),
                description: "Runbook".to_string(),
                author_urn: "urn:li:corpuser:jdoe".to_string(),
                created_at: Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap(),
                resource_urn: None,
            }],
        };
        apply_dataset_view(&mut store, view);
        assert_eq!(store.dataset.urn.as_deref(), Some("urn:li:dataset:1"));
        assert_eq!(store.dataset.name.as_deref(), Some("events.page_views"));
        assert_eq!(store.links.rows.len(), 1);
        assert_eq!(store.links.rows[0].description, "Runbook");
    }

    #[test]
    fn refetch_replaces_stale_rows() {
        let mut store = AppStore::default();
        let view = DatasetView {
            urn: "urn:li:dataset:1".to_string(),
            name: "events.page_views".to_string(),
            description: None,
            links: Vec::new(),
        };
        store.links.rows.push(crate::features::links::state::LinkRow {
            url: "https://stale".to_string(),
            description: "Stale".to_string(),
            author_urn: "urn:li:corpuser:old".to_string(),
            created_label: "2025-01-01".to_string(),
            resource_urn: None,
        });
        apply_dataset_view(&mut store, view);
        assert!(store.links.rows.is_empty());
    }
}
