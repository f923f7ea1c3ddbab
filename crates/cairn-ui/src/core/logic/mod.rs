//! Pure UI helpers extracted from components for non-wasm testing.
//!
//! # Design
//! - Keep every catalog path builder here so the wire conventions have one home.
//! - Percent-encode urns; they carry `:` and other reserved characters.
//! - Validation helpers return data, not DOM state.

use std::fmt;

/// Address of a dataset as accepted by the catalog API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetRef {
    /// Numeric dataset identifier.
    Id(u64),
    /// Dataset urn.
    Urn(String),
}

impl DatasetRef {
    /// Path segment for this reference, percent-encoding urns.
    #[must_use]
    pub fn segment(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Urn(urn) => urlencoding::encode(urn).into_owned(),
        }
    }
}

impl fmt::Display for DatasetRef {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(formatter, "{id}"),
            Self::Urn(urn) => formatter.write_str(urn),
        }
    }
}

/// Base resource path for a dataset.
#[must_use]
pub fn dataset_path(dataset: &DatasetRef) -> String {
    format!("/v1/datasets/{}", dataset.segment())
}

/// Compliance policy endpoint for a dataset urn.
#[must_use]
pub fn compliance_path(urn: &str) -> String {
    format!("{}/compliance", dataset_path(&DatasetRef::Urn(urn.to_string())))
}

/// Suggestion endpoint addressed by numeric dataset id.
#[must_use]
pub fn suggestions_path(dataset_id: u64) -> String {
    format!("{}/compliance/suggestions", dataset_path(&DatasetRef::Id(dataset_id)))
}

/// Suggestion endpoint addressed by dataset urn.
#[must_use]
pub fn suggestion_path(urn: &str) -> String {
    format!("{}/compliance/suggestion", dataset_path(&DatasetRef::Urn(urn.to_string())))
}

/// Suggestion feedback endpoint for a dataset urn.
#[must_use]
pub fn suggestion_feedback_path(urn: &str) -> String {
    format!("{}/feedback", suggestion_path(urn))
}

/// Retention endpoint for a dataset urn.
#[must_use]
pub fn retention_path(urn: &str) -> String {
    format!("{}/retention", dataset_path(&DatasetRef::Urn(urn.to_string())))
}

/// Link collection endpoint for a resource urn.
#[must_use]
pub fn links_path(resource_urn: &str) -> String {
    format!("{}/links", dataset_path(&DatasetRef::Urn(resource_urn.to_string())))
}

/// Link removal endpoint keyed by `(resource urn, url)`.
#[must_use]
pub fn link_remove_path(resource_urn: &str, url: &str) -> String {
    format!("{}?url={}", links_path(resource_urn), urlencoding::encode(url))
}

/// Activity sink endpoint.
#[must_use]
pub const fn activity_path() -> &'static str {
    "/v1/activity"
}

/// Whether a value looks like an http(s) URL with a host.
#[must_use]
pub fn looks_like_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    rest.is_some_and(|host| !host.is_empty() && !host.starts_with('/'))
}
