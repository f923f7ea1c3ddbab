//! Link list state and pure transformations for testing outside wasm.

use cairn_api_models::InstitutionalLink;

/// UI-friendly link snapshot used across the list and edit dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRow {
    /// Target URL of the link.
    pub url: String,
    /// Human-readable description shown in the list.
    pub description: String,
    /// Urn of the user who recorded the link.
    pub author_urn: String,
    /// Creation date formatted for display.
    pub created_label: String,
    /// Resource association when it differs from the owning dataset.
    pub resource_urn: Option<String>,
}

impl From<InstitutionalLink> for LinkRow {
    fn from(link: InstitutionalLink) -> Self {
        Self {
            url: link.url,
            description: link.description,
            author_urn: link.author_urn,
            created_label: link.created_at.format("%Y-%m-%d").to_string(),
            resource_urn: link.resource_urn,
        }
    }
}

/// Link list slice stored in the app state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LinksState {
    /// Link rows in server order.
    pub rows: Vec<LinkRow>,
    /// Whether a link mutation is in flight.
    pub busy: bool,
}

/// Replace the link rows with a fresh snapshot.
pub fn set_rows(state: &mut LinksState, rows: Vec<LinkRow>) {
    state.rows = rows;
}

/// Drop the row keyed by `(url, resource urn)` after a confirmed removal.
pub fn remove_row(state: &mut LinksState, url: &str, resource_urn: Option<&str>) {
    state
        .rows
        .retain(|row| row.url != url || row.resource_urn.as_deref() != resource_urn);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn row(url: &str, resource_urn: Option<&str>) -> LinkRow {
        LinkRow {
            url: url.to_string(),
            description: "Runbook".to_string(),
            author_urn: "urn:li:corpuser:jdoe".to_string(),
            created_label: "2026-01-05".to_string(),
            resource_urn: resource_urn.map(ToString::to_string),
        }
    }

    #[test]
    fn row_conversion_formats_the_creation_date() {
        let link = InstitutionalLink {
            url: "https://wiki.example/runbook".to_string(),
            description: "Runbook".to_string(),
            author_urn: "urn:li:corpuser:jdoe".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).unwrap(),
            resource_urn: None,
        };
        let row = LinkRow::from(link);
        assert_eq!(row.created_label, "2026-01-05");
        assert!(row.resource_urn.is_none());
    }

    #[test]
    fn remove_row_matches_url_and_resource() {
        let mut state = LinksState {
            rows: vec![
                row("https://a", None),
                row("https://a", Some("urn:li:dataset:2")),
                row("https://b", None),
            ],
            busy: false,
        };
        remove_row(&mut state, "https://a", Some("urn:li:dataset:2"));
        assert_eq!(state.rows.len(), 2);
        assert!(state.rows.iter().all(|r| r.resource_urn.is_none()));

        remove_row(&mut state, "https://a", None);
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.rows[0].url, "https://b");
    }

    #[test]
    fn set_rows_replaces_the_snapshot() {
        let mut state = LinksState::default();
        set_rows(&mut state, vec![row("https://a", None)]);
        assert_eq!(state.rows.len(), 1);
        set_rows(&mut state, Vec::new());
        assert!(state.rows.is_empty());
    }
}
