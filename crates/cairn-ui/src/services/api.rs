//! HTTP client helpers (REST).
//!
//! # Design
//! - One thin wrapper per verb; endpoint methods stay one line of intent.
//! - 404 maps to [`ApiError::NotFound`] so callers can branch on it.
//! - Error bodies are parsed as RFC9457 problem documents when possible.

use crate::core::logic::{
    DatasetRef, activity_path, compliance_path, dataset_path, link_remove_path, links_path,
    retention_path, suggestion_feedback_path, suggestion_path, suggestions_path,
};
use crate::services::error::{ApiError, ApiResult};
use cairn_api_models::{
    CompliancePolicy, ComplianceSuggestion, DatasetView, LinkCreateRequest, ProblemDetails,
    RetentionPolicy, SuggestionFeedbackRequest,
};
use cairn_events::Event;
use gloo_net::http::{Request, Response};

/// Session token header attached to every catalog request.
const SESSION_HEADER: &str = "x-cairn-session";

/// REST client for the catalog API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    /// Origin the request paths are appended to.
    pub base_url: String,
    /// Session token forwarded on every request, when present.
    pub session_token: Option<String>,
}

impl ApiClient {
    /// Create a client for the given origin and optional session token.
    pub fn new(base_url: impl Into<String>, session_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            session_token,
        }
    }

    fn decorate(&self, request: Request) -> Request {
        match &self.session_token {
            Some(token) => request.header(SESSION_HEADER, token),
            None => request,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn check(path: &str, response: Response) -> ApiResult<Response> {
        if response.status() == 404 {
            return Err(ApiError::NotFound {
                path: path.to_string(),
            });
        }
        if !response.ok() {
            let status = response.status();
            let message = response
                .json::<ProblemDetails>()
                .await
                .map_or_else(|_| "request failed".to_string(), |problem| problem.message().to_string());
            return Err(ApiError::Status { status, message });
        }
        Ok(response)
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .decorate(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|err| ApiError::Network {
                message: err.to_string(),
            })?;
        let response = Self::check(path, response).await?;
        response.json::<T>().await.map_err(|err| ApiError::Decode {
            message: err.to_string(),
        })
    }

    async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        let request = self
            .decorate(Request::post(&self.url(path)))
            .json(body)
            .map_err(|err| ApiError::Decode {
                message: err.to_string(),
            })?;
        let response = request.send().await.map_err(|err| ApiError::Network {
            message: err.to_string(),
        })?;
        Self::check(path, response).await.map(|_| ())
    }

    async fn delete_empty(&self, path: &str) -> ApiResult<()> {
        let response = self
            .decorate(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|err| ApiError::Network {
                message: err.to_string(),
            })?;
        Self::check(path, response).await.map(|_| ())
    }

    /// Fetch the dataset view (name + links) used by the refetch flow.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn fetch_dataset(&self, dataset: &DatasetRef) -> ApiResult<DatasetView> {
        self.get_json(&dataset_path(dataset)).await
    }

    /// Attach a link to the given resource.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn add_link(
        &self,
        resource_urn: &str,
        request: &LinkCreateRequest,
    ) -> ApiResult<()> {
        self.post_json(&links_path(resource_urn), request).await
    }

    /// Remove the link keyed by `(resource urn, url)`.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn remove_link(&self, resource_urn: &str, url: &str) -> ApiResult<()> {
        self.delete_empty(&link_remove_path(resource_urn, url)).await
    }

    /// Fetch the persisted compliance policy for a dataset.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn fetch_compliance(&self, urn: &str) -> ApiResult<CompliancePolicy> {
        self.get_json(&compliance_path(urn)).await
    }

    /// Persist the compliance policy body (retention already stripped).
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn save_compliance(
        &self,
        urn: &str,
        policy: &CompliancePolicy,
    ) -> ApiResult<()> {
        self.post_json(&compliance_path(urn), policy).await
    }

    /// Persist the retention fields extracted from a policy.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn save_retention(
        &self,
        urn: &str,
        retention: &RetentionPolicy,
    ) -> ApiResult<()> {
        self.post_json(&retention_path(urn), retention).await
    }

    /// Fetch suggestions for a dataset addressed by numeric id.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn fetch_suggestions(&self, dataset_id: u64) -> ApiResult<ComplianceSuggestion> {
        self.get_json(&suggestions_path(dataset_id)).await
    }

    /// Fetch the suggestion for a dataset addressed by urn.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn fetch_suggestion(&self, urn: &str) -> ApiResult<ComplianceSuggestion> {
        self.get_json(&suggestion_path(urn)).await
    }

    /// Record accept/discard feedback for a suggestion.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn save_suggestion_feedback(
        &self,
        urn: &str,
        request: &SuggestionFeedbackRequest,
    ) -> ApiResult<()> {
        self.post_json(&suggestion_feedback_path(urn), request).await
    }

    /// Post an activity event to the usage sink.
    ///
    /// # Errors
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn record_activity(&self, event: &Event) -> ApiResult<()> {
        self.post_json(activity_path(), event).await
    }
}
