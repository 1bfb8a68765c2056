//! HTTP client for the sign-up service, over `gloo-net`.

use club_signup_core::api::{routes, ApiError, Confirmation, Rejection};
use club_signup_core::ActivityCatalog;
use gloo_net::http::{Request, Response};

/// Thin client over the sign-up service.
///
/// `base_url` is empty by default, producing same-origin relative URLs;
/// tests and alternative deployments can point it elsewhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Fetch the full activity catalog.
    pub async fn list_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let response = Request::get(&routes::activities_url(&self.base_url))
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if !response.ok() {
            return Err(Self::rejection(response).await);
        }

        response
            .json::<ActivityCatalog>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Register `email` for `activity`.
    pub async fn sign_up(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = routes::signup_url(&self.base_url, activity, email);
        let response = Request::post(&url)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Self::confirmation(response).await
    }

    /// Remove `email` from `activity`'s roster.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = routes::unregister_url(&self.base_url, activity, email);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Self::confirmation(response).await
    }

    /// 2xx → server confirmation text; anything else → `Rejected`.
    /// The status code decides the branch, never the body.
    async fn confirmation(response: Response) -> Result<String, ApiError> {
        if !response.ok() {
            return Err(Self::rejection(response).await);
        }

        response
            .json::<Confirmation>()
            .await
            .map(|confirmation| confirmation.message)
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Read the `{detail}` body best-effort; a rejection without a
    /// parseable detail is still a rejection.
    async fn rejection(response: Response) -> ApiError {
        let status = response.status();
        let detail = response
            .json::<Rejection>()
            .await
            .ok()
            .and_then(|rejection| rejection.detail);
        ApiError::Rejected { status, detail }
    }
}
