//! Dashboard API capabilities and their HTTP implementation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The view controller only sees the `DashboardApi` and
//! `AuthorizationProbe` traits, so tests can substitute fakes. The
//! `HttpDashboardApi` implementation talks to the backend with `gloo-net`
//! in the browser; on the server (SSR) every call fails with a network
//! error since these endpoints are only meaningful after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are mapped through `ApiError::from_status`. The probe
//! turns explicit access denials into `Ok(false)` and only reports
//! transport failures as errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{Project, ProjectUpdate};

/// Project data operations consumed by the public dashboard view.
#[async_trait(?Send)]
pub trait DashboardApi {
    /// Fetch a public dashboard (project plus embedded charts) by its share name.
    async fn fetch_public_dashboard(&self, name: &str) -> Result<Project, ApiError>;

    /// Fetch the full project; only succeeds for members of the owning team.
    async fn fetch_project(&self, project_id: i64) -> Result<Project, ApiError>;

    /// Persist the cosmetic dashboard fields.
    async fn update_project(&self, project_id: i64, update: &ProjectUpdate) -> Result<Project, ApiError>;
}

/// Answers whether the current viewer may edit a project.
#[async_trait(?Send)]
pub trait AuthorizationProbe {
    /// `Ok(false)` means the viewer is not an editor; `Err` means the
    /// question could not be answered.
    async fn can_edit(&self, project_id: i64) -> Result<bool, ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn public_dashboard_endpoint(base: &str, name: &str) -> String {
    format!("{base}/project/dashboard/{name}")
}

#[cfg(any(test, feature = "hydrate"))]
fn project_endpoint(base: &str, project_id: i64) -> String {
    format!("{base}/project/{project_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(format!("Bearer {token}"))
}

/// Map the outcome of a full-project fetch onto an edit-permission answer.
fn permission_from_fetch(result: Result<Project, ApiError>) -> Result<bool, ApiError> {
    match result {
        Ok(_) => Ok(true),
        Err(e) if e.is_access_denied() => Ok(false),
        Err(e) => Err(e),
    }
}

/// HTTP-backed implementation of the dashboard capabilities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpDashboardApi {
    base_url: String,
}

impl HttpDashboardApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_owned() }
    }

    #[cfg(test)]
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer_header};

    const TOKEN_STORAGE_KEY: &str = "token";

    /// Attach the stored session token, if the viewer is logged in.
    pub(super) fn authorize(builder: RequestBuilder) -> RequestBuilder {
        let token = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten());
        match token.as_deref().and_then(bearer_header) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) fn network(e: gloo_net::Error) -> ApiError {
        ApiError::Network(e.to_string())
    }
}

#[async_trait(?Send)]
impl DashboardApi for HttpDashboardApi {
    async fn fetch_public_dashboard(&self, name: &str) -> Result<Project, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = public_dashboard_endpoint(&self.base_url, name);
            let resp = browser::authorize(gloo_net::http::Request::get(&url))
                .send()
                .await
                .map_err(browser::network)?;
            browser::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }

    async fn fetch_project(&self, project_id: i64) -> Result<Project, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = project_endpoint(&self.base_url, project_id);
            let resp = browser::authorize(gloo_net::http::Request::get(&url))
                .send()
                .await
                .map_err(browser::network)?;
            browser::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = project_id;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }

    async fn update_project(&self, project_id: i64, update: &ProjectUpdate) -> Result<Project, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = project_endpoint(&self.base_url, project_id);
            let resp = browser::authorize(gloo_net::http::Request::put(&url))
                .json(update)
                .map_err(browser::network)?
                .send()
                .await
                .map_err(browser::network)?;
            browser::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (project_id, update);
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}

#[async_trait(?Send)]
impl AuthorizationProbe for HttpDashboardApi {
    async fn can_edit(&self, project_id: i64) -> Result<bool, ApiError> {
        permission_from_fetch(self.fetch_project(project_id).await)
    }
}
