//! # Backend HTTP Client
//!
//! Wrapper around the prediction-game JSON API.
//!
//! ## Endpoints
//!
//! - `GET  /api/me` - login state
//! - `POST /api/logout` - end the session
//! - `GET  /api/team-stages` - team → raw stage label (never cached)
//! - `GET  /api/verified-users` - verified participants
//! - `GET  /api/terms/status` - terms-of-service state
//! - `POST /api/terms/accept` - accept the terms

use crate::config::Config;
use crate::error::AppError;
use crate::types::{TermsStatus, UserInfo, VerifiedUser};
use cuptracker_core::StageMap;
use reqwest::header::{CACHE_CONTROL, HeaderValue, PRAGMA};
use serde::de::DeserializeOwned;
use std::time::{SystemTime, UNIX_EPOCH};

/// Query parameter carrying the cache-busting timestamp.
pub const CACHE_BUSTER_PARAM: &str = "_";

/// HTTP client for the prediction-game backend.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl BackendClient {
    /// Create a client from resolved configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("cuptracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Config(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request with optional Bearer auth.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = method.as_str(), %url, "backend request");
        let mut req = self.http.request(method, &url);
        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Send a request and handle connection errors.
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, AppError> {
        req.send().await.map_err(|e| {
            tracing::warn!(error = %e, "backend unreachable");
            AppError::ConnectionFailed(format!("{}: {e}", self.base_url))
        })
    }

    /// Map non-success statuses to errors.
    async fn check_status(&self, resp: reqwest::Response) -> Result<reqwest::Response, AppError> {
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AppError::Unauthorized);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "backend error response");
            return Err(AppError::Status(status.as_u16(), body));
        }
        Ok(resp)
    }

    /// Check the status and decode the JSON body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, AppError> {
        self.check_status(resp)
            .await?
            .json::<T>()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))
    }

    /// GET /api/me → login state.
    pub async fn me(&self) -> Result<UserInfo, AppError> {
        let req = self.request(reqwest::Method::GET, "/api/me");
        let resp = self.send(req).await?;
        self.handle_response(resp).await
    }

    /// POST /api/logout. The response body is ignored.
    pub async fn logout(&self) -> Result<(), AppError> {
        let req = self.request(reqwest::Method::POST, "/api/logout");
        let resp = self.send(req).await?;
        self.check_status(resp).await?;
        Ok(())
    }

    /// GET /api/team-stages → team → raw label, in backend key order.
    ///
    /// Every call bypasses caches: a millisecond timestamp is appended as a
    /// query parameter and `no-cache` headers are sent.
    pub async fn team_stages(&self) -> Result<StageMap, AppError> {
        let req = self
            .request(reqwest::Method::GET, "/api/team-stages")
            .query(&[(CACHE_BUSTER_PARAM, cache_buster())])
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .header(PRAGMA, HeaderValue::from_static("no-cache"));
        let resp = self.send(req).await?;
        let stages: StageMap = self.handle_response(resp).await?;
        tracing::debug!(teams = stages.len(), "team stages loaded");
        Ok(stages)
    }

    /// GET /api/verified-users → verified participants.
    pub async fn verified_users(&self) -> Result<Vec<VerifiedUser>, AppError> {
        let req = self.request(reqwest::Method::GET, "/api/verified-users");
        let resp = self.send(req).await?;
        self.handle_response(resp).await
    }

    /// GET /api/terms/status → whether the terms were accepted.
    pub async fn terms_status(&self) -> Result<TermsStatus, AppError> {
        let req = self.request(reqwest::Method::GET, "/api/terms/status");
        let resp = self.send(req).await?;
        self.handle_response(resp).await
    }

    /// POST /api/terms/accept → the updated terms state.
    pub async fn accept_terms(&self) -> Result<TermsStatus, AppError> {
        let req = self
            .request(reqwest::Method::POST, "/api/terms/accept")
            .json(&serde_json::json!({ "accepted": true }));
        let resp = self.send(req).await?;
        self.handle_response(resp).await
    }
}

/// Milliseconds since the Unix epoch, as a string.
fn cache_buster() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
        .to_string()
}
