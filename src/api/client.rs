//! HTTP client for the marketplace API
//!
//! One thin method per endpoint: JSON in, JSON out, bearer token on
//! everything but login. No retry and no caching; callers own loading state
//! and error surfacing. The per-request timeout comes from configuration.

use crate::api::models::{
    ApiErrorBody, CreateAdminRequest, LoginRequest, LoginResponse, UserProfile, Worker,
    WorkerProfileUpdate,
};
use crate::auth::Credentials;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use reqwest::{Response, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Client for the marketplace REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /api/auth/login`. Any non-2xx response is invalid credentials.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let body = LoginRequest {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        };

        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "login rejected");
            return Err(Error::AuthRejected);
        }

        Ok(response.json().await?)
    }

    /// `GET /api/users/profile`
    pub async fn fetch_profile(&self, token: &str) -> Result<UserProfile> {
        let response = self
            .http
            .get(self.url("/api/users/profile"))
            .bearer_auth(token)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// `PUT /api/users/edit` with the full profile; returns the updated one
    pub async fn update_profile(&self, token: &str, profile: &UserProfile) -> Result<UserProfile> {
        let response = self
            .http
            .put(self.url("/api/users/edit"))
            .bearer_auth(token)
            .json(profile)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// `GET /api/workers/all`
    pub async fn list_workers(&self, token: &str) -> Result<Vec<Worker>> {
        let response = self
            .http
            .get(self.url("/api/workers/all"))
            .bearer_auth(token)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// `DELETE /api/admin/{user_id}`
    pub async fn delete_user(&self, token: &str, user_id: u64) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/admin/{}", user_id)))
            .bearer_auth(token)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// `PUT /api/admin/edit_profile/{user_id}`
    pub async fn update_worker_profile(
        &self,
        token: &str,
        user_id: u64,
        update: &WorkerProfileUpdate,
    ) -> Result<()> {
        let response = self
            .http
            .put(self.url(&format!("/api/admin/edit_profile/{}", user_id)))
            .bearer_auth(token)
            .json(update)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// `POST /api/admin/create-admin`
    pub async fn create_admin(&self, token: &str, request: &CreateAdminRequest) -> Result<()> {
        let response = self
            .http
            .post(self.url("/api/admin/create-admin"))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// Map a non-2xx response to an API error, extracting the server's
    /// message when it sent one.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body
                .message
                .or(body.error)
                .unwrap_or_else(|| default_status_message(status)),
            Err(_) => default_status_message(status),
        };

        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn default_status_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}
