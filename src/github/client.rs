use crate::error::{AppError, LookupError, Result};
use crate::github::types::{ErrorBody, RepoResult, UserResult};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use std::future::Future;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a GET against the API and hands back status and body untouched.
pub trait Transport {
    fn get(
        &self,
        path: &str,
    ) -> impl Future<Output = std::result::Result<RawResponse, LookupError>> + Send;
}

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
}

impl GitHubClient {
    pub fn new(token: Option<&str>, base_url: &str) -> Result<Self> {
        // one submit is one GET; octocrab retries 5xx/429 by default
        let mut builder = Octocrab::builder()
            .add_retry_config(RetryConfig::None)
            .base_uri(base_url)
            .map_err(|e| AppError::Client(e.to_string()))?;

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            builder = builder.personal_token(token.to_string());
        }

        let octo = builder
            .build()
            .map_err(|e| AppError::Client(e.to_string()))?;

        Ok(Self { octo })
    }
}

impl Transport for GitHubClient {
    async fn get(&self, path: &str) -> std::result::Result<RawResponse, LookupError> {
        let response = self.octo._get(path).await?;
        let status = response.status().as_u16();
        let body = self.octo.body_to_string(response).await?;
        Ok(RawResponse { status, body })
    }
}

/// Runs one GET and decodes the body as `T`. Non-2xx responses become
/// `LookupError::Api` carrying the server's `message` field.
pub async fn execute<T, C>(transport: &C, path: &str) -> std::result::Result<T, LookupError>
where
    T: DeserializeOwned,
    C: Transport + ?Sized,
{
    let raw = transport.get(path).await?;

    if !raw.is_success() {
        let body: ErrorBody = serde_json::from_str(&raw.body).unwrap_or_default();
        let message = body
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {}", raw.status));
        return Err(LookupError::Api {
            status: raw.status,
            message,
        });
    }

    Ok(serde_json::from_str(&raw.body)?)
}

pub async fn fetch_user<C>(transport: &C, name: &str) -> std::result::Result<UserResult, LookupError>
where
    C: Transport + ?Sized,
{
    execute(transport, &format!("/users/{name}")).await
}

pub async fn fetch_repo<C>(transport: &C, name: &str) -> std::result::Result<RepoResult, LookupError>
where
    C: Transport + ?Sized,
{
    execute(transport, &format!("/repos/{name}")).await
}
