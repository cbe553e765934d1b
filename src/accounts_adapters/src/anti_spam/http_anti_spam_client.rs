use accounts_core::AntiSpamService;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AntiSpamSettings;

/// What a failed anti-spam call resolves to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Let the address through.
    #[default]
    Open,
    /// Treat the address as blocked.
    Closed,
}

impl FailurePolicy {
    pub fn fallback(self) -> bool {
        match self {
            Self::Open => false,
            Self::Closed => true,
        }
    }
}

/// Why an [`HttpAntiSpamClient`] could not be built.
#[derive(Debug, Error)]
pub enum AntiSpamClientError {
    #[error("Invalid anti-spam base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Missing anti-spam API key")]
    MissingApiKey,
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Anti-spam check backed by a remote scoring API.
///
/// Any transport error, non-2xx status or unreadable body is logged and
/// resolved through the [`FailurePolicy`]. Errors never reach the caller and
/// nothing is retried.
pub struct HttpAntiSpamClient {
    http_client: Client,
    check_url: Url,
    api_key: Secret<String>,
    failure_policy: FailurePolicy,
}

impl HttpAntiSpamClient {
    /// The check endpoint is resolved against `base_url` once, here.
    pub fn new(
        base_url: &str,
        api_key: Secret<String>,
        http_client: Client,
        failure_policy: FailurePolicy,
    ) -> Result<Self, AntiSpamClientError> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(AntiSpamClientError::MissingApiKey);
        }

        Ok(Self {
            http_client,
            check_url: check_url(base_url)?,
            api_key,
            failure_policy,
        })
    }

    pub fn from_settings(settings: &AntiSpamSettings) -> Result<Self, AntiSpamClientError> {
        let http_client = Client::builder().timeout(settings.timeout()).build()?;

        Self::new(
            &settings.base_url,
            settings.api_key.clone(),
            http_client,
            settings.failure_policy,
        )
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    pub fn check_url(&self) -> &Url {
        &self.check_url
    }

    async fn check(&self, email: &str) -> Result<bool, String> {
        let response = self
            .http_client
            .post(self.check_url.clone())
            .bearer_auth(self.api_key.expose_secret())
            .json(&CheckRequest { email })
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        let verdict = response
            .json::<CheckResponse>()
            .await
            .map_err(|e| e.to_string())?;

        Ok(verdict.blocked)
    }
}

// Joins relative to the base path, so `https://host/v1` and `https://host/v1/`
// both resolve to `https://host/v1/check`.
fn check_url(base_url: &str) -> Result<Url, AntiSpamClientError> {
    let invalid = |reason: String| AntiSpamClientError::InvalidBaseUrl {
        url: base_url.to_owned(),
        reason,
    };

    let mut base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(CHECK_PATH).map_err(|e| invalid(e.to_string()))
}

#[async_trait::async_trait]
impl AntiSpamService for HttpAntiSpamClient {
    #[tracing::instrument(name = "Checking email against anti-spam API", skip_all)]
    async fn is_blocked(&self, email: &str) -> bool {
        match self.check(email).await {
            Ok(blocked) => blocked,
            Err(e) => {
                let fallback = self.failure_policy.fallback();
                tracing::error!(
                    error = %e,
                    policy = ?self.failure_policy,
                    blocked = fallback,
                    "Anti-spam check failed"
                );
                fallback
            }
        }
    }
}

const CHECK_PATH: &str = "check";

#[derive(Serialize, Debug)]
struct CheckRequest<'a> {
    email: &'a str,
}

#[derive(Deserialize, Debug)]
struct CheckResponse {
    blocked: bool,
}
