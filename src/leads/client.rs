use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{LeadStatusError, DEFAULT_ERROR_MESSAGE};
use crate::leads::model::{parse_error_payload, StatusUpdateRequest};

/// Client for `PATCH /api/leads/{id}/status`
///
/// Holds no per-call state: the access token is passed to every call and is
/// never stored. Calls on the same lead are not ordered against each other;
/// whichever request the server handles last wins.
#[derive(Debug, Clone)]
pub struct LeadStatusUpdater {
    client: Client,
    base_url: Url,
    request_logging: bool,
}

impl LeadStatusUpdater {
    pub fn new(base_url: &str) -> Result<Self, LeadStatusError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a caller-built `reqwest::Client` (proxies, custom TLS, timeouts)
    ///
    /// The base URL may carry a path prefix but no query or fragment, since
    /// `/api/...` is appended to it as text.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, LeadStatusError> {
        let base_url = Url::parse(base_url.trim())?;
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(LeadStatusError::UnsupportedBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            client,
            base_url,
            request_logging: false,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, LeadStatusError> {
        Ok(Self::new(&config.base_url)?.with_request_logging(config.enable_request_logging))
    }

    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.request_logging = enabled;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Lead id is embedded as-is; only the transport's URL parsing applies
    pub fn status_url(&self, lead_id: &str) -> String {
        format!(
            "{}/api/leads/{}/status",
            self.base_url.as_str().trim_end_matches('/'),
            lead_id
        )
    }

    /// Update a lead's status and return the server's JSON body unchanged
    pub async fn update_status(
        &self,
        lead_id: &str,
        status: &str,
        access_token: &str,
    ) -> Result<Value, LeadStatusError> {
        self.update_status_as(lead_id, status, access_token).await
    }

    /// Same as [`update_status`](Self::update_status), decoding the body into `T`
    pub async fn update_status_as<T>(
        &self,
        lead_id: &str,
        status: &str,
        access_token: &str,
    ) -> Result<T, LeadStatusError>
    where
        T: DeserializeOwned,
    {
        let url = self.status_url(lead_id);
        if self.request_logging {
            tracing::debug!(lead_id, status, "Sending lead status update");
        }

        let response = self
            .client
            .patch(&url)
            .bearer_auth(access_token)
            .json(&StatusUpdateRequest { status })
            .send()
            .await?;

        let http_status = response.status();
        if self.request_logging {
            tracing::debug!(
                lead_id,
                http_status = http_status.as_u16(),
                "Lead status response received"
            );
        }

        if !http_status.is_success() {
            // A body that cannot be read counts as "no message available"
            let body = response.bytes().await.ok();
            let message = body
                .as_deref()
                .and_then(parse_error_payload)
                .and_then(|payload| payload.message)
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());

            if self.request_logging {
                tracing::debug!(
                    lead_id,
                    http_status = http_status.as_u16(),
                    %message,
                    "Lead status update rejected"
                );
            }
            return Err(LeadStatusError::application(http_status.as_u16(), message));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
