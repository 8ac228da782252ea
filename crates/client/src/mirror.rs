//! HTTP client for the remote persistence service.
//!
//! One method per local mutation type. No retries and no outbox queue:
//! callers decide what a failure means (for this client, nothing — the
//! local cache stays authoritative).

use std::time::Duration;

use nearmiss_core::Report;

/// HTTP request timeout for a single mirror call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the remote mirror layer.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Mirror returned HTTP {0}")]
    Status(u16),
}

/// Client for the report persistence service.
pub struct RemoteMirror {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteMirror {
    /// Create a mirror client for the service at `base_url`
    /// (e.g. `http://localhost:4000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a mirror client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// `POST /reports` with the full candidate record.
    ///
    /// Returns the server's stored representation; the server may have
    /// assigned a different id, which is then authoritative.
    pub async fn create(&self, report: &Report) -> Result<Report, MirrorError> {
        let response = self
            .client
            .post(format!("{}/reports", self.base_url))
            .json(report)
            .send()
            .await?;

        let response = Self::ensure_success(response)?;
        Ok(response.json().await?)
    }

    /// `DELETE /reports/{id}`.
    pub async fn delete(&self, id: &str) -> Result<(), MirrorError> {
        let response = self
            .client
            .delete(format!("{}/reports/{}", self.base_url, id))
            .send()
            .await?;

        Self::ensure_success(response)?;
        Ok(())
    }

    /// `PUT /reports/{id}/followup` — flips the flag server-side.
    pub async fn toggle_follow_up(&self, id: &str) -> Result<Report, MirrorError> {
        let response = self
            .client
            .put(format!("{}/reports/{}/followup", self.base_url, id))
            .send()
            .await?;

        let response = Self::ensure_success(response)?;
        Ok(response.json().await?)
    }

    /// `POST /reports/reset` — empties the remote collection.
    pub async fn reset(&self) -> Result<(), MirrorError> {
        let response = self
            .client
            .post(format!("{}/reports/reset", self.base_url))
            .send()
            .await?;

        Self::ensure_success(response)?;
        Ok(())
    }

    fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, MirrorError> {
        let status = response.status();
        if !status.is_success() {
            return Err(MirrorError::Status(status.as_u16()));
        }
        Ok(response)
    }
}
