//! HttpAskTransport -- concrete [`AskTransport`] over HTTP.
//!
//! Posts the payload as JSON to `{endpoint}/ask` and decodes the JSON
//! reply. Network errors, non-2xx statuses and undecodable bodies all
//! surface as [`AskError`].

use std::time::Duration;

use tracing::debug;

use werkstatt_core::chat::transport::AskTransport;
use werkstatt_types::ask::{ASK_PATH, AskRequest, AskResponse};
use werkstatt_types::error::AskError;

/// Answer service client.
///
/// No timeout unless one is configured: a slow server keeps the caller
/// waiting.
pub struct HttpAskTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpAskTransport {
    /// Create a transport for the service at `endpoint` (base URL).
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self, AskError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AskError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: format!("{}{}", endpoint.trim_end_matches('/'), ASK_PATH),
        })
    }

    /// Full URL requests are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl AskTransport for HttpAskTransport {
    fn ask(
        &self,
        request: &AskRequest,
    ) -> impl std::future::Future<Output = Result<AskResponse, AskError>> + Send {
        let builder = self.client.post(&self.url).json(request);
        let url = self.url.clone();
        let follow_up = request.gender.is_some();

        async move {
            debug!(url = %url, follow_up, "posting question");

            let response = builder
                .send()
                .await
                .map_err(|e| AskError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(AskError::Status(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| AskError::Transport(e.to_string()))?;

            serde_json::from_slice::<AskResponse>(&body).map_err(|e| AskError::Decode(e.to_string()))
        }
    }
}
