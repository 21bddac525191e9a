use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Raw HTTP outcome handed back by a transport: the status code and the full
/// body read as text. Interpretation of both happens in the client, so a
/// transport never needs to understand the webhook contract.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal capability the webhook client needs from the network: POST a JSON
/// body to a URL and get the status plus body text back.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse>;
}

/// `reqwest`-backed transport. One request per call, no retry; timeout and
/// cancellation are left to the transport defaults and outer callers.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse> {
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
