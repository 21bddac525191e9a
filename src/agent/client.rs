use serde_json::Value;
use tracing::{debug, warn};

use super::error::AgentError;
use super::payload::{Envelope, Payload};
use super::transport::{HttpTransport, RawResponse, Transport};

/// How much of a non-JSON body is quoted back in error messages.
const BODY_PREVIEW_CHARS: usize = 200;

/// Client for the agent webhook.
///
/// Wraps a payload in the fixed envelope, performs one POST through the
/// transport, and interprets the response across the shapes the webhook is
/// known to produce. Stateless; concurrent calls are independent.
pub struct AgentClient {
    transport: Box<dyn Transport>,
}

impl AgentClient {
    pub fn new() -> Self {
        Self::with_transport(Box::new(HttpTransport::new()))
    }

    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send a payload to the webhook and return the parsed JSON result.
    ///
    /// Validation failures (empty URL, unsupported payload shape) are raised
    /// before any network attempt.
    pub async fn send(&self, payload: Payload, webhook_url: &str) -> Result<Value, AgentError> {
        if webhook_url.trim().is_empty() {
            return Err(AgentError::MissingWebhookUrl);
        }

        let envelope = Envelope::new(payload);
        let body = serde_json::to_value(&envelope)
            .map_err(|e| AgentError::Transport(anyhow::Error::new(e)))?;

        debug!("Posting envelope to agent webhook: {}", webhook_url);
        let response = self
            .transport
            .post_json(webhook_url, &body)
            .await
            .map_err(AgentError::Transport)?;

        interpret(response)
    }
}

impl Default for AgentClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a raw webhook response into a result or a descriptive failure.
///
/// Parse attempts run in a fixed order: JSON error body, plain-text error
/// body, JSON success body, the literal "Accepted" acknowledgement, then
/// anything else. Pure over (status, body) so it is testable without a
/// transport.
fn interpret(response: RawResponse) -> Result<Value, AgentError> {
    if !response.is_success() {
        let detail = match serde_json::from_str::<Value>(&response.body) {
            Ok(parsed) => match parsed.pointer("/error/message").and_then(Value::as_str) {
                Some(message) => message.to_string(),
                None => parsed.to_string(),
            },
            Err(_) => format!(
                "Webhook request failed (status {}): {}",
                response.status,
                preview(&response.body)
            ),
        };
        warn!("Agent webhook returned an error: {}", detail);
        return Err(AgentError::Remote(detail));
    }

    match serde_json::from_str::<Value>(&response.body) {
        Ok(parsed) => Ok(parsed),
        Err(_) if response.body.trim().eq_ignore_ascii_case("accepted") => {
            warn!("Agent webhook acknowledged asynchronously instead of answering");
            Err(AgentError::AsyncWebhook)
        }
        Err(_) => Err(AgentError::UnexpectedResponse(
            preview(&response.body).to_string(),
        )),
    }
}

/// First `BODY_PREVIEW_CHARS` characters of a body, for error messages.
fn preview(body: &str) -> &str {
    match body.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((index, _)) => &body[..index],
        None => body,
    }
}
