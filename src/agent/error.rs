use thiserror::Error;

/// Failures produced by the agent webhook client.
///
/// The first two variants are local validation failures raised before any
/// network attempt. The rest describe what came back from the webhook.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("No webhook URL is configured")]
    MissingWebhookUrl,

    #[error("Unsupported payload: expected a text query or a JSON object")]
    InvalidPayload,

    /// The webhook answered with a non-2xx status. The message is the best
    /// explanation that could be extracted from the error body.
    #[error("{0}")]
    Remote(String),

    /// The webhook answered 2xx with a bare "Accepted" body, meaning it queued
    /// the request instead of answering it.
    #[error(
        "The webhook accepted the request but did not return data. \
         Configure it to respond with a synchronous JSON response instead of \
         an asynchronous acknowledgement"
    )]
    AsyncWebhook,

    /// The webhook answered 2xx but the body was not valid JSON.
    #[error("The webhook response is not valid JSON: {0}")]
    UnexpectedResponse(String),

    /// The request never completed (DNS, connection, client-side failure).
    #[error("Failed to reach the webhook: {0}")]
    Transport(anyhow::Error),
}
