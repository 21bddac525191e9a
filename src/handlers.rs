use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::agent::{AgentError, Payload};
use crate::state::AppState;

type HandlerResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

/// Forward a free-text query to the agent webhook.
pub async fn agent_query(State(state): State<AppState>, Json(body): Json<Value>) -> HandlerResult {
    let text = body
        .get("text")
        .and_then(Value::as_str)
        .ok_or_else(|| error_response(StatusCode::BAD_REQUEST, "text is required"))?;

    info!("Forwarding text query to agent webhook");
    dispatch(&state, Payload::from(text)).await
}

/// Forward a structured action object to the agent webhook.
pub async fn agent_action(State(state): State<AppState>, Json(body): Json<Value>) -> HandlerResult {
    let payload =
        Payload::from_value(body).map_err(|e| error_response(status_for(&e), &e.to_string()))?;

    info!("Forwarding structured action to agent webhook");
    dispatch(&state, payload).await
}

/// Report whether a webhook URL is configured, without revealing it.
pub async fn agent_status(State(state): State<AppState>) -> Json<Value> {
    let configured = !state.config.agent_config.webhook_url.trim().is_empty();
    Json(json!({ "configured": configured }))
}

async fn dispatch(state: &AppState, payload: Payload) -> HandlerResult {
    let webhook_url = &state.config.agent_config.webhook_url;
    match state.agent.send(payload, webhook_url).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => Err(error_response(status_for(&e), &e.to_string())),
    }
}

/// Local validation failures are the caller's fault; everything the webhook
/// did wrong surfaces as a bad gateway.
fn status_for(error: &AgentError) -> StatusCode {
    match error {
        AgentError::MissingWebhookUrl | AgentError::InvalidPayload => StatusCode::BAD_REQUEST,
        AgentError::Remote(_) | AgentError::AsyncWebhook | AgentError::UnexpectedResponse(_) => {
            StatusCode::BAD_GATEWAY
        }
        AgentError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        assert_eq!(
            status_for(&AgentError::MissingWebhookUrl),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&AgentError::InvalidPayload),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn webhook_failures_map_to_bad_gateway() {
        assert_eq!(
            status_for(&AgentError::Remote("boom".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(status_for(&AgentError::AsyncWebhook), StatusCode::BAD_GATEWAY);
    }
}
