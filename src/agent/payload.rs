use serde::Serialize;
use serde_json::{Map, Value};

use super::error::AgentError;

/// Input accepted by the agent webhook: a free-text query or a structured
/// action object. Every other JSON shape is rejected before any network call.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Structured(Map<String, Value>),
}

impl Payload {
    /// Classify a raw JSON value at the call boundary.
    pub fn from_value(value: Value) -> Result<Self, AgentError> {
        match value {
            Value::String(text) => Ok(Payload::Text(text)),
            Value::Object(map) => Ok(Payload::Structured(map)),
            _ => Err(AgentError::InvalidPayload),
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

/// Wire body sent to the agent webhook. The `key` discriminator identifies
/// the sender and is always `"agente"`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Envelope {
    key: &'static str,
    consulta: Consulta,
}

/// Content of the envelope: text goes through verbatim, structured payloads
/// are wrapped one level deeper under a `data` key.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Consulta {
    Text(String),
    Action { data: Map<String, Value> },
}

impl Envelope {
    pub fn new(payload: Payload) -> Self {
        let consulta = match payload {
            Payload::Text(text) => Consulta::Text(text),
            Payload::Structured(map) => Consulta::Action { data: map },
        };
        Self {
            key: "agente",
            consulta,
        }
    }

    pub fn consulta(&self) -> &Consulta {
        &self.consulta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_payload_passes_through_verbatim() {
        let envelope = Envelope::new(Payload::from("¿cuántas ventas hubo en marzo?"));
        let body = serde_json::to_value(&envelope).unwrap();

        assert_eq!(body["key"], "agente");
        assert_eq!(body["consulta"], "¿cuántas ventas hubo en marzo?");
    }

    #[test]
    fn structured_payload_is_wrapped_under_data() {
        let map = json!({"cliente": "ACME", "monto": 1200})
            .as_object()
            .unwrap()
            .clone();
        let envelope = Envelope::new(Payload::Structured(map.clone()));
        let body = serde_json::to_value(&envelope).unwrap();

        assert_eq!(body["key"], "agente");
        assert_eq!(body["consulta"]["data"], Value::Object(map));
    }

    #[test]
    fn data_field_round_trips_the_original_mapping() {
        let map = json!({"a": [1, 2, 3], "b": {"nested": true}})
            .as_object()
            .unwrap()
            .clone();
        let envelope = Envelope::new(Payload::Structured(map.clone()));

        match envelope.consulta() {
            Consulta::Action { data } => assert_eq!(data, &map),
            Consulta::Text(_) => panic!("expected a structured consulta"),
        }
    }

    #[test]
    fn non_text_non_object_values_are_rejected() {
        for value in [json!(42), json!(true), json!(null), json!([1, 2])] {
            assert!(matches!(
                Payload::from_value(value),
                Err(AgentError::InvalidPayload)
            ));
        }
    }
}
