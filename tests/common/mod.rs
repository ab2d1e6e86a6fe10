//! Scripted transport for driving the client without a server.

use async_trait::async_trait;
use interworx_provision::error::TransportError;
use interworx_provision::transport::Transport;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub key: String,
    pub controller: String,
    pub action: String,
    pub input: Option<Value>,
}

/// Transport returning scripted envelopes per `(controller, action)` pair and
/// recording every call it sees.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<(String, String), Vec<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a raw envelope for an endpoint. Scripting the same endpoint
    /// again queues a second response.
    pub fn respond(self, controller: &str, action: &str, envelope: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry((controller.to_string(), action.to_string()))
            .or_default()
            .push(envelope);
        self
    }

    /// Script a successful envelope wrapping `payload`.
    pub fn ok(self, controller: &str, action: &str, payload: Value) -> Self {
        self.respond(controller, action, json!({"status": 0, "payload": payload}))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn route(
        &self,
        key: &str,
        controller: &str,
        action: &str,
        input: Option<&Value>,
    ) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            key: key.to_string(),
            controller: controller.to_string(),
            action: action.to_string(),
            input: input.cloned(),
        });

        let mut responses = self.responses.lock().unwrap();
        let queue = responses
            .get_mut(&(controller.to_string(), action.to_string()))
            .ok_or_else(|| {
                TransportError::Decode(format!("unscripted call to {controller} {action}"))
            })?;
        // The last scripted response repeats.
        if queue.len() > 1 {
            Ok(queue.remove(0))
        } else {
            Ok(queue[0].clone())
        }
    }
}
