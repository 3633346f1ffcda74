use async_trait::async_trait;
use guildfetch::adapters::DiscordTransport;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Transport that serves canned JSON bodies and records every requested path
pub struct MockTransport {
    #[allow(dead_code)]
    pub requests: Arc<Mutex<Vec<String>>>,
    responses: HashMap<String, Value>,
    failure: Option<String>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: HashMap::new(),
            failure: None,
        }
    }

    /// Serve `body` for exactly `path`
    pub fn with_response(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_string(), body);
        self
    }

    /// Fail every request with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Error type returned by a failing MockTransport, so tests can downcast it
#[derive(Debug)]
pub struct TransportFailure(pub String);

impl std::fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "transport failure: {}", self.0)
    }
}

impl std::error::Error for TransportFailure {}

#[async_trait]
impl DiscordTransport for MockTransport {
    async fn fetch(&self, path: &str) -> anyhow::Result<Value> {
        self.requests.lock().unwrap().push(path.to_string());

        if let Some(message) = &self.failure {
            return Err(TransportFailure(message.clone()).into());
        }

        self.responses
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No canned response for {}", path))
    }
}
