//! Mock generative driver for testing.

use async_trait::async_trait;
use memory_lane_core::{GenerateRequest, GenerateResponse, Output};
use memory_lane_error::{MemoryLaneResult, ServiceError, ServiceErrorKind};
use memory_lane_interface::GenerativeDriver;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the given output
    Success(Output),
    /// Always return the specified error
    Error(ServiceErrorKind),
    /// Return a sequence of responses, then fail
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Output),
    Error(ServiceErrorKind),
}

/// Mock driver that records every request it receives.
#[derive(Clone)]
pub struct MockDriver {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

#[allow(dead_code)]
impl MockDriver {
    /// Always reply with the given JSON value as structured output.
    pub fn new_json(value: serde_json::Value) -> Self {
        Self::new_with_behavior(MockBehavior::Success(Output::Json(value)))
    }

    /// Always reply with the given text.
    pub fn new_text(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(Output::Text(text.into())))
    }

    /// Always fail with the given error.
    pub fn new_error(error: ServiceErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Reply from a fixed sequence.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    fn next_response(&self, req: &GenerateRequest) -> MemoryLaneResult<GenerateResponse> {
        let mut requests = self.requests.lock().unwrap();
        let current = requests.len();
        requests.push(req.clone());

        let ok = |output: &Output| {
            Ok(GenerateResponse {
                outputs: vec![output.clone()],
            })
        };
        let err = |kind: &ServiceErrorKind| Err(ServiceError::new(kind.clone()).into());

        match &self.behavior {
            MockBehavior::Success(output) => ok(output),
            MockBehavior::Error(kind) => err(kind),
            MockBehavior::Sequence(responses) => match responses.get(current) {
                Some(MockResponse::Success(output)) => ok(output),
                Some(MockResponse::Error(kind)) => err(kind),
                None => err(&ServiceErrorKind::Transport(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    current + 1,
                    responses.len()
                ))),
            },
        }
    }
}

#[async_trait]
impl GenerativeDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> MemoryLaneResult<GenerateResponse> {
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        self.next_response(req)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
