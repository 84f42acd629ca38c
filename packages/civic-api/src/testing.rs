// Test doubles
//
// MockTransport stands in for the network: it records every request and
// replays queued responses. SequenceRandom replays a fixed list of values.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::{ApiError, Result};
use crate::random::RandomSource;
use crate::transport::{BaseHttpTransport, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
enum MockReply {
    Response(HttpResponse),
    Failure(String),
}

#[derive(Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub fn with_json(self, status: u16, body: serde_json::Value) -> Self {
        let body = serde_json::to_vec(&body).unwrap();
        self.with_raw(status, body)
    }

    /// Queue a response with an arbitrary body.
    pub fn with_raw(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Response(HttpResponse {
                status,
                body: body.into(),
            }));
        self
    }

    /// Queue a transport-level failure.
    pub fn with_network_error(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Failure(message.to_string()));
        self
    }

    /// Every request sent, in order.
    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<HttpRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl BaseHttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.calls.lock().unwrap().push(request);

        match self.replies.lock().unwrap().pop_front() {
            Some(MockReply::Response(response)) => Ok(response),
            Some(MockReply::Failure(message)) => Err(ApiError::Network(message)),
            None => Err(ApiError::Network("no mock response queued".to_string())),
        }
    }
}

/// Replays `values` cyclically, each reduced modulo the requested bound.
pub struct SequenceRandom {
    values: Vec<u64>,
    cursor: Mutex<usize>,
}

impl SequenceRandom {
    pub fn new(values: Vec<u64>) -> Self {
        Self {
            values,
            cursor: Mutex::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_below(&self, upper: u64) -> u64 {
        if upper == 0 || self.values.is_empty() {
            return 0;
        }
        let mut cursor = self.cursor.lock().unwrap();
        let value = self.values[*cursor % self.values.len()];
        *cursor += 1;
        value % upper
    }
}
