//! In-crate test helpers.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::clients::{HttpError, HttpRequest, HttpResponse, HttpResponseError, Transport};

/// A transport that records every request and answers with a canned response.
#[derive(Debug)]
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    status: u16,
    body: Value,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::responding(200, json!({}))
    }

    pub fn responding(status: u16, body: Value) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            status,
            body,
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests().pop().expect("no request was recorded")
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(request);

        if (200..300).contains(&self.status) {
            Ok(HttpResponse::new(self.status, HashMap::new(), self.body.clone()))
        } else {
            Err(HttpError::Response(HttpResponseError {
                code: self.status,
                message: self.body.to_string(),
                error_reference: None,
            }))
        }
    }
}

/// Builds a parameter map from a JSON object literal.
pub fn params(value: Value) -> crate::rest::Params {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
