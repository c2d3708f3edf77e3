// Test doubles shared by the unit tests.

use crate::domain::ports::{
    BasicAuth, Console, HttpResponse, HttpTransport, Prompter, RecipePicker,
};
use crate::utils::error::{Result, SearchBarError, TransportError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Canned {
    Response(HttpResponse),
    Failure(String),
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub auth: Option<BasicAuth>,
}

impl RecordedRequest {
    pub fn has_param(&self, key: &str, value: &str) -> bool {
        self.query.iter().any(|(k, v)| k == key && v == value)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.query.iter().any(|(k, _)| k == key)
    }
}

/// Replays queued responses in order; the last one repeats forever.
#[derive(Debug, Clone, Default)]
pub struct CannedTransport {
    responses: Arc<Mutex<VecDeque<Canned>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl CannedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, status: u16, body: serde_json::Value) -> Self {
        self.with_body(status, &body.to_string())
    }

    pub fn with_body(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Canned::Response(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn with_failure(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Canned::Failure(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next(&self, request: RecordedRequest) -> std::result::Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let mut responses = self.responses.lock().unwrap();
        let canned = if responses.len() > 1 {
            responses.pop_front()
        } else {
            responses.front().cloned()
        };
        match canned {
            Some(Canned::Response(response)) => Ok(response),
            Some(Canned::Failure(message)) => Err(TransportError::Request(message)),
            None => Err(TransportError::Request("no canned response".to_string())),
        }
    }
}

#[async_trait]
impl HttpTransport for CannedTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> std::result::Result<HttpResponse, TransportError> {
        self.next(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: None,
            auth: None,
        })
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        auth: Option<&BasicAuth>,
    ) -> std::result::Result<HttpResponse, TransportError> {
        self.next(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            query: Vec::new(),
            body: Some(body.clone()),
            auth: auth.cloned(),
        })
    }
}

/// Always picks the same index (clamped to the candidate count).
pub struct FixedPicker(pub usize);

impl RecipePicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

/// Answers questions from a script and records everything shown.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    transcript: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            transcript: Mutex::new(Vec::new()),
        }
    }

    pub fn transcript(&self) -> Vec<String> {
        self.transcript.lock().unwrap().clone()
    }

    pub fn saw(&self, needle: &str) -> bool {
        self.transcript().iter().any(|line| line.contains(needle))
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn ask(&self, question: &str) -> Result<String> {
        self.transcript.lock().unwrap().push(question.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SearchBarError::PromptError {
                message: format!("no scripted answer for {:?}", question),
            })
    }
}

impl Console for ScriptedPrompter {
    fn say(&self, line: &str) {
        self.transcript.lock().unwrap().push(line.to_string());
    }
}
