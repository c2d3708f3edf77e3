// Test doubles shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use search_bar::domain::ports::{Console, Prompter, RecipePicker};
use search_bar::{Result, SearchBarError};
use std::collections::VecDeque;
use std::sync::Mutex;

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

pub struct FirstPicker;

impl RecipePicker for FirstPicker {
    fn pick(&self, _len: usize) -> usize {
        0
    }
}
