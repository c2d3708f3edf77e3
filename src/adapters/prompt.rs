use crate::domain::ports::{Console, Prompter};
use crate::utils::error::{Result, SearchBarError};
use async_trait::async_trait;
use std::io::{self, BufRead, Write};

/// Interactive prompter on the process's stdin/stdout.
pub struct StdinPrompter;

impl Default for StdinPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }

    fn read_line() -> Result<String> {
        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Err(SearchBarError::PromptError {
                message: "standard input was closed".to_string(),
            });
        }
        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[async_trait]
impl Prompter for StdinPrompter {
    async fn ask(&self, question: &str) -> Result<String> {
        print!("{}", question);
        io::stdout().flush()?;
        Self::read_line()
    }
}

impl Console for StdinPrompter {
    fn say(&self, line: &str) {
        println!("{}", line);
    }
}
