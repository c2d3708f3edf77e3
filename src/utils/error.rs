use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchBarError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid recipe selection '{input}': expected a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },

    #[error("Prompt failed: {message}")]
    PromptError { message: String },
}

impl SearchBarError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SearchBarError::IoError(e) => format!("Could not write to disk: {}", e),
            SearchBarError::ConfigError { message } => format!("Configuration problem: {}", message),
            SearchBarError::MissingConfigError { field } => {
                format!("Missing required setting '{}'.", field)
            }
            SearchBarError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            SearchBarError::InvalidSelection { input, max } => {
                format!("'{}' is not a recipe number between 1 and {}.", input, max)
            }
            SearchBarError::PromptError { message } => format!("Input error: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SearchBarError::IoError(_) => "Check that the output directory exists and is writable.",
            SearchBarError::ConfigError { .. }
            | SearchBarError::MissingConfigError { .. }
            | SearchBarError::InvalidConfigValueError { .. } => {
                "Set the API credentials via flags, environment variables or --config <file>."
            }
            SearchBarError::InvalidSelection { .. } => {
                "Run again and enter one of the listed recipe numbers."
            }
            SearchBarError::PromptError { .. } => "Run the assistant from an interactive terminal.",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SearchBarError::ConfigError { .. }
            | SearchBarError::MissingConfigError { .. }
            | SearchBarError::InvalidConfigValueError { .. } => 2,
            SearchBarError::InvalidSelection { .. } | SearchBarError::PromptError { .. } => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchBarError>;

/// 外部 API 的可恢復錯誤：沒有可用的回應內容
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {status}")]
    Status { status: u16, body: String },

    #[error("could not decode response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError::Request(e.to_string())
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_tier() {
        let config = SearchBarError::MissingConfigError {
            field: "weather.api_key".to_string(),
        };
        assert_eq!(config.exit_code(), 2);

        let selection = SearchBarError::InvalidSelection {
            input: "abc".to_string(),
            max: 3,
        };
        assert_eq!(selection.exit_code(), 3);
        assert!(selection.user_friendly_message().contains("between 1 and 3"));
    }
}
