use crate::utils::error::{Result, SearchBarError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SearchBarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SearchBarError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SearchBarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(SearchBarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "File name cannot be empty".to_string(),
        });
    }

    if name.contains('\0') {
        return Err(SearchBarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "File name contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Credentials must be present, non-blank and fully resolved (no `${VAR}` left over).
pub fn validate_credential(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SearchBarError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    if value.contains("${") {
        return Err(SearchBarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Unresolved environment placeholder".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("weather.endpoint", "https://example.com").is_ok());
        assert!(validate_url("weather.endpoint", "http://example.com").is_ok());
        assert!(validate_url("weather.endpoint", "").is_err());
        assert!(validate_url("weather.endpoint", "invalid-url").is_err());
        assert!(validate_url("weather.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_credential() {
        assert!(validate_credential("recipes.app_id", "abc123").is_ok());
        assert!(matches!(
            validate_credential("recipes.app_id", "   "),
            Err(SearchBarError::MissingConfigError { .. })
        ));
        assert!(matches!(
            validate_credential("recipes.app_id", "${EDAMAM_APP_ID}"),
            Err(SearchBarError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("output.file_name", "ingredients.txt").is_ok());
        assert!(validate_file_name("output.file_name", "").is_err());
        assert!(validate_file_name("output.file_name", "bad\0name").is_err());
    }
}
