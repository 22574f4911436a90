use crate::utils::error::{Result, SurveyError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn config_error(field_name: &str, reason: &str) -> SurveyError {
    SurveyError::ConfigError {
        message: format!("{}: {}", field_name, reason),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(config_error(field_name, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(config_error(
                field_name,
                &format!("unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(config_error(
            field_name,
            &format!("invalid URL format: {}", e),
        )),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(config_error(
            field_name,
            "value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}
