use crate::utils::error::{RelayError, Result};
use url::Url;

/// Shortest credential accepted before any upstream call is attempted.
pub const MIN_CREDENTIAL_LEN: usize = 30;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RelayError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RelayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 檢查憑證存在且長度足夠，回傳修剪後的值。
///
/// The credential itself is never echoed back in the error.
pub fn validate_credential(credential: Option<&str>) -> Result<&str> {
    let key = credential.map(str::trim).unwrap_or_default();

    if key.is_empty() {
        return Err(RelayError::ConfigError {
            message: "API 키가 등록되지 않았습니다.".to_string(),
        });
    }

    if key.chars().count() < MIN_CREDENTIAL_LEN {
        return Err(RelayError::ConfigError {
            message: format!(
                "API 키 형식이 올바르지 않습니다. (최소 {}자 필요)",
                MIN_CREDENTIAL_LEN
            ),
        });
    }

    Ok(key)
}
