use crate::utils::error::{Result, SiteError};
use std::collections::HashSet;
use std::hash::Hash;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_link(field_name: &str, url_str: &str, allowed_schemes: &[&str]) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => {
            if !allowed_schemes.contains(&url.scheme()) {
                return Err(SiteError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: format!(
                        "Unsupported URL scheme: {}. Allowed schemes: {}",
                        url.scheme(),
                        allowed_schemes.join(", ")
                    ),
                });
            }
            if url.cannot_be_a_base() && url.path().is_empty() {
                return Err(SiteError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: "URL has no target".to_string(),
                });
            }
            Ok(())
        }
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_web_url(field_name: &str, url_str: &str) -> Result<()> {
    validate_link(field_name, url_str, &["http", "https"])
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SiteError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number >= 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<T, I>(field_name: &str, values: I) -> Result<()>
where
    T: Eq + Hash + std::fmt::Display,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    for value in values {
        let shown = value.to_string();
        if !seen.insert(value) {
            return Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: shown,
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_web_url() {
        assert!(validate_web_url("github_url", "https://github.com/someone").is_ok());
        assert!(validate_web_url("github_url", "http://example.com").is_ok());
        assert!(validate_web_url("github_url", "").is_err());
        assert!(validate_web_url("github_url", "github.com/someone").is_err());
        assert!(validate_web_url("github_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_link_schemes() {
        assert!(validate_link("email", "mailto:someone@example.com", &["mailto"]).is_ok());
        assert!(validate_link("phone", "tel:+15550100", &["tel"]).is_ok());
        assert!(validate_link("phone", "tel:", &["tel"]).is_err());
        assert!(validate_link("email", "https://example.com", &["mailto"]).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("scroll_offset", 0.0).is_ok());
        assert!(validate_non_negative("scroll_offset", 120.5).is_ok());
        assert!(validate_non_negative("scroll_offset", -1.0).is_err());
        assert!(validate_non_negative("scroll_offset", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        assert_eq!(validate_required_field("output.path", &Some(3)).unwrap(), &3);
        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("output.path", &missing),
            Err(SiteError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("sections", ["home", "about"]).is_ok());
        assert!(validate_unique("sections", ["home", "home"]).is_err());
    }
}
