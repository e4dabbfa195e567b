use crate::utils::error::{CheckerError, Result};
use std::fmt::Display;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> CheckerError {
    CheckerError::InvalidConfigValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Parses an absolute `http(s)` URL with a host, such as a job posting link or the model endpoint.
pub fn validate_url(field: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value.trim()).map_err(|e| invalid(field, value, format!("not a URL ({})", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(field, value, format!("expected http or https, got {}", url.scheme())));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field, value, "URL has no host"));
    }
    Ok(url)
}

/// File locations only need to be usable as a path; existence is checked where they are opened.
pub fn validate_path(field: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        Err(invalid(field, path, "path is blank"))
    } else if path.contains('\0') {
        Err(invalid(field, path.escape_default(), "path contains a NUL byte"))
    } else {
        Ok(())
    }
}

pub fn validate_at_least<T: PartialOrd + Display>(field: &str, value: T, min: T) -> Result<()> {
    if value < min {
        return Err(invalid(field, &value, format!("must be at least {}", min)));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + Display>(field: &str, value: T, min: T, max: T) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(field, &value, format!("must be between {} and {}", min, max)));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CheckerError::MissingConfig {
        field: field.to_string(),
    })
}

pub fn validate_non_empty_string(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "value is blank"));
    }
    Ok(())
}
