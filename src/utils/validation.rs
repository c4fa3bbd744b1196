use crate::utils::error::{AnalysisError, Result};
use url::Url;

/// Longest idea text the analysis service accepts.
pub const MAX_IDEA_CHARS: usize = 5000;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AnalysisError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Plain file name: no directory separators, extension from `allowed`.
pub fn validate_file_name(field_name: &str, file_name: &str, allowed: &[&str]) -> Result<()> {
    validate_path(field_name, file_name)?;

    if file_name.contains('/') || file_name.contains('\\') {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file_name.to_string(),
            reason: "File name must not contain directory separators".to_string(),
        });
    }

    match std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) if allowed.contains(&ext) => Ok(()),
        Some(ext) => Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file_name.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                ext,
                allowed.join(", ")
            ),
        }),
        None => Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file_name.to_string(),
            reason: "File has no extension".to_string(),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| AnalysisError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks the idea text the same way the analysis service does before
/// spending a request on it.
pub fn validate_idea(idea: &str) -> Result<()> {
    if idea.trim().is_empty() {
        return Err(AnalysisError::ValidationError {
            message: "Idea text cannot be empty".to_string(),
        });
    }
    if idea.chars().count() > MAX_IDEA_CHARS {
        return Err(AnalysisError::ValidationError {
            message: format!(
                "Idea text is too long. Please keep it under {} characters.",
                MAX_IDEA_CHARS
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("source.endpoint", "https://example.com").is_ok());
        assert!(validate_url("source.endpoint", "http://localhost:9000/analyze").is_ok());
        assert!(validate_url("source.endpoint", "").is_err());
        assert!(validate_url("source.endpoint", "invalid-url").is_err());
        assert!(validate_url("source.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("output.file_name", "report.html", &["html", "md"]).is_ok());
        assert!(validate_file_name("output.file_name", "report.txt", &["html"]).is_err());
        assert!(validate_file_name("output.file_name", "report", &["html"]).is_err());
        assert!(validate_file_name("output.file_name", "../report.html", &["html"]).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("source.timeout_seconds", 30u64, 1, 600).is_ok());
        assert!(validate_range("source.timeout_seconds", 0u64, 1, 600).is_err());
    }

    #[test]
    fn test_validate_idea() {
        assert!(validate_idea("A marketplace for used lab equipment").is_ok());
        assert!(validate_idea("   \n").is_err());
        assert!(validate_idea(&"x".repeat(MAX_IDEA_CHARS)).is_ok());
        assert!(validate_idea(&"x".repeat(MAX_IDEA_CHARS + 1)).is_err());
    }
}
