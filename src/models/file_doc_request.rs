use crate::errors::AppError;
use serde::{Deserialize, Serialize};

/// Request body for the single-file documentation endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileDocRequest {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub code: String,
}

impl FileDocRequest {
    /// Builds a file-documentation request. Filename and code are both
    /// required; an empty value means no request is dispatched.
    pub fn new(
        filename: &str,
        language: Option<String>,
        code: &str,
    ) -> Result<Self, AppError> {
        let filename = filename.trim();
        if filename.is_empty() {
            return Err(AppError::MissingFilename);
        }
        if code.trim().is_empty() {
            return Err(AppError::MissingCode);
        }
        Ok(FileDocRequest {
            filename: filename.to_string(),
            language,
            code: code.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_filename() {
        let err = FileDocRequest::new("  ", None, "fn main() {}").unwrap_err();
        assert!(matches!(err, AppError::MissingFilename));
    }

    #[test]
    fn test_rejects_empty_code() {
        let err = FileDocRequest::new("main.rs", None, "\n\n").unwrap_err();
        assert!(matches!(err, AppError::MissingCode));
    }

    #[test]
    fn test_language_omitted_from_json_when_unknown() {
        let request = FileDocRequest::new("main.rs", None, "fn main() {}").unwrap();
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("language"));
    }

    #[test]
    fn test_language_serialized_when_present() {
        let request =
            FileDocRequest::new("main.rs", Some("Rust".to_string()), "fn main() {}").unwrap();
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"language\":\"Rust\""));
    }
}
