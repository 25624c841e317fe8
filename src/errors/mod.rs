use crate::api::errors::DocServiceError;
use std::fmt;
use toml;

#[derive(Debug)]
pub enum AppError {
    IoError(std::io::Error),
    DocServiceError(DocServiceError),
    TomlError(toml::de::Error),
    MissingRepoUrl,
    InvalidRepoUrl(String),
    MissingFilename,
    MissingCode,
    InvalidInput(String),
    Cancelled,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::IoError(e) => write!(f, "IO error: {}", e),
            AppError::DocServiceError(e) => write!(f, "documentation service error: {}", e),
            AppError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            AppError::MissingRepoUrl => write!(f, "a GitHub repository URL is required"),
            AppError::InvalidRepoUrl(url) => {
                write!(f, "not a GitHub repository URL: {}", url)
            }
            AppError::MissingFilename => write!(f, "a filename is required"),
            AppError::MissingCode => write!(f, "source code is required"),
            AppError::InvalidInput(e) => write!(f, "invalid input: {}", e),
            AppError::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::TomlError(err)
    }
}

impl From<DocServiceError> for AppError {
    fn from(err: DocServiceError) -> Self {
        AppError::DocServiceError(err)
    }
}
