// src/api/config.rs

/// Default base URL for the documentation service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Generates a README for a whole repository.
pub const GENERATE_README_PATH: &str = "/generate-readme";

/// Serves the last generated repository README as a file.
pub const DOWNLOAD_README_PATH: &str = "/download-readme";

/// Generates documentation for a single pasted file.
pub const GENERATE_FILE_DOC_PATH: &str = "/generate-file-doc";

/// Generates documentation for an uploaded file (multipart).
pub const GENERATE_FILE_DOC_UPLOAD_PATH: &str = "/generate-file-doc/upload";

/// Renders a single-file README server-side and returns the bytes.
pub const DOWNLOAD_SINGLE_FILE_README_PATH: &str = "/download-single-file-readme";

/// Checks that a repository URL points at a reachable repository.
pub const VALIDATE_REPO_PATH: &str = "/validate-repo";
