pub mod file_doc_request;
pub mod file_doc_response;
pub mod readme_response;

use crate::errors::AppError;
use serde::{Deserialize, Serialize};

/// Request body for the repository endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RepoRequest {
    pub repo_url: String,
}

impl RepoRequest {
    /// Builds a repository request, rejecting input that would be refused
    /// by the service anyway (empty or non-GitHub URLs). Nothing is sent
    /// over the network until validation has passed.
    pub fn new(repo_url: &str) -> Result<Self, AppError> {
        let repo_url = repo_url.trim();
        if repo_url.is_empty() {
            return Err(AppError::MissingRepoUrl);
        }
        parse_github_url(repo_url)?;
        Ok(RepoRequest {
            repo_url: repo_url.to_string(),
        })
    }
}

/// Parses a GitHub URL into its `(owner, repo)` pair.
///
/// Accepts `https://github.com/owner/repo`, with or without the scheme,
/// a `www.` prefix, or a trailing `.git`.
pub fn parse_github_url(url: &str) -> Result<(String, String), AppError> {
    let stripped = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.");

    let path = stripped
        .strip_prefix("github.com/")
        .ok_or_else(|| AppError::InvalidRepoUrl(url.to_string()))?;

    let mut parts = path.split('/').filter(|part| !part.is_empty());
    let owner = parts
        .next()
        .ok_or_else(|| AppError::InvalidRepoUrl(url.to_string()))?;
    let repo = parts
        .next()
        .ok_or_else(|| AppError::InvalidRepoUrl(url.to_string()))?;

    let repo = repo.trim_end_matches(".git");

    Ok((owner.to_string(), repo.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_url() {
        let (owner, repo) = parse_github_url("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(owner, "rust-lang");
        assert_eq!(repo, "rust");
    }

    #[test]
    fn test_parse_github_url_without_scheme() {
        let (owner, repo) = parse_github_url("github.com/user/repo.git").unwrap();
        assert_eq!(owner, "user");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_non_github_url() {
        assert!(parse_github_url("https://gitlab.com/user/repo").is_err());
    }

    #[test]
    fn test_repo_request_rejects_empty_url() {
        let err = RepoRequest::new("   ").unwrap_err();
        assert!(matches!(err, AppError::MissingRepoUrl));
    }

    #[test]
    fn test_repo_request_rejects_missing_repo_segment() {
        assert!(RepoRequest::new("https://github.com/only-owner").is_err());
    }

    #[test]
    fn test_repo_request_keeps_url_verbatim() {
        let request = RepoRequest::new("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(request.repo_url, "https://github.com/rust-lang/rust");
    }
}
