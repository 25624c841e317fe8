use serde::{Deserialize, Serialize};

/// Response of `/generate-readme`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ReadmeResponse {
    pub readme: String,
}

/// Response of `/validate-repo`.
#[derive(Serialize, Deserialize, Debug)]
pub struct RepoValidation {
    pub status: String,
    pub repo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme_response_shape() {
        let response: ReadmeResponse =
            serde_json::from_str(r##"{"readme": "# Project\n\nHello"}"##).unwrap();
        assert_eq!(response.readme, "# Project\n\nHello");
    }

    #[test]
    fn test_repo_validation_shape() {
        let response: RepoValidation = serde_json::from_str(
            r#"{"status": "valid", "repo": "https://github.com/user/repo"}"#,
        )
        .unwrap();
        assert_eq!(response.status, "valid");
    }
}
