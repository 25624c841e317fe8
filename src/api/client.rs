// src/api/client.rs

use super::{config, errors::DocServiceError};
use crate::models::file_doc_request::FileDocRequest;
use crate::models::file_doc_response::FileDocResponse;
use crate::models::readme_response::{ReadmeResponse, RepoValidation};
use crate::models::RepoRequest;
use reqwest::{Client, Response};

/// API client for the documentation service.
pub struct DocServiceApi {
    client: Client,
    base_url: String,
}

impl DocServiceApi {
    /// Creates a new `DocServiceApi` instance.
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Asks the service to generate a README for a whole repository.
    pub async fn generate_readme(
        &self,
        request: &RepoRequest,
    ) -> Result<String, DocServiceError> {
        log::debug!("Calling {}", config::GENERATE_README_PATH);

        let response = self
            .client
            .post(self.url(config::GENERATE_README_PATH))
            .json(request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let raw_response = response.text().await?;
        let parsed: ReadmeResponse = serde_json::from_str(&raw_response)?;

        log::debug!("Received README of {} bytes", parsed.readme.len());
        Ok(parsed.readme)
    }

    /// Fetches the last generated repository README as raw Markdown bytes.
    pub async fn download_readme(&self) -> Result<Vec<u8>, DocServiceError> {
        log::debug!("Calling {}", config::DOWNLOAD_README_PATH);

        let response = self
            .client
            .get(self.url(config::DOWNLOAD_README_PATH))
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        Ok(response.bytes().await?.to_vec())
    }

    /// Asks the service to document a single source file sent as JSON.
    pub async fn generate_file_doc(
        &self,
        request: &FileDocRequest,
    ) -> Result<String, DocServiceError> {
        log::debug!("Calling {}", config::GENERATE_FILE_DOC_PATH);

        let response = self
            .client
            .post(self.url(config::GENERATE_FILE_DOC_PATH))
            .json(request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let raw_response = response.text().await?;
        let parsed: FileDocResponse = serde_json::from_str(&raw_response)?;

        log::debug!("Received documentation of {} bytes", parsed.documentation.len());
        Ok(parsed.documentation)
    }

    /// Asks the service to document a single source file sent as a
    /// multipart upload. The file travels as one part named `file`,
    /// carrying its original file name.
    pub async fn generate_file_doc_upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, DocServiceError> {
        log::debug!("Calling {}", config::GENERATE_FILE_DOC_UPLOAD_PATH);

        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url(config::GENERATE_FILE_DOC_UPLOAD_PATH))
            .multipart(form)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let raw_response = response.text().await?;
        let parsed: FileDocResponse = serde_json::from_str(&raw_response)?;

        Ok(parsed.documentation)
    }

    /// Has the service render a single-file README and returns its bytes.
    pub async fn download_single_file_readme(
        &self,
        request: &FileDocRequest,
    ) -> Result<Vec<u8>, DocServiceError> {
        log::debug!("Calling {}", config::DOWNLOAD_SINGLE_FILE_README_PATH);

        let response = self
            .client
            .post(self.url(config::DOWNLOAD_SINGLE_FILE_README_PATH))
            .json(request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        Ok(response.bytes().await?.to_vec())
    }

    /// Checks that the service can reach the given repository.
    pub async fn validate_repo(
        &self,
        request: &RepoRequest,
    ) -> Result<RepoValidation, DocServiceError> {
        log::debug!("Calling {}", config::VALIDATE_REPO_PATH);

        let response = self
            .client
            .post(self.url(config::VALIDATE_REPO_PATH))
            .json(request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let raw_response = response.text().await?;
        Ok(serde_json::from_str(&raw_response)?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps any non-2xx status to an opaque service error. The response
    /// body is kept out of the user-facing message and only logged.
    async fn check_status(response: Response) -> Result<Response, DocServiceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("Service error body: {}", body);
            return Err(DocServiceError::ApiError(format!(
                "request failed with status {}",
                status
            )));
        }
        Ok(response)
    }
}
