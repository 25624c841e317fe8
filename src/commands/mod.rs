use crate::api::client::DocServiceApi;
use crate::api::errors::DocServiceError;
use crate::cli::display::CliDisplayManager;
use crate::cli::markdown::render_markdown;
use crate::errors::AppError;
use crate::file_processing::{reader, writer};
use crate::models::file_doc_request::FileDocRequest;
use crate::models::RepoRequest;
use crate::utils::config::{read_config, write_config, Config};
use std::future::Future;
use std::path::Path;

/// Handles the repo subcommand
pub async fn handle_repo_command(
    repo_url: &str,
    download: bool,
    config: &Config,
    display_manager: &mut CliDisplayManager,
) -> Result<(), AppError> {
    let request = RepoRequest::new(repo_url)?;
    let api = DocServiceApi::new(config.base_url.clone());

    display_manager.print_repo_generation_start(&request.repo_url);
    display_manager.start_spinner("Waiting for documentation service response");
    let readme = run_cancellable(api.generate_readme(&request)).await;
    display_manager.stop_spinner();
    let readme = readme?;
    display_manager.print_response_success();

    display_manager.print_rendering_start();
    println!("{}", render_markdown(&readme));

    if download {
        display_manager.start_spinner("Downloading README.md");
        let bytes = run_cancellable(api.download_readme()).await;
        display_manager.stop_spinner();
        let saved = writer::save_bytes(&bytes?, Path::new(&config.output_directory)).await?;
        display_manager.print_saved(&saved);
    }

    Ok(())
}

/// Handles the file subcommand
pub async fn handle_file_command(
    path: &Path,
    filename: Option<String>,
    language: Option<String>,
    save: bool,
    remote_save: bool,
    config: &Config,
    display_manager: &mut CliDisplayManager,
) -> Result<(), AppError> {
    let (default_filename, code) = reader::read_source_file(path).await?;
    let filename = filename.unwrap_or(default_filename);
    let language = language.or_else(|| reader::guess_language(path));
    let request = FileDocRequest::new(&filename, language, &code)?;
    let api = DocServiceApi::new(config.base_url.clone());

    display_manager.print_file_generation_start(&request.filename);
    display_manager.start_spinner("Waiting for documentation service response");
    let documentation = run_cancellable(api.generate_file_doc(&request)).await;
    display_manager.stop_spinner();
    let documentation = documentation?;
    display_manager.print_response_success();

    display_manager.print_rendering_start();
    println!("{}", render_markdown(&documentation));

    if save {
        // Package the Markdown we already hold; no further request.
        let saved =
            writer::save_markdown(&documentation, Path::new(&config.output_directory)).await?;
        display_manager.print_saved(&saved);
    } else if remote_save {
        display_manager.start_spinner("Downloading README.md");
        let bytes = run_cancellable(api.download_single_file_readme(&request)).await;
        display_manager.stop_spinner();
        let saved = writer::save_bytes(&bytes?, Path::new(&config.output_directory)).await?;
        display_manager.print_saved(&saved);
    }

    Ok(())
}

/// Handles the upload subcommand
pub async fn handle_upload_command(
    path: &Path,
    save: bool,
    config: &Config,
    display_manager: &mut CliDisplayManager,
) -> Result<(), AppError> {
    let (filename, bytes) = reader::read_file_bytes(path).await?;
    let api = DocServiceApi::new(config.base_url.clone());

    display_manager.print_upload_generation_start(&filename);
    display_manager.start_spinner("Waiting for documentation service response");
    let documentation = run_cancellable(api.generate_file_doc_upload(&filename, bytes)).await;
    display_manager.stop_spinner();
    let documentation = documentation?;
    display_manager.print_response_success();

    display_manager.print_rendering_start();
    println!("{}", render_markdown(&documentation));

    if save {
        let saved =
            writer::save_markdown(&documentation, Path::new(&config.output_directory)).await?;
        display_manager.print_saved(&saved);
    }

    Ok(())
}

/// Handles the validate subcommand
pub async fn handle_validate_command(
    repo_url: &str,
    config: &Config,
    display_manager: &mut CliDisplayManager,
) -> Result<(), AppError> {
    let request = RepoRequest::new(repo_url)?;
    let api = DocServiceApi::new(config.base_url.clone());

    display_manager.print_validation_start(&request.repo_url);
    display_manager.start_spinner("Waiting for documentation service response");
    let validation = run_cancellable(api.validate_repo(&request)).await;
    display_manager.stop_spinner();
    let validation = validation?;
    display_manager.print_validation_result(&validation.status, &validation.repo);

    Ok(())
}

/// Handles the config subcommand
pub async fn handle_config_command(
    set_base_url: Option<String>,
    set_log_level: Option<String>,
    set_output_directory: Option<String>,
) -> Result<(), AppError> {
    let mut config = read_config()?;

    if let Some(base_url) = set_base_url {
        config.base_url = base_url.clone();
        println!("Base URL set to {}", base_url);
    }

    if let Some(log_level) = set_log_level {
        config.log_level = log_level.clone();
        println!("Log level set to {}", log_level);
    }

    if let Some(output_directory) = set_output_directory {
        config.output_directory = output_directory.clone();
        println!("Output directory set to {}", output_directory);
    }

    write_config(&config)?;
    Ok(())
}

/// Races a service call against Ctrl-C so an in-flight request can be
/// abandoned from the terminal.
async fn run_cancellable<T>(
    request: impl Future<Output = Result<T, DocServiceError>>,
) -> Result<T, AppError> {
    tokio::select! {
        result = request => Ok(result?),
        _ = tokio::signal::ctrl_c() => Err(AppError::Cancelled),
    }
}
