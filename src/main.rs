mod api;
mod cli;
mod commands;
mod errors;
mod file_processing;
mod models;
mod utils;

use crate::utils::logger;
use clap::Parser;
use cli::args::Args;
use cli::args::Commands;
use cli::display::CliDisplayManager;
use colored::*;
use errors::AppError;
use std::time::Instant;
use utils::config::read_config;

/// The main entry point of the application
#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("{} {}", "✖".bright_red().bold(), e.to_string().red());
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let start_time = Instant::now();

    // Config changes apply on their own, without the banner or a request.
    let command = match args.command {
        Commands::Config {
            set_base_url,
            set_log_level,
            set_output_directory,
        } => {
            return commands::handle_config_command(
                set_base_url,
                set_log_level,
                set_output_directory,
            )
            .await;
        }
        command => command,
    };

    // Read config.toml
    let config = read_config()?;
    logger::setup_logger(&config);

    // Create the CLI display manager
    let mut display_manager = CliDisplayManager::new();
    display_manager.print_header();

    match command {
        Commands::Repo { repo_url, download } => {
            commands::handle_repo_command(&repo_url, download, &config, &mut display_manager)
                .await?;
        }
        Commands::File {
            path,
            filename,
            language,
            save,
            remote_save,
        } => {
            commands::handle_file_command(
                &path,
                filename,
                language,
                save,
                remote_save,
                &config,
                &mut display_manager,
            )
            .await?;
        }
        Commands::Upload { path, save } => {
            commands::handle_upload_command(&path, save, &config, &mut display_manager).await?;
        }
        Commands::Validate { repo_url } => {
            commands::handle_validate_command(&repo_url, &config, &mut display_manager).await?;
        }
        Commands::Config { .. } => unreachable!(),
    }

    display_manager.print_footer(start_time.elapsed());

    Ok(())
}
