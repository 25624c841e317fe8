use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the Docgen application.
#[derive(Parser, Debug, PartialEq, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands for the Docgen application.
#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum Commands {
    /// Generate a README for a GitHub repository.
    Repo {
        /// GitHub repository URL.
        repo_url: String,

        /// Also download the generated README.md from the service.
        #[arg(short, long)]
        download: bool,
    },

    /// Generate documentation for a single source file sent as text.
    File {
        /// Path to the source file.
        path: PathBuf,

        /// Override the filename sent to the service.
        #[arg(long)]
        filename: Option<String>,

        /// Override the language hint sent to the service.
        #[arg(long)]
        language: Option<String>,

        /// Save the rendered documentation as README.md without another request.
        #[arg(short, long)]
        save: bool,

        /// Have the service render README.md and save the returned bytes instead.
        #[arg(long, conflicts_with = "save")]
        remote_save: bool,
    },

    /// Generate documentation for a single source file sent as an upload.
    Upload {
        /// Path to the file to upload.
        path: PathBuf,

        /// Save the rendered documentation as README.md.
        #[arg(short, long)]
        save: bool,
    },

    /// Check that the service can reach a repository.
    Validate {
        /// GitHub repository URL.
        repo_url: String,
    },

    /// Manage configuration options.
    Config {
        /// Set the base URL of the documentation service.
        #[arg(long)]
        set_base_url: Option<String>,

        /// Set the log level (debug, info, warn, error).
        #[arg(long)]
        set_log_level: Option<String>,

        /// Set the output directory for saved files.
        #[arg(long)]
        set_output_directory: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo_command() {
        let args =
            Args::try_parse_from(["docgen", "repo", "https://github.com/user/repo"]).unwrap();
        assert_eq!(
            args.command,
            Commands::Repo {
                repo_url: "https://github.com/user/repo".to_string(),
                download: false,
            }
        );
    }

    #[test]
    fn test_file_save_flags_conflict() {
        let result =
            Args::try_parse_from(["docgen", "file", "main.rs", "--save", "--remote-save"]);
        assert!(result.is_err());
    }
}
