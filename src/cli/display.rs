use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Manages CLI display and output formatting.
pub struct CliDisplayManager {
    spinner: Option<ProgressBar>,
}

impl CliDisplayManager {
    /// Creates a new `CliDisplayManager`.
    pub fn new() -> Self {
        CliDisplayManager { spinner: None }
    }

    /// Prints the application header.
    pub fn print_header(&self) {
        println!("\n{}", "╭──────────────────────╮".bright_magenta());
        println!("{}", "│  📚 Docgen v0.1.0    │".bright_magenta().bold());
        println!("{}\n", "╰──────────────────────╯".bright_magenta());
    }

    /// Prints the start of a repository README generation.
    pub fn print_repo_generation_start(&self, repo_url: &str) {
        self.print_section(
            "📦",
            "[1/2] Generating repository README",
            &format!("Repository: {}", repo_url),
        );
    }

    /// Prints the start of a single-file documentation generation.
    pub fn print_file_generation_start(&self, filename: &str) {
        self.print_section(
            "📄",
            "[1/2] Generating file documentation",
            &format!("File: {}", filename),
        );
    }

    /// Prints the start of an upload documentation generation.
    pub fn print_upload_generation_start(&self, filename: &str) {
        self.print_section(
            "📤",
            "[1/2] Uploading file for documentation",
            &format!("File: {}", filename),
        );
    }

    /// Prints the start of a repository validation.
    pub fn print_validation_start(&self, repo_url: &str) {
        self.print_section(
            "🔍",
            "Validating repository",
            &format!("Repository: {}", repo_url),
        );
    }

    /// Prints a success message for a service response.
    pub fn print_response_success(&self) {
        self.print_info("Successfully received documentation service response");
    }

    /// Prints the rendering section header.
    pub fn print_rendering_start(&self) {
        self.print_section("📝", "[2/2] Rendered documentation", "");
    }

    /// Prints the path a document was saved to.
    pub fn print_saved(&self, path: &Path) {
        self.print_info(&format!("Saved {}", path.display()));
    }

    /// Prints the outcome of a repository validation.
    pub fn print_validation_result(&self, status: &str, repo: &str) {
        self.print_info(&format!("Repository {} is {}", repo, status));
    }

    /// Prints the application footer.
    pub fn print_footer(&self, duration: Duration) {
        println!();
        println!(
            "{}",
            format!("⚡ Completed in {:.2?}", duration)
                .bright_white()
                .dimmed(),
        );
        println!();
    }

    /// Starts a spinner while a request is suspended on the service.
    pub fn start_spinner(&mut self, waiting_for: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template(&format!(
                "   {} {{spinner}} {}",
                "→".bright_white(),
                waiting_for.italic().bright_white()
            ))
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Stops the spinner.
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }

    /// Helper function to print a section header.
    fn print_section(&self, icon: &str, title: &str, description: &str) {
        println!("{} {}", icon.bright_yellow(), title.bright_cyan().bold());
        if !description.is_empty() {
            println!(
                "   {} {}",
                "→".bright_white(),
                description.italic().bright_white()
            );
        }
    }

    /// Helper function to print an informational message.
    fn print_info(&self, message: &str) {
        println!(
            "   {} {}",
            "→".bright_white(),
            message.italic().bright_white()
        );
    }
}
