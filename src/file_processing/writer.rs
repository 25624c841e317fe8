use crate::errors::AppError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File name used for every saved document, matching what the service
/// serves for its own downloads.
pub const README_FILE_NAME: &str = "README.md";

/// Writes already-rendered Markdown into the output directory. Purely
/// local, no request involved.
pub async fn save_markdown(markdown: &str, output_directory: &Path) -> Result<PathBuf, AppError> {
    save_bytes(markdown.as_bytes(), output_directory).await
}

/// Writes raw Markdown bytes (as returned by the download endpoints) into
/// the output directory.
pub async fn save_bytes(bytes: &[u8], output_directory: &Path) -> Result<PathBuf, AppError> {
    fs::create_dir_all(output_directory).await?;
    let path = output_directory.join(README_FILE_NAME);
    fs::write(&path, bytes).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_markdown_writes_readme_md() {
        let dir = std::env::temp_dir().join("docgen_writer_test");
        let path = save_markdown("# Title\n\nBody", &dir).await.unwrap();

        assert_eq!(path.file_name().unwrap(), README_FILE_NAME);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "# Title\n\nBody");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
