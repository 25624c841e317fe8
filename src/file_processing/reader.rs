use crate::errors::AppError;
use std::path::Path;
use tokio::fs;

/// Maximum allowed file size (10 MB).
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Reads a local source file for the paste flow, returning its file name
/// and contents.
pub async fn read_source_file(path: &Path) -> Result<(String, String), AppError> {
    check_file(path).await?;
    let contents = fs::read_to_string(path).await?;
    Ok((filename_of(path)?, contents))
}

/// Reads a local file as raw bytes for the upload flow.
pub async fn read_file_bytes(path: &Path) -> Result<(String, Vec<u8>), AppError> {
    check_file(path).await?;
    let bytes = fs::read(path).await?;
    Ok((filename_of(path)?, bytes))
}

async fn check_file(path: &Path) -> Result<(), AppError> {
    if !path.is_file() {
        return Err(AppError::InvalidInput(format!(
            "File not found: {}",
            path.display()
        )));
    }
    let metadata = fs::metadata(path).await?;
    if metadata.len() > MAX_FILE_SIZE {
        return Err(AppError::InvalidInput(format!(
            "File too large: {} (max {} bytes)",
            path.display(),
            MAX_FILE_SIZE
        )));
    }
    Ok(())
}

fn filename_of(path: &Path) -> Result<String, AppError> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::InvalidInput(format!("Not a file path: {}", path.display())))
}

/// Guesses the source language from the file extension, for the optional
/// language hint the service accepts.
pub fn guess_language(path: &Path) -> Option<String> {
    let extension = path.extension().and_then(|ext| ext.to_str())?;
    let language = match extension.to_lowercase().as_str() {
        "rs" => "Rust",
        "py" => "Python",
        "js" => "JavaScript",
        "jsx" => "JavaScript",
        "ts" => "TypeScript",
        "tsx" => "TypeScript",
        "go" => "Go",
        "c" => "C",
        "h" => "C",
        "cpp" => "C++",
        "hpp" => "C++",
        "java" => "Java",
        "rb" => "Ruby",
        "css" => "CSS",
        "html" => "HTML",
        _ => return None,
    };
    Some(language.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_guess_language_known_extension() {
        assert_eq!(
            guess_language(Path::new("src/main.rs")),
            Some("Rust".to_string())
        );
        assert_eq!(
            guess_language(Path::new("app.PY")),
            Some("Python".to_string())
        );
    }

    #[test]
    fn test_guess_language_unknown_extension() {
        assert_eq!(guess_language(Path::new("notes.xyz")), None);
        assert_eq!(guess_language(Path::new("Makefile")), None);
    }

    #[test]
    fn test_filename_of() {
        assert_eq!(
            filename_of(Path::new("some/dir/utils.js")).unwrap(),
            "utils.js"
        );
    }

    #[tokio::test]
    async fn test_read_source_file() {
        let path = std::env::temp_dir().join("docgen_reader_test.rs");
        std::fs::write(&path, "fn main() {}").unwrap();

        let (filename, code) = read_source_file(&path).await.unwrap();
        assert_eq!(filename, "docgen_reader_test.rs");
        assert_eq!(code, "fn main() {}");

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_read_source_file_missing() {
        let path = PathBuf::from("does/not/exist.rs");
        assert!(read_source_file(&path).await.is_err());
    }
}
