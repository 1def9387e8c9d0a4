use std::io;
use std::path::Path;
use thiserror::Error;

pub mod clipboard;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("no readable text in {0}")]
    EmptyText(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}

/// Reads a plain-text file, rejecting files with nothing to display.
pub fn load_file(path: &Path) -> Result<String, LoadError> {
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(LoadError::EmptyText(path.display().to_string()));
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn test_load_file_returns_contents() {
        let path = temp_path("cadence_load_valid.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"hello world").unwrap();

        let content = load_file(&path).unwrap();
        assert_eq!(content, "hello world");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_file_rejects_empty_file() {
        let path = temp_path("cadence_load_empty.txt");
        File::create(&path).unwrap();

        match load_file(&path) {
            Err(LoadError::EmptyText(_)) => {}
            other => panic!("expected EmptyText, got {:?}", other.map(|_| ())),
        }

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_file_rejects_whitespace_only_file() {
        let path = temp_path("cadence_load_blank.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"  \n\t\n").unwrap();

        assert!(matches!(load_file(&path), Err(LoadError::EmptyText(_))));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_file_missing_is_io_error() {
        let path = temp_path("cadence_load_missing_12345.txt");
        assert!(matches!(load_file(&path), Err(LoadError::Io(_))));
    }
}
