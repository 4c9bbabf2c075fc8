//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a whole file as UTF-8 text.
///
/// Filesystem failures map to `Error::internal_io`; bytes that are not valid
/// UTF-8 map to `Error::internal_decode` so callers can tell the two apart.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    let bytes = fs::read(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;

    String::from_utf8(bytes)
        .map_err(|e| Error::internal_decode(path.display().to_string(), e.to_string()))
}

/// Write content to file with standardized error handling.
///
/// Truncates and overwrites in place, so the file keeps its inode and mode.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_file(temp.path(), "test read").unwrap();
        assert!(content.contains("test content"));
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/path.txt"), "test read");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
        assert_eq!(err.details["context"], "test read");
    }

    #[test]
    fn read_file_rejects_invalid_utf8() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[b'o', b'k', 0xff, 0xfe]).unwrap();

        let err = read_file(temp.path(), "test read").unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalDecodeError);
    }

    #[test]
    fn write_file_replaces_existing_content() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "a much longer original body").unwrap();

        write_file(temp.path(), "new content", "test write").unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "new content");
    }

    #[test]
    fn write_file_returns_error_for_invalid_path() {
        let result = write_file(
            Path::new("/nonexistent/dir/file.txt"),
            "content",
            "test write",
        );
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }
}
