pub mod cleaner;
pub mod formats;

use std::path::Path;

use tracing::debug;

use crate::error::ExtractError;

/// Convert a résumé file into cleaned plain text.
///
/// Dispatches on the lowercased file extension; unsupported extensions fail
/// before any file I/O happens. Extraction that succeeds but yields nothing
/// after cleaning is reported as `EmptyContent`.
pub fn extract_file(path: &Path) -> Result<String, ExtractError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let text = match ext.as_str() {
        "pdf" => cleaner::clean_pdf_text(&formats::read_pdf(path)?),
        "docx" => cleaner::clean_text(&formats::read_docx(path)?),
        "doc" => cleaner::clean_text(&formats::read_doc(path)?),
        "txt" => cleaner::clean_text(&formats::read_txt(path)?),
        _ => return Err(ExtractError::UnsupportedFormat(ext)),
    };

    if text.trim().is_empty() {
        return Err(ExtractError::EmptyContent(path.to_path_buf()));
    }

    debug!(path = %path.display(), chars = text.len(), "extracted text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("cvparse-textract-{name}"));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_unsupported_extension_fails_without_io() {
        // The file does not exist; dispatch must fail on the extension alone.
        let err = extract_file(Path::new("/nonexistent/resume.xyz")).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(ext) if ext == "xyz"));
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let err = extract_file(Path::new("/nonexistent/resume")).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(ext) if ext.is_empty()));
    }

    #[test]
    fn test_txt_extraction_cleans_text() {
        let path = temp_file("clean.txt", "Jane  Smith\r\n\r\n\r\n\r\nSKILLS\r\n");
        let text = extract_file(&path).unwrap();
        assert_eq!(text, "Jane Smith\n\nSKILLS");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_whitespace_only_txt_is_empty_content() {
        let path = temp_file("blank.txt", "   \n\t\n  \n");
        let err = extract_file(&path).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyContent(_)));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_txt_file_is_io_error() {
        let err = extract_file(Path::new("/nonexistent/resume.txt")).unwrap_err();
        assert!(matches!(err, ExtractError::Io { .. }));
    }
}
