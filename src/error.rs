use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while turning a résumé file into plain text.
///
/// Only the text-extraction stage can fail; every extractor downstream of it
/// returns empty values instead of erroring. The orchestration boundary in
/// [`crate::parser`] converts these into a `parsing_error` record, so callers
/// never see them as a `Result`.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("{format} extraction failed: {message}")]
    ExtractionFailed { format: &'static str, message: String },

    #[error("no usable text in {0}")]
    EmptyContent(PathBuf),

    #[error("io error reading {path}: {message}")]
    Io { path: PathBuf, message: String },
}

impl ExtractError {
    pub fn extraction(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::ExtractionFailed {
            format,
            message: err.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
