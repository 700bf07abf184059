//! Error types for the interchange engine.

use std::io;
use thiserror::Error;

/// Result type alias for import operations.
pub type ImportResult<T> = std::result::Result<T, ImportError>;

/// Result type alias for export operations.
pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while reading external bytes into a document.
#[derive(Error, Debug)]
pub enum ImportError {
    /// I/O error while obtaining the input bytes.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The bytes do not parse as the declared format.
    #[error("corrupt input: {0}")]
    Corrupt(String),

    /// The input is structurally valid but uses a feature the engine
    /// does not handle (e.g. an encrypted PDF).
    #[error("unsupported feature: {0}")]
    Unsupported(String),

    /// The format tag is outside the supported import set.
    #[error("unsupported import format: {0}")]
    UnsupportedFormat(String),
}

/// Errors that can occur while exporting a document.
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error while producing the payload.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The host environment refused the download or mailto navigation.
    #[error("delivery blocked: {0}")]
    DeliveryBlocked(String),

    /// The format tag is outside the supported export set.
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Error serializing the output container.
    #[error("rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for ImportError {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => ImportError::Io(e),
            lopdf::Error::Decryption(_) => ImportError::Unsupported("encrypted PDF".into()),
            _ => ImportError::Corrupt(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for ImportError {
    fn from(err: quick_xml::Error) -> Self {
        ImportError::Corrupt(err.to_string())
    }
}

impl From<zip::result::ZipError> for ImportError {
    fn from(err: zip::result::ZipError) -> Self {
        ImportError::Corrupt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImportError::Unsupported("encrypted PDF".into());
        assert_eq!(err.to_string(), "unsupported feature: encrypted PDF");

        let err = ImportError::UnsupportedFormat("rtf".into());
        assert_eq!(err.to_string(), "unsupported import format: rtf");

        let err = ExportError::DeliveryBlocked("popup blocked".into());
        assert_eq!(err.to_string(), "delivery blocked: popup blocked");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ImportError = io_err.into();
        assert!(matches!(err, ImportError::Io(_)));
    }

    #[test]
    fn test_zip_error_maps_to_corrupt() {
        let err: ImportError = zip::result::ZipError::InvalidArchive("bad header").into();
        assert!(matches!(err, ImportError::Corrupt(_)));
    }
}
