//! Error types for PDF text extraction.

use std::path::PathBuf;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting text from a PDF.
///
/// Every variant is fatal to the tool: the binary reports the message on
/// stderr and exits with status 1. No output file is written once any of
/// these has occurred.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input PDF does not exist
    #[error("PDF not found: {0}")]
    MissingInput(PathBuf),

    /// The PDF backend failed to open or parse the document
    #[error("Failed to parse PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error while writing the output file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message_names_path() {
        let err = Error::MissingInput(PathBuf::from("document.pdf"));
        let msg = format!("{}", err);
        assert!(msg.contains("PDF not found"));
        assert!(msg.contains("document.pdf"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
        assert!(format!("{}", err).contains("denied"));
    }
}
