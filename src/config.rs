//! Configuration for the extraction run.

use std::path::{Path, PathBuf};

/// Default input path, resolved relative to the working directory.
pub const DEFAULT_INPUT: &str = "document.pdf";

/// Default output path, resolved relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "document.txt";

/// Input and output locations for one extraction run.
///
/// The binary always runs with the defaults (the tool takes no arguments);
/// the builder methods exist for library callers and tests.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Path of the PDF to read.
    pub input_path: PathBuf,

    /// Path the cleaned UTF-8 text is written to. Overwritten if present.
    pub output_path: PathBuf,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractConfig {
    /// Create a configuration with the fixed co-located paths.
    pub fn new() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    /// Set the input PDF path.
    pub fn with_input(mut self, path: impl AsRef<Path>) -> Self {
        self.input_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the output text path.
    pub fn with_output(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_colocated() {
        let config = ExtractConfig::default();
        assert_eq!(config.input_path, PathBuf::from("document.pdf"));
        assert_eq!(config.output_path, PathBuf::from("document.txt"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ExtractConfig::new()
            .with_input("in.pdf")
            .with_output("out.txt");
        assert_eq!(config.input_path, PathBuf::from("in.pdf"));
        assert_eq!(config.output_path, PathBuf::from("out.txt"));
    }
}
