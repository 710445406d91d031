//! # pdf2text
//!
//! Extract plain text from a PDF file and produce a cleaned UTF-8 rendition.
//!
//! The pipeline is deliberately linear: open the document, read each page's
//! text layer in page order, join the pages with newlines, strip standalone
//! page-number lines, collapse blank-line runs, trim. PDF parsing is
//! delegated to `lopdf`; this crate only sequences the pages and cleans up
//! the output.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf2text::{extractor, normalize};
//! use std::path::Path;
//!
//! # fn main() -> pdf2text::Result<()> {
//! let raw = extractor::extract_text(Path::new("document.pdf"))?;
//! let cleaned = normalize::clean(&raw);
//! std::fs::write("document.txt", cleaned.as_bytes())?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod normalize;

pub use config::ExtractConfig;
pub use error::{Error, Result};
