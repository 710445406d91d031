//! Page-order text extraction from a PDF document.
//!
//! A thin layer over `lopdf`: the document is opened once, every page's
//! text layer is read in ascending page order, and the handle is released
//! before anything is written. Cleanup of the raw text lives in
//! [`crate::normalize`].

use std::path::Path;

use lopdf::Document;

use crate::error::{Error, Result};

/// Read the text of every page, in ascending page order.
///
/// Fails with [`Error::MissingInput`] before the backend is invoked if the
/// input file does not exist, and with [`Error::Pdf`] if the backend cannot
/// open or parse the document. Both are fatal to the caller.
pub fn extract_pages(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }

    let doc = Document::load(path)?;

    // get_pages() is keyed by 1-based page number in a BTreeMap, so
    // iteration order is page order.
    let pages = doc.get_pages();
    log::info!("{}: {} pages", path.display(), pages.len());

    let mut pages_text = Vec::with_capacity(pages.len());
    for page_number in pages.keys() {
        let text = doc.extract_text(&[*page_number])?;
        log::debug!("page {}: {} chars", page_number, text.chars().count());
        pages_text.push(text);
    }

    Ok(pages_text)
}

/// Extract the whole document as one string, pages joined with a single
/// newline. The result is raw backend output; callers normalize it with
/// [`crate::normalize::clean`].
pub fn extract_text(path: &Path) -> Result<String> {
    Ok(extract_pages(path)?.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_input_reported_before_backend() {
        let path = PathBuf::from("no/such/document.pdf");
        let err = extract_pages(&path).unwrap_err();
        match err {
            Error::MissingInput(p) => assert_eq!(p, path),
            other => panic!("expected MissingInput, got {:?}", other),
        }
    }
}
