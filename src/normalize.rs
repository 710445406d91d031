//! Whitespace normalization and page-number cleanup for extracted text.
//!
//! PDF text layers carry page-level artifacts that don't belong in a
//! continuous plain-text rendition: printed page numbers sitting on their
//! own line, and the blank-line runs left behind by page boundaries. The
//! passes here remove both.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for a standalone page-number line: digits alone between newlines
    static ref RE_PAGE_NUMBER: Regex = Regex::new(r"\n\s*\d+\s*\n").unwrap();

    /// Regex for 3+ consecutive newlines
    static ref RE_MULTI_NEWLINE: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Remove standalone page-number lines.
///
/// A line consisting solely of whitespace-padded digits, bounded by
/// newlines, is a printed page number; the whole match (both bounding
/// newlines included) is replaced with a single newline.
///
/// Matches are non-overlapping, so of two directly adjacent page-number
/// lines only the first is removed by one pass. Real page numbers are
/// separated by a page of text, where this cannot arise.
///
/// # Examples
///
/// ```
/// use pdf2text::normalize::strip_page_numbers;
///
/// let input = "end of page one\n\n  42  \n\nstart of page two";
/// let output = strip_page_numbers(input);
/// assert_eq!(output, "end of page one\nstart of page two");
/// ```
pub fn strip_page_numbers(text: &str) -> String {
    RE_PAGE_NUMBER.replace_all(text, "\n").to_string()
}

/// Collapse any run of 3+ consecutive newlines to exactly 2.
///
/// # Examples
///
/// ```
/// use pdf2text::normalize::collapse_blank_lines;
///
/// let input = "Line 1\n\n\n\n\nLine 2";
/// assert_eq!(collapse_blank_lines(input), "Line 1\n\nLine 2");
/// ```
pub fn collapse_blank_lines(text: &str) -> String {
    RE_MULTI_NEWLINE.replace_all(text, "\n\n").to_string()
}

/// Apply the full cleanup pipeline to extracted text.
///
/// Strips page-number lines, collapses blank-line runs, and trims leading
/// and trailing whitespace. Page-number removal runs first so the collapse
/// pass sees the gaps it leaves behind.
pub fn clean(text: &str) -> String {
    let stripped = strip_page_numbers(text);
    let collapsed = collapse_blank_lines(&stripped);
    collapsed.trim().to_string()
}
