//! Punctuation strip char filter implementation.

use regex::Regex;

use crate::analysis::char_filter::CharFilter;
use crate::error::{JavelinError, Result};

/// A char filter that removes punctuation characters from the text.
///
/// Removal (rather than replacement with a space) matches the behavior of
/// deleting each punctuation character in place, so `don't` becomes `dont`
/// and `state-of-the-art` becomes `stateoftheart`.
///
/// # Examples
///
/// ```
/// use javelin::analysis::char_filter::CharFilter;
/// use javelin::analysis::char_filter::punctuation_strip::PunctuationStripCharFilter;
///
/// let filter = PunctuationStripCharFilter::new().unwrap();
/// assert_eq!(filter.filter("don't stop, now!"), "dont stop now");
/// ```
pub struct PunctuationStripCharFilter {
    pattern: Regex,
}

impl PunctuationStripCharFilter {
    /// Create a new punctuation strip char filter.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"[[:punct:]]+")
                .map_err(|e| JavelinError::Anyhow(anyhow::Error::from(e)))?,
        })
    }
}

impl CharFilter for PunctuationStripCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "punctuation_strip"
    }
}
