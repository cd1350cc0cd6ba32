use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // Numeric D-M-Y forms plus "Month Day[, Year]" / "Day Month[, Year]"
    // with ordinal suffixes and abbreviated month names
    static ref DATE_PATTERN: Regex = Regex::new(
        r"(?i)(?:[0-3]?\d(?:st|nd|rd|th)?\s+(?:of\s+)?(?:jan\.?|january|feb\.?|february|mar\.?|march|apr\.?|april|may|jun\.?|june|jul\.?|july|aug\.?|august|sep\.?|september|oct\.?|october|nov\.?|november|dec\.?|december)|(?:jan\.?|january|feb\.?|february|mar\.?|march|apr\.?|april|may|jun\.?|june|jul\.?|july|aug\.?|august|sep\.?|september|oct\.?|october|nov\.?|november|dec\.?|december)\s+[0-3]?\d(?:st|nd|rd|th)?),?\s*(?:\d{4})?|[0-3]?\d[-./][0-3]?\d[-./]\d{2,4}"
    ).unwrap();
}

pub fn extract_dates(text: &str) -> Vec<String> {
    find_all(&DATE_PATTERN, text)
}

pub struct DateExtractor {}

impl PatternExtractor for DateExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_dates(text)
    }
}
