use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // Domain labels are alphanumeric with internal hyphens, so consecutive
    // dots never match
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"(?i)[A-Za-z0-9!#$%&'*+/=?^_{|.}~-]+@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?"
    ).unwrap();
}

pub fn extract_emails(text: &str) -> Vec<String> {
    find_all(&EMAIL_PATTERN, text)
}

pub struct EmailExtractor {}

impl PatternExtractor for EmailExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_emails(text)
    }
}
