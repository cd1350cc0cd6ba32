use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // DDD-DD-DDDD, no validity-range checks on the area number
    static ref SSN_PATTERN: Regex = Regex::new(r"\d{3}-\d{2}-\d{4}").unwrap();
}

pub fn extract_ssns(text: &str) -> Vec<String> {
    find_all(&SSN_PATTERN, text)
}

pub struct SsnExtractor {}

impl PatternExtractor for SsnExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_ssns(text)
    }
}
