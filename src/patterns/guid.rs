use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // 8-4-4-4-12 hex groups; each hyphen is individually optional, so a
    // bare 32-char hex run also qualifies
    static ref GUID_PATTERN: Regex = Regex::new(
        r"[0-9a-fA-F]{8}-?[a-fA-F0-9]{4}-?[a-fA-F0-9]{4}-?[a-fA-F0-9]{4}-?[a-fA-F0-9]{12}"
    ).unwrap();
}

pub fn extract_guids(text: &str) -> Vec<String> {
    find_all(&GUID_PATTERN, text)
}

pub struct GuidExtractor {}

impl PatternExtractor for GuidExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_guids(text)
    }
}
