use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // North-American groupings with optional country code and parentheses,
    // plus the international "+CC CC DDD DDDD" grouping
    static ref PHONE_PATTERN: Regex = Regex::new(
        r"(?:(?:\+?\d{1,3}[-.\s*]?)?(?:\(?\d{3}\)?[-.\s*]?)?\d{3}[-.\s*]?\d{4,6})|(?:(?:(?:\(\+?\d{2}\))|(?:\+?\d{2}))\s*\d{2}\s*\d{3}\s*\d{4})"
    ).unwrap();

    // Same core shape but the extension marker is mandatory
    static ref PHONE_WITH_EXT_PATTERN: Regex = Regex::new(
        r"(?i)(?:(?:\+?1\s*(?:[.-]\s*)?)?(?:\(\s*(?:[2-9]1[02-9]|[2-9][02-8]1|[2-9][02-8][02-9])\s*\)|(?:[2-9]1[02-9]|[2-9][02-8]1|[2-9][02-8][02-9]))\s*(?:[.-]\s*)?)?(?:[2-9]1[02-9]|[2-9][02-9]1|[2-9][02-9]{2})\s*(?:[.-]\s*)?(?:[0-9]{4})(?:\s*(?:#|x\.?|ext\.?|extension)\s*(?:\d+)?)"
    ).unwrap();
}

pub fn extract_phones(text: &str) -> Vec<String> {
    find_all(&PHONE_PATTERN, text)
}

pub fn extract_phones_with_exts(text: &str) -> Vec<String> {
    find_all(&PHONE_WITH_EXT_PATTERN, text)
}

pub struct PhoneExtractor {}

impl PatternExtractor for PhoneExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_phones(text)
    }
}

pub struct PhoneWithExtExtractor {}

impl PatternExtractor for PhoneWithExtExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_phones_with_exts(text)
    }
}
