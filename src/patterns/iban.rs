use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // Country code, check digits, then a loosely bounded alphanumeric body;
    // per-country length tables are not enforced
    static ref IBAN_PATTERN: Regex = Regex::new(
        r"[A-Z]{2}\d{2}[A-Z0-9]{4}\d{7}(?:[A-Z\d]?){0,16}"
    ).unwrap();
}

pub fn extract_ibans(text: &str) -> Vec<String> {
    find_all(&IBAN_PATTERN, text)
}

pub struct IbanExtractor {}

impl PatternExtractor for IbanExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_ibans(text)
    }
}
