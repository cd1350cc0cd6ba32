use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // $ amount with optional sign, thousands groups of exactly 3 digits
    // and up to 2 decimals
    static ref PRICE_PATTERN: Regex = Regex::new(
        r"[$]\s?[+-]?[0-9]{1,3}(?:,?[0-9]{3})*(?:\.[0-9]{1,2})?"
    ).unwrap();
}

pub fn extract_prices(text: &str) -> Vec<String> {
    find_all(&PRICE_PATTERN, text)
}

pub struct PriceExtractor {}

impl PatternExtractor for PriceExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_prices(text)
    }
}
