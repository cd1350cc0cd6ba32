use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // Four groups of 4 with optional -/space separators, or a bare
    // 15-16 digit run; shape only, no Luhn check
    static ref CREDIT_CARD_PATTERN: Regex = Regex::new(
        r"(?:\d{4}[- ]?){3}\d{4}|\d{15,16}"
    ).unwrap();

    static ref VISA_CREDIT_CARD_PATTERN: Regex = Regex::new(
        r"4\d{3}[\s-]?\d{4}[\s-]?\d{4}[\s-]?\d{4}"
    ).unwrap();

    static ref MASTERCARD_CREDIT_CARD_PATTERN: Regex = Regex::new(
        r"5[1-5]\d{2}[\s-]?\d{4}[\s-]?\d{4}[\s-]?\d{4}"
    ).unwrap();
}

pub fn extract_credit_cards(text: &str) -> Vec<String> {
    find_all(&CREDIT_CARD_PATTERN, text)
}

pub fn extract_visa_credit_cards(text: &str) -> Vec<String> {
    find_all(&VISA_CREDIT_CARD_PATTERN, text)
}

pub fn extract_mastercard_credit_cards(text: &str) -> Vec<String> {
    find_all(&MASTERCARD_CREDIT_CARD_PATTERN, text)
}

pub struct CreditCardExtractor {}

impl PatternExtractor for CreditCardExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_credit_cards(text)
    }
}

pub struct VisaCreditCardExtractor {}

impl PatternExtractor for VisaCreditCardExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_visa_credit_cards(text)
    }
}

pub struct MasterCardExtractor {}

impl PatternExtractor for MasterCardExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_mastercard_credit_cards(text)
    }
}
