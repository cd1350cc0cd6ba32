use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // House number, a short word run, then a street-type token; the final
    // \W? consumes at most one trailing non-word character
    static ref STREET_ADDRESS_PATTERN: Regex = Regex::new(
        r"(?i)\d{1,4} [\w\s]{1,20}(?:street|st|avenue|ave|road|rd|highway|hwy|square|sq|trail|trl|drive|dr|court|ct|park|parkway|pkwy|circle|cir|boulevard|blvd)\W?"
    ).unwrap();

    static ref ZIP_CODE_PATTERN: Regex = Regex::new(
        r"\b\d{5}(?:[-\s]\d{4})?\b"
    ).unwrap();

    static ref PO_BOX_PATTERN: Regex = Regex::new(
        r"(?i)P\.? ?O\.? Box \d+"
    ).unwrap();
}

pub fn extract_street_addresses(text: &str) -> Vec<String> {
    find_all(&STREET_ADDRESS_PATTERN, text)
}

pub fn extract_zip_codes(text: &str) -> Vec<String> {
    find_all(&ZIP_CODE_PATTERN, text)
}

pub fn extract_po_boxes(text: &str) -> Vec<String> {
    find_all(&PO_BOX_PATTERN, text)
}

pub struct StreetAddressExtractor {}

impl PatternExtractor for StreetAddressExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_street_addresses(text)
    }
}

pub struct ZipCodeExtractor {}

impl PatternExtractor for ZipCodeExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_zip_codes(text)
    }
}

pub struct PoBoxExtractor {}

impl PatternExtractor for PoBoxExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_po_boxes(text)
    }
}
