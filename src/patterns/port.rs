use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // Coarse digit-range approximation of ports 1024-65535, not a true
    // integer comparison
    static ref NOT_KNOWN_PORT_PATTERN: Regex = Regex::new(
        r"6[0-5]{2}[0-3][0-6]|[1-5][\d]{4}|[2-9][\d]{3}|1[1-9][\d]{2}|10[3-9][\d]|102[4-9]"
    ).unwrap();
}

pub fn extract_not_known_ports(text: &str) -> Vec<String> {
    find_all(&NOT_KNOWN_PORT_PATTERN, text)
}

pub struct NotKnownPortExtractor {}

impl PatternExtractor for NotKnownPortExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_not_known_ports(text)
    }
}
