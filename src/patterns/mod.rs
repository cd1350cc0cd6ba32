pub mod address;
pub mod btc;
pub mod creditcard;
pub mod date;
pub mod email;
pub mod guid;
pub mod hash;
pub mod hexcolor;
pub mod iban;
pub mod ip;
pub mod isbn;
pub mod mac;
pub mod phonenumber;
pub mod port;
pub mod price;
pub mod ssn;
pub mod time;
pub mod url;

use regex::Regex;

pub trait PatternExtractor {
    fn extract(&self, text: &str) -> Vec<String>;
}

/// Collect every non-overlapping match of `pattern` in `text`, left to right.
pub fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    let mut results = Vec::new();

    for m in pattern.find_iter(text) {
        results.push(m.as_str().to_string());
    }

    results
}
