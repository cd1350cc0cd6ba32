pub mod patterns;

use patterns::PatternExtractor;
use std::collections::HashMap;

/// Run every category's extractor over `text` and return the categories
/// that produced at least one match
pub fn extract_all(text: &str) -> HashMap<String, Vec<String>> {
    let mut results = HashMap::new();
    if text.is_empty() {
        return results;
    }

    for (name, extractor) in get_all_extractors() {
        let matches = extractor.extract(text);
        if !matches.is_empty() {
            results.insert(name, matches);
        }
    }

    results
}

pub fn get_all_extractors() -> HashMap<String, Box<dyn PatternExtractor>> {
    let mut extractors: HashMap<String, Box<dyn PatternExtractor>> = HashMap::new();

    extractors.insert("date".to_string(), Box::new(patterns::date::DateExtractor {}));
    extractors.insert("time".to_string(), Box::new(patterns::time::TimeExtractor {}));
    extractors.insert("phone".to_string(), Box::new(patterns::phonenumber::PhoneExtractor {}));
    extractors.insert("phone_with_ext".to_string(), Box::new(patterns::phonenumber::PhoneWithExtExtractor {}));
    extractors.insert("link".to_string(), Box::new(patterns::url::LinkExtractor {}));
    extractors.insert("git_repo".to_string(), Box::new(patterns::url::GitRepoExtractor {}));
    extractors.insert("email".to_string(), Box::new(patterns::email::EmailExtractor {}));
    extractors.insert("ipv4".to_string(), Box::new(patterns::ip::Ipv4Extractor {}));
    extractors.insert("ipv6".to_string(), Box::new(patterns::ip::Ipv6Extractor {}));
    extractors.insert("ip".to_string(), Box::new(patterns::ip::IpExtractor {}));
    extractors.insert("not_known_port".to_string(), Box::new(patterns::port::NotKnownPortExtractor {}));
    extractors.insert("price".to_string(), Box::new(patterns::price::PriceExtractor {}));
    extractors.insert("hex_color".to_string(), Box::new(patterns::hexcolor::HexColorExtractor {}));
    extractors.insert("credit_card".to_string(), Box::new(patterns::creditcard::CreditCardExtractor {}));
    extractors.insert("visa_credit_card".to_string(), Box::new(patterns::creditcard::VisaCreditCardExtractor {}));
    extractors.insert("mastercard_credit_card".to_string(), Box::new(patterns::creditcard::MasterCardExtractor {}));
    extractors.insert("btc_address".to_string(), Box::new(patterns::btc::BtcAddressExtractor {}));
    extractors.insert("street_address".to_string(), Box::new(patterns::address::StreetAddressExtractor {}));
    extractors.insert("zip_code".to_string(), Box::new(patterns::address::ZipCodeExtractor {}));
    extractors.insert("po_box".to_string(), Box::new(patterns::address::PoBoxExtractor {}));
    extractors.insert("ssn".to_string(), Box::new(patterns::ssn::SsnExtractor {}));
    extractors.insert("md5_hex".to_string(), Box::new(patterns::hash::Md5HexExtractor {}));
    extractors.insert("sha1_hex".to_string(), Box::new(patterns::hash::Sha1HexExtractor {}));
    extractors.insert("sha256_hex".to_string(), Box::new(patterns::hash::Sha256HexExtractor {}));
    extractors.insert("guid".to_string(), Box::new(patterns::guid::GuidExtractor {}));
    extractors.insert("isbn13".to_string(), Box::new(patterns::isbn::Isbn13Extractor {}));
    extractors.insert("isbn10".to_string(), Box::new(patterns::isbn::Isbn10Extractor {}));
    extractors.insert("mac_address".to_string(), Box::new(patterns::mac::MacAddressExtractor {}));
    extractors.insert("iban".to_string(), Box::new(patterns::iban::IbanExtractor {}));

    extractors
}
