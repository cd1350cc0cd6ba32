use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // Leading 1 or 3, then 25-34 base58 characters (0, O, I and l excluded)
    static ref BTC_ADDRESS_PATTERN: Regex = Regex::new(
        r"[13][a-km-zA-HJ-NP-Z1-9]{25,34}"
    ).unwrap();
}

pub fn extract_btc_addresses(text: &str) -> Vec<String> {
    find_all(&BTC_ADDRESS_PATTERN, text)
}

pub struct BtcAddressExtractor {}

impl PatternExtractor for BtcAddressExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_btc_addresses(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_btc_addresses() {
        let valid_addresses = vec![
            "1LgqButDNV2rVHe9DATt6WqD8tKZEKvaK2",
            "19P6EYhu6kZzRy9Au4wRRZVE8RemrxPbZP",
            "1bones8KbQge9euDn523z5wVhwkTP3uc1",
            "1Bow5EMqtDGV5n5xZVgdpRPJiiDK6XSjiC",
        ];

        for address in valid_addresses {
            assert_eq!(
                extract_btc_addresses(address),
                vec![address],
                "BTC address should be extracted whole: {}",
                address
            );
        }
    }

    #[test]
    fn test_invalid_btc_addresses() {
        let invalid_addresses = vec![
            "2LgqButDNV2rVHe9DATt6WqD8tKZEKvaK2", // bad leading digit
            "19Ry9Au4wRRZVE8RemrxPbZP",           // too short
            "1bones8KbQge9euDn523z5wVhwkTP3uc12939", // too long
            "1Bow5EMqtDGV5n5xZVgdpR",             // too short
        ];

        for address in invalid_addresses {
            assert_ne!(
                extract_btc_addresses(address),
                vec![address],
                "BTC address should not be extracted whole: {}",
                address
            );
        }
    }
}
