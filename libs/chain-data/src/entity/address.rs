//! Address helpers shared by scoring and request validation

/// Length of a `0x`-prefixed 20-byte hex address
const ADDRESS_LEN: usize = 42;

/// Check that `value` is `0x` followed by exactly 40 hex digits (either case)
pub fn is_hex_address(value: &str) -> bool {
    value.len() == ADDRESS_LEN
        && value.starts_with("0x")
        && value[2..].bytes().all(|b| b.is_ascii_hexdigit())
}

/// Shorten an address for display: `0x1234...abcd`
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_string();
    }

    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(is_hex_address("0x1f9840a85d5af5bf1d1762f925bdaddc4201f984"));
        assert!(is_hex_address("0x1F9840A85D5aF5bf1D1762F925BDADdC4201F984"));
    }

    #[test]
    fn test_malformed_addresses() {
        // wrong length
        assert!(!is_hex_address("0x5e4be8bc9637f0eaa1a755019e31c0020aa"));
        assert!(!is_hex_address("0x1f9840a85d5af5bf1d1762f925bdaddc4201f98400"));
        // missing or upper-case prefix
        assert!(!is_hex_address("001f9840a85d5af5bf1d1762f925bdaddc4201f984"));
        assert!(!is_hex_address("0X1f9840a85d5af5bf1d1762f925bdaddc4201f984"));
        // non-hex characters
        assert!(!is_hex_address("0x1f9840a85d5af5bf1d1762f925bdaddc4201f98g"));
        assert!(!is_hex_address(""));
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x1f9840a85d5af5bf1d1762f925bdaddc4201f984"),
            "0x1f98...f984"
        );
        assert_eq!(short_address("0x1234"), "0x1234");
    }
}
