//! Known contract allow-lists used to classify transactions
//!
//! Entries are lower-case; lookups lower-case the recipient first.

/// Governance contracts
pub const GOVERNANCE_CONTRACTS: &[&str] = &[
    "0x323a76393544d5ecca80cd6ef2a560c6a395b7e3",
    // Truncated in the source list; kept so an identical recipient still matches.
    "0x5e4be8bc9637f0eaa1a755019e31c0020aa",
];

/// DeFi contracts (MATIC token, Uniswap UNI token)
pub const DEFI_CONTRACTS: &[&str] = &[
    "0x7d1afa7b718fb893db30a3abc0cfc608aacfebb0",
    "0x1f9840a85d5af5bf1d1762f925bdaddc4201f984",
];

pub fn is_governance(address: &str) -> bool {
    contains(GOVERNANCE_CONTRACTS, address)
}

pub fn is_defi(address: &str) -> bool {
    contains(DEFI_CONTRACTS, address)
}

fn contains(list: &[&str], address: &str) -> bool {
    let address = address.to_lowercase();
    list.iter().any(|entry| *entry == address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        assert!(is_defi("0x1F9840A85D5AF5BF1D1762F925BDADDC4201F984"));
        assert!(is_governance("0x323A76393544D5ECCA80CD6EF2A560C6A395B7E3"));
        assert!(!is_defi("0x323a76393544d5ecca80cd6ef2a560c6a395b7e3"));
        assert!(!is_governance(""));
    }
}
