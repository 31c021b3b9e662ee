use serde::Serialize;

/// Chain used when the caller does not name one or names an unsupported one
pub const DEFAULT_CHAIN_ID: u64 = 1;

/// Supported chain with the identifiers each indexing service expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub chain_id: u64,
    pub name: &'static str,
    pub covalent_chain: &'static str,
    pub moralis_chain: &'static str,
}

static NETWORKS: [Network; 4] = [
    Network {
        chain_id: 1,
        name: "Ethereum Mainnet",
        covalent_chain: "eth-mainnet",
        moralis_chain: "eth",
    },
    Network {
        chain_id: 11155111,
        name: "Sepolia",
        covalent_chain: "eth-sepolia",
        moralis_chain: "sepolia",
    },
    Network {
        chain_id: 137,
        name: "Polygon Mainnet",
        covalent_chain: "polygon-mainnet",
        moralis_chain: "polygon",
    },
    Network {
        chain_id: 80001,
        name: "Polygon Mumbai",
        covalent_chain: "polygon-mumbai",
        moralis_chain: "mumbai",
    },
];

impl Network {
    /// All supported networks
    pub fn all() -> &'static [Network] {
        &NETWORKS
    }

    /// Find a supported network by chain id
    pub fn find(chain_id: u64) -> Option<&'static Network> {
        NETWORKS.iter().find(|n| n.chain_id == chain_id)
    }

    /// Resolve the network to query, falling back to mainnet
    pub fn resolve(chain_id: Option<u64>) -> &'static Network {
        let requested = chain_id.unwrap_or(DEFAULT_CHAIN_ID);

        match Self::find(requested) {
            Some(network) => network,
            None => {
                tracing::warn!(
                    chain_id = requested,
                    "Unsupported chain, falling back to Ethereum Mainnet"
                );
                Self::mainnet()
            }
        }
    }

    pub fn mainnet() -> &'static Network {
        &NETWORKS[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_supported() {
        let polygon = Network::find(137).unwrap();
        assert_eq!(polygon.covalent_chain, "polygon-mainnet");
        assert_eq!(polygon.moralis_chain, "polygon");
        assert!(Network::find(56).is_none());
    }

    #[test]
    fn test_resolve_fallback() {
        assert_eq!(Network::resolve(None).chain_id, 1);
        assert_eq!(Network::resolve(Some(56)).chain_id, 1);
        assert_eq!(Network::resolve(Some(11155111)).name, "Sepolia");
    }

    #[test]
    fn test_all_unique() {
        let ids: Vec<u64> = Network::all().iter().map(|n| n.chain_id).collect();
        assert_eq!(ids, vec![1, 11155111, 137, 80001]);
    }
}
