//! Built-in priority lists and network selection.
//!
//! ## Lists
//!
//! | Static | Source file |
//! |--------|-------------|
//! | [`MAINNET_DATA`] | `data/mainnet.json` |
//! | [`TESTNET_DATA`] | `data/testnet.json` |
//! | [`ARBITRARY_DATA`] | `data/arbitrary.json` |
//!
//! The record files are compiled into the binary and projected to their `id`
//! fields on first access. After that the lists are read-only.
//!
//! ## Example
//!
//! ```
//! use asset_pair_order::data::{Network, MAINNET_DATA};
//!
//! let network: Network = "mainnet".parse().unwrap();
//! assert_eq!(network.priority_list(), &*MAINNET_DATA);
//!
//! let pair = network
//!     .orderer()
//!     .order("Ft8X1v1LTa1ABafufpaCWyVj8KkaxUWE6xBhW6sNFJck", "DCC")
//!     .unwrap();
//! assert_eq!(pair.amount_asset(), "DCC");
//! ```

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::order::PairOrderer;
use crate::types::PriorityList;

const MAINNET_JSON: &str = include_str!("../../data/mainnet.json");
const TESTNET_JSON: &str = include_str!("../../data/testnet.json");
const ARBITRARY_JSON: &str = include_str!("../../data/arbitrary.json");

fn embedded(name: &str, json: &str) -> PriorityList {
    PriorityList::from_json_records(json)
        .unwrap_or_else(|e| panic!("embedded {name} priority list is malformed: {e}"))
}

/// Priority list for mainnet
pub static MAINNET_DATA: Lazy<PriorityList> = Lazy::new(|| embedded("mainnet", MAINNET_JSON));

/// Priority list for testnet
pub static TESTNET_DATA: Lazy<PriorityList> = Lazy::new(|| embedded("testnet", TESTNET_JSON));

/// Additional asset ordering data
pub static ARBITRARY_DATA: Lazy<PriorityList> =
    Lazy::new(|| embedded("arbitrary", ARBITRARY_JSON));

// ============================================================================
// Network
// ============================================================================

/// Selects one of the built-in priority lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Arbitrary,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Arbitrary];

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Arbitrary => "arbitrary",
        }
    }

    /// The built-in list for this network
    pub fn priority_list(self) -> &'static PriorityList {
        match self {
            Network::Mainnet => &*MAINNET_DATA,
            Network::Testnet => &*TESTNET_DATA,
            Network::Arbitrary => &*ARBITRARY_DATA,
        }
    }

    /// An orderer bound to this network's list
    pub fn orderer(self) -> PairOrderer {
        PairOrderer::new(self.priority_list().clone())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown network name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown network `{0}` (expected mainnet, testnet or arbitrary)")]
pub struct ParseNetworkError(String);

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseNetworkError(s.to_string()))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const USD: &str = "Ft8X1v1LTa1ABafufpaCWyVj8KkaxUWE6xBhW6sNFJck";
    const EUR: &str = "Gtb1WRznfchDnTh37ezoDTJ4wcoKaRsKqKjJjy7nm2zU";

    #[test]
    fn test_embedded_lists_load() {
        for network in Network::ALL {
            let list = network.priority_list();
            assert!(!list.is_empty(), "{network} list is empty");
            assert!(list.contains("DCC"), "{network} list lacks DCC");
        }
    }

    #[test]
    fn test_mainnet_ranks_usd_lowest() {
        let usd = MAINNET_DATA.position(USD).unwrap();
        let eur = MAINNET_DATA.position(EUR).unwrap();
        let dcc = MAINNET_DATA.position("DCC").unwrap();
        assert!(usd < eur);
        assert!(usd < dcc);
    }

    #[test]
    fn test_network_parse() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("TestNet".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!(" arbitrary ".parse::<Network>().unwrap(), Network::Arbitrary);
        assert!("devnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_network_display_round_trips() {
        for network in Network::ALL {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), network);
        }
    }

    #[test]
    fn test_network_serde_lowercase() {
        let json = serde_json::to_string(&Network::Testnet).unwrap();
        assert_eq!(json, r#""testnet""#);
        let back: Network = serde_json::from_str(r#""arbitrary""#).unwrap();
        assert_eq!(back, Network::Arbitrary);
    }

    #[test]
    fn test_static_lists_are_shared() {
        let a = Network::Mainnet.orderer();
        let b = Network::Mainnet.orderer();
        assert_eq!(a.priority_list(), b.priority_list());
        assert_eq!(a.priority_list(), &*MAINNET_DATA);
    }
}
