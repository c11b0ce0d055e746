//! Stake-pool parameter model types.
//!
//! These are the ergonomic shapes callers build: hostnames and URLs are raw
//! text here, and the margin is an unconstrained fraction. The wire grammar
//! (ascii bounds, the `[0, 1]` margin interval) is enforced when the value
//! crosses into the wire form, so an out-of-grammar value can exist in memory
//! but can never be encoded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::net::{Ipv4Addr, Ipv6Addr};

use palisade_core::{
    AddrKeyHash, Coin, PoolId, PoolMetadataHash, Port, Rational, RewardAccount, VrfKeyHash,
};

/// Everything a pool registration declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolParameters {
    /// The pool being registered (hash of its operator key).
    pub id: PoolId,
    /// The pool's VRF verification key hash.
    pub vrf_key_hash: VrfKeyHash,
    /// Fixed per-epoch cost.
    pub cost: Coin,
    /// Operator reward share; must lie in `[0, 1]` by encode time.
    pub margin: Rational,
    /// Where pool rewards are paid.
    pub reward_account: RewardAccount,
    /// The operator's stake promise.
    pub pledge: Coin,
    /// Owner key hashes. A set: duplicates collapse, order is not
    /// significant.
    pub owners: BTreeSet<AddrKeyHash>,
    /// Relays in declaration order. Order is significant: relays are tried
    /// in order.
    pub relays: Vec<Relay>,
    /// Optional reference to the off-chain metadata document.
    pub metadata: Option<PoolMetadataReference>,
}

/// How a pool can be reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relay {
    /// A single host by address. The grammar allows both addresses to be
    /// absent; this module does not enforce that at least one is present.
    Ip {
        ipv4: Option<Ipv4Addr>,
        ipv6: Option<Ipv6Addr>,
        port: Option<Port>,
    },
    /// A single host by name (an A or AAAA record).
    Dns { host: String, port: Option<Port> },
    /// A multi-host name (an SRV record).
    DnsSrv { host: String },
}

/// Reference to the off-chain pool metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolMetadataReference {
    /// Where the document lives; validated against the wire grammar at
    /// encode time.
    pub url: String,
    /// Digest of the document's content.
    pub hash: PoolMetadataHash,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_set_deduplicates() {
        let owner = AddrKeyHash::from_bytes([0x07; 28]);
        let owners: BTreeSet<AddrKeyHash> = [owner, owner].into_iter().collect();
        assert_eq!(owners.len(), 1);
    }

    #[test]
    fn test_model_accepts_raw_out_of_grammar_values() {
        // Deferred validation: the model holds anything, the wire boundary
        // rejects it.
        let relay = Relay::Dns {
            host: "\u{00e9}".repeat(80),
            port: None,
        };
        assert!(matches!(relay, Relay::Dns { .. }));

        let margin = Rational::new(3, 2);
        assert_eq!(margin.numerator, 3);
    }
}
