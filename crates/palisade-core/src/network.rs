//! Network identifiers and reward accounts.

use serde::{Deserialize, Serialize};

use crate::credential::StakeCredential;

/// The network a reward account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkId {
    Testnet,
    Mainnet,
}

impl NetworkId {
    /// Convert to the wire tag carried in a reward account header octet.
    pub fn to_tag(self) -> u8 {
        match self {
            Self::Testnet => 0,
            Self::Mainnet => 1,
        }
    }

    /// Try to parse from a wire tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Testnet),
            1 => Some(Self::Mainnet),
            _ => None,
        }
    }
}

/// Where pool rewards are paid: a network plus a stake credential.
///
/// The 29-byte wire form (header octet followed by the hash) is owned by the
/// wire crate; this is the parsed value the model carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewardAccount {
    /// The network the account lives on.
    pub network: NetworkId,
    /// The credential rewards accrue to.
    pub credential: StakeCredential,
}

impl RewardAccount {
    /// Pair a network with a credential.
    pub fn new(network: NetworkId, credential: StakeCredential) -> Self {
        Self {
            network,
            credential,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::AddrKeyHash;

    #[test]
    fn test_network_tag_roundtrip() {
        for network in [NetworkId::Testnet, NetworkId::Mainnet] {
            let tag = network.to_tag();
            assert_eq!(NetworkId::from_tag(tag), Some(network));
        }
    }

    #[test]
    fn test_network_unknown_tag() {
        assert_eq!(NetworkId::from_tag(2), None);
        assert_eq!(NetworkId::from_tag(0xff), None);
    }

    #[test]
    fn test_reward_account_new() {
        let credential = StakeCredential::KeyHash(AddrKeyHash::from_bytes([0x1a; 28]));
        let account = RewardAccount::new(NetworkId::Mainnet, credential);
        assert_eq!(account.network, NetworkId::Mainnet);
        assert_eq!(account.credential, credential);
    }
}
