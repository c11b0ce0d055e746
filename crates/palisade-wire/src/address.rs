//! The 29-byte reward account codec.
//!
//! A reward account travels on the wire as a single byte string: one header
//! octet followed by the credential's 28-byte hash. The header's high nibble
//! names the credential kind (`0xE` key, `0xF` script) and its low nibble the
//! network. This is where the well-formed-network-identifier invariant is
//! enforced on decode; the model layer never sees a raw header octet.

use palisade_core::{AddrKeyHash, NetworkId, RewardAccount, ScriptHash, StakeCredential};

use crate::error::WireError;

/// Wire length of an encoded reward account: header octet plus 28-byte hash.
pub const REWARD_ACCOUNT_LEN: usize = 29;

const HEADER_KEY: u8 = 0xe0;
const HEADER_SCRIPT: u8 = 0xf0;

/// Encode a reward account to its 29-byte wire form.
pub fn encode_reward_account(account: &RewardAccount) -> [u8; REWARD_ACCOUNT_LEN] {
    let kind = match account.credential {
        StakeCredential::KeyHash(_) => HEADER_KEY,
        StakeCredential::ScriptHash(_) => HEADER_SCRIPT,
    };
    let mut bytes = [0u8; REWARD_ACCOUNT_LEN];
    bytes[0] = kind | account.network.to_tag();
    bytes[1..].copy_from_slice(account.credential.hash_bytes());
    bytes
}

/// Decode a reward account from its wire bytes.
///
/// Rejects wrong lengths, unknown credential nibbles, and unknown network
/// tags.
pub fn decode_reward_account(bytes: &[u8]) -> Result<RewardAccount, WireError> {
    if bytes.len() != REWARD_ACCOUNT_LEN {
        return Err(WireError::MalformedCertificate(format!(
            "reward account must be {} bytes, got {}",
            REWARD_ACCOUNT_LEN,
            bytes.len()
        )));
    }

    let header = bytes[0];
    let network = NetworkId::from_tag(header & 0x0f).ok_or_else(|| {
        WireError::MalformedCertificate(format!(
            "unknown network tag in reward account header {:#04x}",
            header
        ))
    })?;

    let mut hash = [0u8; 28];
    hash.copy_from_slice(&bytes[1..]);

    let credential = match header & 0xf0 {
        HEADER_KEY => StakeCredential::KeyHash(AddrKeyHash::from_bytes(hash)),
        HEADER_SCRIPT => StakeCredential::ScriptHash(ScriptHash::from_bytes(hash)),
        _ => {
            return Err(WireError::MalformedCertificate(format!(
                "unknown credential kind in reward account header {:#04x}",
                header
            )));
        }
    };

    Ok(RewardAccount::new(network, credential))
}
