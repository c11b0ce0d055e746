//! Fixed-width digest newtypes.
//!
//! Each hash the certificate model consumes gets its own type so that a pool
//! id cannot be passed where a VRF key hash is expected. The values are
//! opaque: they arrive already computed and validated, and nothing here
//! re-hashes or re-checks them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declare a fixed-width hash newtype with hex helpers and truncated
/// `Debug`/`Display` rendering.
macro_rules! sized_hash {
    ($($(#[$meta:meta])* $name:ident([u8; $len:expr]);)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
            pub struct $name(pub [u8; $len]);

            impl $name {
                /// Create from raw bytes.
                pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                    Self(bytes)
                }

                /// Get the raw bytes.
                pub const fn as_bytes(&self) -> &[u8; $len] {
                    &self.0
                }

                /// Convert to hex string.
                pub fn to_hex(&self) -> String {
                    hex::encode(self.0)
                }

                /// Parse from hex string.
                pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
                    let bytes = hex::decode(s)?;
                    if bytes.len() != $len {
                        return Err(hex::FromHexError::InvalidStringLength);
                    }
                    let mut arr = [0u8; $len];
                    arr.copy_from_slice(&bytes);
                    Ok(Self(arr))
                }
            }

            impl fmt::Debug for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, concat!(stringify!($name), "({})"), &self.to_hex()[..16])
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", &self.to_hex()[..16])
                }
            }

            impl AsRef<[u8]> for $name {
                fn as_ref(&self) -> &[u8] {
                    &self.0
                }
            }

            impl From<[u8; $len]> for $name {
                fn from(bytes: [u8; $len]) -> Self {
                    Self(bytes)
                }
            }

            impl TryFrom<&[u8]> for $name {
                type Error = std::array::TryFromSliceError;

                fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
                    let arr: [u8; $len] = slice.try_into()?;
                    Ok(Self(arr))
                }
            }
        )+
    };
}

sized_hash! {
    /// Hash of a stake or pool-owner verification key.
    AddrKeyHash([u8; 28]);

    /// Hash of a script controlling a credential.
    ScriptHash([u8; 28]);

    /// Hash of a pool's operator verification key; identifies the pool.
    PoolId([u8; 28]);

    /// Hash of a genesis verification key.
    GenesisKeyHash([u8; 28]);

    /// Hash of a genesis delegate verification key.
    GenesisDelegateHash([u8; 28]);

    /// Hash of a VRF verification key.
    VrfKeyHash([u8; 32]);

    /// Digest of the off-chain pool metadata document.
    PoolMetadataHash([u8; 32]);

    /// Hash of a constitutional committee member's cold verification key.
    CommitteeColdKeyHash([u8; 28]);

    /// Hash of a constitutional committee member's hot verification key.
    CommitteeHotKeyHash([u8; 28]);
}
