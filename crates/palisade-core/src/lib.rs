//! # Palisade Core
//!
//! Primitive value types for the Palisade certificate model.
//!
//! This crate contains no I/O, no crypto, no networking. Hashes, credentials,
//! and quantities originate elsewhere (key derivation, address parsing) and
//! are consumed here as opaque, already-canonical values.
//!
//! ## Key Types
//!
//! - [`StakeCredential`] - Opaque identifier of a staking entity
//! - [`PoolId`] - Hash of a stake pool's operator verification key
//! - [`RewardAccount`] - Network id plus credential, where pool rewards go
//! - [`MirPot`] - One of the two global pots treasury movements draw from
//! - [`Rational`] - Unconstrained fraction for the in-memory pool margin
//!
//! All identifiers are newtypes to prevent misuse at compile time.

pub mod credential;
pub mod hash;
pub mod network;
pub mod value;

pub use credential::StakeCredential;
pub use hash::{
    AddrKeyHash, CommitteeColdKeyHash, CommitteeHotKeyHash, GenesisDelegateHash, GenesisKeyHash,
    PoolId, PoolMetadataHash, ScriptHash, VrfKeyHash,
};
pub use network::{NetworkId, RewardAccount};
pub use value::{Coin, DeltaCoin, Epoch, MirPot, Port, Rational};
