//! # Palisade
//!
//! The certificate model and its wire conversion engine.
//!
//! A [`Certificate`] is one of nine transaction-embedded effects: stake
//! registration, deregistration, and delegation; pool registration and
//! retirement; genesis key delegation; two committee operations; and
//! treasury movements. Callers build certificates through the constructors
//! (which validate what can be validated eagerly), convert them to the
//! canonical wire shape with [`Certificate::to_wire`] for inclusion in a
//! transaction body, or parse wire certificates back with
//! [`Certificate::from_wire`] for inspection.
//!
//! Conversion enforces the invariants the wire format itself does not: the
//! pool margin must lie in `[0, 1]`, relay hostnames and the metadata URL
//! must satisfy the wire grammar, and a treasury movement's pot must be
//! consistent with its transfer direction. The two committee kinds have no
//! wire record in the current era and fail encoding with
//! [`CertificateError::UnsupportedInEra`] rather than inventing one.
//!
//! Round-trip guarantee: for every wire-representable constructor-built
//! certificate `c`, `from_wire(to_wire(c)) == c`; for every valid wire value
//! `w`, `to_wire(from_wire(w)) == w`. Everything here is pure, synchronous,
//! and immutable; values can be converted on any thread without
//! coordination.

pub mod certificate;
pub mod convert;
pub mod error;
pub mod mir;
pub mod pool;

pub use certificate::{Certificate, CertificateKind, ENVELOPE_TYPE};
pub use convert::{from_wire, to_wire};
pub use error::CertificateError;
pub use mir::MirTarget;
pub use pool::{PoolMetadataReference, PoolParameters, Relay};

// Re-export the primitive and wire types callers need to build and consume
// certificates.
pub use palisade_core::{
    AddrKeyHash, Coin, CommitteeColdKeyHash, CommitteeHotKeyHash, DeltaCoin, Epoch,
    GenesisDelegateHash, GenesisKeyHash, MirPot, NetworkId, PoolId, PoolMetadataHash, Port,
    Rational, RewardAccount, ScriptHash, StakeCredential, VrfKeyHash,
};
pub use palisade_wire::{WireCertificate, WireError};
