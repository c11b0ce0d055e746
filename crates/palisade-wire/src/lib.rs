//! # Palisade Wire
//!
//! The Shelley-era wire certificate model and its canonical CBOR codec.
//!
//! The ledger defines seven certificate records; [`WireCertificate`] mirrors
//! them one-to-one. Encoding is deterministic (RFC 8949 core deterministic
//! form: sorted map keys, smallest integer widths, definite lengths), and
//! decoding is strict: the only byte strings accepted are exactly the
//! canonical encodings, so `to_bytes` and `from_bytes` are inverse on their
//! whole domains. Signing and hashing downstream therefore always see
//! byte-identical data for equal values.
//!
//! Values that the wire grammar constrains beyond their carrier type
//! ([`DnsName`], [`Url`], [`UnitInterval`]) have private fields and fallible
//! constructors: once one exists, encoding it cannot fail.

pub mod address;
pub mod bounded;
pub(crate) mod canonical;
pub mod certificate;
mod decode;
mod encode;
pub mod error;

pub use address::{decode_reward_account, encode_reward_account, REWARD_ACCOUNT_LEN};
pub use bounded::{DnsName, UnitInterval, Url};
pub use certificate::{
    WireCertificate, WireMir, WireMirPayout, WirePoolMetadata, WirePoolParams, WireRelay,
};
pub use error::WireError;
