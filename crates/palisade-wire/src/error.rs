//! Error types for the wire certificate codec.

use thiserror::Error;

/// Errors produced by the wire certificate types and codec.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("dns name violates the wire grammar (ascii, at most 64 bytes): {0:?}")]
    InvalidDnsName(String),

    #[error("url violates the wire grammar (ascii, at most 64 bytes): {0:?}")]
    InvalidUrl(String),

    #[error("unit interval {numerator}/{denominator} is outside [0, 1]")]
    InvalidUnitInterval { numerator: u64, denominator: u64 },

    #[error("malformed certificate: {0}")]
    MalformedCertificate(String),

    #[error("decoding error: {0}")]
    DecodingError(String),
}
