//! Error types for certificate construction and conversion.

use thiserror::Error;

use palisade_core::MirPot;
use palisade_wire::WireError;

use crate::certificate::CertificateKind;

/// Errors surfaced by the validating constructors and the wire conversion
/// engine.
///
/// Every failure is returned to the caller; nothing is recovered internally
/// and no partial wire output is ever produced.
#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("pool margin {numerator}/{denominator} is outside [0, 1]")]
    InvalidMargin { numerator: u64, denominator: u64 },

    #[error("pool metadata url violates the wire grammar (ascii, at most 64 bytes): {0:?}")]
    InvalidUrl(String),

    #[error("relay hostname violates the wire grammar (ascii, at most 64 bytes): {0:?}")]
    InvalidHostname(String),

    #[error("treasury movement from the {pot} pot cannot also pay into the {pot} pot")]
    InconsistentPotDirection { pot: MirPot },

    #[error("certificate kind {0:?} has no wire encoding in the current era")]
    UnsupportedInEra(CertificateKind),

    #[error("invalid certificate field {field}: {reason}")]
    InvalidCertificateField { field: &'static str, reason: String },

    #[error(transparent)]
    Wire(#[from] WireError),
}
