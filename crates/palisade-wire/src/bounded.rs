//! Wire-grammar bounded types.
//!
//! The certificate grammar constrains some values beyond what their carrier
//! type can express: DNS names and URLs are ASCII of at most 64 bytes, and
//! the pool margin is a rational in [0, 1]. These types keep their fields
//! private and validate in the constructor, so an out-of-grammar value cannot
//! exist and encoding one cannot fail.

use serde::Serialize;
use std::fmt;

use crate::error::WireError;

/// Maximum byte length the wire grammar allows for DNS names and URLs.
pub const MAX_TEXT_LEN: usize = 64;

/// A relay hostname as the wire grammar defines it: ASCII, at most 64 bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DnsName(String);

impl DnsName {
    /// Validate and wrap a hostname.
    pub fn new(host: impl Into<String>) -> Result<Self, WireError> {
        let host = host.into();
        if host.len() > MAX_TEXT_LEN || !host.is_ascii() {
            return Err(WireError::InvalidDnsName(host));
        }
        Ok(Self(host))
    }

    /// The hostname text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DnsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pool metadata URL: ASCII, at most 64 bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Url(String);

impl Url {
    /// Validate and wrap a URL.
    pub fn new(url: impl Into<String>) -> Result<Self, WireError> {
        let url = url.into();
        if url.len() > MAX_TEXT_LEN || !url.is_ascii() {
            return Err(WireError::InvalidUrl(url));
        }
        Ok(Self(url))
    }

    /// The URL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rational bounded to [0, 1], the wire form of the pool margin.
///
/// The fraction is carried exactly as given and never reduced, so a value
/// round-trips byte-identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UnitInterval {
    numerator: u64,
    denominator: u64,
}

impl UnitInterval {
    /// Validate and wrap a fraction. Fails unless
    /// `0 <= numerator/denominator <= 1` with a nonzero denominator.
    pub fn new(numerator: u64, denominator: u64) -> Result<Self, WireError> {
        if denominator == 0 || numerator > denominator {
            return Err(WireError::InvalidUnitInterval {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// The fraction's numerator, exactly as constructed.
    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    /// The fraction's denominator, exactly as constructed.
    pub fn denominator(&self) -> u64 {
        self.denominator
    }
}

impl fmt::Display for UnitInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
