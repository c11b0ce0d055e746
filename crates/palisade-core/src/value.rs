//! Quantities and pot identifiers shared by the model and wire layers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An unsigned lovelace quantity (pledge, cost, pot-to-pot transfers).
pub type Coin = u64;

/// A signed lovelace delta applied to a credential's reward balance.
pub type DeltaCoin = i64;

/// An epoch number (pool retirement target).
pub type Epoch = u64;

/// A relay port.
pub type Port = u16;

/// An unconstrained non-negative rational, used for the in-memory pool
/// margin.
///
/// Construction is total: the `[0, 1]` margin bound is enforced at the wire
/// boundary, not here. The fraction is never reduced, so `2/4` and `1/2` are
/// distinct values and survive a round-trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
    pub numerator: u64,
    pub denominator: u64,
}

impl Rational {
    /// Build a fraction; any numerator/denominator pair is representable.
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// The two global pots an instantaneous reward can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MirPot {
    Reserves,
    Treasury,
}

impl MirPot {
    /// The pot that is not this one.
    pub fn opposite(self) -> Self {
        match self {
            Self::Reserves => Self::Treasury,
            Self::Treasury => Self::Reserves,
        }
    }

    /// Convert to the wire tag.
    pub fn to_tag(self) -> u8 {
        match self {
            Self::Reserves => 0,
            Self::Treasury => 1,
        }
    }

    /// Try to parse from a wire tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Reserves),
            1 => Some(Self::Treasury),
            _ => None,
        }
    }
}

impl fmt::Display for MirPot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reserves => write!(f, "reserves"),
            Self::Treasury => write!(f, "treasury"),
        }
    }
}
