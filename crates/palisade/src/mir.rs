//! Treasury-movement targets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use palisade_core::{Coin, DeltaCoin, MirPot, StakeCredential};

use crate::error::CertificateError;

/// Where an instantaneous reward goes.
///
/// A movement always names its source pot alongside the target; the two must
/// be consistent. Paying the treasury only makes sense out of the reserves
/// and vice versa, and the pairing is validated by
/// [`Certificate::treasury_movement`](crate::Certificate::treasury_movement)
/// and again at `to_wire`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MirTarget {
    /// Signed per-credential reward deltas drawn from the source pot.
    ///
    /// Entries naming the same credential are summed, never overwritten; the
    /// validating constructor canonicalizes the list to merged,
    /// credential-ordered form.
    StakeCredentials(Vec<(StakeCredential, DeltaCoin)>),
    /// Move a non-negative amount into the treasury (source must be the
    /// reserves).
    ToTreasury(Coin),
    /// Move a non-negative amount into the reserves (source must be the
    /// treasury).
    ToReserves(Coin),
}

/// Reject a target that pays back into its own source pot.
pub(crate) fn check_direction(pot: MirPot, target: &MirTarget) -> Result<(), CertificateError> {
    let consistent = match target {
        MirTarget::StakeCredentials(_) => true,
        MirTarget::ToTreasury(_) => pot == MirPot::Reserves,
        MirTarget::ToReserves(_) => pot == MirPot::Treasury,
    };
    if consistent {
        Ok(())
    } else {
        Err(CertificateError::InconsistentPotDirection { pot })
    }
}

/// Reduce a delta list to unique credentials by addition.
///
/// Overflow of the running sum is a field error, not a wrap or a panic.
pub(crate) fn merge_deltas(
    entries: &[(StakeCredential, DeltaCoin)],
) -> Result<BTreeMap<StakeCredential, DeltaCoin>, CertificateError> {
    let mut merged: BTreeMap<StakeCredential, DeltaCoin> = BTreeMap::new();
    for (credential, delta) in entries {
        let slot = merged.entry(*credential).or_insert(0);
        *slot = slot.checked_add(*delta).ok_or_else(|| {
            CertificateError::InvalidCertificateField {
                field: "target",
                reason: format!("summed reward delta overflows for credential {}", credential),
            }
        })?;
    }
    Ok(merged)
}
