//! The certificate model: nine kinds of transaction-embedded effect.

use serde::{Deserialize, Serialize};

use palisade_core::{
    CommitteeColdKeyHash, CommitteeHotKeyHash, Epoch, GenesisDelegateHash, GenesisKeyHash, MirPot,
    PoolId, StakeCredential, VrfKeyHash,
};

use crate::error::CertificateError;
use crate::mir::{self, MirTarget};
use crate::pool::PoolParameters;

/// Type tag identifying this certificate family to the external serialization
/// envelope.
pub const ENVELOPE_TYPE: &str = "CertificateShelley";

/// One certificate-level transaction effect.
///
/// A closed sum: exactly one of the nine shapes at a time, equality and
/// `Debug` rendering are structural, and the conversion engine matches
/// exhaustively so a new kind cannot be silently mishandled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Certificate {
    /// Register a stake credential.
    StakeRegistration(StakeCredential),
    /// Deregister a stake credential.
    StakeDeregistration(StakeCredential),
    /// Delegate a stake credential to a pool.
    StakeDelegation(StakeCredential, PoolId),
    /// Register (or re-register) a stake pool.
    PoolRegistration(PoolParameters),
    /// Retire a pool at the given epoch.
    PoolRetirement(PoolId, Epoch),
    /// Delegate a genesis key to a delegate key plus VRF key.
    GenesisKeyDelegation {
        genesis: GenesisKeyHash,
        delegate: GenesisDelegateHash,
        vrf: VrfKeyHash,
    },
    /// Delegate a committee cold key to a hot key. Not yet encodable: the
    /// current era defines no wire record for it.
    CommitteeDelegation {
        cold: CommitteeColdKeyHash,
        hot: CommitteeHotKeyHash,
    },
    /// Deregister a committee hot key. Not yet encodable either.
    CommitteeHotKeyDeregistration { cold: CommitteeColdKeyHash },
    /// Move funds out of a pot, to stake credentials or to the other pot.
    TreasuryMovement { pot: MirPot, target: MirTarget },
}

/// The nine certificate kinds, without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CertificateKind {
    StakeRegistration,
    StakeDeregistration,
    StakeDelegation,
    PoolRegistration,
    PoolRetirement,
    GenesisKeyDelegation,
    CommitteeDelegation,
    CommitteeHotKeyDeregistration,
    TreasuryMovement,
}

impl CertificateKind {
    /// Every kind, in declaration order.
    pub const ALL: [CertificateKind; 9] = [
        CertificateKind::StakeRegistration,
        CertificateKind::StakeDeregistration,
        CertificateKind::StakeDelegation,
        CertificateKind::PoolRegistration,
        CertificateKind::PoolRetirement,
        CertificateKind::GenesisKeyDelegation,
        CertificateKind::CommitteeDelegation,
        CertificateKind::CommitteeHotKeyDeregistration,
        CertificateKind::TreasuryMovement,
    ];

    /// Stable human-readable description, used by the envelope layer.
    pub fn label(self) -> &'static str {
        match self {
            Self::StakeRegistration => "Stake address registration",
            Self::StakeDeregistration => "Stake address deregistration",
            Self::StakeDelegation => "Stake address delegation",
            Self::PoolRegistration => "Pool registration",
            Self::PoolRetirement => "Pool retirement",
            Self::GenesisKeyDelegation => "Genesis key delegation",
            Self::CommitteeDelegation => "Constitutional committee delegation",
            Self::CommitteeHotKeyDeregistration => {
                "Constitutional committee hot key deregistration"
            }
            Self::TreasuryMovement => "Instantaneous reward payment",
        }
    }

    /// Whether the current era defines a wire record for this kind.
    pub fn has_wire_form(self) -> bool {
        !matches!(
            self,
            Self::CommitteeDelegation | Self::CommitteeHotKeyDeregistration
        )
    }
}

impl Certificate {
    /// Register a stake credential.
    pub fn stake_registration(credential: StakeCredential) -> Self {
        Self::StakeRegistration(credential)
    }

    /// Deregister a stake credential.
    pub fn stake_deregistration(credential: StakeCredential) -> Self {
        Self::StakeDeregistration(credential)
    }

    /// Delegate a stake credential to a pool.
    pub fn stake_delegation(credential: StakeCredential, pool: PoolId) -> Self {
        Self::StakeDelegation(credential, pool)
    }

    /// Register a pool. Margin, relay hostnames, and the metadata URL are
    /// validated when the certificate is encoded, not here.
    pub fn pool_registration(params: PoolParameters) -> Self {
        Self::PoolRegistration(params)
    }

    /// Retire a pool at the given epoch. Whether the epoch is acceptable is
    /// ledger-state-dependent and not checked here.
    pub fn pool_retirement(pool: PoolId, epoch: Epoch) -> Self {
        Self::PoolRetirement(pool, epoch)
    }

    /// Delegate a genesis key.
    pub fn genesis_key_delegation(
        genesis: GenesisKeyHash,
        delegate: GenesisDelegateHash,
        vrf: VrfKeyHash,
    ) -> Self {
        Self::GenesisKeyDelegation {
            genesis,
            delegate,
            vrf,
        }
    }

    /// Delegate a committee cold key to a hot key.
    pub fn committee_delegation(cold: CommitteeColdKeyHash, hot: CommitteeHotKeyHash) -> Self {
        Self::CommitteeDelegation { cold, hot }
    }

    /// Deregister a committee hot key.
    pub fn committee_hot_key_deregistration(cold: CommitteeColdKeyHash) -> Self {
        Self::CommitteeHotKeyDeregistration { cold }
    }

    /// Move funds out of a pot.
    ///
    /// Validates that the target does not pay back into the source pot, and
    /// canonicalizes a credential-delta list (duplicates summed, entries
    /// ordered by credential) so that every constructor-built certificate
    /// round-trips through the wire form exactly.
    pub fn treasury_movement(pot: MirPot, target: MirTarget) -> Result<Self, CertificateError> {
        mir::check_direction(pot, &target)?;
        let target = match target {
            MirTarget::StakeCredentials(entries) => {
                MirTarget::StakeCredentials(mir::merge_deltas(&entries)?.into_iter().collect())
            }
            other => other,
        };
        Ok(Self::TreasuryMovement { pot, target })
    }

    /// The kind of this certificate.
    pub fn kind(&self) -> CertificateKind {
        match self {
            Self::StakeRegistration(_) => CertificateKind::StakeRegistration,
            Self::StakeDeregistration(_) => CertificateKind::StakeDeregistration,
            Self::StakeDelegation(..) => CertificateKind::StakeDelegation,
            Self::PoolRegistration(_) => CertificateKind::PoolRegistration,
            Self::PoolRetirement(..) => CertificateKind::PoolRetirement,
            Self::GenesisKeyDelegation { .. } => CertificateKind::GenesisKeyDelegation,
            Self::CommitteeDelegation { .. } => CertificateKind::CommitteeDelegation,
            Self::CommitteeHotKeyDeregistration { .. } => {
                CertificateKind::CommitteeHotKeyDeregistration
            }
            Self::TreasuryMovement { .. } => CertificateKind::TreasuryMovement,
        }
    }

    /// Stable human-readable description, total over all nine kinds.
    pub fn label(&self) -> &'static str {
        self.kind().label()
    }
}
