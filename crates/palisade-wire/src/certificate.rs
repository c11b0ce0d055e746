//! The wire certificate model.
//!
//! One variant per record the era's certificate grammar defines:
//!
//! ```text
//! certificate = [ 0, stake_credential ]                 ; stake registration
//!             / [ 1, stake_credential ]                 ; stake deregistration
//!             / [ 2, stake_credential, pool_keyhash ]   ; stake delegation
//!             / [ 3, ...pool_params ]                   ; pool registration
//!             / [ 4, pool_keyhash, epoch ]              ; pool retirement
//!             / [ 5, genesis_hash, genesis_delegate_hash, vrf_keyhash ]
//!             / [ 6, move_instantaneous_reward ]
//! ```
//!
//! Pool parameters splice into the registration record rather than nesting,
//! so that record has ten elements. The instantaneous-reward payload is
//! `[ pot, { * stake_credential => delta_coin } / coin ]`: a map pays signed
//! deltas to credentials out of the pot, a bare coin moves funds from the pot
//! to the other pot.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::net::{Ipv4Addr, Ipv6Addr};

use palisade_core::{
    AddrKeyHash, Coin, DeltaCoin, Epoch, GenesisDelegateHash, GenesisKeyHash, MirPot, PoolId,
    PoolMetadataHash, Port, RewardAccount, StakeCredential, VrfKeyHash,
};

use crate::bounded::{DnsName, UnitInterval, Url};

/// Record and field tags assigned by the wire grammar.
///
/// Tags 0-23 encode as single bytes in CBOR.
pub(crate) mod tags {
    pub const STAKE_REGISTRATION: u64 = 0;
    pub const STAKE_DEREGISTRATION: u64 = 1;
    pub const STAKE_DELEGATION: u64 = 2;
    pub const POOL_REGISTRATION: u64 = 3;
    pub const POOL_RETIREMENT: u64 = 4;
    pub const GENESIS_KEY_DELEGATION: u64 = 5;
    pub const MOVE_INSTANTANEOUS_REWARD: u64 = 6;

    pub const CREDENTIAL_KEY: u64 = 0;
    pub const CREDENTIAL_SCRIPT: u64 = 1;

    pub const RELAY_SINGLE_HOST_ADDR: u64 = 0;
    pub const RELAY_SINGLE_HOST_NAME: u64 = 1;
    pub const RELAY_MULTI_HOST_NAME: u64 = 2;

    /// CBOR tag (major type 6) marking a rational number.
    pub const RATIONAL: u64 = 30;
}

/// A certificate exactly as the era's wire grammar shapes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WireCertificate {
    StakeRegistration(StakeCredential),
    StakeDeregistration(StakeCredential),
    StakeDelegation(StakeCredential, PoolId),
    PoolRegistration(WirePoolParams),
    PoolRetirement(PoolId, Epoch),
    GenesisKeyDelegation {
        genesis: GenesisKeyHash,
        delegate: GenesisDelegateHash,
        vrf: VrfKeyHash,
    },
    MoveInstantaneousReward(WireMir),
}

/// The nine spliced fields of a pool registration record, in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WirePoolParams {
    pub operator: PoolId,
    pub vrf_key_hash: VrfKeyHash,
    pub pledge: Coin,
    pub cost: Coin,
    pub margin: UnitInterval,
    pub reward_account: RewardAccount,
    /// Owner key hashes; encoded as an ascending set, no duplicates.
    pub owners: BTreeSet<AddrKeyHash>,
    /// Relays in declaration order; order is preserved on the wire.
    pub relays: Vec<WireRelay>,
    pub metadata: Option<WirePoolMetadata>,
}

/// A relay record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WireRelay {
    /// `[ 0, port / null, ipv4 / null, ipv6 / null ]`
    SingleHostAddr {
        port: Option<Port>,
        ipv4: Option<Ipv4Addr>,
        ipv6: Option<Ipv6Addr>,
    },
    /// `[ 1, port / null, dns_name ]` — an A or AAAA record name.
    SingleHostName { port: Option<Port>, host: DnsName },
    /// `[ 2, dns_name ]` — an SRV record name.
    MultiHostName { host: DnsName },
}

/// A pool metadata record: `[ url, metadata_hash ]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WirePoolMetadata {
    pub url: Url,
    pub hash: PoolMetadataHash,
}

/// A move-instantaneous-reward record: the source pot plus its payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireMir {
    pub pot: MirPot,
    pub payout: WireMirPayout,
}

/// What an instantaneous reward pays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WireMirPayout {
    /// Signed per-credential deltas, keyed in canonical credential order.
    StakeCredentials(BTreeMap<StakeCredential, DeltaCoin>),
    /// A non-negative amount moved from the source pot to the other pot.
    OtherPot(Coin),
}
