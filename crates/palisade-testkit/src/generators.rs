//! Proptest generators for property-based testing.
//!
//! The certificate strategies stay inside the wire grammar (hostnames and
//! URLs that encode, margins inside the unit interval, deltas that cannot
//! overflow when summed), so every generated wire-representable certificate
//! is encodable and the round-trip properties quantify over the whole space.

use proptest::prelude::*;
use std::net::{Ipv4Addr, Ipv6Addr};

use palisade_core::{
    AddrKeyHash, CommitteeColdKeyHash, CommitteeHotKeyHash, DeltaCoin, GenesisDelegateHash,
    GenesisKeyHash, MirPot, NetworkId, PoolId, PoolMetadataHash, Rational, RewardAccount,
    ScriptHash, StakeCredential, VrfKeyHash,
};
use palisade_wire::WireCertificate;
use palisade::{Certificate, MirTarget, PoolMetadataReference, PoolParameters, Relay};

/// Generate a random 28-byte address key hash.
pub fn addr_key_hash() -> impl Strategy<Value = AddrKeyHash> {
    any::<[u8; 28]>().prop_map(AddrKeyHash::from_bytes)
}

/// Generate a random script hash.
pub fn script_hash() -> impl Strategy<Value = ScriptHash> {
    any::<[u8; 28]>().prop_map(ScriptHash::from_bytes)
}

/// Generate a random pool id.
pub fn pool_id() -> impl Strategy<Value = PoolId> {
    any::<[u8; 28]>().prop_map(PoolId::from_bytes)
}

/// Generate a random VRF key hash.
pub fn vrf_key_hash() -> impl Strategy<Value = VrfKeyHash> {
    any::<[u8; 32]>().prop_map(VrfKeyHash::from_bytes)
}

/// Generate a random pool metadata hash.
pub fn pool_metadata_hash() -> impl Strategy<Value = PoolMetadataHash> {
    any::<[u8; 32]>().prop_map(PoolMetadataHash::from_bytes)
}

/// Generate a stake credential of either kind.
pub fn stake_credential() -> impl Strategy<Value = StakeCredential> {
    prop_oneof![
        addr_key_hash().prop_map(StakeCredential::KeyHash),
        script_hash().prop_map(StakeCredential::ScriptHash),
    ]
}

/// Generate a network id.
pub fn network_id() -> impl Strategy<Value = NetworkId> {
    prop_oneof![Just(NetworkId::Testnet), Just(NetworkId::Mainnet)]
}

/// Generate a reward account.
pub fn reward_account() -> impl Strategy<Value = RewardAccount> {
    (network_id(), stake_credential())
        .prop_map(|(network, credential)| RewardAccount::new(network, credential))
}

/// Generate a pot.
pub fn mir_pot() -> impl Strategy<Value = MirPot> {
    prop_oneof![Just(MirPot::Reserves), Just(MirPot::Treasury)]
}

/// Generate a margin inside the unit interval (unreduced).
pub fn margin() -> impl Strategy<Value = Rational> {
    (1u64..=1_000_000)
        .prop_flat_map(|denominator| {
            (0..=denominator).prop_map(move |numerator| Rational::new(numerator, denominator))
        })
}

/// Generate a hostname within the wire grammar (ascii, at most 63 bytes).
pub fn hostname() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9.-]{0,62}"
}

/// Generate a metadata URL within the wire grammar.
pub fn url() -> impl Strategy<Value = String> {
    "https://[a-z0-9./-]{1,50}"
}

/// Generate a relay of any of the three kinds.
pub fn relay() -> impl Strategy<Value = Relay> {
    prop_oneof![
        (
            proptest::option::of(any::<u32>().prop_map(Ipv4Addr::from)),
            proptest::option::of(any::<u128>().prop_map(Ipv6Addr::from)),
            proptest::option::of(any::<u16>()),
        )
            .prop_map(|(ipv4, ipv6, port)| Relay::Ip { ipv4, ipv6, port }),
        (hostname(), proptest::option::of(any::<u16>()))
            .prop_map(|(host, port)| Relay::Dns { host, port }),
        hostname().prop_map(|host| Relay::DnsSrv { host }),
    ]
}

/// Generate a pool metadata reference.
pub fn pool_metadata() -> impl Strategy<Value = PoolMetadataReference> {
    (url(), pool_metadata_hash()).prop_map(|(url, hash)| PoolMetadataReference { url, hash })
}

/// Generate wire-encodable pool parameters.
pub fn pool_parameters() -> impl Strategy<Value = PoolParameters> {
    (
        pool_id(),
        vrf_key_hash(),
        any::<u64>(),
        margin(),
        reward_account(),
        any::<u64>(),
        proptest::collection::btree_set(addr_key_hash(), 0..4),
        proptest::collection::vec(relay(), 0..4),
        proptest::option::of(pool_metadata()),
    )
        .prop_map(
            |(id, vrf_key_hash, cost, margin, reward_account, pledge, owners, relays, metadata)| {
                PoolParameters {
                    id,
                    vrf_key_hash,
                    cost,
                    margin,
                    reward_account,
                    pledge,
                    owners,
                    relays,
                    metadata,
                }
            },
        )
}

/// Generate a credential-delta list whose merged sums cannot overflow.
pub fn reward_deltas() -> impl Strategy<Value = Vec<(StakeCredential, DeltaCoin)>> {
    proptest::collection::vec(
        (stake_credential(), -1_000_000_000_000i64..=1_000_000_000_000i64),
        0..6,
    )
}

/// Generate a treasury movement through the validating constructor.
pub fn treasury_movement() -> impl Strategy<Value = Certificate> {
    prop_oneof![
        (mir_pot(), reward_deltas()).prop_map(|(pot, deltas)| {
            Certificate::treasury_movement(pot, MirTarget::StakeCredentials(deltas))
                .expect("bounded deltas cannot overflow")
        }),
        (0u64..=1_000_000_000_000).prop_map(|coin| {
            Certificate::treasury_movement(MirPot::Reserves, MirTarget::ToTreasury(coin))
                .expect("reserves pay the treasury")
        }),
        (0u64..=1_000_000_000_000).prop_map(|coin| {
            Certificate::treasury_movement(MirPot::Treasury, MirTarget::ToReserves(coin))
                .expect("the treasury pays the reserves")
        }),
    ]
}

/// Generate a certificate of any wire-representable kind.
pub fn wire_representable_certificate() -> impl Strategy<Value = Certificate> {
    prop_oneof![
        stake_credential().prop_map(Certificate::stake_registration),
        stake_credential().prop_map(Certificate::stake_deregistration),
        (stake_credential(), pool_id())
            .prop_map(|(credential, pool)| Certificate::stake_delegation(credential, pool)),
        pool_parameters().prop_map(Certificate::pool_registration),
        (pool_id(), any::<u64>())
            .prop_map(|(pool, epoch)| Certificate::pool_retirement(pool, epoch)),
        (any::<[u8; 28]>(), any::<[u8; 28]>(), vrf_key_hash()).prop_map(
            |(genesis, delegate, vrf)| {
                Certificate::genesis_key_delegation(
                    GenesisKeyHash::from_bytes(genesis),
                    GenesisDelegateHash::from_bytes(delegate),
                    vrf,
                )
            }
        ),
        treasury_movement(),
    ]
}

/// Generate a certificate of any of the nine kinds.
pub fn certificate() -> impl Strategy<Value = Certificate> {
    prop_oneof![
        wire_representable_certificate(),
        (any::<[u8; 28]>(), any::<[u8; 28]>()).prop_map(|(cold, hot)| {
            Certificate::committee_delegation(
                CommitteeColdKeyHash::from_bytes(cold),
                CommitteeHotKeyHash::from_bytes(hot),
            )
        }),
        any::<[u8; 28]>().prop_map(|cold| {
            Certificate::committee_hot_key_deregistration(CommitteeColdKeyHash::from_bytes(cold))
        }),
    ]
}

/// Generate a valid wire certificate.
pub fn wire_certificate() -> impl Strategy<Value = WireCertificate> {
    wire_representable_certificate().prop_map(|certificate| {
        certificate
            .to_wire()
            .expect("generated certificates are wire-valid")
    })
}
