//! Deterministic sample values for integration and golden tests.

use std::collections::BTreeSet;

use palisade_core::{
    AddrKeyHash, CommitteeColdKeyHash, CommitteeHotKeyHash, GenesisDelegateHash, GenesisKeyHash,
    MirPot, NetworkId, PoolId, PoolMetadataHash, Rational, RewardAccount, ScriptHash,
    StakeCredential, VrfKeyHash,
};
use palisade::{Certificate, MirTarget, PoolMetadataReference, PoolParameters, Relay};

/// A key credential with a constant-fill hash.
pub fn key_credential(byte: u8) -> StakeCredential {
    StakeCredential::KeyHash(AddrKeyHash::from_bytes([byte; 28]))
}

/// A script credential with a constant-fill hash.
pub fn script_credential(byte: u8) -> StakeCredential {
    StakeCredential::ScriptHash(ScriptHash::from_bytes([byte; 28]))
}

/// A fully populated set of pool parameters: two owners, one relay of each
/// kind, and a metadata reference.
pub fn sample_pool_parameters() -> PoolParameters {
    PoolParameters {
        id: PoolId::from_bytes([0x01; 28]),
        vrf_key_hash: VrfKeyHash::from_bytes([0x02; 32]),
        cost: 340_000_000,
        margin: Rational::new(1, 20),
        reward_account: RewardAccount::new(NetworkId::Mainnet, key_credential(0x03)),
        pledge: 500_000_000,
        owners: BTreeSet::from([
            AddrKeyHash::from_bytes([0x03; 28]),
            AddrKeyHash::from_bytes([0x05; 28]),
        ]),
        relays: vec![
            Relay::Ip {
                ipv4: Some([192, 0, 2, 10].into()),
                ipv6: None,
                port: Some(3000),
            },
            Relay::Dns {
                host: "relay-1.pool.example".into(),
                port: Some(3001),
            },
            Relay::DnsSrv {
                host: "_cardano._tcp.pool.example".into(),
            },
        ],
        metadata: Some(PoolMetadataReference {
            url: "https://pool.example/meta.json".into(),
            hash: PoolMetadataHash::from_bytes([0x06; 32]),
        }),
    }
}

/// A minimal pool registration: no owners, no relays, no metadata.
pub fn minimal_pool_parameters() -> PoolParameters {
    PoolParameters {
        id: PoolId::from_bytes([0x07; 28]),
        vrf_key_hash: VrfKeyHash::from_bytes([0x08; 32]),
        cost: 0,
        margin: Rational::new(0, 1),
        reward_account: RewardAccount::new(NetworkId::Testnet, script_credential(0x09)),
        pledge: 0,
        owners: BTreeSet::new(),
        relays: Vec::new(),
        metadata: None,
    }
}

/// One certificate of every wire-representable kind.
pub fn wire_representable_certificates() -> Vec<Certificate> {
    vec![
        Certificate::stake_registration(key_credential(0x0a)),
        Certificate::stake_deregistration(script_credential(0x0b)),
        Certificate::stake_delegation(key_credential(0x0c), PoolId::from_bytes([0x0d; 28])),
        Certificate::pool_registration(sample_pool_parameters()),
        Certificate::pool_registration(minimal_pool_parameters()),
        Certificate::pool_retirement(PoolId::from_bytes([0x0e; 28]), 290),
        Certificate::genesis_key_delegation(
            GenesisKeyHash::from_bytes([0x10; 28]),
            GenesisDelegateHash::from_bytes([0x11; 28]),
            VrfKeyHash::from_bytes([0x12; 32]),
        ),
        Certificate::treasury_movement(MirPot::Reserves, MirTarget::ToTreasury(100))
            .expect("reserves pay the treasury"),
        Certificate::treasury_movement(MirPot::Treasury, MirTarget::ToReserves(250))
            .expect("the treasury pays the reserves"),
        Certificate::treasury_movement(
            MirPot::Reserves,
            MirTarget::StakeCredentials(vec![
                (key_credential(0xaa), 50),
                (script_credential(0xbb), -25),
            ]),
        )
        .expect("credential payouts pair with either pot"),
    ]
}

/// One certificate of every kind, including the two that cannot reach the
/// wire yet.
pub fn all_certificates() -> Vec<Certificate> {
    let cold = CommitteeColdKeyHash::from_bytes([0x20; 28]);
    let hot = CommitteeHotKeyHash::from_bytes([0x21; 28]);

    let mut certificates = wire_representable_certificates();
    certificates.push(Certificate::committee_delegation(cold, hot));
    certificates.push(Certificate::committee_hot_key_deregistration(cold));
    certificates
}
