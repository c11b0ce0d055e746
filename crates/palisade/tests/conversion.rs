//! End-to-end conversion behavior through the public API: model to wire to
//! canonical bytes and back.

use std::collections::BTreeSet;

use palisade::{
    AddrKeyHash, Certificate, CertificateError, CertificateKind, CommitteeColdKeyHash,
    CommitteeHotKeyHash, GenesisDelegateHash, GenesisKeyHash, MirPot, MirTarget, NetworkId,
    PoolId, PoolMetadataHash, PoolMetadataReference, PoolParameters, Rational, Relay,
    RewardAccount, ScriptHash, StakeCredential, VrfKeyHash, ENVELOPE_TYPE,
};

fn key_credential(byte: u8) -> StakeCredential {
    StakeCredential::KeyHash(AddrKeyHash::from_bytes([byte; 28]))
}

fn script_credential(byte: u8) -> StakeCredential {
    StakeCredential::ScriptHash(ScriptHash::from_bytes([byte; 28]))
}

fn pool_parameters() -> PoolParameters {
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
                ipv6: Some([0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1].into()),
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

fn wire_representable_certificates() -> Vec<Certificate> {
    vec![
        Certificate::stake_registration(key_credential(0x0a)),
        Certificate::stake_deregistration(script_credential(0x0b)),
        Certificate::stake_delegation(key_credential(0x0c), PoolId::from_bytes([0x0d; 28])),
        Certificate::pool_registration(pool_parameters()),
        Certificate::pool_retirement(PoolId::from_bytes([0x0e; 28]), 290),
        Certificate::genesis_key_delegation(
            GenesisKeyHash::from_bytes([0x10; 28]),
            GenesisDelegateHash::from_bytes([0x11; 28]),
            VrfKeyHash::from_bytes([0x12; 32]),
        ),
        Certificate::treasury_movement(MirPot::Reserves, MirTarget::ToTreasury(100)).unwrap(),
        Certificate::treasury_movement(MirPot::Treasury, MirTarget::ToReserves(250)).unwrap(),
        Certificate::treasury_movement(
            MirPot::Reserves,
            MirTarget::StakeCredentials(vec![
                (key_credential(0xaa), 50),
                (script_credential(0xbb), -25),
            ]),
        )
        .unwrap(),
    ]
}

#[test]
fn wire_representable_certificates_roundtrip_through_bytes() {
    for certificate in wire_representable_certificates() {
        let bytes = certificate
            .to_wire_bytes()
            .unwrap_or_else(|e| panic!("{:?} failed to encode: {}", certificate.kind(), e));
        let back = Certificate::from_wire_bytes(&bytes).unwrap();
        assert_eq!(back, certificate, "round-trip mismatch for {:?}", certificate.kind());

        // And the wire side is the exact inverse.
        assert_eq!(back.to_wire_bytes().unwrap(), bytes);
    }
}

#[test]
fn margin_boundary_values() {
    for (numerator, denominator, ok) in
        [(0, 1, true), (1, 1, true), (101, 100, false), (1, 0, false)]
    {
        let mut params = pool_parameters();
        params.margin = Rational::new(numerator, denominator);
        let result = Certificate::pool_registration(params).to_wire_bytes();
        if ok {
            assert!(result.is_ok(), "margin {}/{} should encode", numerator, denominator);
        } else {
            assert!(matches!(
                result,
                Err(CertificateError::InvalidMargin { .. })
            ));
        }
    }
}

#[test]
fn treasury_direction_consistency() {
    // Reserves-sourced transfer into the treasury encodes, decodes back
    // identically.
    let movement =
        Certificate::treasury_movement(MirPot::Reserves, MirTarget::ToTreasury(100)).unwrap();
    let bytes = movement.to_wire_bytes().unwrap();
    assert_eq!(Certificate::from_wire_bytes(&bytes).unwrap(), movement);

    // The wrong pairing is rejected at construction.
    assert!(matches!(
        Certificate::treasury_movement(MirPot::Reserves, MirTarget::ToReserves(100)),
        Err(CertificateError::InconsistentPotDirection { pot: MirPot::Reserves })
    ));
    assert!(matches!(
        Certificate::treasury_movement(MirPot::Treasury, MirTarget::ToTreasury(100)),
        Err(CertificateError::InconsistentPotDirection { pot: MirPot::Treasury })
    ));
}

#[test]
fn credential_deltas_merge_by_addition() {
    let movement = Certificate::treasury_movement(
        MirPot::Reserves,
        MirTarget::StakeCredentials(vec![
            (key_credential(0xaa), 50),
            (key_credential(0xaa), -20),
            (key_credential(0xbb), 10),
        ]),
    )
    .unwrap();

    let bytes = movement.to_wire_bytes().unwrap();
    let back = Certificate::from_wire_bytes(&bytes).unwrap();
    match back {
        Certificate::TreasuryMovement {
            target: MirTarget::StakeCredentials(entries),
            ..
        } => {
            assert_eq!(
                entries,
                vec![(key_credential(0xaa), 30), (key_credential(0xbb), 10)]
            );
        }
        other => panic!("unexpected certificate {:?}", other),
    }
}

#[test]
fn unsupported_committee_kinds_produce_no_bytes() {
    let cold = CommitteeColdKeyHash::from_bytes([0x20; 28]);
    let hot = CommitteeHotKeyHash::from_bytes([0x21; 28]);

    for certificate in [
        Certificate::committee_delegation(cold, hot),
        Certificate::committee_hot_key_deregistration(cold),
    ] {
        match certificate.to_wire_bytes() {
            Err(CertificateError::UnsupportedInEra(kind)) => {
                assert_eq!(kind, certificate.kind());
            }
            other => panic!("expected UnsupportedInEra, got {:?}", other),
        }
    }
}

#[test]
fn relay_order_is_preserved() {
    let certificate = Certificate::pool_registration(pool_parameters());
    let bytes = certificate.to_wire_bytes().unwrap();
    match Certificate::from_wire_bytes(&bytes).unwrap() {
        Certificate::PoolRegistration(params) => {
            let kinds: Vec<&str> = params
                .relays
                .iter()
                .map(|relay| match relay {
                    Relay::Ip { .. } => "ip",
                    Relay::Dns { .. } => "dns",
                    Relay::DnsSrv { .. } => "srv",
                })
                .collect();
            assert_eq!(kinds, vec!["ip", "dns", "srv"]);
        }
        other => panic!("unexpected certificate {:?}", other),
    }
}

#[test]
fn labels_cover_all_nine_kinds() {
    assert_eq!(ENVELOPE_TYPE, "CertificateShelley");

    let cold = CommitteeColdKeyHash::from_bytes([0x20; 28]);
    let hot = CommitteeHotKeyHash::from_bytes([0x21; 28]);
    let mut all = wire_representable_certificates();
    all.push(Certificate::committee_delegation(cold, hot));
    all.push(Certificate::committee_hot_key_deregistration(cold));

    let kinds: BTreeSet<String> = all.iter().map(|c| format!("{:?}", c.kind())).collect();
    assert_eq!(kinds.len(), CertificateKind::ALL.len());
    for certificate in &all {
        assert!(!certificate.label().is_empty());
    }
}

#[test]
fn malformed_bytes_are_rejected() {
    for bytes in [
        &[][..],
        &[0x00][..],
        // Unknown record tag 7.
        &[0x82, 0x07, 0x00][..],
        // Truncated credential.
        &[0x82, 0x00, 0x82, 0x00, 0x58, 0x1c, 0x0a][..],
    ] {
        assert!(Certificate::from_wire_bytes(bytes).is_err());
    }
}
