//! Golden test vectors for cross-implementation verification.
//!
//! Every implementation of this certificate encoding must produce identical
//! canonical bytes for these inputs; the hex is what signing and hashing
//! layers downstream will see.

use serde::{Deserialize, Serialize};

use palisade_core::{GenesisDelegateHash, GenesisKeyHash, MirPot, PoolId, VrfKeyHash};
use palisade::{Certificate, MirTarget};

use crate::fixtures;

/// A single golden test vector.
#[derive(Debug, Serialize, Deserialize)]
pub struct GoldenVector {
    pub name: String,
    pub description: String,
    /// The certificate's canonical wire encoding, hex.
    pub cbor_hex: String,
}

fn generate_vector(name: &str, description: &str, certificate: &Certificate) -> GoldenVector {
    let bytes = certificate
        .to_wire_bytes()
        .unwrap_or_else(|e| panic!("vector {} failed to encode: {}", name, e));
    GoldenVector {
        name: name.to_string(),
        description: description.to_string(),
        cbor_hex: hex::encode(bytes),
    }
}

/// Generate all golden vectors.
pub fn generate_all_vectors() -> Vec<GoldenVector> {
    vec![
        generate_vector(
            "stake_registration",
            "Register a stake key credential",
            &Certificate::stake_registration(fixtures::key_credential(0x0a)),
        ),
        generate_vector(
            "stake_deregistration_script",
            "Deregister a script credential",
            &Certificate::stake_deregistration(fixtures::script_credential(0x0b)),
        ),
        generate_vector(
            "stake_delegation",
            "Delegate a stake key to a pool",
            &Certificate::stake_delegation(
                fixtures::key_credential(0x0c),
                PoolId::from_bytes([0x0d; 28]),
            ),
        ),
        generate_vector(
            "pool_registration_full",
            "Pool registration with owners, one relay of each kind, and metadata",
            &Certificate::pool_registration(fixtures::sample_pool_parameters()),
        ),
        generate_vector(
            "pool_registration_minimal",
            "Pool registration with empty owner set, no relays, no metadata",
            &Certificate::pool_registration(fixtures::minimal_pool_parameters()),
        ),
        generate_vector(
            "pool_retirement",
            "Retire a pool at epoch 290",
            &Certificate::pool_retirement(PoolId::from_bytes([0x0e; 28]), 290),
        ),
        generate_vector(
            "genesis_key_delegation",
            "Delegate a genesis key to a delegate plus VRF key",
            &Certificate::genesis_key_delegation(
                GenesisKeyHash::from_bytes([0x10; 28]),
                GenesisDelegateHash::from_bytes([0x11; 28]),
                VrfKeyHash::from_bytes([0x12; 32]),
            ),
        ),
        generate_vector(
            "mir_reserves_to_treasury",
            "Move 100 lovelace from the reserves into the treasury",
            &Certificate::treasury_movement(MirPot::Reserves, MirTarget::ToTreasury(100))
                .expect("reserves pay the treasury"),
        ),
        generate_vector(
            "mir_credential_payout",
            "Pay signed deltas from the reserves to two credentials",
            &Certificate::treasury_movement(
                MirPot::Reserves,
                MirTarget::StakeCredentials(vec![
                    (fixtures::key_credential(0xaa), 50),
                    (fixtures::script_credential(0xbb), -25),
                ]),
            )
            .expect("credential payouts pair with either pot"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use palisade::ENVELOPE_TYPE;

    #[test]
    fn test_vectors_are_deterministic() {
        let first = generate_all_vectors();
        let second = generate_all_vectors();
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.cbor_hex, b.cbor_hex, "cbor_hex mismatch for {}", a.name);
        }
    }

    #[test]
    fn test_vectors_decode_back() {
        for vector in generate_all_vectors() {
            let bytes = hex::decode(&vector.cbor_hex).unwrap();
            let certificate = Certificate::from_wire_bytes(&bytes).unwrap();
            assert_eq!(
                certificate.to_wire_bytes().unwrap(),
                bytes,
                "vector {} is not a fixed point of the codec",
                vector.name
            );
        }
    }

    #[test]
    fn print_golden_vectors_json() {
        #[derive(Serialize)]
        struct VectorFile {
            version: String,
            envelope_type: String,
            description: String,
            vectors: Vec<GoldenVector>,
        }

        let file = VectorFile {
            version: env!("CARGO_PKG_VERSION").to_string(),
            envelope_type: ENVELOPE_TYPE.to_string(),
            description:
                "Golden certificate vectors. Every implementation must produce identical bytes."
                    .to_string(),
            vectors: generate_all_vectors(),
        };

        let json = serde_json::to_string_pretty(&file).unwrap();
        println!("{}", json);
    }
}
