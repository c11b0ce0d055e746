//! # Palisade Testkit
//!
//! Testing utilities for the Palisade certificate workspace.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Generators**: proptest strategies for credentials, pool parameters,
//!   relays, treasury targets, and whole certificates
//! - **Fixtures**: deterministic sample values for integration tests
//! - **Golden vectors**: canonical-byte vectors for cross-implementation
//!   verification
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use palisade::Certificate;
//! use palisade_testkit::generators::wire_representable_certificate;
//!
//! proptest! {
//!     #[test]
//!     fn roundtrips(certificate in wire_representable_certificate()) {
//!         let bytes = certificate.to_wire_bytes().unwrap();
//!         prop_assert_eq!(Certificate::from_wire_bytes(&bytes).unwrap(), certificate);
//!     }
//! }
//! ```
//!
//! ## Golden Vectors
//!
//! ```rust
//! for vector in palisade_testkit::vectors::generate_all_vectors() {
//!     println!("{}: {}", vector.name, vector.cbor_hex);
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{all_certificates, wire_representable_certificates};
pub use vectors::{generate_all_vectors, GoldenVector};
