//! Encoding wire certificates to canonical CBOR bytes.
//!
//! Each record is built as a `ciborium` value tree and serialized by the
//! canonical encoder. Encoding is total: every constraint the grammar puts on
//! a value is already enforced by the types ([`DnsName`], [`Url`],
//! [`UnitInterval`], the `BTreeSet`/`BTreeMap` collections), so there is no
//! failure path here.

use ciborium::value::Value;

use palisade_core::StakeCredential;

use crate::address::encode_reward_account;
use crate::bounded::{DnsName, UnitInterval, Url};
use crate::canonical::encode_value;
use crate::certificate::{
    tags, WireCertificate, WireMir, WireMirPayout, WirePoolMetadata, WirePoolParams, WireRelay,
};

impl WireCertificate {
    /// Encode to canonical CBOR bytes.
    ///
    /// Equal values always produce identical bytes; these are the only bytes
    /// [`WireCertificate::from_bytes`](crate::certificate::WireCertificate)
    /// accepts back.
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_value(&certificate_to_value(self))
    }
}

/// Build the CBOR record for a certificate.
pub(crate) fn certificate_to_value(certificate: &WireCertificate) -> Value {
    let items = match certificate {
        WireCertificate::StakeRegistration(credential) => {
            vec![uint(tags::STAKE_REGISTRATION), credential_to_value(credential)]
        }
        WireCertificate::StakeDeregistration(credential) => {
            vec![uint(tags::STAKE_DEREGISTRATION), credential_to_value(credential)]
        }
        WireCertificate::StakeDelegation(credential, pool) => vec![
            uint(tags::STAKE_DELEGATION),
            credential_to_value(credential),
            Value::Bytes(pool.as_bytes().to_vec()),
        ],
        WireCertificate::PoolRegistration(params) => {
            // Pool parameters splice into the record after the tag.
            let mut items = vec![uint(tags::POOL_REGISTRATION)];
            items.extend(pool_params_to_values(params));
            items
        }
        WireCertificate::PoolRetirement(pool, epoch) => vec![
            uint(tags::POOL_RETIREMENT),
            Value::Bytes(pool.as_bytes().to_vec()),
            uint(*epoch),
        ],
        WireCertificate::GenesisKeyDelegation {
            genesis,
            delegate,
            vrf,
        } => vec![
            uint(tags::GENESIS_KEY_DELEGATION),
            Value::Bytes(genesis.as_bytes().to_vec()),
            Value::Bytes(delegate.as_bytes().to_vec()),
            Value::Bytes(vrf.as_bytes().to_vec()),
        ],
        WireCertificate::MoveInstantaneousReward(mir) => {
            vec![uint(tags::MOVE_INSTANTANEOUS_REWARD), mir_to_value(mir)]
        }
    };
    Value::Array(items)
}

/// `[ 0, addr_keyhash ]` or `[ 1, script_hash ]`.
pub(crate) fn credential_to_value(credential: &StakeCredential) -> Value {
    let (tag, hash) = match credential {
        StakeCredential::KeyHash(hash) => (tags::CREDENTIAL_KEY, hash.as_bytes()),
        StakeCredential::ScriptHash(hash) => (tags::CREDENTIAL_SCRIPT, hash.as_bytes()),
    };
    Value::Array(vec![uint(tag), Value::Bytes(hash.to_vec())])
}

/// The nine spliced pool-parameter fields, in wire order.
fn pool_params_to_values(params: &WirePoolParams) -> Vec<Value> {
    let owners: Vec<Value> = params
        .owners
        .iter()
        .map(|owner| Value::Bytes(owner.as_bytes().to_vec()))
        .collect();
    let relays: Vec<Value> = params.relays.iter().map(relay_to_value).collect();
    let metadata = match &params.metadata {
        Some(metadata) => metadata_to_value(metadata),
        None => Value::Null,
    };

    vec![
        Value::Bytes(params.operator.as_bytes().to_vec()),
        Value::Bytes(params.vrf_key_hash.as_bytes().to_vec()),
        uint(params.pledge),
        uint(params.cost),
        unit_interval_to_value(&params.margin),
        Value::Bytes(encode_reward_account(&params.reward_account).to_vec()),
        Value::Array(owners),
        Value::Array(relays),
        metadata,
    ]
}

fn relay_to_value(relay: &WireRelay) -> Value {
    match relay {
        WireRelay::SingleHostAddr { port, ipv4, ipv6 } => Value::Array(vec![
            uint(tags::RELAY_SINGLE_HOST_ADDR),
            opt_uint(port.map(u64::from)),
            match ipv4 {
                Some(addr) => Value::Bytes(addr.octets().to_vec()),
                None => Value::Null,
            },
            match ipv6 {
                Some(addr) => Value::Bytes(addr.octets().to_vec()),
                None => Value::Null,
            },
        ]),
        WireRelay::SingleHostName { port, host } => Value::Array(vec![
            uint(tags::RELAY_SINGLE_HOST_NAME),
            opt_uint(port.map(u64::from)),
            dns_name_to_value(host),
        ]),
        WireRelay::MultiHostName { host } => {
            Value::Array(vec![uint(tags::RELAY_MULTI_HOST_NAME), dns_name_to_value(host)])
        }
    }
}

/// `[ url, metadata_hash ]`.
fn metadata_to_value(metadata: &WirePoolMetadata) -> Value {
    Value::Array(vec![
        url_to_value(&metadata.url),
        Value::Bytes(metadata.hash.as_bytes().to_vec()),
    ])
}

/// `[ pot, { * stake_credential => delta_coin } / coin ]`.
fn mir_to_value(mir: &WireMir) -> Value {
    let payout = match &mir.payout {
        WireMirPayout::StakeCredentials(deltas) => {
            // BTreeMap iterates in credential order, which coincides with
            // canonical encoded-key order (tested in palisade-core).
            let entries: Vec<(Value, Value)> = deltas
                .iter()
                .map(|(credential, delta)| {
                    (credential_to_value(credential), Value::Integer((*delta).into()))
                })
                .collect();
            Value::Map(entries)
        }
        WireMirPayout::OtherPot(coin) => uint(*coin),
    };
    Value::Array(vec![uint(u64::from(mir.pot.to_tag())), payout])
}

/// Tag 30 over `[ numerator, denominator ]`.
fn unit_interval_to_value(interval: &UnitInterval) -> Value {
    Value::Tag(
        tags::RATIONAL,
        Box::new(Value::Array(vec![
            uint(interval.numerator()),
            uint(interval.denominator()),
        ])),
    )
}

fn dns_name_to_value(name: &DnsName) -> Value {
    Value::Text(name.as_str().to_string())
}

fn url_to_value(url: &Url) -> Value {
    Value::Text(url.as_str().to_string())
}

fn uint(n: u64) -> Value {
    Value::Integer(n.into())
}

fn opt_uint(n: Option<u64>) -> Value {
    match n {
        Some(n) => uint(n),
        None => Value::Null,
    }
}
