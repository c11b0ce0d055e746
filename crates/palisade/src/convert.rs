//! The wire conversion engine.
//!
//! `to_wire` is where deferred validation happens: margin bounds, relay
//! hostnames, the metadata URL, and the pot/direction pairing are all checked
//! as the model value crosses into the wire shape. `from_wire` is total; a
//! `WireCertificate` is well-formed by construction, so turning it back into
//! the model cannot fail.

use palisade_core::{MirPot, Rational};
use palisade_wire::{
    DnsName, UnitInterval, Url, WireCertificate, WireMir, WireMirPayout, WirePoolMetadata,
    WirePoolParams, WireRelay,
};

use crate::certificate::Certificate;
use crate::error::CertificateError;
use crate::mir::{self, MirTarget};
use crate::pool::{PoolMetadataReference, PoolParameters, Relay};

/// Convert a certificate to its wire shape.
///
/// Fails with [`CertificateError::UnsupportedInEra`] for the two committee
/// kinds, which the current era defines no wire record for; no data is
/// silently dropped and no wrong shape is ever produced.
pub fn to_wire(certificate: &Certificate) -> Result<WireCertificate, CertificateError> {
    match certificate {
        Certificate::StakeRegistration(credential) => {
            Ok(WireCertificate::StakeRegistration(*credential))
        }
        Certificate::StakeDeregistration(credential) => {
            Ok(WireCertificate::StakeDeregistration(*credential))
        }
        Certificate::StakeDelegation(credential, pool) => {
            Ok(WireCertificate::StakeDelegation(*credential, *pool))
        }
        Certificate::PoolRegistration(params) => {
            Ok(WireCertificate::PoolRegistration(pool_params_to_wire(params)?))
        }
        Certificate::PoolRetirement(pool, epoch) => {
            Ok(WireCertificate::PoolRetirement(*pool, *epoch))
        }
        Certificate::GenesisKeyDelegation {
            genesis,
            delegate,
            vrf,
        } => Ok(WireCertificate::GenesisKeyDelegation {
            genesis: *genesis,
            delegate: *delegate,
            vrf: *vrf,
        }),
        Certificate::CommitteeDelegation { .. }
        | Certificate::CommitteeHotKeyDeregistration { .. } => {
            Err(CertificateError::UnsupportedInEra(certificate.kind()))
        }
        Certificate::TreasuryMovement { pot, target } => {
            mir::check_direction(*pot, target)?;
            let payout = match target {
                MirTarget::StakeCredentials(entries) => {
                    // Group by credential and sum, whether or not the value
                    // came through the canonicalizing constructor.
                    WireMirPayout::StakeCredentials(mir::merge_deltas(entries)?)
                }
                MirTarget::ToTreasury(coin) | MirTarget::ToReserves(coin) => {
                    WireMirPayout::OtherPot(*coin)
                }
            };
            Ok(WireCertificate::MoveInstantaneousReward(WireMir {
                pot: *pot,
                payout,
            }))
        }
    }
}

/// Convert a wire certificate back to the model. Total.
pub fn from_wire(wire: &WireCertificate) -> Certificate {
    match wire {
        WireCertificate::StakeRegistration(credential) => {
            Certificate::StakeRegistration(*credential)
        }
        WireCertificate::StakeDeregistration(credential) => {
            Certificate::StakeDeregistration(*credential)
        }
        WireCertificate::StakeDelegation(credential, pool) => {
            Certificate::StakeDelegation(*credential, *pool)
        }
        WireCertificate::PoolRegistration(params) => {
            Certificate::PoolRegistration(pool_params_from_wire(params))
        }
        WireCertificate::PoolRetirement(pool, epoch) => {
            Certificate::PoolRetirement(*pool, *epoch)
        }
        WireCertificate::GenesisKeyDelegation {
            genesis,
            delegate,
            vrf,
        } => Certificate::GenesisKeyDelegation {
            genesis: *genesis,
            delegate: *delegate,
            vrf: *vrf,
        },
        WireCertificate::MoveInstantaneousReward(mir) => {
            let target = match &mir.payout {
                WireMirPayout::StakeCredentials(deltas) => {
                    MirTarget::StakeCredentials(deltas.iter().map(|(c, d)| (*c, *d)).collect())
                }
                // An opposite-pot payout for source pot P pays into the pot
                // that is not P.
                WireMirPayout::OtherPot(coin) => match mir.pot.opposite() {
                    MirPot::Treasury => MirTarget::ToTreasury(*coin),
                    MirPot::Reserves => MirTarget::ToReserves(*coin),
                },
            };
            Certificate::TreasuryMovement {
                pot: mir.pot,
                target,
            }
        }
    }
}

fn pool_params_to_wire(params: &PoolParameters) -> Result<WirePoolParams, CertificateError> {
    let margin = margin_to_wire(&params.margin)?;

    let mut relays = Vec::with_capacity(params.relays.len());
    for relay in &params.relays {
        relays.push(relay_to_wire(relay)?);
    }

    let metadata = params
        .metadata
        .as_ref()
        .map(metadata_to_wire)
        .transpose()?;

    Ok(WirePoolParams {
        operator: params.id,
        vrf_key_hash: params.vrf_key_hash,
        pledge: params.pledge,
        cost: params.cost,
        margin,
        reward_account: params.reward_account,
        owners: params.owners.clone(),
        relays,
        metadata,
    })
}

fn pool_params_from_wire(params: &WirePoolParams) -> PoolParameters {
    PoolParameters {
        id: params.operator,
        vrf_key_hash: params.vrf_key_hash,
        cost: params.cost,
        margin: Rational::new(params.margin.numerator(), params.margin.denominator()),
        reward_account: params.reward_account,
        pledge: params.pledge,
        owners: params.owners.clone(),
        relays: params.relays.iter().map(relay_from_wire).collect(),
        metadata: params.metadata.as_ref().map(|metadata| PoolMetadataReference {
            url: metadata.url.as_str().to_string(),
            hash: metadata.hash,
        }),
    }
}

fn margin_to_wire(margin: &Rational) -> Result<UnitInterval, CertificateError> {
    UnitInterval::new(margin.numerator, margin.denominator).map_err(|_| {
        CertificateError::InvalidMargin {
            numerator: margin.numerator,
            denominator: margin.denominator,
        }
    })
}

fn relay_to_wire(relay: &Relay) -> Result<WireRelay, CertificateError> {
    match relay {
        Relay::Ip { ipv4, ipv6, port } => Ok(WireRelay::SingleHostAddr {
            port: *port,
            ipv4: *ipv4,
            ipv6: *ipv6,
        }),
        Relay::Dns { host, port } => Ok(WireRelay::SingleHostName {
            port: *port,
            host: hostname_to_wire(host)?,
        }),
        Relay::DnsSrv { host } => Ok(WireRelay::MultiHostName {
            host: hostname_to_wire(host)?,
        }),
    }
}

fn relay_from_wire(relay: &WireRelay) -> Relay {
    match relay {
        WireRelay::SingleHostAddr { port, ipv4, ipv6 } => Relay::Ip {
            ipv4: *ipv4,
            ipv6: *ipv6,
            port: *port,
        },
        WireRelay::SingleHostName { port, host } => Relay::Dns {
            host: host.as_str().to_string(),
            port: *port,
        },
        WireRelay::MultiHostName { host } => Relay::DnsSrv {
            host: host.as_str().to_string(),
        },
    }
}

fn hostname_to_wire(host: &str) -> Result<DnsName, CertificateError> {
    DnsName::new(host).map_err(|_| CertificateError::InvalidHostname(host.to_string()))
}

fn metadata_to_wire(
    metadata: &PoolMetadataReference,
) -> Result<WirePoolMetadata, CertificateError> {
    let url =
        Url::new(&metadata.url).map_err(|_| CertificateError::InvalidUrl(metadata.url.clone()))?;
    Ok(WirePoolMetadata {
        url,
        hash: metadata.hash,
    })
}

impl Certificate {
    /// Convert to the wire shape. See [`to_wire`].
    pub fn to_wire(&self) -> Result<WireCertificate, CertificateError> {
        to_wire(self)
    }

    /// Build the model from a wire certificate. See [`from_wire`].
    pub fn from_wire(wire: &WireCertificate) -> Self {
        from_wire(wire)
    }

    /// Convert to the wire shape and encode to canonical CBOR bytes.
    pub fn to_wire_bytes(&self) -> Result<Vec<u8>, CertificateError> {
        Ok(self.to_wire()?.to_bytes())
    }

    /// Decode canonical CBOR bytes into the model.
    pub fn from_wire_bytes(bytes: &[u8]) -> Result<Self, CertificateError> {
        let wire = WireCertificate::from_bytes(bytes)?;
        Ok(Self::from_wire(&wire))
    }
}
