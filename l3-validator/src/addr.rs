// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! IPv4 CIDR arithmetic: parsing `a.b.c.d/p` into an `(address, mask)`
//! pair and back, plus the network/broadcast derivations the uplink and
//! host-subnet roles need for their drop routes.

use thiserror::Error;

/// Failure modes when parsing or rendering an IPv4 CIDR string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddrError {
    #[error("CIDR '{0}' is missing a prefix length")]
    MissingPrefix(String),

    #[error("CIDR '{0}' has an invalid prefix length")]
    InvalidPrefix(String),

    #[error("CIDR '{0}' has a malformed IPv4 address")]
    MalformedAddress(String),
}

/// Parse `a.b.c.d/p` into the 32-bit address and a mask whose high `p`
/// bits are set. `p` must be present and in `0..=32`.
pub fn cidr_to_addr_mask(cidr: &str) -> Result<(u32, u32), AddrError> {
    let (addr_part, prefix_part) = cidr
        .split_once('/')
        .ok_or_else(|| AddrError::MissingPrefix(cidr.to_string()))?;

    let prefix: u32 = prefix_part
        .parse()
        .map_err(|_| AddrError::InvalidPrefix(cidr.to_string()))?;
    if prefix > 32 {
        return Err(AddrError::InvalidPrefix(cidr.to_string()));
    }

    let octets: Vec<&str> = addr_part.split('.').collect();
    if octets.len() != 4 {
        return Err(AddrError::MalformedAddress(cidr.to_string()));
    }
    let mut addr: u32 = 0;
    for octet in octets {
        let byte: u32 = octet
            .parse::<u8>()
            .map_err(|_| AddrError::MalformedAddress(cidr.to_string()))?
            .into();
        addr = (addr << 8) | byte;
    }

    let mask = if prefix == 0 {
        0u32
    } else {
        (!0u32) << (32 - prefix)
    };

    Ok((addr, mask))
}

/// Render `addr`/popcount(`mask`) back into `a.b.c.d/p` form.
#[must_use]
pub fn addr_mask_to_cidr(addr: u32, mask: u32) -> String {
    format!("{}/{}", addr_to_dotted_quad(addr), mask.count_ones())
}

#[must_use]
fn addr_to_dotted_quad(addr: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (addr >> 24) & 0xFF,
        (addr >> 16) & 0xFF,
        (addr >> 8) & 0xFF,
        addr & 0xFF,
    )
}

/// Render `addr` as a dotted-quad with no prefix, e.g. for next-hop fields.
#[must_use]
pub fn addr_to_string(addr: u32) -> String {
    addr_to_dotted_quad(addr)
}

/// `addr` with every bit mask covers cleared — mirrors the upstream
/// `addr &^ mask` convention used for the network/drop-route boundary.
#[must_use]
pub fn network_addr(addr: u32, mask: u32) -> u32 {
    addr & !mask
}

/// `addr` with every bit mask does *not* cover set — mirrors the upstream
/// `addr | ^mask` convention used for the broadcast/drop-route boundary.
#[must_use]
pub fn broadcast_addr(addr: u32, mask: u32) -> u32 {
    addr | !mask
}

/// Strip the `/prefix` suffix off a CIDR string, returning just the address.
#[must_use]
pub fn strip_prefix(cidr: &str) -> &str {
    cidr.split('/').next().unwrap_or(cidr)
}
