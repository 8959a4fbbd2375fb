//! IPv4 address codec.
//!
//! Parses user input into [`Ipv4Addr`] and converts between the dotted decimal,
//! dotted binary and `u32` forms used by the evaluator.

use super::ValidationError;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of dot separated octets in an IPv4 address.
pub const OCTET_COUNT: usize = 4;

/// Parse a raw dotted decimal string into a normalized address.
///
/// Whitespace around each octet is ignored and leading zeros are dropped, so
/// `" 010.0.0.01 "` normalizes to `10.0.0.1`. The first failing octet is reported
/// with its 1-based index.
///
/// # Examples
/// ```
/// use subnet_quiz::models::{parse_and_validate, ValidationError};
/// assert_eq!(parse_and_validate("192.168.001.10").unwrap().to_string(), "192.168.1.10");
/// assert_eq!(parse_and_validate("1.2.3"), Err(ValidationError::MissingOctets));
/// ```
pub fn parse_and_validate(raw: &str) -> Result<Ipv4Addr, ValidationError> {
    let parts: Vec<&str> = raw.split('.').collect();
    if parts.len() != OCTET_COUNT {
        return Err(ValidationError::MissingOctets);
    }

    let mut octets = [0u8; OCTET_COUNT];
    for (i, part) in parts.iter().enumerate() {
        let part = part.trim();
        if part.is_empty() {
            return Err(ValidationError::EmptyOctet(i + 1));
        }
        octets[i] = part
            .parse::<u8>()
            .map_err(|_| ValidationError::OutOfRange(i + 1))?;
    }

    Ok(Ipv4Addr::from(octets))
}

/// Render an address as four zero padded 8 bit groups, e.g. `11000000.10101000.00000001.00001010`.
pub fn to_binary(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|o| format!("{o:08b}")).join(".")
}

/// Big-endian packing of the octets, octet 0 most significant.
pub fn to_int(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

pub fn from_int(bits: u32) -> Ipv4Addr {
    Ipv4Addr::from(bits)
}
