//! Subnet mask type and mask validation.

use super::ipv4::{parse_and_validate, to_binary, MAX_LENGTH};
use super::ValidationError;
use serde::{Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::net::Ipv4Addr;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_quiz::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// True when no 1 bit follows a 0 bit.
pub fn is_contiguous(bits: u32) -> bool {
    bits.leading_ones() + bits.trailing_zeros() == u32::from(MAX_LENGTH)
}

/// A subnet mask whose binary form is a run of 1 bits followed by a run of 0 bits.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct SubnetMask(Ipv4Addr);

impl SubnetMask {
    /// Build a mask from a CIDR prefix length (0-32).
    pub fn from_prefix(len: u8) -> Result<SubnetMask, Box<dyn Error>> {
        let bits = get_cidr_mask(len)?;
        Ok(SubnetMask(Ipv4Addr::from(bits)))
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.0
    }

    pub fn bits(&self) -> u32 {
        u32::from(self.0)
    }

    /// CIDR prefix length, the number of 1 bits.
    pub fn prefix(&self) -> u8 {
        self.bits().count_ones() as u8
    }

    /// Bits left for hosts, `32 - prefix`.
    pub fn host_bits(&self) -> u8 {
        MAX_LENGTH - self.prefix()
    }

    pub fn to_binary(&self) -> String {
        to_binary(self.0)
    }
}

impl TryFrom<Ipv4Addr> for SubnetMask {
    type Error = ValidationError;

    fn try_from(addr: Ipv4Addr) -> Result<Self, Self::Error> {
        if is_contiguous(u32::from(addr)) {
            Ok(SubnetMask(addr))
        } else {
            Err(ValidationError::NonContiguousMask)
        }
    }
}

/// Validate a raw mask string: address rules first, then the contiguous pattern.
///
/// # Examples
/// ```
/// use subnet_quiz::models::{validate_mask, ValidationError};
/// assert_eq!(validate_mask("255.255.255.0").unwrap().prefix(), 24);
/// assert_eq!(validate_mask("255.0.255.0"), Err(ValidationError::NonContiguousMask));
/// ```
pub fn validate_mask(raw: &str) -> Result<SubnetMask, ValidationError> {
    let addr = parse_and_validate(raw)?;
    SubnetMask::try_from(addr)
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SubnetMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}
