//! Validation errors for user supplied addresses and masks.

use serde::Serialize;
use thiserror::Error;

/// Why a raw address or mask string was rejected.
///
/// Octet indexes are 1-based so they can be shown to the user as is.
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    #[error("Invalid address: expected 4 octets separated by dots")]
    MissingOctets,
    #[error("Invalid address: octet {0} is empty")]
    EmptyOctet(usize),
    #[error("Invalid address: octet {0} must be a number between 0 and 255")]
    OutOfRange(usize),
    #[error("Invalid mask: all 1 bits must come before the first 0 bit")]
    NonContiguousMask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_octet() {
        assert_eq!(
            ValidationError::EmptyOctet(3).to_string(),
            "Invalid address: octet 3 is empty"
        );
        assert!(ValidationError::OutOfRange(1).to_string().contains("octet 1"));
    }
}
