//! Domain models for the subnet quiz.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`ipv4`] - address codec (parse, normalize, binary and integer forms)
//! - [`SubnetMask`] - contiguous subnet mask
//! - [`NetworkSpec`] and [`HostRange`] - the network a question is about
//! - [`Explanation`] and [`Submission`] - results of an attempt
//! - [`ValidationError`] - rejected input

mod error;
mod explanation;
mod ipv4;
mod mask;
mod network;
mod submission;

// Re-export public types
pub use error::ValidationError;
pub use explanation::Explanation;
pub use ipv4::{from_int, parse_and_validate, to_binary, to_int, MAX_LENGTH, OCTET_COUNT};
pub use mask::{get_cidr_mask, is_contiguous, validate_mask, SubnetMask};
pub use network::{HostRange, NetworkSpec};
pub use submission::Submission;
