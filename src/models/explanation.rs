//! Explanation of why an address is outside a network.

use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Fields computed for a wrong answer, plus a step by step narrative.
///
/// Built by [`crate::processing::explain_mismatch`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    /// The submitted address.
    pub address: Ipv4Addr,
    /// The network address as shown in the question.
    pub network_address: Ipv4Addr,
    pub mask: Ipv4Addr,
    /// CIDR prefix length of `mask`.
    pub prefix: u8,
    /// `network_address & mask`.
    pub network_id: Ipv4Addr,
    /// `address & mask`.
    pub address_network_id: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    pub address_binary: String,
    pub mask_binary: String,
    pub network_id_binary: String,
    pub address_network_id_binary: String,
    /// Ordered, human readable steps.
    pub narrative: Vec<String>,
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.narrative.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
