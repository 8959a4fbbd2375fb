//! Network address and mask pair used for one quiz question.

use super::ipv4::{from_int, to_binary, to_int};
use super::SubnetMask;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Network address as shown to the user together with its mask.
///
/// `network` is not required to be aligned to `mask`; use [`NetworkSpec::network_id`]
/// for the real network.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkSpec {
    pub network: Ipv4Addr,
    pub mask: SubnetMask,
}

/// Network ID, broadcast and the host addresses in between.
///
/// Computed with wrapping arithmetic, so /31 and /32 give degenerate values
/// (first host past the broadcast) instead of failing.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostRange {
    pub network_id: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
}

impl HostRange {
    pub fn new(network: Ipv4Addr, mask: SubnetMask) -> HostRange {
        let network_bits = to_int(network) & mask.bits();
        let broadcast_bits = network_bits | !mask.bits();
        HostRange {
            network_id: from_int(network_bits),
            broadcast: from_int(broadcast_bits),
            first_host: from_int(network_bits.wrapping_add(1)),
            last_host: from_int(broadcast_bits.wrapping_sub(1)),
        }
    }
}

impl NetworkSpec {
    pub fn new(network: Ipv4Addr, mask: SubnetMask) -> NetworkSpec {
        NetworkSpec { network, mask }
    }

    /// `network & mask`.
    pub fn network_id(&self) -> Ipv4Addr {
        from_int(to_int(self.network) & self.mask.bits())
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.host_range().broadcast
    }

    pub fn host_range(&self) -> HostRange {
        HostRange::new(self.network, self.mask)
    }

    /// Number of addresses covered by the mask, network and broadcast included.
    pub fn host_span(&self) -> u64 {
        u64::from(!self.mask.bits()) + 1
    }

    pub fn network_binary(&self) -> String {
        to_binary(self.network)
    }
}

impl fmt::Display for NetworkSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} / {} (/{})", self.network, self.mask, self.mask.prefix())
    }
}
