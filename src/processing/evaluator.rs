//! Network membership checks and mismatch explanations.

use crate::models::{to_binary, to_int, Explanation, HostRange, SubnetMask};
use std::net::Ipv4Addr;

/// Check whether `address` is in the network given by `network` and `mask`.
///
/// Both sides are masked, so `network` does not have to be the network ID.
pub fn is_in_network(address: Ipv4Addr, network: Ipv4Addr, mask: SubnetMask) -> bool {
    let mask_bits = mask.bits();
    let in_network = to_int(address) & mask_bits == to_int(network) & mask_bits;
    log::debug!("is_in_network({address}, {network}/{}) = {in_network}", mask.prefix());
    in_network
}

/// Explain why `address` is not in the network.
///
/// Meant for addresses where [`is_in_network`] is false; for an address inside the
/// network the fields are still computed but the narrative reads as a mismatch.
pub fn explain_mismatch(address: Ipv4Addr, network: Ipv4Addr, mask: SubnetMask) -> Explanation {
    let range = HostRange::new(network, mask);
    let address_network_id = HostRange::new(address, mask).network_id;
    let prefix = mask.prefix();

    let narrative = vec![
        format!(
            "Subnet mask {mask} (/{prefix}) in binary is {}",
            mask.to_binary()
        ),
        format!(
            "Network ID: {network} AND {mask} = {} ({})",
            range.network_id,
            to_binary(range.network_id)
        ),
        format!(
            "Your address: {address} AND {mask} = {address_network_id} ({})",
            to_binary(address_network_id)
        ),
        format!(
            "{address_network_id} does not match {}, so {address} is not in network {}/{prefix}",
            range.network_id, range.network_id
        ),
        format!(
            "Valid hosts are {} to {}, broadcast address {}",
            range.first_host, range.last_host, range.broadcast
        ),
    ];

    log::debug!(
        "explain_mismatch({address}, {network}/{prefix}) network_id={} address_network_id={address_network_id}",
        range.network_id
    );

    Explanation {
        address,
        network_address: network,
        mask: mask.addr(),
        prefix,
        network_id: range.network_id,
        address_network_id,
        broadcast: range.broadcast,
        first_host: range.first_host,
        last_host: range.last_host,
        address_binary: to_binary(address),
        mask_binary: mask.to_binary(),
        network_id_binary: to_binary(range.network_id),
        address_network_id_binary: to_binary(address_network_id),
        narrative,
    }
}
