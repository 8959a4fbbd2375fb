//! Random question generation.
//!
//! Every function takes the random source as a parameter so sessions and tests can
//! use a seeded [`rand::rngs::StdRng`].

use crate::config::MASK_POOL_PREFIXES;
use crate::models::{from_int, to_int, NetworkSpec, SubnetMask};
use lazy_static::lazy_static;
use rand::Rng;
use std::net::Ipv4Addr;

lazy_static! {
    /// Masks a question can use, built once from [`MASK_POOL_PREFIXES`].
    pub static ref MASK_POOL: Vec<SubnetMask> = MASK_POOL_PREFIXES
        .iter()
        .filter_map(|len| SubnetMask::from_prefix(*len).ok())
        .collect();
}

/// Pick a mask uniformly from [`MASK_POOL`].
pub fn random_mask<R: Rng + ?Sized>(rng: &mut R) -> SubnetMask {
    MASK_POOL[rng.gen_range(0..MASK_POOL.len())]
}

/// Random address with the last octet fixed to 0.
///
/// Not aligned to any particular mask.
pub fn random_network_address<R: Rng + ?Sized>(rng: &mut R) -> Ipv4Addr {
    Ipv4Addr::new(rng.gen(), rng.gen(), rng.gen(), 0)
}

pub fn random_network_spec<R: Rng + ?Sized>(rng: &mut R) -> NetworkSpec {
    let network = random_network_address(rng);
    let mask = random_mask(rng);
    NetworkSpec::new(network, mask)
}

/// Random host address inside `spec`, never the network ID or the broadcast.
///
/// Networks with fewer than 3 addresses (/31, /32) have no such host; the network ID
/// is returned instead.
pub fn random_address_in_network<R: Rng + ?Sized>(rng: &mut R, spec: &NetworkSpec) -> Ipv4Addr {
    let network_id = spec.network_id();
    let host_span = spec.host_span();
    if host_span < 3 {
        log::debug!("no host addresses in {spec}, returning network id {network_id}");
        return network_id;
    }
    let offset = rng.gen_range(1..=host_span - 2);
    from_int(to_int(network_id) + offset as u32)
}
