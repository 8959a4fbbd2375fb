//! Subnet arithmetic and question generation.
//!
//! - [`evaluator`] - network membership and mismatch explanations
//! - [`generator`] - random networks, masks and host addresses

mod evaluator;
mod generator;

// Re-export public functions
pub use evaluator::{explain_mismatch, is_in_network};
pub use generator::{
    random_address_in_network, random_mask, random_network_address, random_network_spec,
    MASK_POOL,
};
