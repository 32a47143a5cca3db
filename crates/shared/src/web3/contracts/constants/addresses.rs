use alloy::primitives::{address, Address};

/// Diamond that `remove-facet` targets when no other proxy is configured.
pub const DEFAULT_DIAMOND_ADDRESS: Address = address!("0xAE3C48645436fa35D951e5314689cEcdC10ef9F3");
