pub mod diamond;
pub mod web3;
