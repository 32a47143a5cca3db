pub mod constants;
pub mod core;
pub mod helpers;
pub mod implementations;
