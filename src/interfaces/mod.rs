//! Data contracts with the excluded shell

pub mod liquidity_layer;
pub mod oracle;

pub use liquidity_layer::*;
pub use oracle::*;
