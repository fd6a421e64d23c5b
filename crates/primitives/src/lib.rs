//! # auth7702-primitives
//!
//! Fixed-size Ethereum types and the constants shared by the other auth7702 crates.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod constants;

pub use alloy_primitives::{
    self, address, b256, bytes, fixed_bytes, hex, hex::FromHex, keccak256, Address, Bytes,
    ChainId, FixedBytes, B256, B512, U256,
};
pub use constants::*;
