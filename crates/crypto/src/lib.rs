//! # auth7702-crypto
//!
//! secp256k1 operations needed to sign and verify EIP-7702 authorizations.
//!
//! Depending on enabled features, it will use different implementations:
//! * [`k256`](https://crates.io/crates/k256) - maintained pure rust lib, used by default.
//! * [`secp256k1`](https://crates.io/crates/secp256k1) - bindings to the C library used in
//!   bitcoin core. Enabled with the `secp256k1` feature.
//!
//! Both backends sit behind the same functions. Signatures returned by [`sign_prehash`] are
//! always in low-S form whatever the backend does.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod constants;
mod error;
pub mod secp256k1;

pub use error::Error;
pub use secp256k1::{
    ecrecover, normalize_s, public_key_to_address, secret_to_address, sign_prehash,
};
