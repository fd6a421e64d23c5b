//! # auth7702
//!
//! Signing and verification of [EIP-7702](https://eips.ethereum.org/EIPS/eip-7702)
//! authorizations.
//!
//! The codec is three functions:
//! * [`compute_signing_hash`] - `keccak256(0x05 || rlp([chain_id, address, nonce]))`.
//! * [`sign`] - low-S secp256k1 signature over a signing hash.
//! * [`verify`] - recover the signer and compare it, with the delegated contract, against
//!   what the caller expects. Never fails; problems are reported in the [`VerificationResult`].
//!
//! The value types live in [`authorization`], curve operations in [`crypto`].
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod codec;
mod error;
mod result;

pub use codec::{
    address_of, compute_signing_hash, sign, sign_authorization, verify, verify_batch,
    verify_claimed,
};
pub use error::{SignError, VerificationError};
pub use result::VerificationResult;

// Reexport the lower crates.
pub use authorization::{
    self, Authorization, AuthorizationSignature, Eip7702Bytecode, RecoveredAuthorization,
    RecoveryError, SignedAuthorization,
};
pub use crypto;
pub use primitives;
