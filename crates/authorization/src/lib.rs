//! # auth7702-authorization
//!
//! [EIP-7702](https://eips.ethereum.org/EIPS/eip-7702) authorization values.
//!
//! An [`Authorization`] is the `(chain_id, address, nonce)` tuple an account owner signs to
//! delegate the execution of their account to a contract. Once signed it becomes a
//! [`SignedAuthorization`] (claimed signer attached) or, when decoded from a transaction, a
//! [`RecoveredAuthorization`] (signer recovered from the signature).
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod authorization;
pub mod bytecode;
#[cfg(feature = "serde")]
pub mod checksum;
mod error;
pub mod list;
pub mod recovered;
pub mod signature;
pub mod signed;

pub use authorization::Authorization;
pub use bytecode::{
    Eip7702Bytecode, Eip7702DecodeError, EIP7702_BYTECODE_LEN, EIP7702_MAGIC, EIP7702_MAGIC_BYTES,
    EIP7702_VERSION,
};
pub use error::RecoveryError;
pub use list::{decode_authorization_list, encode_authorization_list};
pub use recovered::RecoveredAuthorization;
pub use signature::AuthorizationSignature;
pub use signed::SignedAuthorization;
