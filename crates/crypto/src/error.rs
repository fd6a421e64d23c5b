use thiserror::Error;

/// Errors returned by the secp256k1 backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// Private key is zero or not lower than the curve order.
    #[error("invalid private key: not a valid secp256k1 scalar")]
    InvalidPrivateKey,
    /// `r` or `s` is zero or not lower than the curve order.
    #[error("invalid signature scalars")]
    InvalidSignature,
    /// Recovery id is not 0 or 1.
    #[error("invalid recovery id {0}, expected 0 or 1")]
    InvalidRecoveryId(u8),
    /// No public key could be recovered from the signature and message.
    #[error("public key recovery failed")]
    RecoveryFailed,
}
