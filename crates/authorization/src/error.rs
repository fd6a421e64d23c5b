use thiserror::Error;

/// Reasons a signer address could not be recovered from an authorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum RecoveryError {
    /// `y_parity` is neither 0 nor 1.
    #[error("invalid y_parity {0}, expected 0 or 1")]
    InvalidYParity(u8),
    /// `s` is in the upper half of the curve order.
    #[error("invalid signature s-value, expected low-S form (EIP-2)")]
    Eip2InvalidSValue,
    /// The curve operation itself failed.
    #[error(transparent)]
    Crypto(#[from] crypto::Error),
}
