use authorization::RecoveryError;
use thiserror::Error;

/// Errors returned by [`sign`](crate::sign) and the functions built on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum SignError {
    /// Private key is zero or not lower than the secp256k1 curve order.
    #[error("invalid private key")]
    InvalidPrivateKey,
    /// The signing backend failed on a valid key.
    #[error("signing failed: {0}")]
    Crypto(crypto::Error),
}

impl From<crypto::Error> for SignError {
    fn from(err: crypto::Error) -> Self {
        match err {
            crypto::Error::InvalidPrivateKey => Self::InvalidPrivateKey,
            err => Self::Crypto(err),
        }
    }
}

/// Why a signature could not be checked.
///
/// Reported in [`VerificationResult::error`](crate::VerificationResult::error). A signature
/// that is well formed but made by another key is not an error, only an invalid result.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum VerificationError {
    /// No signer could be recovered.
    #[error("malformed signature: {0}")]
    MalformedSignature(#[from] RecoveryError),
    /// The entry could not be read as a signed authorization, e.g. a `v` of 29 or a short `r`.
    #[error("invalid signed authorization: {0}")]
    InvalidEntry(String),
}

#[cfg(feature = "serde")]
impl serde::Serialize for VerificationError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
