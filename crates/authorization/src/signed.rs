//! Authorization with its signature and the address that claims to have signed it.

use crate::{list, Authorization, AuthorizationSignature, RecoveryError};
use alloy_rlp::{BufMut, Encodable};
use core::ops::Deref;
use primitives::Address;

/// A signed authorization together with the claimed signer.
///
/// The claimed `address` is not part of the wire format. [`Encodable`] writes the six field
/// list `[chain_id, address, nonce, y_parity, r, s]` carried by type 4 transactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignedAuthorization {
    #[cfg_attr(feature = "serde", serde(flatten))]
    inner: Authorization,
    #[cfg_attr(feature = "serde", serde(flatten))]
    signature: AuthorizationSignature,
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "crate::checksum::serialize")
    )]
    address: Address,
}

impl SignedAuthorization {
    /// Instantiate without checking that `address` produced `signature`.
    pub const fn new_unchecked(
        inner: Authorization,
        signature: AuthorizationSignature,
        address: Address,
    ) -> Self {
        Self {
            inner,
            signature,
            address,
        }
    }

    /// Returns a reference to the inner [`Authorization`].
    pub const fn inner(&self) -> &Authorization {
        &self.inner
    }

    /// Returns the signature.
    pub const fn signature(&self) -> &AuthorizationSignature {
        &self.signature
    }

    /// Returns the claimed signer.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Recover the real signer from the signature.
    ///
    /// This ignores the claimed address.
    pub fn recover_authority(&self) -> Result<Address, RecoveryError> {
        self.signature
            .recover_address_from_prehash(&self.inner.signature_hash())
    }

    /// Splits the authorization into parts.
    pub const fn into_parts(self) -> (Authorization, AuthorizationSignature, Address) {
        (self.inner, self.signature, self.address)
    }
}

impl Deref for SignedAuthorization {
    type Target = Authorization;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Encodable for SignedAuthorization {
    fn encode(&self, out: &mut dyn BufMut) {
        list::encode_fields(&self.inner, &self.signature, out)
    }

    fn length(&self) -> usize {
        list::encoded_length(&self.inner, &self.signature)
    }
}
