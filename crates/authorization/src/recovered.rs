use crate::{list, Authorization, AuthorizationSignature, SignedAuthorization};
use alloy_rlp::{BufMut, Decodable, Encodable};
use core::ops::Deref;
use primitives::Address;

/// A recovered authorization.
///
/// This is what an authorization list entry turns into once its signer has been recovered. An
/// invalid signature does not make the entry undecodable, it only leaves the authority empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RecoveredAuthorization {
    #[cfg_attr(feature = "serde", serde(flatten))]
    inner: Authorization,
    #[cfg_attr(feature = "serde", serde(flatten))]
    signature: AuthorizationSignature,
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "crate::checksum::serialize_option")
    )]
    authority: Option<Address>,
}

impl RecoveredAuthorization {
    /// Recovers the authority of `signature` over `inner`.
    pub fn new(inner: Authorization, signature: AuthorizationSignature) -> Self {
        let authority = signature
            .recover_address_from_prehash(&inner.signature_hash())
            .inspect_err(|err| {
                tracing::debug!(target: "auth7702::authorization", %err, "authority not recovered")
            })
            .ok();
        Self::new_unchecked(inner, signature, authority)
    }

    /// Instantiate without performing recovery. This should be used carefully.
    pub const fn new_unchecked(
        inner: Authorization,
        signature: AuthorizationSignature,
        authority: Option<Address>,
    ) -> Self {
        Self {
            inner,
            signature,
            authority,
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

    /// Get the `authority` for the authorization.
    ///
    /// If this is `None`, then the authority could not be recovered.
    pub const fn authority(&self) -> Option<Address> {
        self.authority
    }

    /// Converts into a [`SignedAuthorization`] claiming the recovered authority.
    ///
    /// Returns `None` if no authority was recovered.
    pub fn into_signed(self) -> Option<SignedAuthorization> {
        let authority = self.authority?;
        Some(self.inner.into_signed(self.signature, authority))
    }
}

impl From<SignedAuthorization> for RecoveredAuthorization {
    fn from(signed_auth: SignedAuthorization) -> Self {
        let (inner, signature, _) = signed_auth.into_parts();
        Self::new(inner, signature)
    }
}

impl Deref for RecoveredAuthorization {
    type Target = Authorization;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Encodable for RecoveredAuthorization {
    fn encode(&self, out: &mut dyn BufMut) {
        list::encode_fields(&self.inner, &self.signature, out)
    }

    fn length(&self) -> usize {
        list::encoded_length(&self.inner, &self.signature)
    }
}

impl Decodable for RecoveredAuthorization {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let (inner, signature) = list::decode_fields(buf)?;
        Ok(Self::new(inner, signature))
    }
}
