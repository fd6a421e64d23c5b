//! The unsigned authorization tuple and its signing hash.

use crate::{AuthorizationSignature, SignedAuthorization};
use alloy_rlp::{Encodable, RlpDecodable, RlpEncodable};
use primitives::{keccak256, Address, ChainId, AUTHORIZATION_MAGIC, ANY_CHAIN_ID, B256};

/// Delegation of an account's code to `contract_address`.
///
/// RLP layout is `[chain_id, contract_address, nonce]`. Integers are encoded in their minimal
/// big-endian form, so a zero `chain_id` or `nonce` becomes the empty string `0x80`.
///
/// The tuple cannot be changed after construction; [`Authorization::with_nonce`] returns a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, RlpEncodable, RlpDecodable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Authorization {
    chain_id: ChainId,
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "crate::checksum::serialize")
    )]
    contract_address: Address,
    nonce: u64,
}

impl Authorization {
    /// Creates a new authorization tuple.
    pub const fn new(chain_id: ChainId, contract_address: Address, nonce: u64) -> Self {
        Self {
            chain_id,
            contract_address,
            nonce,
        }
    }

    /// Chain id, zero means the authorization is valid on every chain.
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Address of the contract the account delegates to.
    pub const fn contract_address(&self) -> Address {
        self.contract_address
    }

    /// Nonce of the authorizing account.
    pub const fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Returns the same authorization with another nonce.
    pub const fn with_nonce(self, nonce: u64) -> Self {
        Self { nonce, ..self }
    }

    /// Returns true if the authorization applies on `chain_id`.
    pub const fn is_valid_for_chain(&self, chain_id: ChainId) -> bool {
        self.chain_id == ANY_CHAIN_ID || self.chain_id == chain_id
    }

    /// Bytes that get hashed: `0x05 || rlp([chain_id, contract_address, nonce])`.
    pub fn signing_preimage(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(1 + self.length());
        buf.push(AUTHORIZATION_MAGIC);
        self.encode(&mut buf);
        buf
    }

    /// Calculates the signing hash of the authorization.
    pub fn signature_hash(&self) -> B256 {
        let hash = keccak256(self.signing_preimage());
        tracing::trace!(target: "auth7702::authorization", ?self, %hash, "signature hash");
        hash
    }

    /// Attaches a signature and the claimed signer.
    pub const fn into_signed(
        self,
        signature: AuthorizationSignature,
        address: Address,
    ) -> SignedAuthorization {
        SignedAuthorization::new_unchecked(self, signature, address)
    }
}
