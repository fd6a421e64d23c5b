//! Signing hash, signing and verification of authorizations.

use crate::{SignError, VerificationError, VerificationResult};
use authorization::{Authorization, AuthorizationSignature, SignedAuthorization};
use primitives::{Address, B256};

/// Hash an account owner signs to authorize a delegation.
///
/// `keccak256(0x05 || rlp([chain_id, contract_address, nonce]))`. A zero `chain_id` or `nonce`
/// is encoded as the empty string, not as a zero byte.
#[inline]
pub fn compute_signing_hash(authorization: &Authorization) -> B256 {
    authorization.signature_hash()
}

/// Sign a signing hash with a secp256k1 private key.
///
/// The returned signature always has `s <= n/2`, its `y_parity` is 0 or 1.
pub fn sign(digest: &B256, private_key: &B256) -> Result<AuthorizationSignature, SignError> {
    let (rs, y_parity) = crypto::sign_prehash(digest, private_key)?;
    tracing::debug!(target: "auth7702::codec", %digest, y_parity, "signed authorization hash");
    Ok(AuthorizationSignature::from_rs_and_parity(&rs, y_parity))
}

/// Hash and sign `authorization`, attaching the address of `private_key` as the signer.
pub fn sign_authorization(
    authorization: Authorization,
    private_key: &B256,
) -> Result<SignedAuthorization, SignError> {
    let address = address_of(private_key)?;
    let signature = sign(&compute_signing_hash(&authorization), private_key)?;
    Ok(authorization.into_signed(signature, address))
}

/// Address controlled by `private_key`.
pub fn address_of(private_key: &B256) -> Result<Address, SignError> {
    Ok(crypto::secret_to_address(private_key)?)
}

/// Check that `signed` was signed by `expected_signer` and delegates to `expected_contract`.
///
/// The signing hash is recomputed from the tuple fields, the claimed address carried by `signed`
/// is ignored. A malformed signature makes the result invalid and sets its `error`, this function
/// itself never fails.
pub fn verify(
    signed: &SignedAuthorization,
    expected_signer: Address,
    expected_contract: Address,
) -> VerificationResult {
    let digest = compute_signing_hash(signed.inner());
    let contract_address_matches = signed.contract_address() == expected_contract;

    match signed.signature().recover_address_from_prehash(&digest) {
        Ok(recovered) => {
            let result =
                VerificationResult::recovered(recovered, expected_signer, contract_address_matches);
            tracing::debug!(
                target: "auth7702::codec",
                %recovered,
                %expected_signer,
                contract_address_matches,
                is_valid = result.is_valid,
                "verified authorization"
            );
            result
        }
        Err(err) => {
            tracing::warn!(
                target: "auth7702::codec",
                %digest,
                %expected_signer,
                %err,
                "malformed authorization signature"
            );
            VerificationResult::malformed(
                VerificationError::MalformedSignature(err),
                expected_signer,
                contract_address_matches,
            )
        }
    }
}

/// [`verify`] against the signer and contract the authorization itself claims.
pub fn verify_claimed(signed: &SignedAuthorization) -> VerificationResult {
    verify(signed, signed.address(), signed.contract_address())
}

/// Verify every `(signed, expected_signer, expected_contract)` entry, in order.
///
/// Entries are independent: a malformed one only shows up in its own result.
pub fn verify_batch<'a, I>(items: I) -> Vec<VerificationResult>
where
    I: IntoIterator<Item = (&'a SignedAuthorization, Address, Address)>,
{
    items
        .into_iter()
        .map(|(signed, expected_signer, expected_contract)| {
            verify(signed, expected_signer, expected_contract)
        })
        .collect()
}
