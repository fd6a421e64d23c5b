//! k256 implementation of the secp256k1 backend. More about it in [`crate::secp256k1`].
use crate::{constants::PUBKEY_UNCOMPRESSED_LENGTH, Error};
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use primitives::{B256, B512};

/// Sign the message hash with RFC 6979 nonces.
pub(super) fn sign_prehash(msg: &B256, secret_key: &B256) -> Result<(B512, u8), Error> {
    let signing_key =
        SigningKey::from_slice(secret_key.as_slice()).map_err(|_| Error::InvalidPrivateKey)?;
    let (sig, recid) = signing_key
        .sign_prehash_recoverable(msg.as_slice())
        .map_err(|_| Error::InvalidSignature)?;
    Ok((B512::from_slice(&sig.to_bytes()), recid.to_byte()))
}

/// Recover the uncompressed public key from a signature and a message.
pub(super) fn recover_public_key(
    sig: &B512,
    mut recid: u8,
    msg: &B256,
) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH], Error> {
    // parse signature
    let mut sig = Signature::from_slice(sig.as_slice()).map_err(|_| Error::InvalidSignature)?;

    // normalize signature and flip recovery id if needed.
    if let Some(sig_normalized) = sig.normalize_s() {
        sig = sig_normalized;
        recid ^= 1;
    }
    let recid = RecoveryId::from_byte(recid).ok_or(Error::InvalidRecoveryId(recid))?;

    // recover key
    let recovered_key = VerifyingKey::recover_from_prehash(&msg[..], &sig, recid)
        .map_err(|_| Error::RecoveryFailed)?;
    encode_uncompressed(&recovered_key)
}

pub(super) fn public_key(secret_key: &B256) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH], Error> {
    let signing_key =
        SigningKey::from_slice(secret_key.as_slice()).map_err(|_| Error::InvalidPrivateKey)?;
    encode_uncompressed(signing_key.verifying_key())
}

fn encode_uncompressed(key: &VerifyingKey) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH], Error> {
    let point = key.to_encoded_point(/* compress = */ false);
    point
        .as_bytes()
        .try_into()
        .map_err(|_| Error::RecoveryFailed)
}
