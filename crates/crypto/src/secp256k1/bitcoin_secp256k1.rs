//! bitcoin_secp256k1 implementation of the secp256k1 backend. More about it in [`crate::secp256k1`].
use crate::{constants::PUBKEY_UNCOMPRESSED_LENGTH, Error};
use primitives::{B256, B512};
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, PublicKey, SecretKey, SECP256K1,
};

// Silence the unused crate dependency warning.
use k256 as _;

/// Sign the message hash. libsecp256k1 uses RFC 6979 nonces and always returns low-S.
pub(super) fn sign_prehash(msg: &B256, secret_key: &B256) -> Result<(B512, u8), Error> {
    let secret_key =
        SecretKey::from_slice(secret_key.as_slice()).map_err(|_| Error::InvalidPrivateKey)?;
    let sig = SECP256K1.sign_ecdsa_recoverable(&Message::from_digest(msg.0), &secret_key);
    let (recid, sig) = sig.serialize_compact();
    Ok((B512::from(sig), recid.to_i32() as u8))
}

/// Recover the uncompressed public key from a signature and a message.
pub(super) fn recover_public_key(
    sig: &B512,
    recid: u8,
    msg: &B256,
) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH], Error> {
    let recid = RecoveryId::from_i32(recid as i32).map_err(|_| Error::InvalidRecoveryId(recid))?;
    let sig = RecoverableSignature::from_compact(sig.as_slice(), recid)
        .map_err(|_| Error::InvalidSignature)?;

    let public = SECP256K1
        .recover_ecdsa(&Message::from_digest(msg.0), &sig)
        .map_err(|_| Error::RecoveryFailed)?;
    Ok(public.serialize_uncompressed())
}

pub(super) fn public_key(secret_key: &B256) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH], Error> {
    let secret_key =
        SecretKey::from_slice(secret_key.as_slice()).map_err(|_| Error::InvalidPrivateKey)?;
    Ok(PublicKey::from_secret_key(SECP256K1, &secret_key).serialize_uncompressed())
}
