//! secp256k1 signing and public key recovery.
//!
//! Signature format used across this module:
//! [32 bytes for r][32 bytes for s] plus a separate recovery id (`0` or `1`).
//!
//! Recovered keys are turned into addresses by taking the lower 20 bytes of
//! `keccak256(uncompressed_public_key[1..])`.

use crate::{constants::PUBKEY_UNCOMPRESSED_LENGTH, Error};
use primitives::{Address, B256, B512, SECP256K1N, SECP256K1N_HALF, U256};

cfg_if::cfg_if! {
    if #[cfg(feature = "secp256k1")] {
        mod bitcoin_secp256k1;
        use bitcoin_secp256k1 as backend;
    } else {
        mod k256;
        use self::k256 as backend;
    }
}

/// Sign a 32-byte message hash with the given private key.
///
/// Returns the `r || s` signature and its recovery id. The signature is normalized to low-S: if
/// the backend returns `s > n/2` it is replaced by `n - s` and the recovery id is flipped.
pub fn sign_prehash(msg: &B256, secret_key: &B256) -> Result<(B512, u8), Error> {
    check_secret_key(secret_key)?;
    let (sig, recid) = backend::sign_prehash(msg, secret_key)?;
    let (sig, recid) = normalize_s(sig, recid);
    tracing::trace!(target: "auth7702::crypto", %msg, recid, "signed prehash");
    Ok((sig, recid))
}

/// Recover the signer address from a signature and a message hash.
pub fn ecrecover(sig: &B512, recid: u8, msg: &B256) -> Result<Address, Error> {
    if recid > 1 {
        return Err(Error::InvalidRecoveryId(recid));
    }
    let public_key = backend::recover_public_key(sig, recid, msg)?;
    Ok(public_key_to_address(&public_key))
}

/// Derive the address controlled by a private key.
pub fn secret_to_address(secret_key: &B256) -> Result<Address, Error> {
    check_secret_key(secret_key)?;
    let public_key = backend::public_key(secret_key)?;
    Ok(public_key_to_address(&public_key))
}

/// Address of an uncompressed SEC1 public key (`0x04 || x || y`).
pub fn public_key_to_address(public_key: &[u8; PUBKEY_UNCOMPRESSED_LENGTH]) -> Address {
    Address::from_raw_public_key(&public_key[1..])
}

/// Bring a signature to its low-S form.
///
/// ECDSA accepts both `s` and `n - s`. When `s` is in the upper half of the curve order it is
/// negated and the recovery id flipped, so the same public key is still recovered.
pub fn normalize_s(sig: B512, recid: u8) -> (B512, u8) {
    let s = U256::from_be_slice(&sig[32..]);
    if s <= SECP256K1N_HALF {
        return (sig, recid);
    }
    let mut normalized = sig;
    normalized[32..].copy_from_slice(&(SECP256K1N - s).to_be_bytes::<32>());
    (normalized, recid ^ 1)
}

fn check_secret_key(secret_key: &B256) -> Result<(), Error> {
    let scalar = U256::from_be_bytes(secret_key.0);
    if scalar.is_zero() || scalar >= SECP256K1N {
        return Err(Error::InvalidPrivateKey);
    }
    Ok(())
}
