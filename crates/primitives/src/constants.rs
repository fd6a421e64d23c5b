use alloy_primitives::{b256, U256};

/// Identifier of the signed payload in EIP-7702.
///
/// The signing hash is `keccak256(AUTHORIZATION_MAGIC || rlp([chain_id, address, nonce]))`.
pub const AUTHORIZATION_MAGIC: u8 = 0x05;

/// Chain id that makes an authorization valid on every chain.
pub const ANY_CHAIN_ID: u64 = 0;

/// Offset between the `y_parity` bit and the legacy `v` value.
pub const LEGACY_V_OFFSET: u8 = 27;

/// The order of the secp256k1 curve.
///
/// `115792089237316195423570985008687907852837564279074904382605163141518161494337`
pub const SECP256K1N: U256 = U256::from_be_bytes(
    b256!("0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141").0,
);

/// The order of the secp256k1 curve, divided by two. Signatures that should be checked according
/// to EIP-2 should have an S value less than or equal to this.
///
/// `57896044618658097711785492504343953926418782139537452191302581570759080747168`
pub const SECP256K1N_HALF: U256 = U256::from_be_bytes([
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
]);
