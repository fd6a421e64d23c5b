//! End to end checks of the authorization codec.

use auth7702::{
    address_of, compute_signing_hash,
    primitives::{address, b256, hex, Address, B256, SECP256K1N_HALF, U256},
    sign, sign_authorization, verify, verify_batch, Authorization, AuthorizationSignature,
    RecoveryError, SignedAuthorization, VerificationError,
};
use rstest::rstest;

const CONTRACT: Address = address!("0x40e03c561eCC97aA2A44C2A1453fFBF4305CccC7");

fn random_key() -> B256 {
    loop {
        let key = B256::from(rand::random::<[u8; 32]>());
        if address_of(&key).is_ok() {
            return key;
        }
    }
}

fn random_authorization() -> Authorization {
    Authorization::new(
        rand::random::<u64>() % 3 * 11155111,
        Address::from(rand::random::<[u8; 20]>()),
        rand::random::<u64>() % 4,
    )
}

#[test]
fn round_trip_random_keys() {
    for _ in 0..32 {
        let key = random_key();
        let authorization = random_authorization();
        let signed = sign_authorization(authorization, &key).unwrap();

        let result = verify(
            &signed,
            address_of(&key).unwrap(),
            authorization.contract_address(),
        );
        assert!(result.is_valid, "{authorization:?}");
        assert_eq!(result.error, None);
    }
}

#[rstest]
#[case::any_chain_zero_nonce(
    0,
    0,
    b256!("0x9fb34cfee2520334b23cd93c30b166802eb6b2897e5adab48c879f276b58ab50")
)]
#[case::any_chain(
    0,
    1,
    b256!("0x87fd2a1d87328541ba0cbe24996a003841d3fc3537663267b9f5f96a8f4859df")
)]
#[case::mainnet_zero_nonce(
    1,
    0,
    b256!("0x1d037b8e88333e9b9c1ffb9ef0a5118ab975e4029f96dac0bcac7a5d27d98b53")
)]
fn zero_fields_are_empty_strings(#[case] chain_id: u64, #[case] nonce: u64, #[case] hash: B256) {
    assert_eq!(
        compute_signing_hash(&Authorization::new(chain_id, CONTRACT, nonce)),
        hash
    );
}

#[test]
fn zero_and_one_nonce_differ() {
    let zero = Authorization::new(0, CONTRACT, 0);
    assert_ne!(
        compute_signing_hash(&zero),
        compute_signing_hash(&zero.with_nonce(1))
    );
}

#[test]
fn signatures_are_low_s() {
    let key = random_key();
    for _ in 0..64 {
        let digest = B256::from(rand::random::<[u8; 32]>());
        let signature = sign(&digest, &key).unwrap();
        assert!(U256::from_be_bytes(signature.s().0) <= SECP256K1N_HALF);
        assert!(signature.y_parity() <= 1);
        assert_eq!(signature.v(), 27 + signature.y_parity() as u64);
    }
}

/// Flips bit `bit` of a big-endian value, bit 0 being the least significant.
fn flip_bit(value: B256, bit: usize) -> B256 {
    let mut flipped = value;
    flipped[31 - bit / 8] ^= 1 << (bit % 8);
    flipped
}

#[derive(Clone, Copy, Debug)]
enum Tamper {
    R(usize),
    S(usize),
    ChainId,
    Nonce,
    Contract(usize),
}

impl Tamper {
    fn apply(self, signed: SignedAuthorization) -> SignedAuthorization {
        let (inner, signature, address) = signed.into_parts();
        let (mut r, mut s) = (signature.r(), signature.s());
        let (mut chain_id, mut contract, mut nonce) =
            (inner.chain_id(), inner.contract_address(), inner.nonce());
        match self {
            Self::R(bit) => r = flip_bit(r, bit),
            Self::S(bit) => s = flip_bit(s, bit),
            Self::ChainId => chain_id ^= 1,
            Self::Nonce => nonce ^= 1,
            Self::Contract(bit) => contract[19 - bit / 8] ^= 1 << (bit % 8),
        }
        Authorization::new(chain_id, contract, nonce).into_signed(
            AuthorizationSignature::new(r, s, signature.y_parity()),
            address,
        )
    }
}

#[rstest]
#[case::r_lowest_bit(Tamper::R(0))]
#[case::r_highest_bit(Tamper::R(255))]
#[case::s_lowest_bit(Tamper::S(0))]
#[case::s_highest_bit(Tamper::S(255))]
#[case::chain_id(Tamper::ChainId)]
#[case::nonce(Tamper::Nonce)]
#[case::contract_lowest_bit(Tamper::Contract(0))]
#[case::contract_highest_bit(Tamper::Contract(159))]
fn tampering_invalidates(#[case] tamper: Tamper) {
    let key = b256!("0x45a915e4d060149eb4365960e6a7a45f334393093061116b197e3240065ff2d8");
    let signer = address_of(&key).unwrap();
    let signed = sign_authorization(Authorization::new(11155111, CONTRACT, 5), &key).unwrap();
    assert!(verify(&signed, signer, CONTRACT).is_valid);

    let tampered = tamper.apply(signed);
    let result = verify(&tampered, signer, tampered.contract_address());
    assert!(!result.is_valid, "{tamper:?} still valid");
    assert_ne!(result.recovered_address, Some(signer));
}

#[test]
fn top_bit_of_s_is_high_s() {
    let key = b256!("0x45a915e4d060149eb4365960e6a7a45f334393093061116b197e3240065ff2d8");
    let signer = address_of(&key).unwrap();
    let signed = sign_authorization(Authorization::new(11155111, CONTRACT, 5), &key).unwrap();

    let result = verify(&Tamper::S(255).apply(signed), signer, CONTRACT);
    assert_eq!(
        result.error,
        Some(VerificationError::MalformedSignature(
            RecoveryError::Eip2InvalidSValue
        ))
    );
}

#[test]
fn tampering_random_bits_invalidates() {
    let key = random_key();
    let signer = address_of(&key).unwrap();
    let signed = sign_authorization(random_authorization(), &key).unwrap();
    let bit = rand::random::<u8>() as usize;

    for tamper in [
        Tamper::R(bit),
        Tamper::S(bit),
        Tamper::ChainId,
        Tamper::Nonce,
        Tamper::Contract(bit % 160),
    ] {
        let tampered = tamper.apply(signed);
        let result = verify(&tampered, signer, tampered.contract_address());
        assert!(!result.is_valid, "{tamper:?} at bit {bit} still valid");
    }
}

#[test]
fn batch_contains_failures() {
    let key = random_key();
    let signer = address_of(&key).unwrap();
    let first = sign_authorization(Authorization::new(1, CONTRACT, 0), &key).unwrap();
    let last = sign_authorization(Authorization::new(1, CONTRACT, 2), &key).unwrap();

    let good = sign_authorization(Authorization::new(1, CONTRACT, 1), &key).unwrap();
    let (inner, signature, address) = good.into_parts();
    let malformed = inner.into_signed(
        AuthorizationSignature::new(signature.r(), signature.s(), 7),
        address,
    );

    let results = verify_batch([
        (&first, signer, CONTRACT),
        (&malformed, signer, CONTRACT),
        (&last, signer, CONTRACT),
    ]);
    assert_eq!(results.len(), 3);
    assert!(results[0].is_valid);
    assert!(!results[1].is_valid);
    assert!(results[1].error.is_some());
    assert!(results[2].is_valid);
    assert_eq!(results[0], verify(&first, signer, CONTRACT));
    assert_eq!(results[2], verify(&last, signer, CONTRACT));
}

#[test]
fn sepolia_vector() {
    let authorization = Authorization::new(11155111, CONTRACT, 5);
    assert_eq!(
        hex::encode_prefixed(authorization.signing_preimage()),
        "0x05da83aa36a79440e03c561ecc97aa2a44c2a1453ffbf4305cccc705"
    );
    assert_eq!(
        compute_signing_hash(&authorization),
        b256!("0xd351d7cf09cd19e433a55bba7b3e17b721738ee0e831b875f336ba06593a3fad")
    );
}

#[test]
fn address_case_is_irrelevant() {
    let key = b256!("0x45a915e4d060149eb4365960e6a7a45f334393093061116b197e3240065ff2d8");
    let signed = sign_authorization(Authorization::new(11155111, CONTRACT, 5), &key).unwrap();
    let lower: Address = "0xa94f5374fce5edbc8e2a8697c15331677e6ebf0b".parse().unwrap();
    let checksummed: Address = "0xa94f5374Fce5edBC8E2a8697C15331677e6EbF0B".parse().unwrap();
    let contract: Address = "0x40e03c561ecc97aa2a44c2a1453ffbf4305cccc7".parse().unwrap();
    assert!(verify(&signed, lower, contract).is_valid);
    assert!(verify(&signed, checksummed, CONTRACT).is_valid);
}

#[cfg(feature = "serde")]
#[test]
fn json_round_trip_verifies() {
    let key = random_key();
    let signed = sign_authorization(Authorization::new(11155111, CONTRACT, 5), &key).unwrap();
    let json = serde_json::to_string(&signed).unwrap();
    let parsed: SignedAuthorization = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, signed);
    assert!(verify(&parsed, signed.address(), CONTRACT).is_valid);
}
